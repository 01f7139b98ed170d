use base64::prelude::*;

pub(crate) fn base64url<T: ?Sized + AsRef<[u8]>>(input: &T) -> String {
    BASE64_URL_SAFE_NO_PAD.encode(input)
}

/// Strips the trailing root dot, if any.
pub(crate) fn un_fqdn(name: &str) -> &str {
    name.strip_suffix('.').unwrap_or(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_un_fqdn() {
        assert_eq!(un_fqdn("_acme-challenge.example.com."), "_acme-challenge.example.com");
        assert_eq!(un_fqdn("example.com"), "example.com");
    }
}
