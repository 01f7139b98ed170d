//! The DNS-01 challenge capability.

use std::{future::Future, time::Duration};

use sha2::{Digest as _, Sha256};

use crate::{
    config::{DEFAULT_POLLING_INTERVAL, DEFAULT_PROPAGATION_TIMEOUT},
    error::Result,
    util::base64url,
};

/// TTL of challenge records, in seconds.
pub const DNS01_TTL: u32 = 120;

/// Something that can publish and later remove the `TXT` record proving control of a domain.
///
/// An ACME client calls [`present`](Self::present) before asking the CA to validate the
/// challenge and [`clean_up`](Self::clean_up) once validation is done, with the same arguments.
pub trait ChallengeProvider {
    /// Makes the DNS-01 proof for `domain` visible.
    fn present(
        &mut self,
        domain: &str,
        token: &str,
        key_auth: &str,
    ) -> impl Future<Output = Result<()>> + Send;

    /// Removes what [`present`](Self::present) created.
    fn clean_up(
        &mut self,
        domain: &str,
        token: &str,
        key_auth: &str,
    ) -> impl Future<Output = Result<()>> + Send;

    /// How long to wait for the record to propagate, and how often to check.
    fn timeout(&self) -> (Duration, Duration) {
        (DEFAULT_PROPAGATION_TIMEOUT, DEFAULT_POLLING_INTERVAL)
    }
}

/// The `TXT` record answering a DNS-01 challenge.
///
/// ```
/// use acme_dyn::Dns01Record;
///
/// let record = Dns01Record::new("example.com", "token.thumbprint");
/// assert_eq!(record.fqdn, "_acme-challenge.example.com.");
/// assert_eq!(record.ttl, 120);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dns01Record {
    /// Fully qualified record name, with trailing dot.
    pub fqdn: String,

    /// Base64url encoded SHA-256 digest of the key authorization.
    pub value: String,

    pub ttl: u32,
}

impl Dns01Record {
    pub fn new(domain: &str, key_auth: &str) -> Self {
        let domain = domain.trim_end_matches('.');

        Dns01Record {
            fqdn: format!("_acme-challenge.{domain}."),
            value: base64url(&Sha256::digest(key_auth)),
            ttl: DNS01_TTL,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_for_empty_key_auth() {
        let record = Dns01Record::new("example.com.", "");
        assert_eq!(record.fqdn, "_acme-challenge.example.com.");
        assert_eq!(record.value, "47DEQpj8HBSa-_TImW-5JCeuQeRkm5NMpJWZG3hSuFU");
        assert_eq!(record.ttl, DNS01_TTL);
    }

    #[test]
    fn test_value_is_unpadded_base64url_digest() {
        let record = Dns01Record::new("sub.example.com", "tok.thumb");
        assert_eq!(record.fqdn, "_acme-challenge.sub.example.com.");
        assert_eq!(record.value.len(), 43);
        assert!(!record.value.contains(['+', '/', '=']));
    }

    struct Noop;

    impl ChallengeProvider for Noop {
        async fn present(&mut self, _: &str, _: &str, _: &str) -> Result<()> {
            Ok(())
        }

        async fn clean_up(&mut self, _: &str, _: &str, _: &str) -> Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_default_timeout_matches_config() {
        let config = crate::Config::default();
        assert_eq!(
            Noop.timeout(),
            (config.propagation_timeout(), config.polling_interval()),
        );
    }
}
