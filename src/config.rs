use std::{fmt, time::Duration};

use zeroize::Zeroizing;

use crate::error::{Error, Result};

/// Production Dyn Managed DNS REST endpoint.
pub const DYN_BASE_URL: &str = "https://api.dynect.net/REST";

const DEFAULT_HTTP_TIMEOUT: Duration = Duration::from_secs(10);
pub(crate) const DEFAULT_PROPAGATION_TIMEOUT: Duration = Duration::from_secs(60);
pub(crate) const DEFAULT_POLLING_INTERVAL: Duration = Duration::from_secs(2);

/// Login details for a Dyn account.
///
/// All three values must be non-empty. The password is wiped from memory on drop and never
/// shows up in `Debug` output.
#[derive(Clone)]
pub struct Credentials {
    customer_name: String,
    user_name: String,
    password: Zeroizing<String>,
}

impl Credentials {
    pub fn new(
        customer_name: impl Into<String>,
        user_name: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self> {
        let customer_name = customer_name.into();
        let user_name = user_name.into();
        let password = Zeroizing::new(password.into());

        if customer_name.is_empty() || user_name.is_empty() || password.is_empty() {
            return Err(Error::MissingCredentials);
        }

        Ok(Credentials {
            customer_name,
            user_name,
            password,
        })
    }

    pub fn customer_name(&self) -> &str {
        &self.customer_name
    }

    pub fn user_name(&self) -> &str {
        &self.user_name
    }

    pub(crate) fn password(&self) -> &str {
        &self.password
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("customer_name", &self.customer_name)
            .field("user_name", &self.user_name)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Settings for [`SessionClient`] and [`DynProvider`].
///
/// ```
/// use std::time::Duration;
///
/// use acme_dyn::Config;
///
/// let config = Config::default()
///     .with_http_timeout(Duration::from_secs(30))
///     .with_logout_on_error(true);
///
/// assert_eq!(config.base_url(), "https://api.dynect.net/REST");
/// ```
///
/// [`SessionClient`]: crate::SessionClient
/// [`DynProvider`]: crate::DynProvider
#[derive(Debug, Clone)]
pub struct Config {
    base_url: String,
    http_timeout: Duration,
    propagation_timeout: Duration,
    polling_interval: Duration,
    logout_on_error: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_url: DYN_BASE_URL.to_owned(),
            http_timeout: DEFAULT_HTTP_TIMEOUT,
            propagation_timeout: DEFAULT_PROPAGATION_TIMEOUT,
            polling_interval: DEFAULT_POLLING_INTERVAL,
            logout_on_error: false,
        }
    }
}

impl Config {
    /// Use another API endpoint. Trailing slashes are dropped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_owned();
        self
    }

    /// Total time allowed for each HTTP request, connect to end of body.
    pub fn with_http_timeout(mut self, timeout: Duration) -> Self {
        self.http_timeout = timeout;
        self
    }

    pub fn with_propagation_timeout(mut self, timeout: Duration) -> Self {
        self.propagation_timeout = timeout;
        self
    }

    pub fn with_polling_interval(mut self, interval: Duration) -> Self {
        self.polling_interval = interval;
        self
    }

    /// Close the session even when a later step of present or clean up fails.
    ///
    /// Off by default, in which case a failed step returns immediately and the session is left
    /// open on the Dyn side until it expires.
    pub fn with_logout_on_error(mut self, logout_on_error: bool) -> Self {
        self.logout_on_error = logout_on_error;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn http_timeout(&self) -> Duration {
        self.http_timeout
    }

    pub fn propagation_timeout(&self) -> Duration {
        self.propagation_timeout
    }

    pub fn polling_interval(&self) -> Duration {
        self.polling_interval
    }

    pub fn logout_on_error(&self) -> bool {
        self.logout_on_error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_credentials_must_not_be_empty() {
        let cases = [("", "user", "pass"), ("cust", "", "pass"), ("cust", "user", "")];

        for (customer, user, pass) in cases {
            let err = Credentials::new(customer, user, pass).unwrap_err();
            assert!(matches!(err, Error::MissingCredentials), "{err:?}");
        }

        assert!(Credentials::new("cust", "user", "pass").is_ok());
    }

    #[test]
    fn test_password_redacted() {
        let creds = Credentials::new("cust", "user", "hunter2").unwrap();
        let dbg = format!("{creds:?}");
        assert!(!dbg.contains("hunter2"));
        assert!(dbg.contains("cust"));
    }

    #[test]
    fn test_base_url_trailing_slash() {
        let config = Config::default().with_base_url("http://127.0.0.1:8080/REST/");
        assert_eq!(config.base_url(), "http://127.0.0.1:8080/REST");
        assert_eq!(config.http_timeout(), Duration::from_secs(10));
        assert!(!config.logout_on_error());
    }
}
