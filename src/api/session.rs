use serde::{Deserialize, Serialize};

/// Body of `POST Session`.
///
/// # Example JSON
///
/// ```json
/// {
///   "customer_name": "example",
///   "user_name": "acme",
///   "password": "hunter2"
/// }
/// ```
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct SessionRequest<'a> {
    pub customer_name: &'a str,
    pub user_name: &'a str,
    pub password: &'a str,
}

/// The `data` payload of a successful login.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Sent back in the `Auth-Token` header of every later request.
    pub token: String,

    /// API version the session was opened against.
    #[serde(default)]
    pub version: String,
}
