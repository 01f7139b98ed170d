use crate::api::Messages;

/// Result type returned by every fallible operation of this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can go wrong while talking to the Dyn API.
///
/// Each variant is one kind of failure so callers can branch on it. None of them are retried
/// by this crate; partial side effects (an unpublished record, an open session) are left as is.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// One of customer name, user name or password was empty.
    #[error("Dyn credentials missing")]
    MissingCredentials,

    /// Connection, DNS or timeout failure, or the HTTP client could not be built.
    #[error("Dyn API request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response envelope was not valid JSON or did not have the expected shape.
    #[error("Dyn API response could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    /// HTTP status 500 or above.
    #[error("Dyn API request failed with HTTP status code {status}")]
    Server { status: u16 },

    /// HTTP status 400 to 499.
    #[error("Dyn API request failed with HTTP status code {status}: {messages}")]
    Client { status: u16, messages: Messages },

    /// HTTP 307, which Dyn uses to hand out a job to poll. Polling is not supported.
    #[error("Dyn API request returned HTTP 307; long running jobs are unsupported")]
    UnsupportedAsyncJob { location: Option<String> },

    /// The envelope reported `"status": "failure"`, whatever the HTTP status was.
    #[error("Dyn API request failed: {messages}")]
    Api { messages: Messages },

    /// A delete expected exactly HTTP 200.
    #[error("Dyn API request to {resource} returned HTTP status code {status}, expected 200")]
    UnexpectedStatus { resource: String, status: u16 },

    /// Closing the session did not return HTTP 200.
    ///
    /// The token is kept, so [`SessionClient::logout`] can be called again. The remote session
    /// may or may not still be open.
    ///
    /// [`SessionClient::logout`]: crate::SessionClient::logout
    #[error("Dyn API failed to delete session with HTTP status code {status}; it may still be open")]
    SessionLeakPossible { status: u16 },

    /// The zone resolver could not find the authoritative zone.
    #[error("could not find zone for {fqdn}: {reason}")]
    ZoneResolution { fqdn: String, reason: eyre::Report },
}

impl Error {
    /// HTTP status code carried by this error, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::Server { status }
            | Error::Client { status, .. }
            | Error::UnexpectedStatus { status, .. }
            | Error::SessionLeakPossible { status } => Some(*status),
            Error::UnsupportedAsyncJob { .. } => Some(307),
            Error::Transport(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    /// Messages from the response envelope, for the kinds that carry them.
    pub fn messages(&self) -> Option<&Messages> {
        match self {
            Error::Client { messages, .. } | Error::Api { messages } => Some(messages),
            _ => None,
        }
    }
}
