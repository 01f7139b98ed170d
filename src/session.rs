use reqwest::{header, redirect, Method, StatusCode};
use serde::Serialize;

use crate::{
    api,
    config::{Config, Credentials},
    error::{Error, Result},
};

const SESSION_RESOURCE: &str = "Session";
const AUTH_TOKEN_HEADER: &str = "Auth-Token";

/// Session handling and request plumbing for the Dyn REST API.
///
/// Lifecycle is:
///
/// 1. `SessionClient::new()`
/// 2. `login()` to obtain a session token.
/// 3. `send_request()` / `send_delete()` for all calls after that, with the token attached.
/// 4. `logout()` to close the session again.
///
/// A client holds at most one session. Methods that change the session take `&mut self`, so
/// one client cannot be shared by concurrent callers; create one per concurrent operation.
#[derive(Debug)]
pub struct SessionClient {
    client: reqwest::Client,
    base_url: String,
    credentials: Credentials,
    session: Option<api::Session>,
}

impl SessionClient {
    /// Creates a client against the production Dyn API.
    pub fn new(customer_name: &str, user_name: &str, password: &str) -> Result<Self> {
        let credentials = Credentials::new(customer_name, user_name, password)?;
        Self::with_config(credentials, &Config::default())
    }

    pub fn with_config(credentials: Credentials, config: &Config) -> Result<Self> {
        // Dyn answers long running jobs with a 307; it must reach the status checks unfollowed.
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout())
            .redirect(redirect::Policy::none())
            .build()?;

        Ok(SessionClient {
            client,
            base_url: config.base_url().to_owned(),
            credentials,
            session: None,
        })
    }

    /// Returns true while a session token is held.
    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// The current session token, if logged in.
    pub fn token(&self) -> Option<&str> {
        self.session.as_ref().map(|session| session.token.as_str())
    }

    /// Starts a new session.
    ///
    /// Authenticates with the customer name, user name and password and keeps the returned
    /// token for all later requests. Replaces any token already held.
    pub async fn login(&mut self) -> Result<()> {
        let creds = api::SessionRequest {
            customer_name: self.credentials.customer_name(),
            user_name: self.credentials.user_name(),
            password: self.credentials.password(),
        };

        let envelope = self
            .send_request(Method::POST, SESSION_RESOURCE, &creds)
            .await?;

        let session = envelope.data::<api::Session>()?;
        log::debug!("Opened Dyn session (API version {})", session.version);

        self.session = Some(session);

        Ok(())
    }

    /// Closes the current session.
    ///
    /// Does nothing if there is no session. The token is only dropped once Dyn confirms with
    /// HTTP 200; any other status returns [`Error::SessionLeakPossible`] and keeps the token so
    /// the call can be retried.
    pub async fn logout(&mut self) -> Result<()> {
        if self.session.is_none() {
            log::trace!("No Dyn session to close");
            return Ok(());
        }

        let status = self.send_delete(SESSION_RESOURCE).await?;

        if status != StatusCode::OK {
            return Err(Error::SessionLeakPossible {
                status: status.as_u16(),
            });
        }

        log::debug!("Closed Dyn session");
        self.session = None;

        Ok(())
    }

    /// Sends `payload` as JSON to `resource` and classifies the response.
    ///
    /// The request is attempted exactly once.
    pub async fn send_request<T>(
        &self,
        method: Method,
        resource: &str,
        payload: &T,
    ) -> Result<api::Envelope>
    where
        T: Serialize + ?Sized,
    {
        let res = self.request(method, resource).json(payload).send().await?;

        let status = res.status();
        log::debug!("Response status: {status}");

        if status.as_u16() >= 500 {
            return Err(Error::Server {
                status: status.as_u16(),
            });
        }

        if status == StatusCode::TEMPORARY_REDIRECT {
            let location = res
                .headers()
                .get(header::LOCATION)
                .and_then(|loc| loc.to_str().ok())
                .map(ToOwned::to_owned);

            return Err(Error::UnsupportedAsyncJob { location });
        }

        let body = res.text().await?;
        if logs_body(resource) {
            log::trace!("{body}");
        }

        let envelope = serde_json::from_str::<api::Envelope>(&body)?;

        if status.is_client_error() {
            return Err(Error::Client {
                status: status.as_u16(),
                messages: envelope.msgs,
            });
        }

        if envelope.status == api::Status::Failure {
            return Err(Error::Api {
                messages: envelope.msgs,
            });
        }

        Ok(envelope)
    }

    /// Sends a body-less `DELETE` to `resource` and returns the HTTP status.
    ///
    /// Only transport failures are errors here; callers decide which status they accept.
    pub async fn send_delete(&self, resource: &str) -> Result<StatusCode> {
        let res = self.request(Method::DELETE, resource).send().await?;
        let status = res.status();
        log::debug!("Response status: {status}");
        Ok(status)
    }

    fn request(&self, method: Method, resource: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/{resource}", self.base_url);
        log::debug!("Call endpoint: {method} {url}");

        let mut req = self
            .client
            .request(method, url)
            .header(header::CONTENT_TYPE, "application/json");

        if let Some(session) = &self.session {
            req = req.header(AUTH_TOKEN_HEADER, &session.token);
        }

        req
    }
}

/// Session responses carry the token and are kept out of the log.
fn logs_body(resource: &str) -> bool {
    resource != SESSION_RESOURCE
}
