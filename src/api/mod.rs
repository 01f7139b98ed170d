//! JSON API payloads.
//!
//! Not intended to be used directly. Provided to aid debugging.

use std::fmt;

use serde::{
    de::{DeserializeOwned, Deserializer},
    Deserialize, Serialize,
};

mod record;
mod session;
mod zone;

pub use self::{
    record::{TxtRdata, TxtRecord},
    session::{Session, SessionRequest},
    zone::PublishZone,
};

/// Outcome reported in every response envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Failure,
    Incomplete,
}

/// The envelope wrapping every Dyn API response.
///
/// The shape of `data` depends on the call, so it is kept untyped here and decoded with
/// [`Envelope::data`] by the caller that knows what to expect.
///
/// # Example JSON
///
/// ```json
/// {
///   "status": "success",
///   "data": { "token": "RdKJcnmbHyGQw0e7ewq9C", "version": "3.7.0" },
///   "job_id": 3081614221,
///   "msgs": [
///     { "INFO": "login: Login successful", "SOURCE": "BLL", "ERR_CD": null, "LVL": "INFO" }
///   ]
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    pub status: Status,

    #[serde(default)]
    pub data: serde_json::Value,

    /// ID of the job created for this request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_id: Option<u64>,

    /// Dyn sends `null` here at times; that reads as no messages.
    #[serde(default, deserialize_with = "nullable_messages")]
    pub msgs: Messages,
}

fn nullable_messages<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Messages, D::Error> {
    let msgs = Option::<Vec<Message>>::deserialize(deserializer)?;
    Ok(Messages(msgs.unwrap_or_default()))
}

impl Envelope {
    /// Decodes the `data` payload as `T`.
    pub fn data<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        T::deserialize(&self.data)
    }
}

/// A single message from an envelope's `msgs` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub struct Message {
    #[serde(default)]
    pub source: Option<String>,

    #[serde(default)]
    pub lvl: Option<String>,

    #[serde(default)]
    pub err_cd: Option<String>,

    #[serde(default)]
    pub info: Option<String>,
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts = [&self.source, &self.err_cd, &self.info];
        let mut parts = parts.iter().filter_map(|part| part.as_deref());

        match parts.next() {
            Some(first) => f.write_str(first)?,
            None => return f.write_str("(empty message)"),
        }

        for part in parts {
            write!(f, ": {part}")?;
        }

        Ok(())
    }
}

/// The `msgs` list of an envelope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Messages(pub Vec<Message>);

impl Messages {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Message> {
        self.0.iter()
    }
}

impl fmt::Display for Messages {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("no messages");
        }

        for (idx, msg) in self.0.iter().enumerate() {
            if idx > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{msg}")?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_login_envelope() {
        let body = r#"{
            "status": "success",
            "data": { "token": "RdKJcnmbHyGQw0e7ewq9C", "version": "3.7.0" },
            "job_id": 3081614221,
            "msgs": [
                { "INFO": "login: Login successful", "SOURCE": "BLL", "ERR_CD": null, "LVL": "INFO" }
            ]
        }"#;

        let envelope = serde_json::from_str::<Envelope>(body).unwrap();
        assert_eq!(envelope.status, Status::Success);
        assert_eq!(envelope.job_id, Some(3081614221));
        assert_eq!(envelope.msgs.to_string(), "BLL: login: Login successful");

        let session = envelope.data::<Session>().unwrap();
        assert_eq!(session.token, "RdKJcnmbHyGQw0e7ewq9C");
        assert_eq!(session.version, "3.7.0");
    }

    #[test]
    fn test_decode_failure_without_data() {
        let body = r#"{
            "status": "failure",
            "msgs": [
                { "INFO": "zone: No such zone", "SOURCE": "BLL", "ERR_CD": "NOT_FOUND", "LVL": "ERROR" },
                { "INFO": "token: Invalid", "SOURCE": "API-B" }
            ]
        }"#;

        let envelope = serde_json::from_str::<Envelope>(body).unwrap();
        assert_eq!(envelope.status, Status::Failure);
        assert!(envelope.data.is_null());
        assert_eq!(envelope.job_id, None);
        assert_eq!(
            envelope.msgs.to_string(),
            "BLL: NOT_FOUND: zone: No such zone; API-B: token: Invalid",
        );
    }

    #[test]
    fn test_decode_null_messages() {
        let body = r#"{"status":"success","data":null,"job_id":1,"msgs":null}"#;

        let envelope = serde_json::from_str::<Envelope>(body).unwrap();
        assert_eq!(envelope.status, Status::Success);
        assert!(envelope.msgs.is_empty());

        let envelope = serde_json::from_str::<Envelope>(r#"{"status":"success"}"#).unwrap();
        assert!(envelope.msgs.is_empty());
    }

    #[test]
    fn test_empty_messages_display() {
        assert_eq!(Messages::default().to_string(), "no messages");
        assert_eq!(Message::default().to_string(), "(empty message)");
    }
}
