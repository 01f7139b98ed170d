use serde::{Deserialize, Serialize};

/// Body of `POST TXTRecord/{zone}/{fqdn}/`.
///
/// # Example JSON
///
/// ```json
/// {
///   "rdata": { "txtdata": "LoqXcYV8q5ONbJQxbmR7SCTNo3tiAXDfowyjxAjEuX0" },
///   "ttl": "120"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxtRecord {
    pub rdata: TxtRdata,

    /// Dyn takes the TTL as a string.
    pub ttl: String,
}

impl TxtRecord {
    pub fn new(txtdata: impl Into<String>, ttl: u32) -> Self {
        TxtRecord {
            rdata: TxtRdata {
                txtdata: txtdata.into(),
            },
            ttl: ttl.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TxtRdata {
    pub txtdata: String,
}
