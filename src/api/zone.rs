use serde::{Deserialize, Serialize};

/// Body of `PUT Zone/{zone}/`, committing pending changes so they go live.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishZone {
    pub publish: bool,
    pub notes: String,
}

impl PublishZone {
    pub fn new(notes: impl Into<String>) -> Self {
        PublishZone {
            publish: true,
            notes: notes.into(),
        }
    }
}
