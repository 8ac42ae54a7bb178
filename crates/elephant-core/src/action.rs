//! Action descriptors for tap, hold, and double-tap gestures

use serde::{Deserialize, Serialize};
use tracing::warn;

/// What a gesture on the card should do
///
/// Serialized with an `action` tag, matching the dashboard's stored form:
/// `{"action": "navigate", "navigation_path": "/lovelace/0"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "kebab-case")]
pub enum ActionConfig {
    /// Do nothing
    None,

    /// Ask the host to open the entity's details dialog
    MoreInfo,

    /// Ask the host to toggle the entity
    Toggle,

    /// Ask the host to switch the displayed view
    Navigate {
        #[serde(default)]
        navigation_path: String,
    },

    /// Ask the host to invoke a named service
    CallService {
        /// Dotted `domain.service` identifier
        #[serde(default)]
        service: String,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        service_data: Option<ServiceData>,
    },
}

/// Payload for a `call-service` action
///
/// Older dashboard revisions stored the payload as a JSON-encoded string
/// rather than a structured object; both forms are accepted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ServiceData {
    Object(serde_json::Map<String, serde_json::Value>),
    Encoded(String),
}

impl ServiceData {
    /// Resolve to a structured payload
    ///
    /// Malformed JSON in the encoded-string form is logged and replaced
    /// with an empty payload; it must never take down the dashboard.
    pub fn resolve(&self) -> serde_json::Value {
        match self {
            Self::Object(map) => serde_json::Value::Object(map.clone()),
            Self::Encoded(raw) => match serde_json::from_str(raw) {
                Ok(value) => value,
                Err(err) => {
                    warn!(%err, data = %raw, "malformed service_data JSON, using empty payload");
                    serde_json::Value::Object(Default::default())
                }
            },
        }
    }
}
