//! Read-only entity state snapshots delivered by the host
//!
//! The host recreates these on every state change tick; the widgets never
//! mutate them.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{STATE_UNAVAILABLE, STATE_UNKNOWN};

/// The host's view of all entity states, keyed by entity id
pub type StateMap = HashMap<String, EntitySnapshot>;

/// The state of one entity at a point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntitySnapshot {
    /// Entity id in `domain.object_id` form
    pub entity_id: String,

    /// The state value (e.g. "on", "off", "23.5", "unavailable")
    pub state: String,

    /// Additional attributes associated with the state
    #[serde(default)]
    pub attributes: HashMap<String, serde_json::Value>,

    /// When the state value last changed
    pub last_changed: DateTime<Utc>,

    /// When the state was last written, even if unchanged
    pub last_updated: DateTime<Utc>,
}

impl EntitySnapshot {
    /// Create a snapshot with the current timestamp and no attributes
    pub fn new(entity_id: impl Into<String>, state: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            entity_id: entity_id.into(),
            state: state.into(),
            attributes: HashMap::new(),
            last_changed: now,
            last_updated: now,
        }
    }

    /// Add an attribute, for building snapshots fluently
    pub fn with_attribute(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.attributes.insert(key.into(), value);
        self
    }

    /// The domain part of the entity id
    pub fn domain(&self) -> &str {
        self.entity_id.split('.').next().unwrap_or("")
    }

    /// Get an attribute value by key, deserialized to the requested type
    pub fn attribute<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        self.attributes
            .get(key)
            .and_then(|v| serde_json::from_value(v.clone()).ok())
    }

    pub fn friendly_name(&self) -> Option<String> {
        self.attribute("friendly_name")
    }

    pub fn unit_of_measurement(&self) -> Option<String> {
        self.attribute("unit_of_measurement")
    }

    pub fn icon(&self) -> Option<String> {
        self.attribute("icon")
    }

    pub fn device_class(&self) -> Option<String> {
        self.attribute("device_class")
    }

    /// Whether the host cannot currently reach the entity
    pub fn is_unavailable(&self) -> bool {
        self.state == STATE_UNAVAILABLE
    }

    /// Whether the entity has no known state yet
    pub fn is_unknown(&self) -> bool {
        self.state == STATE_UNKNOWN
    }
}
