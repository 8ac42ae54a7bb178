//! Outbound events from the widgets to the host
//!
//! The widgets never invoke host operations directly. Toggling, navigation,
//! service calls, and config persistence are all requested by emitting an
//! event through the host-provided sink; the host decides how to act on it.

use serde::{Deserialize, Serialize};

use crate::CardConfig;

/// An event bubbled up to the host
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum HostEvent {
    /// Open the details dialog for an entity
    MoreInfo { entity_id: String },

    /// Invoke a service on the host
    CallService {
        domain: String,
        service: String,
        data: serde_json::Value,
    },

    /// Switch the displayed dashboard view
    Navigate { path: String },

    /// The editor produced a complete replacement configuration
    ConfigChanged { config: CardConfig },
}

/// The host's event channel
///
/// Implemented by the embedding application; events are delivered in emit
/// order on the single UI thread.
pub trait EventSink {
    fn send(&mut self, event: HostEvent);
}

/// A sink that records events for inspection in tests
#[derive(Debug, Default)]
pub struct CollectedEvents {
    pub events: Vec<HostEvent>,
}

impl CollectedEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// The single recorded event, panicking if there are zero or many
    pub fn only(&self) -> &HostEvent {
        assert_eq!(self.events.len(), 1, "expected exactly one event");
        &self.events[0]
    }
}

impl EventSink for CollectedEvents {
    fn send(&mut self, event: HostEvent) {
        self.events.push(event);
    }
}
