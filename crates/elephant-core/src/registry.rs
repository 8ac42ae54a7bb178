//! Custom-card registry
//!
//! The host keeps a process-wide list of available custom cards so its
//! card picker can offer them. Registration happens once at module load
//! and must tolerate the module being loaded twice, so `register` is
//! guarded by the card type.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Static description of a custom card for the host's card picker
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardDescriptor {
    /// Unique tag-name-style identifier (e.g. "elephant-entity-card")
    #[serde(rename = "type")]
    pub card_type: String,

    /// Human-readable label
    pub name: String,

    /// Whether the picker should render a live preview
    pub preview: bool,

    pub description: String,
}

/// Append-once registry of custom cards
#[derive(Debug, Default)]
pub struct CardRegistry {
    entries: Vec<CardDescriptor>,
}

impl CardRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card, refusing duplicates
    ///
    /// Returns false when an entry with the same card type already exists.
    pub fn register(&mut self, descriptor: CardDescriptor) -> bool {
        if self.contains(&descriptor.card_type) {
            trace!(card_type = %descriptor.card_type, "card already registered, skipping");
            return false;
        }
        debug!(card_type = %descriptor.card_type, "registering custom card");
        self.entries.push(descriptor);
        true
    }

    pub fn contains(&self, card_type: &str) -> bool {
        self.entries.iter().any(|e| e.card_type == card_type)
    }

    pub fn get(&self, card_type: &str) -> Option<&CardDescriptor> {
        self.entries.iter().find(|e| e.card_type == card_type)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CardDescriptor> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
