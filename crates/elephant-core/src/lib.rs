//! Core types for the Elephant entity card
//!
//! This crate provides the types shared between the display card and its
//! visual editor: the card configuration schema, action descriptors, color
//! settings, entity state snapshots, outbound host events, and the
//! custom-card registry.

mod action;
mod color;
mod config;
mod error;
mod event;
mod registry;
mod snapshot;

pub use action::{ActionConfig, ServiceData};
pub use color::{ColorSetting, Rgb};
pub use config::{ActionSlot, CardConfig};
pub use error::ConfigError;
pub use event::{CollectedEvents, EventSink, HostEvent};
pub use registry::{CardDescriptor, CardRegistry};
pub use snapshot::{EntitySnapshot, StateMap};

/// State value reported for an entity the host cannot reach
pub const STATE_UNAVAILABLE: &str = "unavailable";

/// State value reported for an entity with no known state yet
pub const STATE_UNKNOWN: &str = "unknown";
