//! Error types for card configuration

use thiserror::Error;

/// Errors raised while accepting a card configuration
///
/// These are the only errors the card surfaces to the host; everything
/// that can go wrong after configuration (missing entity state, malformed
/// colors, malformed service data) degrades silently instead.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration has no `entity` key at all
    ///
    /// An empty string is accepted as a "not yet configured" placeholder
    /// so the editor's stub config does not fail; only a missing key is
    /// a configuration error.
    #[error("entity is required")]
    MissingEntity,

    /// A field failed to deserialize into the expected type
    #[error("invalid card configuration: {0}")]
    Invalid(#[from] serde_json::Error),
}
