//! The Elephant entity card
//!
//! A clickable dashboard tile that shows one entity's icon, name, and
//! state, with configurable colors, transparency, backdrop blur, and
//! tap/hold/double-tap actions. Rendering is a pure projection of
//! (configuration, entity snapshot) into a [`TileView`]; user gestures
//! become outbound host events and nothing else.

mod actions;
mod card;
mod format;
mod render;

pub use actions::{dispatch, effective_action, Gesture};
pub use card::{register_card, EntityCard, CARD_TYPE};
pub use format::{format_state, is_active_state, OFFLINE_LABEL};
pub use render::{Background, IconColor, TileView, PLACEHOLDER_ICON};
