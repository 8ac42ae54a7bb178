//! Visual editor for the Elephant entity card
//!
//! Renders an editable form bound to the card's configuration shape and
//! emits a complete replacement configuration on every field edit. The
//! editor holds no authoritative state: each edit round-trips through the
//! host, which persists the new configuration and delivers it back.

mod editor;
mod form;
mod icons;

pub use editor::{CardEditor, ConfigOutcome, EditorState};
pub use form::{
    action_kind, slot_default, ActionField, ControlKind, FieldKey, FieldValue, Form, FormField,
    ACTION_KINDS,
};
pub use icons::domain_icon;
