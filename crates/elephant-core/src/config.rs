//! The card configuration schema
//!
//! The host stores this as a sub-object of the dashboard document and
//! delivers it whole to both the card and its editor on every change.
//! Neither widget ever mutates a configuration in place; the editor
//! produces a complete replacement object for each edit.

use serde::{Deserialize, Serialize};

use crate::{ActionConfig, ColorSetting, ConfigError};

/// Gesture slots a card action can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionSlot {
    Tap,
    Hold,
    DoubleTap,
}

/// Configuration for a single entity card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardConfig {
    /// Entity this card displays. Required key; an empty string is the
    /// editor's "not yet configured" placeholder and is accepted.
    pub entity: String,

    /// Display name override; empty falls back to the entity's friendly name
    #[serde(default)]
    pub name: String,

    /// Unit override; empty falls back to the entity's unit attribute
    #[serde(default)]
    pub unit: String,

    /// Icon override; empty falls back to the entity's icon attribute
    #[serde(default)]
    pub icon: String,

    #[serde(default, skip_serializing_if = "is_unset")]
    pub background_color: ColorSetting,

    #[serde(default, skip_serializing_if = "is_unset")]
    pub text_color: ColorSetting,

    #[serde(default, skip_serializing_if = "is_unset")]
    pub icon_color: ColorSetting,

    /// Alpha applied when compositing a custom background
    #[serde(default = "default_transparency")]
    pub transparency: f64,

    /// Backdrop blur radius in pixels; zero disables the effect
    #[serde(default)]
    pub blur_amount: f64,

    /// Derive icon color from activeness instead of `icon_color`
    #[serde(default = "default_true")]
    pub state_color: bool,

    /// Resolve the icon purely from live state, ignoring `icon`
    #[serde(default)]
    pub dynamic_icon: bool,

    /// Fixed-point precision for numeric states
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub decimals: Option<u32>,

    /// Unset means the effective default: more-info, or toggle for
    /// domains where toggling is the obvious tap (see the card crate)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tap_action: Option<ActionConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hold_action: Option<ActionConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub double_tap_action: Option<ActionConfig>,
}

fn default_transparency() -> f64 {
    1.0
}

fn default_true() -> bool {
    true
}

fn is_unset(color: &ColorSetting) -> bool {
    !color.is_set()
}

impl CardConfig {
    /// Validate and merge a host-delivered configuration over defaults
    ///
    /// Unknown keys (such as the host's own `type` discriminator) are
    /// ignored. The only hard requirement is the presence of the `entity`
    /// key; everything else defaults.
    pub fn from_value(value: serde_json::Value) -> Result<Self, ConfigError> {
        if value.get("entity").is_none() {
            return Err(ConfigError::MissingEntity);
        }
        Ok(serde_json::from_value(value)?)
    }

    /// A minimal valid configuration for a freshly placed card
    pub fn stub() -> Self {
        Self::for_entity("").with_icon("mdi:elephant")
    }

    /// A default configuration for a specific entity
    pub fn for_entity(entity: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            name: String::new(),
            unit: String::new(),
            icon: String::new(),
            background_color: ColorSetting::default(),
            text_color: ColorSetting::default(),
            icon_color: ColorSetting::default(),
            transparency: default_transparency(),
            blur_amount: 0.0,
            state_color: true,
            dynamic_icon: false,
            decimals: None,
            tap_action: None,
            hold_action: None,
            double_tap_action: None,
        }
    }

    fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }

    /// The domain part of the configured entity id
    pub fn entity_domain(&self) -> &str {
        self.entity.split('.').next().unwrap_or("")
    }

    /// The configured action for a gesture slot, if any was set explicitly
    pub fn action(&self, slot: ActionSlot) -> Option<&ActionConfig> {
        match slot {
            ActionSlot::Tap => self.tap_action.as_ref(),
            ActionSlot::Hold => self.hold_action.as_ref(),
            ActionSlot::DoubleTap => self.double_tap_action.as_ref(),
        }
    }
}
