//! Tile view resolution
//!
//! A [`TileView`] is the complete visual description of the card for one
//! (configuration, snapshot) pair. Resolution is a pure function; the
//! retained widget recomputes it on every config or state delivery and
//! hands the result to the host's styling layer.

use elephant_core::{CardConfig, EntitySnapshot};

use crate::format::{self, OFFLINE_LABEL};

/// Icon shown when neither the config nor the entity provides one
pub const PLACEHOLDER_ICON: &str = "mdi:help-circle";

/// Resolved icon color
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IconColor {
    /// Theme's active-state color (`--state-active-color`)
    Active,
    /// Theme's disabled-text color (`--disabled-text-color`)
    Disabled,
    /// A color configured explicitly
    Custom(String),
    /// No styling; the host theme decides
    Inherit,
}

impl IconColor {
    /// CSS value for the host's styling layer; `None` means inherit
    pub fn css(&self) -> Option<String> {
        match self {
            Self::Active => Some("var(--state-active-color)".to_string()),
            Self::Disabled => Some("var(--disabled-text-color)".to_string()),
            Self::Custom(value) => Some(value.clone()),
            Self::Inherit => None,
        }
    }
}

/// Resolved tile background
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    /// Inherit the host theme's card background
    Theme,
    /// A translucent fill composited from the configured color
    Custom { color: elephant_core::Rgb, alpha: f64 },
}

impl Background {
    pub fn css(&self) -> Option<String> {
        match self {
            Self::Theme => None,
            Self::Custom { color, alpha } => Some(color.rgba_css(*alpha)),
        }
    }
}

/// Everything the host needs to draw the tile
#[derive(Debug, Clone, PartialEq)]
pub struct TileView {
    /// Primary label (name line)
    pub primary: String,

    /// Secondary label (state and unit line)
    pub secondary: String,

    /// Icon identifier (e.g. "mdi:lightbulb")
    pub icon: String,

    pub icon_color: IconColor,

    pub background: Background,

    /// Text color override; `None` inherits the theme
    pub text_color: Option<String>,

    /// Backdrop blur radius; `None` means the effect is off
    pub backdrop_blur_px: Option<f64>,
}

impl TileView {
    /// Resolve the tile for a configuration and a live snapshot
    pub fn resolve(config: &CardConfig, snapshot: &EntitySnapshot) -> Self {
        let primary = resolve_name(config, snapshot);
        let secondary = resolve_secondary(config, snapshot);
        let icon = resolve_icon(config, snapshot);
        let icon_color = resolve_icon_color(config, snapshot);
        let (background, backdrop_blur_px) = resolve_background(config);
        let text_color = config.text_color.css();

        Self {
            primary,
            secondary,
            icon,
            icon_color,
            background,
            text_color,
            backdrop_blur_px,
        }
    }
}

fn resolve_name(config: &CardConfig, snapshot: &EntitySnapshot) -> String {
    let name = config.name.trim();
    if !name.is_empty() {
        return name.to_string();
    }
    snapshot
        .friendly_name()
        .unwrap_or_else(|| config.entity.clone())
}

fn resolve_secondary(config: &CardConfig, snapshot: &EntitySnapshot) -> String {
    // Offline entities get a fixed label and no unit, whatever the config says
    if snapshot.is_unavailable() || snapshot.is_unknown() {
        return OFFLINE_LABEL.to_string();
    }

    let state = format::format_state(config, snapshot);
    let unit = resolve_unit(config, snapshot);
    if unit.is_empty() {
        state
    } else {
        format!("{state} {unit}")
    }
}

fn resolve_unit(config: &CardConfig, snapshot: &EntitySnapshot) -> String {
    let unit = config.unit.trim();
    if !unit.is_empty() {
        return unit.to_string();
    }
    snapshot.unit_of_measurement().unwrap_or_default()
}

fn resolve_icon(config: &CardConfig, snapshot: &EntitySnapshot) -> String {
    // Dynamic-icon mode ignores the configured icon entirely
    if !config.dynamic_icon && !config.icon.is_empty() {
        return config.icon.clone();
    }
    snapshot
        .icon()
        .unwrap_or_else(|| PLACEHOLDER_ICON.to_string())
}

fn resolve_icon_color(config: &CardConfig, snapshot: &EntitySnapshot) -> IconColor {
    if config.state_color {
        if format::is_active_state(&snapshot.state) {
            IconColor::Active
        } else {
            IconColor::Disabled
        }
    } else if let Some(css) = config.icon_color.css() {
        IconColor::Custom(css)
    } else {
        IconColor::Inherit
    }
}

fn resolve_background(config: &CardConfig) -> (Background, Option<f64>) {
    match config.background_color.rgb() {
        Some(color) => {
            let background = Background::Custom {
                color,
                alpha: config.transparency,
            };
            let blur = (config.blur_amount > 0.0).then_some(config.blur_amount);
            (background, blur)
        }
        None => (Background::Theme, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn snapshot() -> EntitySnapshot {
        EntitySnapshot::new("light.kitchen", "on")
            .with_attribute("friendly_name", json!("Kitchen Light"))
            .with_attribute("icon", json!("mdi:ceiling-light"))
    }

    #[test]
    fn test_name_override_wins() {
        let mut config = CardConfig::for_entity("light.kitchen");
        config.name = "  Lamp  ".into();
        let view = TileView::resolve(&config, &snapshot());
        assert_eq!(view.primary, "Lamp");
    }

    #[test]
    fn test_name_falls_back_to_friendly_name_then_entity() {
        let config = CardConfig::for_entity("light.kitchen");
        assert_eq!(TileView::resolve(&config, &snapshot()).primary, "Kitchen Light");

        let bare = EntitySnapshot::new("light.kitchen", "on");
        assert_eq!(TileView::resolve(&config, &bare).primary, "light.kitchen");
    }

    #[test]
    fn test_offline_suppresses_unit() {
        let mut config = CardConfig::for_entity("sensor.temp");
        config.unit = "°F".into();
        let snap = EntitySnapshot::new("sensor.temp", "unavailable")
            .with_attribute("unit_of_measurement", json!("°C"));
        let view = TileView::resolve(&config, &snap);
        assert_eq!(view.secondary, "Offline");
    }

    #[test]
    fn test_unit_override_and_decimals() {
        let mut config = CardConfig::for_entity("sensor.temp");
        config.unit = "°F".into();
        config.decimals = Some(1);
        let snap = EntitySnapshot::new("sensor.temp", "21.456")
            .with_attribute("unit_of_measurement", json!("°C"));
        let view = TileView::resolve(&config, &snap);
        assert_eq!(view.secondary, "21.5 °F");
    }

    #[test]
    fn test_icon_precedence() {
        let mut config = CardConfig::for_entity("light.kitchen");
        config.icon = "mdi:lamp".into();
        assert_eq!(TileView::resolve(&config, &snapshot()).icon, "mdi:lamp");

        config.icon.clear();
        assert_eq!(TileView::resolve(&config, &snapshot()).icon, "mdi:ceiling-light");

        let bare = EntitySnapshot::new("light.kitchen", "on");
        assert_eq!(TileView::resolve(&config, &bare).icon, PLACEHOLDER_ICON);
    }

    #[test]
    fn test_dynamic_icon_ignores_configured_icon() {
        let mut config = CardConfig::for_entity("light.kitchen");
        config.icon = "mdi:lamp".into();
        config.dynamic_icon = true;
        assert_eq!(TileView::resolve(&config, &snapshot()).icon, "mdi:ceiling-light");
    }

    #[test]
    fn test_state_color_overrides_icon_color() {
        let mut config = CardConfig::for_entity("light.kitchen");
        config.icon_color = "#ff0000".into();
        assert_eq!(TileView::resolve(&config, &snapshot()).icon_color, IconColor::Active);

        let off = EntitySnapshot::new("light.kitchen", "off");
        assert_eq!(TileView::resolve(&config, &off).icon_color, IconColor::Disabled);

        config.state_color = false;
        assert_eq!(
            TileView::resolve(&config, &snapshot()).icon_color,
            IconColor::Custom("#ff0000".into())
        );
    }

    #[test]
    fn test_background_compositing() {
        let mut config = CardConfig::for_entity("light.kitchen");
        config.background_color = "#102030".into();
        config.transparency = 0.5;
        let view = TileView::resolve(&config, &snapshot());
        assert_eq!(view.background.css().as_deref(), Some("rgba(16, 32, 48, 0.5)"));
    }

    #[test]
    fn test_theme_background_when_unset() {
        let config = CardConfig::for_entity("light.kitchen");
        let view = TileView::resolve(&config, &snapshot());
        assert_eq!(view.background, Background::Theme);
        assert_eq!(view.backdrop_blur_px, None);
    }

    #[test]
    fn test_blur_only_with_custom_background() {
        let mut config = CardConfig::for_entity("light.kitchen");
        config.blur_amount = 10.0;
        assert_eq!(TileView::resolve(&config, &snapshot()).backdrop_blur_px, None);

        config.background_color = "#ffffff".into();
        assert_eq!(TileView::resolve(&config, &snapshot()).backdrop_blur_px, Some(10.0));

        config.blur_amount = 0.0;
        assert_eq!(TileView::resolve(&config, &snapshot()).backdrop_blur_px, None);
    }

    #[test]
    fn test_resolution_is_pure() {
        let mut config = CardConfig::for_entity("sensor.temp");
        config.decimals = Some(2);
        let snap = EntitySnapshot::new("sensor.temp", "3.14159");
        let first = TileView::resolve(&config, &snap);
        let second = TileView::resolve(&config, &snap);
        assert_eq!(first, second);
    }
}
