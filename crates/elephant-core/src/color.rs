//! Color settings for card styling
//!
//! Configurations carry colors either as a hex/CSS string or as an
//! `[r, g, b]` triple. An empty string means "unset, inherit the host
//! theme". Malformed non-empty hex values degrade to white rather than
//! failing, since they occur in hand-edited dashboard YAML.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// An RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

/// Fallback for malformed color strings
pub const FALLBACK_WHITE: Rgb = Rgb {
    r: 255,
    g: 255,
    b: 255,
};

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string (leading `#` optional, case-insensitive)
    pub fn parse_hex(s: &str) -> Option<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        if hex.len() != 6 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
        let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
        let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
        Some(Self { r, g, b })
    }

    /// Render as a CSS `rgba(...)` value with the given alpha
    pub fn rgba_css(&self, alpha: f64) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
    }
}

/// A user-configurable color slot
///
/// Deserializes from either a string (hex or any CSS color) or an RGB
/// triple. The default is an empty string, meaning unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ColorSetting {
    Css(String),
    Triple([u8; 3]),
}

impl Default for ColorSetting {
    fn default() -> Self {
        Self::Css(String::new())
    }
}

impl ColorSetting {
    /// Whether a color has been configured at all
    pub fn is_set(&self) -> bool {
        match self {
            Self::Css(s) => !s.is_empty(),
            Self::Triple(_) => true,
        }
    }

    /// Resolve to an RGB value, degrading malformed strings to white
    ///
    /// Returns `None` when the slot is unset.
    pub fn rgb(&self) -> Option<Rgb> {
        match self {
            Self::Css(s) if s.is_empty() => None,
            Self::Css(s) => Some(Rgb::parse_hex(s).unwrap_or_else(|| {
                warn!(color = %s, "malformed hex color, falling back to white");
                FALLBACK_WHITE
            })),
            Self::Triple([r, g, b]) => Some(Rgb::new(*r, *g, *b)),
        }
    }

    /// The value to hand straight to the host's styling layer
    ///
    /// String settings pass through untouched so named CSS colors and
    /// theme variables keep working; triples render as `rgb(...)`.
    pub fn css(&self) -> Option<String> {
        match self {
            Self::Css(s) if s.is_empty() => None,
            Self::Css(s) => Some(s.clone()),
            Self::Triple([r, g, b]) => Some(format!("rgb({r}, {g}, {b})")),
        }
    }
}

impl From<&str> for ColorSetting {
    fn from(s: &str) -> Self {
        Self::Css(s.to_string())
    }
}
