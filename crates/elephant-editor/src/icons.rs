//! Fallback icons by entity domain
//!
//! Used when a newly selected entity carries no explicit icon attribute,
//! so the editor can still pre-fill something sensible.

/// A default icon for common domains
pub fn domain_icon(domain: &str) -> Option<&'static str> {
    let icon = match domain {
        "light" => "mdi:lightbulb",
        "switch" => "mdi:toggle-switch",
        "fan" => "mdi:fan",
        "lock" => "mdi:lock",
        "cover" => "mdi:window-shutter",
        "climate" => "mdi:thermostat",
        "media_player" => "mdi:speaker",
        "camera" => "mdi:cctv",
        "sensor" => "mdi:gauge",
        "binary_sensor" => "mdi:radiobox-blank",
        "person" => "mdi:account",
        "device_tracker" => "mdi:account",
        "scene" => "mdi:palette",
        "script" => "mdi:script-text",
        "automation" => "mdi:robot",
        "input_boolean" => "mdi:toggle-switch-outline",
        "vacuum" => "mdi:robot-vacuum",
        "weather" => "mdi:weather-partly-cloudy",
        _ => return None,
    };
    Some(icon)
}
