//! Domain-aware state formatting
//!
//! Raw state strings like "on" or "21.456" are not what a tile should
//! show. This module maps them to display text based on the entity's
//! domain and device class, with an optional fixed-point precision for
//! numeric states.

use elephant_core::{CardConfig, EntitySnapshot};

/// Label shown when the entity is unavailable or unknown
pub const OFFLINE_LABEL: &str = "Offline";

/// Binary-sensor device classes displayed as Open/Closed
const OPENING_DEVICE_CLASSES: &[&str] = &["door", "window", "opening", "garage_door"];

/// States treated as "active" for state-based icon coloring
const ACTIVE_STATES: &[&str] = &["on", "open", "playing", "home", "locked"];

/// Whether a state value counts as active
pub fn is_active_state(state: &str) -> bool {
    ACTIVE_STATES.contains(&state)
}

/// Format an entity's state for display
///
/// Unavailable/unknown snapshots are handled by the caller (they replace
/// the whole secondary line with [`OFFLINE_LABEL`]); this function only
/// deals with live states.
pub fn format_state(config: &CardConfig, snapshot: &EntitySnapshot) -> String {
    match snapshot.domain() {
        "lock" => match snapshot.state.as_str() {
            "locked" => return "Locked".to_string(),
            "unlocked" => return "Unlocked".to_string(),
            _ => {}
        },
        "binary_sensor" => {
            let opening = snapshot
                .device_class()
                .map(|dc| OPENING_DEVICE_CLASSES.contains(&dc.as_str()))
                .unwrap_or(false);
            match (snapshot.state.as_str(), opening) {
                ("on", true) => return "Open".to_string(),
                ("off", true) => return "Closed".to_string(),
                ("on", false) => return "Detected".to_string(),
                ("off", false) => return "Clear".to_string(),
                _ => {}
            }
        }
        _ => {}
    }

    if let Ok(number) = snapshot.state.parse::<f64>() {
        if let Some(decimals) = config.decimals {
            return format!("{:.*}", decimals as usize, number);
        }
        return snapshot.state.clone();
    }

    title_case(&snapshot.state)
}

/// Title-case a raw state string, treating underscores as word breaks
fn title_case(state: &str) -> String {
    state
        .split(['_', ' '])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(entity: &str) -> CardConfig {
        CardConfig::for_entity(entity)
    }

    #[test]
    fn test_lock_states() {
        let cfg = config("lock.front");
        let locked = EntitySnapshot::new("lock.front", "locked");
        let unlocked = EntitySnapshot::new("lock.front", "unlocked");
        assert_eq!(format_state(&cfg, &locked), "Locked");
        assert_eq!(format_state(&cfg, &unlocked), "Unlocked");
    }

    #[test]
    fn test_lock_fallthrough_state() {
        let cfg = config("lock.front");
        let jammed = EntitySnapshot::new("lock.front", "jammed");
        assert_eq!(format_state(&cfg, &jammed), "Jammed");
    }

    #[test]
    fn test_binary_sensor_opening_classes() {
        let cfg = config("binary_sensor.front_door");
        let open = EntitySnapshot::new("binary_sensor.front_door", "on")
            .with_attribute("device_class", json!("door"));
        let closed = EntitySnapshot::new("binary_sensor.front_door", "off")
            .with_attribute("device_class", json!("garage_door"));
        assert_eq!(format_state(&cfg, &open), "Open");
        assert_eq!(format_state(&cfg, &closed), "Closed");
    }

    #[test]
    fn test_binary_sensor_generic_classes() {
        let cfg = config("binary_sensor.motion");
        let on = EntitySnapshot::new("binary_sensor.motion", "on");
        let off = EntitySnapshot::new("binary_sensor.motion", "off")
            .with_attribute("device_class", json!("motion"));
        assert_eq!(format_state(&cfg, &on), "Detected");
        assert_eq!(format_state(&cfg, &off), "Clear");
    }

    #[test]
    fn test_numeric_with_decimals() {
        let mut cfg = config("sensor.temp");
        cfg.decimals = Some(1);
        let snap = EntitySnapshot::new("sensor.temp", "21.456");
        assert_eq!(format_state(&cfg, &snap), "21.5");
    }

    #[test]
    fn test_numeric_without_decimals_keeps_raw() {
        let cfg = config("sensor.temp");
        let snap = EntitySnapshot::new("sensor.temp", "21.456");
        assert_eq!(format_state(&cfg, &snap), "21.456");
    }

    #[test]
    fn test_zero_decimals() {
        let mut cfg = config("sensor.temp");
        cfg.decimals = Some(0);
        let snap = EntitySnapshot::new("sensor.temp", "21.6");
        assert_eq!(format_state(&cfg, &snap), "22");
    }

    #[test]
    fn test_title_case_fallback() {
        let cfg = config("climate.hvac");
        let snap = EntitySnapshot::new("climate.hvac", "heat_cool");
        assert_eq!(format_state(&cfg, &snap), "Heat Cool");
    }

    #[test]
    fn test_active_predicate() {
        for state in ["on", "open", "playing", "home", "locked"] {
            assert!(is_active_state(state), "{state} should be active");
        }
        for state in ["off", "closed", "idle", "away", "unlocked"] {
            assert!(!is_active_state(state), "{state} should not be active");
        }
    }
}
