//! Gesture-to-action dispatch

use elephant_core::{ActionConfig, ActionSlot, CardConfig, EventSink, HostEvent};
use serde_json::json;
use tracing::{debug, warn};

/// Pointer gestures the card reacts to
///
/// Hold is delivered as a context click with the default menu suppressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    Tap,
    Hold,
    DoubleTap,
}

impl Gesture {
    fn slot(self) -> ActionSlot {
        match self {
            Self::Tap => ActionSlot::Tap,
            Self::Hold => ActionSlot::Hold,
            Self::DoubleTap => ActionSlot::DoubleTap,
        }
    }
}

/// Domains where an unconfigured tap defaults to toggle instead of more-info
const TOGGLE_BY_DEFAULT_DOMAINS: &[&str] = &["light", "switch", "fan", "input_boolean"];

/// The action a gesture maps to, applying the configured defaults
pub fn effective_action(config: &CardConfig, gesture: Gesture) -> ActionConfig {
    if let Some(action) = config.action(gesture.slot()) {
        return action.clone();
    }
    match gesture {
        Gesture::Tap => {
            if TOGGLE_BY_DEFAULT_DOMAINS.contains(&config.entity_domain()) {
                ActionConfig::Toggle
            } else {
                ActionConfig::MoreInfo
            }
        }
        Gesture::Hold | Gesture::DoubleTap => ActionConfig::None,
    }
}

/// Dispatch a gesture as an outbound host event
pub fn dispatch(config: &CardConfig, gesture: Gesture, sink: &mut dyn EventSink) {
    let action = effective_action(config, gesture);
    debug!(entity = %config.entity, ?gesture, ?action, "dispatching card action");

    match action {
        ActionConfig::None => {}
        ActionConfig::MoreInfo => sink.send(HostEvent::MoreInfo {
            entity_id: config.entity.clone(),
        }),
        ActionConfig::Toggle => sink.send(HostEvent::CallService {
            domain: "homeassistant".to_string(),
            service: "toggle".to_string(),
            data: json!({ "entity_id": config.entity }),
        }),
        ActionConfig::Navigate { navigation_path } => {
            if navigation_path.is_empty() {
                return;
            }
            sink.send(HostEvent::Navigate {
                path: navigation_path,
            });
        }
        ActionConfig::CallService {
            service,
            service_data,
        } => {
            let Some((domain, name)) = service.split_once('.') else {
                warn!(%service, "service id is not in domain.service form, dropping action");
                return;
            };
            let data = service_data
                .map(|d| d.resolve())
                .unwrap_or_else(|| json!({}));
            sink.send(HostEvent::CallService {
                domain: domain.to_string(),
                service: name.to_string(),
                data,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elephant_core::{CollectedEvents, ServiceData};

    #[test]
    fn test_tap_defaults_to_toggle_for_light() {
        let config = CardConfig::for_entity("light.kitchen");
        assert_eq!(effective_action(&config, Gesture::Tap), ActionConfig::Toggle);
    }

    #[test]
    fn test_tap_defaults_to_more_info_for_sensor() {
        let config = CardConfig::for_entity("sensor.temp");
        assert_eq!(effective_action(&config, Gesture::Tap), ActionConfig::MoreInfo);
    }

    #[test]
    fn test_explicit_tap_action_wins_over_inference() {
        let mut config = CardConfig::for_entity("light.kitchen");
        config.tap_action = Some(ActionConfig::MoreInfo);
        assert_eq!(effective_action(&config, Gesture::Tap), ActionConfig::MoreInfo);
    }

    #[test]
    fn test_hold_and_double_tap_default_to_none() {
        let config = CardConfig::for_entity("light.kitchen");
        assert_eq!(effective_action(&config, Gesture::Hold), ActionConfig::None);
        assert_eq!(effective_action(&config, Gesture::DoubleTap), ActionConfig::None);
    }

    #[test]
    fn test_none_dispatches_nothing() {
        let config = CardConfig::for_entity("sensor.temp");
        let mut sink = CollectedEvents::new();
        dispatch(&config, Gesture::Hold, &mut sink);
        assert!(sink.events.is_empty());
    }

    #[test]
    fn test_toggle_requests_host_mediated_service() {
        let config = CardConfig::for_entity("light.kitchen");
        let mut sink = CollectedEvents::new();
        dispatch(&config, Gesture::Tap, &mut sink);
        assert_eq!(
            sink.only(),
            &HostEvent::CallService {
                domain: "homeassistant".into(),
                service: "toggle".into(),
                data: json!({"entity_id": "light.kitchen"}),
            }
        );
    }

    #[test]
    fn test_navigate_dispatches_single_event() {
        let mut config = CardConfig::for_entity("sensor.temp");
        config.tap_action = Some(ActionConfig::Navigate {
            navigation_path: "/p".into(),
        });
        let mut sink = CollectedEvents::new();
        dispatch(&config, Gesture::Tap, &mut sink);
        assert_eq!(sink.only(), &HostEvent::Navigate { path: "/p".into() });
    }

    #[test]
    fn test_navigate_without_path_is_noop() {
        let mut config = CardConfig::for_entity("sensor.temp");
        config.tap_action = Some(ActionConfig::Navigate {
            navigation_path: String::new(),
        });
        let mut sink = CollectedEvents::new();
        dispatch(&config, Gesture::Tap, &mut sink);
        assert!(sink.events.is_empty());
    }

    #[test]
    fn test_call_service_splits_dotted_id() {
        let mut config = CardConfig::for_entity("cover.garage");
        config.hold_action = Some(ActionConfig::CallService {
            service: "cover.open_cover".into(),
            service_data: Some(ServiceData::Encoded(
                r#"{"entity_id": "cover.garage"}"#.into(),
            )),
        });
        let mut sink = CollectedEvents::new();
        dispatch(&config, Gesture::Hold, &mut sink);
        assert_eq!(
            sink.only(),
            &HostEvent::CallService {
                domain: "cover".into(),
                service: "open_cover".into(),
                data: json!({"entity_id": "cover.garage"}),
            }
        );
    }

    #[test]
    fn test_call_service_with_undotted_id_is_dropped() {
        let mut config = CardConfig::for_entity("cover.garage");
        config.tap_action = Some(ActionConfig::CallService {
            service: "open_cover".into(),
            service_data: None,
        });
        let mut sink = CollectedEvents::new();
        dispatch(&config, Gesture::Tap, &mut sink);
        assert!(sink.events.is_empty());
    }

    #[test]
    fn test_malformed_service_data_falls_back_to_empty() {
        let mut config = CardConfig::for_entity("script.morning");
        config.tap_action = Some(ActionConfig::CallService {
            service: "script.turn_on".into(),
            service_data: Some(ServiceData::Encoded("{broken".into())),
        });
        let mut sink = CollectedEvents::new();
        dispatch(&config, Gesture::Tap, &mut sink);
        assert_eq!(
            sink.only(),
            &HostEvent::CallService {
                domain: "script".into(),
                service: "turn_on".into(),
                data: json!({}),
            }
        );
    }
}
