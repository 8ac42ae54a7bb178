//! The card's visual configuration editor

use elephant_core::{ActionConfig, ActionSlot, CardConfig, EventSink, HostEvent, ServiceData,
    StateMap};
use tracing::{debug, warn};

use crate::form::{slot_default, ActionField, FieldKey, FieldValue, Form};
use crate::icons;

/// Editor lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorState {
    /// Waiting for the host context and the first configuration
    Uninitialized,
    /// The form exists and reflects the latest configuration
    Rendered,
}

/// What a configuration delivery did to the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigOutcome {
    /// Host context not in yet; the config is held until it arrives
    Deferred,
    /// First render, the form was created
    Built,
    /// A structural field changed, the form was rebuilt
    Rebuilt,
    /// Values were pushed into the existing controls
    Synced,
}

/// Form-based editor emitting whole replacement configurations
///
/// Every field edit round-trips through the host: the editor emits a
/// complete new [`CardConfig`], the host persists it and delivers it back
/// via [`set_config`](CardEditor::set_config). Deliveries that differ only
/// in values are synced into the existing controls so the input being
/// typed into keeps its identity; only a change to the entity, the
/// dynamic-icon mode, or the color mode rebuilds the form, because those
/// decide which fields exist at all.
#[derive(Debug, Default)]
pub struct CardEditor {
    config: Option<CardConfig>,
    states: Option<StateMap>,
    form: Option<Form>,
}

impl CardEditor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take the host's current entity states
    ///
    /// The entity picker and auto-population read from these. If a config
    /// arrived first, the form is built now.
    pub fn set_states(&mut self, states: StateMap) {
        self.states = Some(states);
        if self.form.is_none() {
            if let Some(config) = self.config.clone() {
                self.form = Some(Form::build(&config));
            }
        }
    }

    /// Accept a configuration from the host
    pub fn set_config(&mut self, config: CardConfig) -> ConfigOutcome {
        let previous = self.config.replace(config.clone());

        if self.states.is_none() {
            return ConfigOutcome::Deferred;
        }

        if self.form.is_none() {
            self.form = Some(Form::build(&config));
            return ConfigOutcome::Built;
        }

        let structural = previous
            .as_ref()
            .map_or(true, |prev| is_structural_change(prev, &config));
        if structural {
            debug!(entity = %config.entity, "structural config change, rebuilding form");
            self.form = Some(Form::build(&config));
            return ConfigOutcome::Rebuilt;
        }

        if let Some(form) = self.form.as_mut() {
            form.sync(&config);
        }
        ConfigOutcome::Synced
    }

    pub fn state(&self) -> EditorState {
        if self.form.is_some() {
            EditorState::Rendered
        } else {
            EditorState::Uninitialized
        }
    }

    pub fn form(&self) -> Option<&Form> {
        self.form.as_ref()
    }

    pub fn config(&self) -> Option<&CardConfig> {
        self.config.as_ref()
    }

    /// Entity ids offered by the entity picker, sorted
    pub fn entity_ids(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self
            .states
            .iter()
            .flat_map(|s| s.keys())
            .map(String::as_str)
            .collect();
        ids.sort_unstable();
        ids
    }

    /// A form control changed value
    ///
    /// Produces a complete replacement configuration (shallow merge over
    /// the previous one) and emits it as a config-changed event. The
    /// editor's own copy is not updated here; the host delivers the new
    /// configuration back through [`set_config`](CardEditor::set_config).
    /// Edits that leave the configuration unchanged emit nothing.
    pub fn value_changed(&self, key: FieldKey, value: FieldValue, sink: &mut dyn EventSink) {
        let Some(config) = &self.config else {
            return;
        };

        let Some(new_config) = self.apply_field(config.clone(), key, &value) else {
            return;
        };

        if new_config == *config {
            return;
        }

        sink.send(HostEvent::ConfigChanged { config: new_config });
    }

    /// Fold one field edit into a configuration
    ///
    /// Returns `None` when the edit cannot be applied (unparseable number,
    /// unknown action kind, sub-field edit against a mismatched action).
    fn apply_field(
        &self,
        mut config: CardConfig,
        key: FieldKey,
        value: &FieldValue,
    ) -> Option<CardConfig> {
        match key {
            FieldKey::Entity => {
                config.entity = value.as_text()?.to_string();
                self.populate_from_entity(&mut config);
            }
            FieldKey::Name => config.name = value.as_text()?.to_string(),
            FieldKey::Unit => config.unit = value.as_text()?.to_string(),
            FieldKey::Icon => config.icon = value.as_text()?.to_string(),
            FieldKey::BackgroundColor => {
                config.background_color = value.as_text()?.into();
            }
            FieldKey::TextColor => config.text_color = value.as_text()?.into(),
            FieldKey::IconColor => config.icon_color = value.as_text()?.into(),
            FieldKey::BlurAmount => {
                config.blur_amount = coerce_number(key, value)?;
            }
            FieldKey::Transparency => {
                config.transparency = coerce_number(key, value)?;
            }
            FieldKey::StateColor => config.state_color = value.as_bool()?,
            FieldKey::DynamicIcon => config.dynamic_icon = value.as_bool()?,
            FieldKey::Action(slot, field) => {
                let updated = apply_action_field(&config, slot, field, value)?;
                set_slot(&mut config, slot, updated);
            }
        }
        Some(config)
    }

    /// Pre-fill name and icon for a newly selected entity
    ///
    /// Values the user already set are respected; only empty fields are
    /// populated, from the entity's live attributes with the static
    /// domain table as the icon fallback.
    fn populate_from_entity(&self, config: &mut CardConfig) {
        let snapshot = self
            .states
            .as_ref()
            .and_then(|s| s.get(&config.entity));

        if config.name.is_empty() {
            if let Some(name) = snapshot.and_then(|s| s.friendly_name()) {
                config.name = name;
            }
        }

        if config.icon.is_empty() && !config.dynamic_icon {
            let icon = snapshot
                .and_then(|s| s.icon())
                .or_else(|| icons::domain_icon(config.entity_domain()).map(String::from));
            if let Some(icon) = icon {
                config.icon = icon;
            }
        }
    }
}

/// Whether a config delivery changes which fields the form has
fn is_structural_change(previous: &CardConfig, next: &CardConfig) -> bool {
    previous.entity != next.entity
        || previous.dynamic_icon != next.dynamic_icon
        || previous.state_color != next.state_color
}

fn coerce_number(key: FieldKey, value: &FieldValue) -> Option<f64> {
    let number = value.as_number();
    if number.is_none() {
        warn!(?key, ?value, "unparseable numeric edit, ignoring");
    }
    number
}

fn set_slot(config: &mut CardConfig, slot: ActionSlot, action: ActionConfig) {
    let target = match slot {
        ActionSlot::Tap => &mut config.tap_action,
        ActionSlot::Hold => &mut config.hold_action,
        ActionSlot::DoubleTap => &mut config.double_tap_action,
    };
    *target = Some(action);
}

/// Fold an action sub-field edit into the slot's descriptor
fn apply_action_field(
    config: &CardConfig,
    slot: ActionSlot,
    field: ActionField,
    value: &FieldValue,
) -> Option<ActionConfig> {
    let current = config
        .action(slot)
        .cloned()
        .unwrap_or_else(|| slot_default(slot));

    match field {
        ActionField::Kind => match value.as_text()? {
            "none" => Some(ActionConfig::None),
            "more-info" => Some(ActionConfig::MoreInfo),
            "toggle" => Some(ActionConfig::Toggle),
            "navigate" => Some(ActionConfig::Navigate {
                navigation_path: String::new(),
            }),
            "call-service" => Some(ActionConfig::CallService {
                service: String::new(),
                service_data: None,
            }),
            other => {
                warn!(kind = %other, "unknown action kind, ignoring");
                None
            }
        },
        ActionField::NavigationPath => match current {
            ActionConfig::Navigate { .. } => Some(ActionConfig::Navigate {
                navigation_path: value.as_text()?.to_string(),
            }),
            _ => None,
        },
        ActionField::Service => match current {
            ActionConfig::CallService { service_data, .. } => Some(ActionConfig::CallService {
                service: value.as_text()?.to_string(),
                service_data,
            }),
            _ => None,
        },
        ActionField::ServiceData => match current {
            ActionConfig::CallService { service, .. } => {
                let raw = value.as_text()?;
                let service_data = if raw.is_empty() {
                    None
                } else {
                    Some(ServiceData::Encoded(raw.to_string()))
                };
                Some(ActionConfig::CallService {
                    service,
                    service_data,
                })
            }
            _ => None,
        },
    }
}
