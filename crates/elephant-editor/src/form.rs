//! The editor's retained form model
//!
//! Each configurable field is a [`FormField`]: a polymorphic form control
//! (entity picker, text field, slider, switch, ...) holding its current
//! value. The host binds real UI widgets to these descriptions; the
//! editor only decides which fields exist, what they show, and which are
//! visible.
//!
//! Field identity is stable across value syncs. Conditional action
//! sub-fields (navigation path, service id, service data) stay in the map
//! and toggle their `visible` flag instead of being created and destroyed,
//! so the host never loses an input's edit focus mid-keystroke.

use elephant_core::{ActionConfig, ActionSlot, CardConfig};
use indexmap::IndexMap;

/// Identifies one form field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKey {
    Entity,
    Name,
    Unit,
    Icon,
    BackgroundColor,
    TextColor,
    IconColor,
    BlurAmount,
    Transparency,
    StateColor,
    DynamicIcon,
    Action(ActionSlot, ActionField),
}

/// Sub-fields of one action descriptor's form section
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionField {
    Kind,
    NavigationPath,
    Service,
    ServiceData,
}

/// The kind of host control a field binds to
#[derive(Debug, Clone, PartialEq)]
pub enum ControlKind {
    EntityPicker,
    TextField,
    IconPicker,
    ColorPicker,
    Slider { min: f64, max: f64, step: f64 },
    Switch,
    Select { options: &'static [&'static str] },
}

/// A form control's current value
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    Bool(bool),
}

impl FieldValue {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric view, parsing the text form the way a number input does
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Text(s) => s.trim().parse().ok(),
            Self::Bool(_) => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

/// One field of the form
#[derive(Debug, Clone, PartialEq)]
pub struct FormField {
    pub label: &'static str,
    pub control: ControlKind,
    pub value: FieldValue,
    pub visible: bool,
}

/// Choices offered by an action kind selector
pub const ACTION_KINDS: &[&str] = &["none", "more-info", "toggle", "navigate", "call-service"];

/// Color input placeholder when no color is configured
const UNSET_COLOR_VALUE: &str = "#ffffff";

/// The action an unconfigured slot shows in the editor
pub fn slot_default(slot: ActionSlot) -> ActionConfig {
    match slot {
        ActionSlot::Tap => ActionConfig::MoreInfo,
        ActionSlot::Hold | ActionSlot::DoubleTap => ActionConfig::None,
    }
}

/// The selector value for an action kind
pub fn action_kind(action: &ActionConfig) -> &'static str {
    match action {
        ActionConfig::None => "none",
        ActionConfig::MoreInfo => "more-info",
        ActionConfig::Toggle => "toggle",
        ActionConfig::Navigate { .. } => "navigate",
        ActionConfig::CallService { .. } => "call-service",
    }
}

/// The editor form, in layout order
#[derive(Debug, Clone, PartialEq)]
pub struct Form {
    fields: IndexMap<FieldKey, FormField>,
}

impl Form {
    /// Build the form structure for a configuration
    ///
    /// Structure depends on the structural fields only: the icon picker is
    /// omitted in dynamic-icon mode, the icon color picker is omitted when
    /// state-based coloring is on. Everything else is a value.
    pub fn build(config: &CardConfig) -> Self {
        let mut fields = IndexMap::new();

        let mut add = |key, label, control| {
            fields.insert(
                key,
                FormField {
                    label,
                    control,
                    value: FieldValue::Text(String::new()),
                    visible: true,
                },
            );
        };

        add(FieldKey::Entity, "Entity", ControlKind::EntityPicker);
        add(FieldKey::Name, "Friendly Name", ControlKind::TextField);
        add(FieldKey::Unit, "Friendly Unit", ControlKind::TextField);
        if !config.dynamic_icon {
            add(FieldKey::Icon, "Icon", ControlKind::IconPicker);
        }
        add(FieldKey::BackgroundColor, "Background", ControlKind::ColorPicker);
        add(FieldKey::TextColor, "Text", ControlKind::ColorPicker);
        if !config.state_color {
            add(FieldKey::IconColor, "Icon", ControlKind::ColorPicker);
        }
        add(
            FieldKey::BlurAmount,
            "Blur",
            ControlKind::Slider {
                min: 0.0,
                max: 30.0,
                step: 1.0,
            },
        );
        add(
            FieldKey::Transparency,
            "Transparency",
            ControlKind::Slider {
                min: 0.0,
                max: 1.0,
                step: 0.05,
            },
        );
        add(
            FieldKey::StateColor,
            "Enable State-Based Icon Coloring",
            ControlKind::Switch,
        );
        add(
            FieldKey::DynamicIcon,
            "Resolve Icon From Live State",
            ControlKind::Switch,
        );

        for (slot, label) in [
            (ActionSlot::Tap, "Tap Action"),
            (ActionSlot::Hold, "Hold Action"),
            (ActionSlot::DoubleTap, "Double Tap Action"),
        ] {
            add(
                FieldKey::Action(slot, ActionField::Kind),
                label,
                ControlKind::Select {
                    options: ACTION_KINDS,
                },
            );
            add(
                FieldKey::Action(slot, ActionField::NavigationPath),
                "Navigation Path",
                ControlKind::TextField,
            );
            add(
                FieldKey::Action(slot, ActionField::Service),
                "Service",
                ControlKind::TextField,
            );
            add(
                FieldKey::Action(slot, ActionField::ServiceData),
                "Service Data (JSON)",
                ControlKind::TextField,
            );
        }

        let mut form = Self { fields };
        form.sync(config);
        form
    }

    /// Push values and visibility from a configuration into the existing
    /// controls without touching the structure
    pub fn sync(&mut self, config: &CardConfig) {
        self.set(FieldKey::Entity, FieldValue::Text(config.entity.clone()));
        self.set(FieldKey::Name, FieldValue::Text(config.name.clone()));
        self.set(FieldKey::Unit, FieldValue::Text(config.unit.clone()));
        self.set(FieldKey::Icon, FieldValue::Text(config.icon.clone()));
        self.set(
            FieldKey::BackgroundColor,
            FieldValue::Text(color_value(&config.background_color)),
        );
        self.set(
            FieldKey::TextColor,
            FieldValue::Text(color_value(&config.text_color)),
        );
        self.set(
            FieldKey::IconColor,
            FieldValue::Text(color_value(&config.icon_color)),
        );
        self.set(FieldKey::BlurAmount, FieldValue::Number(config.blur_amount));
        self.set(FieldKey::Transparency, FieldValue::Number(config.transparency));
        self.set(FieldKey::StateColor, FieldValue::Bool(config.state_color));
        self.set(FieldKey::DynamicIcon, FieldValue::Bool(config.dynamic_icon));

        for slot in [ActionSlot::Tap, ActionSlot::Hold, ActionSlot::DoubleTap] {
            let action = config
                .action(slot)
                .cloned()
                .unwrap_or_else(|| slot_default(slot));
            self.set(
                FieldKey::Action(slot, ActionField::Kind),
                FieldValue::Text(action_kind(&action).to_string()),
            );

            let (path, service, data) = match &action {
                ActionConfig::Navigate { navigation_path } => {
                    (Some(navigation_path.clone()), None, None)
                }
                ActionConfig::CallService {
                    service,
                    service_data,
                } => {
                    let data = service_data
                        .as_ref()
                        .map(|d| match d {
                            elephant_core::ServiceData::Encoded(raw) => raw.clone(),
                            elephant_core::ServiceData::Object(map) => {
                                serde_json::Value::Object(map.clone()).to_string()
                            }
                        })
                        .unwrap_or_default();
                    (None, Some(service.clone()), Some(data))
                }
                _ => (None, None, None),
            };

            self.set_conditional(
                FieldKey::Action(slot, ActionField::NavigationPath),
                path,
            );
            self.set_conditional(FieldKey::Action(slot, ActionField::Service), service);
            self.set_conditional(FieldKey::Action(slot, ActionField::ServiceData), data);
        }
    }

    fn set(&mut self, key: FieldKey, value: FieldValue) {
        if let Some(field) = self.fields.get_mut(&key) {
            field.value = value;
        }
    }

    /// Set a conditional field's value, hiding it when not applicable
    fn set_conditional(&mut self, key: FieldKey, value: Option<String>) {
        if let Some(field) = self.fields.get_mut(&key) {
            field.visible = value.is_some();
            field.value = FieldValue::Text(value.unwrap_or_default());
        }
    }

    pub fn get(&self, key: FieldKey) -> Option<&FormField> {
        self.fields.get(&key)
    }

    pub fn contains(&self, key: FieldKey) -> bool {
        self.fields.contains_key(&key)
    }

    /// Fields in layout order
    pub fn iter(&self) -> impl Iterator<Item = (&FieldKey, &FormField)> {
        self.fields.iter()
    }

    /// Fields the host should actually show
    pub fn visible_fields(&self) -> impl Iterator<Item = (&FieldKey, &FormField)> {
        self.fields.iter().filter(|(_, f)| f.visible)
    }
}

fn color_value(color: &elephant_core::ColorSetting) -> String {
    color.css().unwrap_or_else(|| UNSET_COLOR_VALUE.to_string())
}
