//! The retained entity-card widget

use elephant_core::{CardConfig, CardDescriptor, CardRegistry, ConfigError, EntitySnapshot,
    EventSink, StateMap};
use elephant_editor::CardEditor;
use tracing::trace;

use crate::actions::{self, Gesture};
use crate::render::TileView;

/// Registry identifier for this card
pub const CARD_TYPE: &str = "elephant-entity-card";

/// A clickable tile showing one entity's icon, name, and state
///
/// The host drives the card through [`set_config`](EntityCard::set_config)
/// and [`update_states`](EntityCard::update_states) and reads back the
/// resolved [`TileView`]; gestures come in through
/// [`handle_gesture`](EntityCard::handle_gesture) and leave as host events.
#[derive(Debug, Default)]
pub struct EntityCard {
    config: Option<CardConfig>,
    snapshot: Option<EntitySnapshot>,
}

impl EntityCard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Accept a host-delivered configuration
    ///
    /// Fails only when the `entity` key is missing or a field has the
    /// wrong type; the host catches the error and renders it in place of
    /// the card.
    pub fn set_config(&mut self, value: serde_json::Value) -> Result<(), ConfigError> {
        self.config = Some(CardConfig::from_value(value)?);
        Ok(())
    }

    pub fn config(&self) -> Option<&CardConfig> {
        self.config.as_ref()
    }

    /// Take the current states from the host
    ///
    /// Idempotent. When the configured entity is missing from the map the
    /// previous snapshot is kept, so the tile shows its last known state
    /// instead of failing.
    pub fn update_states(&mut self, states: &StateMap) {
        let Some(config) = &self.config else {
            return;
        };
        match states.get(&config.entity) {
            Some(snapshot) => self.snapshot = Some(snapshot.clone()),
            None => trace!(entity = %config.entity, "entity missing from state delivery, keeping stale view"),
        }
    }

    /// The resolved tile, once both config and state have arrived
    pub fn view(&self) -> Option<TileView> {
        let config = self.config.as_ref()?;
        let snapshot = self.snapshot.as_ref()?;
        Some(TileView::resolve(config, snapshot))
    }

    /// Translate a pointer gesture into an outbound action event
    pub fn handle_gesture(&self, gesture: Gesture, sink: &mut dyn EventSink) {
        if let Some(config) = &self.config {
            actions::dispatch(config, gesture, sink);
        }
    }

    /// Rows of dashboard space the card occupies
    pub fn card_size(&self) -> u32 {
        1
    }

    /// Minimal valid configuration for first-time placement
    pub fn stub_config() -> CardConfig {
        CardConfig::stub()
    }

    /// The paired visual editor
    pub fn config_element() -> CardEditor {
        CardEditor::new()
    }

    /// Static registration record for the host's card picker
    pub fn descriptor() -> CardDescriptor {
        CardDescriptor {
            card_type: CARD_TYPE.to_string(),
            name: "Elephant Entity Card".to_string(),
            preview: true,
            description: "Glass-style entity card with actions, blur, and friendly overrides."
                .to_string(),
        }
    }
}

/// Register the card with the host, once
///
/// Safe to call again if the module is loaded twice; the registry refuses
/// the duplicate.
pub fn register_card(registry: &mut CardRegistry) -> bool {
    registry.register(EntityCard::descriptor())
}
