//! Interaction descriptors and engine-event binding tables.
//!
//! The interaction subsystem itself (timeline playback, brushing) lives in
//! the host engine. This crate only reads the configured descriptors, and of
//! those only the timeline's key field feeds back into scale configuration.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InteractionKind {
    Timeline,
    Brush,
    Slider,
}

/// Sub-configuration of one interaction descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionCfg {
    /// Field the interaction keys records on (timeline playback frames).
    #[serde(default)]
    pub key: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteractionSpec {
    pub kind: InteractionKind,
    #[serde(default)]
    pub cfg: InteractionCfg,
}

impl InteractionSpec {
    #[must_use]
    pub fn new(kind: InteractionKind) -> Self {
        Self {
            kind,
            cfg: InteractionCfg::default(),
        }
    }

    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.cfg.key = Some(key.into());
        self
    }
}

/// Key field of the first configured timeline interaction, if any.
///
/// Only the timeline kind may inject a scale requirement; brush and slider
/// descriptors never reach scale configuration.
#[must_use]
pub fn timeline_key(interactions: &[InteractionSpec]) -> Option<&str> {
    interactions
        .iter()
        .find(|spec| spec.kind == InteractionKind::Timeline)
        .and_then(|spec| spec.cfg.key.as_deref())
}

/// Mapping from engine event names to the layer event names handed to the
/// host's event-parsing glue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventTable {
    entries: IndexMap<String, String>,
}

impl EventTable {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Default binding table for the point family.
    #[must_use]
    pub fn point_defaults() -> Self {
        Self::new()
            .with_binding("point:click", "on_point_click")
            .with_binding("point:dblclick", "on_point_dblclick")
            .with_binding("point:mouseenter", "on_point_mouseenter")
            .with_binding("point:mouseleave", "on_point_mouseleave")
            .with_binding("plot:click", "on_plot_click")
            .with_binding("plot:mousemove", "on_plot_mousemove")
            .with_binding("plot:mouseleave", "on_plot_mouseleave")
            .with_binding("legend:click", "on_legend_click")
    }

    #[must_use]
    pub fn with_binding(
        mut self,
        engine_event: impl Into<String>,
        layer_event: impl Into<String>,
    ) -> Self {
        self.bind(engine_event, layer_event);
        self
    }

    pub fn bind(&mut self, engine_event: impl Into<String>, layer_event: impl Into<String>) {
        self.entries.insert(engine_event.into(), layer_event.into());
    }

    #[must_use]
    pub fn get(&self, engine_event: &str) -> Option<&str> {
        self.entries.get(engine_event).map(String::as_str)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.entries.iter()
    }
}
