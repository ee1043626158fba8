use indexmap::IndexMap;

use crate::api::bubble::{BubbleConfig, BubbleLayer};
use crate::api::config::ScatterConfig;
use crate::api::layer::ViewLayer;
use crate::api::scatter::ScatterLayer;
use crate::error::{LayerError, LayerResult};

/// Builds a layer from its JSON-shaped configuration.
pub type LayerFactory = fn(serde_json::Value) -> LayerResult<Box<dyn ViewLayer>>;

/// Plot-type registry: an explicit table from type name to layer factory.
///
/// Owned by the composing application and populated by explicit calls; no
/// global state, no registration as a side effect of module evaluation.
#[derive(Debug, Default)]
pub struct PlotRegistry {
    factories: IndexMap<String, LayerFactory>,
}

impl PlotRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry preloaded with the point family (`scatter`, `bubble`).
    #[must_use]
    pub fn with_builtins() -> Self {
        let mut factories: IndexMap<String, LayerFactory> = IndexMap::new();
        factories.insert("scatter".to_owned(), scatter_factory);
        factories.insert("bubble".to_owned(), bubble_factory);
        Self { factories }
    }

    /// Registers a plot type under a unique name.
    pub fn register(&mut self, name: &str, factory: LayerFactory) -> LayerResult<()> {
        if name.is_empty() {
            return Err(LayerError::InvalidConfig(
                "plot type name must not be empty".to_owned(),
            ));
        }
        if self.factories.contains_key(name) {
            return Err(LayerError::InvalidConfig(format!(
                "plot type `{name}` is already registered"
            )));
        }
        self.factories.insert(name.to_owned(), factory);
        Ok(())
    }

    /// Unregisters a plot type by name. Returns `true` when removed.
    pub fn unregister(&mut self, name: &str) -> bool {
        self.factories.shift_remove(name).is_some()
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Instantiates a registered plot type from its configuration. The
    /// returned layer holds no view state until its first render.
    pub fn create(
        &self,
        name: &str,
        config: serde_json::Value,
    ) -> LayerResult<Box<dyn ViewLayer>> {
        let factory = self
            .factories
            .get(name)
            .ok_or_else(|| LayerError::UnknownPlotType(name.to_owned()))?;
        factory(config)
    }
}

fn scatter_factory(config: serde_json::Value) -> LayerResult<Box<dyn ViewLayer>> {
    let config: ScatterConfig = serde_json::from_value(config)
        .map_err(|e| LayerError::InvalidConfig(format!("failed to parse scatter config: {e}")))?;
    Ok(Box::new(ScatterLayer::new(config)?))
}

fn bubble_factory(config: serde_json::Value) -> LayerResult<Box<dyn ViewLayer>> {
    let config: BubbleConfig = serde_json::from_value(config)
        .map_err(|e| LayerError::InvalidConfig(format!("failed to parse bubble config: {e}")))?;
    Ok(Box::new(BubbleLayer::new(config)?))
}
