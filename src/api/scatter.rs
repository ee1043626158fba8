use crate::api::config::ScatterConfig;
use crate::api::layer::{LayerState, ViewLayer};
use crate::core::Record;
use crate::error::{LayerError, LayerResult};

/// The scatter plot layer: every pipeline stage at its default behavior.
#[derive(Debug)]
pub struct ScatterLayer {
    config: ScatterConfig,
    state: LayerState,
}

impl ScatterLayer {
    pub fn new(config: ScatterConfig) -> LayerResult<Self> {
        if config.x_field.is_empty() || config.y_field.is_empty() {
            return Err(LayerError::InvalidConfig(
                "x_field and y_field must not be empty".to_owned(),
            ));
        }
        Ok(Self {
            config,
            state: LayerState::default(),
        })
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.state.records
    }

    pub fn config_mut(&mut self) -> &mut ScatterConfig {
        &mut self.config
    }
}

impl ViewLayer for ScatterLayer {
    fn config(&self) -> &ScatterConfig {
        &self.config
    }

    fn state(&self) -> &LayerState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut LayerState {
        &mut self.state
    }
}
