use serde::{Deserialize, Serialize};

use crate::api::config::ScatterConfig;
use crate::api::layer::{LayerState, ViewLayer};
use crate::error::{LayerError, LayerResult};
use crate::render::{GeomHandle, SizeChannel};

/// Bubble plot options: the scatter option set plus a size encoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BubbleConfig {
    #[serde(flatten)]
    pub base: ScatterConfig,
    /// Field whose observed domain drives the point radius.
    pub size_field: String,
    /// Radius interval in pixels the size field interpolates into.
    #[serde(default = "default_size_range")]
    pub size_range: (f64, f64),
}

impl BubbleConfig {
    #[must_use]
    pub fn new(
        x_field: impl Into<String>,
        y_field: impl Into<String>,
        size_field: impl Into<String>,
    ) -> Self {
        Self {
            base: ScatterConfig::new(x_field, y_field),
            size_field: size_field.into(),
            size_range: default_size_range(),
        }
    }

    #[must_use]
    pub fn with_size_range(mut self, min: f64, max: f64) -> Self {
        self.size_range = (min, max);
        self
    }
}

fn default_size_range() -> (f64, f64) {
    (2.0, 16.0)
}

/// Bubble plot layer: the scatter pipeline with a field-driven size channel.
#[derive(Debug)]
pub struct BubbleLayer {
    config: BubbleConfig,
    state: LayerState,
}

impl BubbleLayer {
    pub fn new(config: BubbleConfig) -> LayerResult<Self> {
        if config.base.x_field.is_empty() || config.base.y_field.is_empty() {
            return Err(LayerError::InvalidConfig(
                "x_field and y_field must not be empty".to_owned(),
            ));
        }
        if config.size_field.is_empty() {
            return Err(LayerError::InvalidConfig(
                "size_field must not be empty".to_owned(),
            ));
        }
        let (min, max) = config.size_range;
        if !min.is_finite() || !max.is_finite() || min <= 0.0 || max < min {
            return Err(LayerError::InvalidConfig(
                "size_range must be finite, positive, and ordered".to_owned(),
            ));
        }
        Ok(Self {
            config,
            state: LayerState::default(),
        })
    }

    pub fn config_mut(&mut self) -> &mut BubbleConfig {
        &mut self.config
    }
}

impl ViewLayer for BubbleLayer {
    fn config(&self) -> &ScatterConfig {
        &self.config.base
    }

    fn state(&self) -> &LayerState {
        &self.state
    }

    fn state_mut(&mut self) -> &mut LayerState {
        &mut self.state
    }

    fn decorate_geom(&self, geom: &mut GeomHandle) {
        geom.size = SizeChannel::Field {
            field: self.config.size_field.clone(),
            range: self.config.size_range,
        };
        // Widen the default tooltip to include the size encoding; explicit
        // field lists stay untouched.
        if self.config.base.tooltip.fields.is_none() {
            if let Some(tooltip) = geom.tooltip.as_mut() {
                let at = tooltip.fields.len().min(2);
                tooltip.fields.insert(at, self.config.size_field.clone());
            }
        }
    }
}
