use std::fmt;

use serde::{Deserialize, Serialize};

use crate::core::AxisSpec;
use crate::error::{LayerError, LayerResult};
use crate::extensions::{QuadrantConfig, TrendlineConfig};
use crate::interaction::InteractionSpec;
use crate::render::{PointStyle, TooltipFormatter};

/// Tooltip options recognized by the point family.
///
/// The formatter is a runtime callback and is skipped by serde; configs
/// loaded from JSON bind one afterwards through `with_formatter`.
#[derive(Clone, Serialize, Deserialize)]
pub struct TooltipOptions {
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Explicit field list, used verbatim when supplied (no merging, no
    /// dedup).
    #[serde(default)]
    pub fields: Option<Vec<String>>,
    #[serde(skip)]
    pub formatter: Option<TooltipFormatter>,
    #[serde(default)]
    pub show_title: bool,
    #[serde(default)]
    pub title_field: Option<String>,
    #[serde(default)]
    pub offset: Option<f64>,
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self {
            visible: true,
            fields: None,
            formatter: None,
            show_title: false,
            title_field: None,
            offset: None,
        }
    }
}

impl TooltipOptions {
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            visible: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_fields(mut self, fields: Vec<String>) -> Self {
        self.fields = Some(fields);
        self
    }

    #[must_use]
    pub fn with_formatter(mut self, formatter: TooltipFormatter) -> Self {
        self.formatter = Some(formatter);
        self
    }

    #[must_use]
    pub fn with_title_field(mut self, field: impl Into<String>) -> Self {
        self.show_title = true;
        self.title_field = Some(field.into());
        self
    }

    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = Some(offset);
        self
    }
}

impl fmt::Debug for TooltipOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TooltipOptions")
            .field("visible", &self.visible)
            .field("fields", &self.fields)
            .field("formatter", &self.formatter.as_ref().map(|_| "<fn>"))
            .field("show_title", &self.show_title)
            .field("title_field", &self.title_field)
            .field("offset", &self.offset)
            .finish()
    }
}

/// Label options recognized by the point family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelOptions {
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Field whose value labels each point; defaults to the y field.
    #[serde(default)]
    pub field: Option<String>,
    #[serde(default)]
    pub offset: Option<f64>,
}

impl Default for LabelOptions {
    fn default() -> Self {
        Self {
            visible: true,
            field: None,
            offset: None,
        }
    }
}

impl LabelOptions {
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            visible: false,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    #[must_use]
    pub fn with_offset(mut self, offset: f64) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// Full option set of the scatter layer.
///
/// Serializable so host applications can persist/load chart setup without
/// inventing their own ad-hoc format; the tooltip formatter callback is the
/// one runtime-only option.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScatterConfig {
    pub x_field: String,
    pub y_field: String,
    #[serde(default)]
    pub x_axis: Option<AxisSpec>,
    #[serde(default)]
    pub y_axis: Option<AxisSpec>,
    #[serde(default)]
    pub color_field: Option<String>,
    #[serde(default = "default_point_size")]
    pub point_size: f64,
    #[serde(default)]
    pub point_style: Option<PointStyle>,
    #[serde(default)]
    pub tooltip: TooltipOptions,
    #[serde(default)]
    pub label: Option<LabelOptions>,
    /// `Some(false)` forces animation off after the engine default applies.
    #[serde(default)]
    pub animation: Option<bool>,
    #[serde(default)]
    pub quadrant: Option<QuadrantConfig>,
    #[serde(default)]
    pub trendline: Option<TrendlineConfig>,
    #[serde(default)]
    pub interactions: Vec<InteractionSpec>,
}

impl ScatterConfig {
    #[must_use]
    pub fn new(x_field: impl Into<String>, y_field: impl Into<String>) -> Self {
        Self {
            x_field: x_field.into(),
            y_field: y_field.into(),
            x_axis: None,
            y_axis: None,
            color_field: None,
            point_size: default_point_size(),
            point_style: None,
            tooltip: TooltipOptions::default(),
            label: None,
            animation: None,
            quadrant: None,
            trendline: None,
            interactions: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_x_axis(mut self, axis: AxisSpec) -> Self {
        self.x_axis = Some(axis);
        self
    }

    #[must_use]
    pub fn with_y_axis(mut self, axis: AxisSpec) -> Self {
        self.y_axis = Some(axis);
        self
    }

    #[must_use]
    pub fn with_color_field(mut self, field: impl Into<String>) -> Self {
        self.color_field = Some(field.into());
        self
    }

    #[must_use]
    pub fn with_point_size(mut self, size: f64) -> Self {
        self.point_size = size;
        self
    }

    #[must_use]
    pub fn with_point_style(mut self, style: PointStyle) -> Self {
        self.point_style = Some(style);
        self
    }

    #[must_use]
    pub fn with_tooltip(mut self, tooltip: TooltipOptions) -> Self {
        self.tooltip = tooltip;
        self
    }

    #[must_use]
    pub fn with_label(mut self, label: LabelOptions) -> Self {
        self.label = Some(label);
        self
    }

    #[must_use]
    pub fn with_animation(mut self, animation: bool) -> Self {
        self.animation = Some(animation);
        self
    }

    #[must_use]
    pub fn with_quadrant(mut self, quadrant: QuadrantConfig) -> Self {
        self.quadrant = Some(quadrant);
        self
    }

    #[must_use]
    pub fn with_trendline(mut self, trendline: TrendlineConfig) -> Self {
        self.trendline = Some(trendline);
        self
    }

    #[must_use]
    pub fn with_interaction(mut self, interaction: InteractionSpec) -> Self {
        self.interactions.push(interaction);
        self
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> LayerResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| LayerError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    pub fn from_json_str(input: &str) -> LayerResult<Self> {
        serde_json::from_str(input)
            .map_err(|e| LayerError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

fn default_true() -> bool {
    true
}

fn default_point_size() -> f64 {
    4.0
}
