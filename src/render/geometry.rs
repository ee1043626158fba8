use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::Record;
use crate::render::primitives::Color;

/// Geometry families understood by the engine's factory. The point layer
/// only ever requests [`GeomKind::Point`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeomKind {
    Point,
    Path,
    Interval,
}

/// Slot index of a geometry registered with the engine for one render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeomId(pub(crate) u64);

/// Position encoding: which record fields drive the x and y channels.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionChannel {
    pub x_field: String,
    pub y_field: String,
}

/// Size encoding for the point family.
#[derive(Debug, Clone, PartialEq)]
pub enum SizeChannel {
    /// Every point uses the same radius in pixels.
    Fixed(f64),
    /// Point radius interpolates over the observed domain of `field` into
    /// the `range` pixel interval.
    Field { field: String, range: (f64, f64) },
}

/// Visual style applied to every drawn point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointStyle {
    #[serde(default = "default_point_color")]
    pub color: Color,
    #[serde(default = "default_opacity")]
    pub opacity: f64,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
}

impl Default for PointStyle {
    fn default() -> Self {
        Self {
            color: default_point_color(),
            opacity: default_opacity(),
            stroke_width: default_stroke_width(),
        }
    }
}

fn default_point_color() -> Color {
    Color::rgb(0.35, 0.55, 0.85)
}

fn default_opacity() -> f64 {
    0.85
}

fn default_stroke_width() -> f64 {
    1.0
}

/// Callback producing the tooltip body for one hovered record.
pub type TooltipFormatter = Arc<dyn Fn(&Record) -> String + Send + Sync>;

/// Tooltip binding attached to a geometry, consumed by the engine's tooltip
/// subsystem.
#[derive(Clone)]
pub struct TooltipSpec {
    /// Field names shown in the tooltip body, in order, duplicates kept.
    pub fields: Vec<String>,
    pub title_field: Option<String>,
    pub formatter: Option<TooltipFormatter>,
    pub offset: Option<f64>,
}

impl fmt::Debug for TooltipSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TooltipSpec")
            .field("fields", &self.fields)
            .field("title_field", &self.title_field)
            .field("formatter", &self.formatter.as_ref().map(|_| "<fn>"))
            .field("offset", &self.offset)
            .finish()
    }
}

/// Label binding derived by the label stage.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelSpec {
    pub fields: Vec<String>,
    pub offset: Option<f64>,
}

/// Label channel of a geometry.
///
/// `Unset` leaves the engine default in place; `Disabled` is an explicit
/// opt-out and suppresses label construction entirely.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LabelState {
    #[default]
    Unset,
    Disabled,
    Enabled(LabelSpec),
}

/// The primary drawn primitive for one render pass.
///
/// Created by the engine's geometry factory, annotated by the pipeline, then
/// registered back into the engine's geometry slot. The pipeline owns the
/// handle only between creation and registration.
#[derive(Debug, Clone)]
pub struct GeomHandle {
    pub kind: GeomKind,
    pub shape: String,
    pub position: Option<PositionChannel>,
    pub color_field: Option<String>,
    pub size: SizeChannel,
    pub style: Option<PointStyle>,
    pub tooltip: Option<TooltipSpec>,
    pub label: LabelState,
    /// Engine default is animated; the pipeline's animation stage may force
    /// this off after the fact.
    pub animate: bool,
}

impl GeomHandle {
    #[must_use]
    pub fn new(kind: GeomKind, shape: impl Into<String>) -> Self {
        Self {
            kind,
            shape: shape.into(),
            position: None,
            color_field: None,
            size: SizeChannel::Fixed(1.0),
            style: None,
            tooltip: None,
            label: LabelState::Unset,
            animate: true,
        }
    }
}
