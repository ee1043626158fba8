use serde::{Deserialize, Serialize};

use crate::error::{LayerError, LayerResult};
use crate::extensions::Overlay;
use crate::render::{
    Color, LinePrimitive, LineStrokeStyle, RectPrimitive, RenderView, ShapeId, ShapePrimitive,
    TextHAlign, TextPrimitive,
};

const LABEL_FONT_PX: f64 = 12.0;

/// Stroke style of one guide line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GuideLineStyle {
    #[serde(default = "default_guide_stroke_width")]
    pub stroke_width: f64,
    #[serde(default = "default_guide_color")]
    pub color: Color,
    #[serde(default)]
    pub stroke: LineStrokeStyle,
}

impl Default for GuideLineStyle {
    fn default() -> Self {
        Self {
            stroke_width: default_guide_stroke_width(),
            color: default_guide_color(),
            stroke: LineStrokeStyle::Solid,
        }
    }
}

fn default_guide_stroke_width() -> f64 {
    1.0
}

fn default_visible() -> bool {
    true
}

fn default_guide_color() -> Color {
    Color::rgb(0.6, 0.6, 0.6)
}

/// Quadrant partition configuration.
///
/// Two baselines split the plot into four regions, ordered NE, NW, SW, SE.
/// `region_fills` is cycled over that order; `labels` follows it too and
/// entries beyond the fourth are ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuadrantConfig {
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub x_baseline: f64,
    #[serde(default)]
    pub y_baseline: f64,
    #[serde(default)]
    pub line_style: GuideLineStyle,
    #[serde(default)]
    pub region_fills: Vec<Color>,
    #[serde(default)]
    pub labels: Vec<String>,
}

impl Default for QuadrantConfig {
    fn default() -> Self {
        Self {
            visible: true,
            x_baseline: 0.0,
            y_baseline: 0.0,
            line_style: GuideLineStyle::default(),
            region_fills: Vec::new(),
            labels: Vec::new(),
        }
    }
}

impl QuadrantConfig {
    #[must_use]
    pub fn new(x_baseline: f64, y_baseline: f64) -> Self {
        Self {
            x_baseline,
            y_baseline,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    #[must_use]
    pub fn with_line_style(mut self, style: GuideLineStyle) -> Self {
        self.line_style = style;
        self
    }

    #[must_use]
    pub fn with_region_fills(mut self, fills: Vec<Color>) -> Self {
        self.region_fills = fills;
        self
    }

    #[must_use]
    pub fn with_labels(mut self, labels: Vec<String>) -> Self {
        self.labels = labels;
        self
    }
}

/// Quadrant partition lines over the primary geometry.
#[derive(Debug)]
pub struct Quadrant {
    config: QuadrantConfig,
    shapes: Vec<ShapeId>,
}

impl Quadrant {
    #[must_use]
    pub fn new(config: QuadrantConfig) -> Self {
        Self {
            config,
            shapes: Vec::new(),
        }
    }
}

impl Overlay for Quadrant {
    fn name(&self) -> &'static str {
        "quadrant"
    }

    fn render(&mut self, view: &mut dyn RenderView) -> LayerResult<()> {
        let viewport = view.viewport();
        if !viewport.is_valid() {
            return Err(LayerError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        let width = f64::from(viewport.width);
        let height = f64::from(viewport.height);
        let x_px = view.x_to_pixel(self.config.x_baseline)?;
        let y_px = view.y_to_pixel(self.config.y_baseline)?;

        let regions = quadrant_regions(x_px, y_px, width, height);

        // Region fills go in first so baselines and labels draw above them.
        if !self.config.region_fills.is_empty() {
            for (index, region) in regions.iter().enumerate() {
                if region.width <= 0.0 || region.height <= 0.0 {
                    continue;
                }
                let fill = self.config.region_fills[index % self.config.region_fills.len()];
                let id = view.add_shape(ShapePrimitive::Rect(RectPrimitive::new(
                    region.x,
                    region.y,
                    region.width,
                    region.height,
                    fill,
                )))?;
                self.shapes.push(id);
            }
        }

        let style = self.config.line_style;
        let vertical = LinePrimitive::new(x_px, 0.0, x_px, height, style.stroke_width, style.color)
            .with_stroke(style.stroke);
        let horizontal = LinePrimitive::new(0.0, y_px, width, y_px, style.stroke_width, style.color)
            .with_stroke(style.stroke);
        self.shapes
            .push(view.add_shape(ShapePrimitive::Line(vertical))?);
        self.shapes
            .push(view.add_shape(ShapePrimitive::Line(horizontal))?);

        for (label, region) in self.config.labels.iter().take(4).zip(regions.iter()) {
            if label.is_empty() || region.width <= 0.0 || region.height <= 0.0 {
                continue;
            }
            let text = TextPrimitive::new(
                label.clone(),
                region.x + region.width * 0.5,
                region.y + region.height * 0.5,
                LABEL_FONT_PX,
                style.color,
                TextHAlign::Center,
            );
            self.shapes.push(view.add_shape(ShapePrimitive::Text(text))?);
        }

        Ok(())
    }

    fn destroy(&mut self, view: &mut dyn RenderView) {
        for id in self.shapes.drain(..) {
            view.remove_shape(id);
        }
    }
}

#[derive(Debug, Clone, Copy)]
struct Region {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

/// Regions in NE, NW, SW, SE order. Screen y grows downward, so the
/// northern regions sit above the y-baseline pixel.
fn quadrant_regions(x_px: f64, y_px: f64, width: f64, height: f64) -> [Region; 4] {
    [
        Region {
            x: x_px,
            y: 0.0,
            width: width - x_px,
            height: y_px,
        },
        Region {
            x: 0.0,
            y: 0.0,
            width: x_px,
            height: y_px,
        },
        Region {
            x: 0.0,
            y: y_px,
            width: x_px,
            height: height - y_px,
        },
        Region {
            x: x_px,
            y: y_px,
            width: width - x_px,
            height: height - y_px,
        },
    ]
}
