use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::{LayerError, LayerResult};
use crate::extensions::Overlay;
use crate::render::{Color, LinePrimitive, RenderView, ShapeId, ShapePrimitive};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendlineKind {
    #[default]
    Linear,
    Quadratic,
    Exponential,
    Logarithmic,
    Power,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrendlineConfig {
    #[serde(default = "default_visible")]
    pub visible: bool,
    #[serde(default)]
    pub kind: TrendlineKind,
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    #[serde(default = "default_color")]
    pub color: Color,
    /// Number of evaluation points across the data's x span.
    #[serde(default = "default_samples")]
    pub samples: usize,
}

impl Default for TrendlineConfig {
    fn default() -> Self {
        Self {
            visible: true,
            kind: TrendlineKind::Linear,
            stroke_width: default_stroke_width(),
            color: default_color(),
            samples: default_samples(),
        }
    }
}

impl TrendlineConfig {
    #[must_use]
    pub fn new(kind: TrendlineKind) -> Self {
        Self {
            kind,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    #[must_use]
    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }
}

fn default_visible() -> bool {
    true
}

fn default_stroke_width() -> f64 {
    2.0
}

fn default_color() -> Color {
    Color::rgb(0.85, 0.45, 0.25)
}

fn default_samples() -> usize {
    64
}

/// Fitted model coefficients.
///
/// Evaluation per kind: linear `a + b*x`, quadratic `a + b*x + c*x^2`,
/// exponential `a * exp(b*x)`, logarithmic `a + b*ln(x)`, power `a * x^b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendFit {
    pub kind: TrendlineKind,
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl TrendFit {
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        match self.kind {
            TrendlineKind::Linear => self.a + self.b * x,
            TrendlineKind::Quadratic => self.a + self.b * x + self.c * x * x,
            TrendlineKind::Exponential => self.a * (self.b * x).exp(),
            TrendlineKind::Logarithmic => {
                if x <= 0.0 {
                    f64::NAN
                } else {
                    self.a + self.b * x.ln()
                }
            }
            TrendlineKind::Power => {
                if x <= 0.0 {
                    f64::NAN
                } else {
                    self.a * x.powf(self.b)
                }
            }
        }
    }
}

/// Least-squares fit over `(x, y)` samples.
///
/// Exponential, logarithmic and power fits run linear regression in log
/// space, so they require positive values on the transformed channels.
pub fn fit_trend(points: &[(f64, f64)], kind: TrendlineKind) -> LayerResult<TrendFit> {
    if points.len() < 2 {
        return Err(LayerError::InvalidData(
            "trend fit requires at least two points".to_owned(),
        ));
    }
    match kind {
        TrendlineKind::Linear => {
            let (slope, intercept) = linear_least_squares(points)?;
            Ok(TrendFit {
                kind,
                a: intercept,
                b: slope,
                c: 0.0,
            })
        }
        TrendlineKind::Quadratic => quadratic_least_squares(points),
        TrendlineKind::Exponential => {
            let transformed = transform_points(points, kind)?;
            let (slope, intercept) = linear_least_squares(&transformed)?;
            Ok(TrendFit {
                kind,
                a: intercept.exp(),
                b: slope,
                c: 0.0,
            })
        }
        TrendlineKind::Logarithmic => {
            let transformed = transform_points(points, kind)?;
            let (slope, intercept) = linear_least_squares(&transformed)?;
            Ok(TrendFit {
                kind,
                a: intercept,
                b: slope,
                c: 0.0,
            })
        }
        TrendlineKind::Power => {
            let transformed = transform_points(points, kind)?;
            let (slope, intercept) = linear_least_squares(&transformed)?;
            Ok(TrendFit {
                kind,
                a: intercept.exp(),
                b: slope,
                c: 0.0,
            })
        }
    }
}

fn transform_points(points: &[(f64, f64)], kind: TrendlineKind) -> LayerResult<Vec<(f64, f64)>> {
    points
        .iter()
        .map(|&(x, y)| match kind {
            TrendlineKind::Exponential => {
                if y <= 0.0 {
                    Err(LayerError::InvalidData(
                        "exponential trend requires positive y values".to_owned(),
                    ))
                } else {
                    Ok((x, y.ln()))
                }
            }
            TrendlineKind::Logarithmic => {
                if x <= 0.0 {
                    Err(LayerError::InvalidData(
                        "logarithmic trend requires positive x values".to_owned(),
                    ))
                } else {
                    Ok((x.ln(), y))
                }
            }
            TrendlineKind::Power => {
                if x <= 0.0 || y <= 0.0 {
                    Err(LayerError::InvalidData(
                        "power trend requires positive x and y values".to_owned(),
                    ))
                } else {
                    Ok((x.ln(), y.ln()))
                }
            }
            _ => Ok((x, y)),
        })
        .collect()
}

fn distinct_x_count(points: &[(f64, f64)]) -> usize {
    let mut xs: Vec<f64> = points.iter().map(|point| point.0).collect();
    xs.sort_by_key(|x| OrderedFloat(*x));
    xs.dedup();
    xs.len()
}

/// Returns `(slope, intercept)`.
fn linear_least_squares(points: &[(f64, f64)]) -> LayerResult<(f64, f64)> {
    if distinct_x_count(points) < 2 {
        return Err(LayerError::InvalidData(
            "trend fit requires at least two distinct x values".to_owned(),
        ));
    }
    let n = points.len() as f64;
    let sum_x: f64 = points.iter().map(|point| point.0).sum();
    let sum_y: f64 = points.iter().map(|point| point.1).sum();
    let sum_xx: f64 = points.iter().map(|point| point.0 * point.0).sum();
    let sum_xy: f64 = points.iter().map(|point| point.0 * point.1).sum();

    let denominator = n * sum_xx - sum_x * sum_x;
    let slope = (n * sum_xy - sum_x * sum_y) / denominator;
    let intercept = (sum_y - slope * sum_x) / n;
    Ok((slope, intercept))
}

fn quadratic_least_squares(points: &[(f64, f64)]) -> LayerResult<TrendFit> {
    if distinct_x_count(points) < 3 {
        return Err(LayerError::InvalidData(
            "quadratic trend fit requires at least three distinct x values".to_owned(),
        ));
    }
    let n = points.len() as f64;
    let sx: f64 = points.iter().map(|p| p.0).sum();
    let sx2: f64 = points.iter().map(|p| p.0.powi(2)).sum();
    let sx3: f64 = points.iter().map(|p| p.0.powi(3)).sum();
    let sx4: f64 = points.iter().map(|p| p.0.powi(4)).sum();
    let sy: f64 = points.iter().map(|p| p.1).sum();
    let sxy: f64 = points.iter().map(|p| p.0 * p.1).sum();
    let sx2y: f64 = points.iter().map(|p| p.0.powi(2) * p.1).sum();

    let det = det3(n, sx, sx2, sx, sx2, sx3, sx2, sx3, sx4);
    if det == 0.0 {
        return Err(LayerError::InvalidData(
            "quadratic trend fit is degenerate for this input".to_owned(),
        ));
    }
    let a = det3(sy, sx, sx2, sxy, sx2, sx3, sx2y, sx3, sx4) / det;
    let b = det3(n, sy, sx2, sx, sxy, sx3, sx2, sx2y, sx4) / det;
    let c = det3(n, sx, sy, sx, sx2, sxy, sx2, sx3, sx2y) / det;
    Ok(TrendFit {
        kind: TrendlineKind::Quadratic,
        a,
        b,
        c,
    })
}

#[allow(clippy::too_many_arguments)]
fn det3(
    m11: f64,
    m12: f64,
    m13: f64,
    m21: f64,
    m22: f64,
    m23: f64,
    m31: f64,
    m32: f64,
    m33: f64,
) -> f64 {
    m11 * (m22 * m33 - m23 * m32) - m12 * (m21 * m33 - m23 * m31) + m13 * (m21 * m32 - m22 * m31)
}

/// Fitted trend line over the primary geometry's validated data.
#[derive(Debug)]
pub struct Trendline {
    config: TrendlineConfig,
    fit: TrendFit,
    x_span: (f64, f64),
    shapes: Vec<ShapeId>,
}

impl Trendline {
    /// Fits the configured model at construction; the layer's records are
    /// never touched again afterwards.
    pub fn from_points(config: TrendlineConfig, points: &[(f64, f64)]) -> LayerResult<Self> {
        let fit = fit_trend(points, config.kind)?;
        let x_min = points
            .iter()
            .map(|point| OrderedFloat(point.0))
            .min()
            .map(|value| value.0)
            .unwrap_or(0.0);
        let x_max = points
            .iter()
            .map(|point| OrderedFloat(point.0))
            .max()
            .map(|value| value.0)
            .unwrap_or(0.0);
        Ok(Self {
            config,
            fit,
            x_span: (x_min, x_max),
            shapes: Vec::new(),
        })
    }

    #[must_use]
    pub fn fit(&self) -> TrendFit {
        self.fit
    }
}

impl Overlay for Trendline {
    fn name(&self) -> &'static str {
        "trendline"
    }

    fn render(&mut self, view: &mut dyn RenderView) -> LayerResult<()> {
        let samples = self.config.samples.max(2);
        let (x_min, x_max) = self.x_span;
        let step = (x_max - x_min) / (samples - 1) as f64;

        let mut previous: Option<(f64, f64)> = None;
        for index in 0..samples {
            let x = x_min + step * index as f64;
            let y = self.fit.evaluate(x);
            if !y.is_finite() {
                previous = None;
                continue;
            }
            let px = view.x_to_pixel(x)?;
            let py = view.y_to_pixel(y)?;
            if let Some((previous_x, previous_y)) = previous {
                let segment = LinePrimitive::new(
                    previous_x,
                    previous_y,
                    px,
                    py,
                    self.config.stroke_width,
                    self.config.color,
                );
                self.shapes.push(view.add_shape(ShapePrimitive::Line(segment))?);
            }
            previous = Some((px, py));
        }
        Ok(())
    }

    fn destroy(&mut self, view: &mut dyn RenderView) {
        for id in self.shapes.drain(..) {
            view.remove_shape(id);
        }
    }
}
