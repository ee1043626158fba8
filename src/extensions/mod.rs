mod overlay;
mod quadrant;
mod trendline;

pub use overlay::{Overlay, OverlaySlot};
pub use quadrant::{GuideLineStyle, Quadrant, QuadrantConfig};
pub use trendline::{Trendline, TrendlineConfig, TrendlineKind, TrendFit, fit_trend};
