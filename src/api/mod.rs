mod bubble;
mod config;
mod data;
mod layer;
mod registry;
mod scales;
mod scatter;
mod tooltip;

pub use bubble::{BubbleConfig, BubbleLayer};
pub use config::{LabelOptions, ScatterConfig, TooltipOptions};
pub use data::process_records;
pub use layer::{LayerState, ViewLayer};
pub use registry::{LayerFactory, PlotRegistry};
pub use scales::build_scale_spec;
pub use scatter::ScatterLayer;
pub use tooltip::extract_tooltip;
