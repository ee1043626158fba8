mod geometry;
mod null_view;
mod primitives;

pub use geometry::{
    GeomHandle, GeomId, GeomKind, LabelSpec, LabelState, PointStyle, PositionChannel, SizeChannel,
    TooltipFormatter, TooltipSpec,
};
pub use null_view::NullView;
pub use primitives::{
    Color, LinePrimitive, LineStrokeStyle, RectPrimitive, ShapeId, ShapePrimitive, TextHAlign,
    TextPrimitive,
};

use crate::core::{AxisSpec, Record, ScaleEntry, ScaleSpec, Viewport};
use crate::error::LayerResult;
use crate::interaction::EventTable;

/// Contract implemented by the host plotting engine's view.
///
/// The composition pipeline registers data, scales, geometry and event
/// bindings here and triggers the engine's own render; overlays additionally
/// draw removable shapes through it. Implementations own everything across
/// render passes; the pipeline never caches view state.
pub trait RenderView {
    fn viewport(&self) -> Viewport;

    /// Replaces the dataset backing the next render.
    fn set_records(&mut self, records: Vec<Record>);

    /// Registers the per-field scale configuration slot.
    fn set_scales(&mut self, scales: ScaleSpec);

    /// Runs the engine's own scale-building step over the registered slot.
    fn build_scales(&mut self) -> LayerResult<()>;

    /// Geometry factory. Engines may specialize the returned handle.
    fn create_geom(&mut self, kind: GeomKind, shape: &str) -> GeomHandle {
        GeomHandle::new(kind, shape)
    }

    /// Registers an annotated geometry into the engine's geometry slot.
    fn register_geom(&mut self, geom: GeomHandle) -> GeomId;

    /// Post-registration access to a geometry slot. Missing slots are an
    /// orchestration-order bug and must error, not panic.
    fn geom_mut(&mut self, id: GeomId) -> LayerResult<&mut GeomHandle>;

    /// Replaces the engine-event binding table.
    fn bind_events(&mut self, table: EventTable);

    /// Engine's own render step.
    fn render(&mut self) -> LayerResult<()>;

    /// Maps an x-channel data value to a horizontal pixel offset. Errors
    /// until scales are built.
    fn x_to_pixel(&self, value: f64) -> LayerResult<f64>;

    /// Maps a y-channel data value to a vertical pixel offset (top of the
    /// viewport is the domain maximum). Errors until scales are built.
    fn y_to_pixel(&self, value: f64) -> LayerResult<f64>;

    /// Draws one overlay shape and returns its removable resource id.
    fn add_shape(&mut self, shape: ShapePrimitive) -> LayerResult<ShapeId>;

    /// Removes a previously drawn shape. Unknown ids return `false`; removal
    /// must be idempotent at this seam.
    fn remove_shape(&mut self, id: ShapeId) -> bool;

    /// Releases all surface resources held for this layer.
    fn clear(&mut self);

    /// Merges engine-scale hints from an axis configuration into one scale
    /// entry. Engines with richer hint vocabularies may override.
    fn extract_scale(&self, entry: &mut ScaleEntry, axis: &AxisSpec) {
        entry.kind = Some(axis.kind);
        entry.nice = Some(axis.nice);
        entry.tick_count = axis.tick_count;
    }
}
