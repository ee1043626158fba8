use indexmap::IndexMap;
use ordered_float::OrderedFloat;

use crate::core::{Record, ScaleSpec, Viewport};
use crate::error::{LayerError, LayerResult};
use crate::interaction::EventTable;
use crate::render::{GeomHandle, GeomId, RenderView, ShapeId, ShapePrimitive};

/// Headless engine view used by tests and server-side composition.
///
/// It records everything the pipeline registers and still validates overlay
/// shapes, so composition bugs surface before a real backend is introduced.
/// Pixel mapping derives linearly from the observed data domain of the
/// registered position channel.
#[derive(Debug)]
pub struct NullView {
    viewport: Viewport,
    records: Vec<Record>,
    scales: ScaleSpec,
    geoms: Vec<GeomHandle>,
    events: Option<EventTable>,
    shapes: IndexMap<u64, ShapePrimitive>,
    next_shape_id: u64,
    x_domain: Option<(f64, f64)>,
    y_domain: Option<(f64, f64)>,
    /// Trait calls in invocation order, for pipeline-order assertions.
    pub ops: Vec<&'static str>,
    pub render_passes: usize,
    pub shapes_added: usize,
    pub shapes_removed: usize,
    pub clear_count: usize,
}

impl NullView {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            records: Vec::new(),
            scales: ScaleSpec::new(),
            geoms: Vec::new(),
            events: None,
            shapes: IndexMap::new(),
            next_shape_id: 0,
            x_domain: None,
            y_domain: None,
            ops: Vec::new(),
            render_passes: 0,
            shapes_added: 0,
            shapes_removed: 0,
            clear_count: 0,
        }
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn scales(&self) -> &ScaleSpec {
        &self.scales
    }

    #[must_use]
    pub fn geoms(&self) -> &[GeomHandle] {
        &self.geoms
    }

    #[must_use]
    pub fn last_geom(&self) -> Option<&GeomHandle> {
        self.geoms.last()
    }

    #[must_use]
    pub fn bound_events(&self) -> Option<&EventTable> {
        self.events.as_ref()
    }

    #[must_use]
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }

    pub fn shapes(&self) -> impl Iterator<Item = &ShapePrimitive> {
        self.shapes.values()
    }

    fn observed_domain(&self, field: &str) -> Option<(f64, f64)> {
        let values: Vec<OrderedFloat<f64>> = self
            .records
            .iter()
            .filter_map(|record| record.get(field))
            .filter(|value| value.is_valid_number())
            .map(|value| OrderedFloat(value.as_number()))
            .collect();
        let min = values.iter().copied().min()?;
        let max = values.iter().copied().max()?;
        Some((min.0, max.0))
    }

    fn mapped_domain(
        &self,
        domain: Option<(f64, f64)>,
        axis: &'static str,
    ) -> LayerResult<(f64, f64)> {
        let (min, max) = domain.ok_or(LayerError::MissingRenderState(axis))?;
        if !self.viewport.is_valid() {
            return Err(LayerError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if min == max {
            return Err(LayerError::InvalidData(format!(
                "{axis} domain must span a non-zero range"
            )));
        }
        Ok((min, max))
    }
}

impl Default for NullView {
    fn default() -> Self {
        Self::new(Viewport::new(800, 600))
    }
}

impl RenderView for NullView {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn set_records(&mut self, records: Vec<Record>) {
        self.ops.push("set_records");
        self.records = records;
    }

    fn set_scales(&mut self, scales: ScaleSpec) {
        self.ops.push("set_scales");
        self.scales = scales;
    }

    fn build_scales(&mut self) -> LayerResult<()> {
        self.ops.push("build_scales");
        Ok(())
    }

    fn register_geom(&mut self, geom: GeomHandle) -> GeomId {
        self.ops.push("register_geom");
        if let Some(position) = &geom.position {
            self.x_domain = self.observed_domain(&position.x_field);
            self.y_domain = self.observed_domain(&position.y_field);
        }
        self.geoms.push(geom);
        GeomId(self.geoms.len() as u64 - 1)
    }

    fn geom_mut(&mut self, id: GeomId) -> LayerResult<&mut GeomHandle> {
        self.geoms
            .get_mut(usize::try_from(id.0).unwrap_or(usize::MAX))
            .ok_or(LayerError::MissingRenderState("geometry slot"))
    }

    fn bind_events(&mut self, table: EventTable) {
        self.ops.push("bind_events");
        self.events = Some(table);
    }

    fn render(&mut self) -> LayerResult<()> {
        self.ops.push("render");
        self.render_passes += 1;
        Ok(())
    }

    fn x_to_pixel(&self, value: f64) -> LayerResult<f64> {
        let (min, max) = self.mapped_domain(self.x_domain, "x scale")?;
        let normalized = (value - min) / (max - min);
        Ok(normalized * f64::from(self.viewport.width))
    }

    fn y_to_pixel(&self, value: f64) -> LayerResult<f64> {
        let (min, max) = self.mapped_domain(self.y_domain, "y scale")?;
        let normalized = (value - min) / (max - min);
        Ok((1.0 - normalized) * f64::from(self.viewport.height))
    }

    fn add_shape(&mut self, shape: ShapePrimitive) -> LayerResult<ShapeId> {
        shape.validate()?;
        self.ops.push("add_shape");
        let id = self.next_shape_id;
        self.next_shape_id += 1;
        self.shapes.insert(id, shape);
        self.shapes_added += 1;
        Ok(ShapeId(id))
    }

    fn remove_shape(&mut self, id: ShapeId) -> bool {
        let removed = self.shapes.shift_remove(&id.0).is_some();
        if removed {
            self.ops.push("remove_shape");
            self.shapes_removed += 1;
        }
        removed
    }

    fn clear(&mut self) {
        self.ops.push("clear");
        self.clear_count += 1;
        self.records.clear();
        self.scales.clear();
        self.geoms.clear();
        self.events = None;
        self.shapes.clear();
        self.x_domain = None;
        self.y_domain = None;
    }
}
