use tracing::debug;

use crate::api::config::{LabelOptions, ScatterConfig};
use crate::api::data::process_records;
use crate::api::scales::build_scale_spec;
use crate::api::tooltip::extract_tooltip;
use crate::core::{AxisKind, Record};
use crate::error::{LayerError, LayerResult};
use crate::extensions::{Overlay, OverlaySlot, Quadrant, Trendline};
use crate::interaction::EventTable;
use crate::render::{
    GeomId, GeomHandle, GeomKind, LabelSpec, LabelState, PositionChannel, RenderView, SizeChannel,
};

/// Mutable per-layer state threaded through the render pipeline.
#[derive(Debug, Default)]
pub struct LayerState {
    /// Dataset as supplied by the caller, untouched.
    pub raw_records: Vec<Record>,
    /// Validated and cast records of the current render pass.
    pub records: Vec<Record>,
    /// Geometry slot registered with the engine, if a pass completed one.
    pub geom: Option<GeomId>,
    pub quadrant: OverlaySlot,
    pub trendline: OverlaySlot,
}

/// The point-family render pipeline.
///
/// `render` fixes the stage order; every stage is a separately overridable
/// method with the behavior of the scatter layer as its default. `coord` and
/// `annotation` are deliberate no-op override points for subtypes. All view
/// parameters are `&mut dyn RenderView`, keeping the trait object safe for
/// registry factories.
pub trait ViewLayer {
    fn config(&self) -> &ScatterConfig;

    fn state(&self) -> &LayerState;

    fn state_mut(&mut self) -> &mut LayerState;

    /// Replaces the layer's dataset. Takes effect on the next render pass.
    fn set_data(&mut self, records: Vec<Record>) {
        debug!(count = records.len(), "set layer data");
        self.state_mut().raw_records = records;
    }

    /// Full render pass in fixed stage order, ending with the overlay
    /// transition.
    fn render(&mut self, view: &mut dyn RenderView) -> LayerResult<()> {
        debug!(
            raw_count = self.state().raw_records.len(),
            "layer render pass"
        );
        self.process_data(view);
        self.scale(view)?;
        self.coord(view);
        self.annotation(view);
        self.add_geometry(view)?;
        self.animation(view)?;
        view.bind_events(self.event_table());
        view.render()?;
        self.after_render(view)?;
        Ok(())
    }

    /// Validates and casts the raw dataset, then registers it with the view.
    fn process_data(&mut self, view: &mut dyn RenderView) {
        let x_field = self.config().x_field.clone();
        let y_field = self.config().y_field.clone();
        let x_kind = self
            .config()
            .x_axis
            .as_ref()
            .map_or_else(AxisKind::default, |axis| axis.kind);
        let y_kind = self
            .config()
            .y_axis
            .as_ref()
            .map_or_else(AxisKind::default, |axis| axis.kind);

        let processed = process_records(
            &self.state().raw_records,
            &x_field,
            &y_field,
            Some(x_kind),
            Some(y_kind),
        );
        view.set_records(processed.clone());
        self.state_mut().records = processed;
    }

    /// Registers scale configuration and delegates to the engine's own
    /// scale-building step.
    fn scale(&mut self, view: &mut dyn RenderView) -> LayerResult<()> {
        let scales = build_scale_spec(self.config(), &*view);
        view.set_scales(scales);
        view.build_scales()
    }

    /// Coordinate-system override point. No-op by default.
    fn coord(&mut self, _view: &mut dyn RenderView) {}

    /// Annotation override point. No-op by default.
    fn annotation(&mut self, _view: &mut dyn RenderView) {}

    /// Builds the primary point geometry, wires tooltip and label, and
    /// registers the handle into the engine's geometry slot.
    fn add_geometry(&mut self, view: &mut dyn RenderView) -> LayerResult<()> {
        let config = self.config().clone();
        let mut geom = view.create_geom(GeomKind::Point, "circle");
        geom.position = Some(PositionChannel {
            x_field: config.x_field.clone(),
            y_field: config.y_field.clone(),
        });
        geom.color_field = config.color_field.clone();
        geom.size = SizeChannel::Fixed(config.point_size);
        geom.style = config.point_style;

        if config.tooltip.visible {
            extract_tooltip(
                &mut geom,
                &config.tooltip,
                &config.x_field,
                &config.y_field,
                config.color_field.as_deref(),
            );
            // Remaining explicit options win over derived ones; the computed
            // field list stays.
            if let Some(tooltip) = geom.tooltip.as_mut() {
                tooltip.offset = config.tooltip.offset;
            }
        }

        if let Some(label) = &config.label {
            self.label(&mut geom, label);
        }

        self.decorate_geom(&mut geom);

        let id = view.register_geom(geom);
        self.state_mut().geom = Some(id);
        Ok(())
    }

    /// Label stage. An explicit `visible: false` disables the geometry's
    /// label outright; otherwise the field list defaults to the y field.
    fn label(&self, geom: &mut GeomHandle, options: &LabelOptions) {
        if !options.visible {
            geom.label = LabelState::Disabled;
            return;
        }
        let fields = match &options.field {
            Some(field) => vec![field.clone()],
            None => vec![self.config().y_field.clone()],
        };
        geom.label = LabelState::Enabled(LabelSpec {
            fields,
            offset: options.offset,
        });
    }

    /// Last-touch hook on the geometry before registration. No-op by
    /// default; the bubble layer maps its size field here.
    fn decorate_geom(&self, _geom: &mut GeomHandle) {}

    /// Animation stage. The engine default stays in place unless the layer
    /// explicitly opts out, in which case the flag is forced off after the
    /// default applied.
    fn animation(&mut self, view: &mut dyn RenderView) -> LayerResult<()> {
        if self.config().animation == Some(false) {
            let id = self
                .state()
                .geom
                .ok_or(LayerError::MissingRenderState("primary geometry"))?;
            view.geom_mut(id)?.animate = false;
        }
        Ok(())
    }

    /// Engine-event binding table. The point-family defaults apply unless a
    /// subtype supplies its own table; supplying replaces, it does not merge.
    fn event_table(&self) -> EventTable {
        EventTable::point_defaults()
    }

    /// Post-render overlay transition: every variant's previous instance is
    /// destroyed first, then visible sub-configurations are rebuilt against
    /// the current geometry and scale state.
    fn after_render(&mut self, view: &mut dyn RenderView) -> LayerResult<()> {
        let quadrant = self.config().quadrant.clone().filter(|cfg| cfg.visible);
        let trendline = self.config().trendline.clone().filter(|cfg| cfg.visible);
        let points = numeric_points(
            &self.state().records,
            &self.config().x_field,
            &self.config().y_field,
        );

        self.state_mut().quadrant.sync(
            view,
            quadrant.map(|cfg| move || Ok(Box::new(Quadrant::new(cfg)) as Box<dyn Overlay>)),
        )?;
        self.state_mut().trendline.sync(
            view,
            trendline.map(|cfg| {
                move || {
                    Trendline::from_points(cfg, &points)
                        .map(|overlay| Box::new(overlay) as Box<dyn Overlay>)
                }
            }),
        )?;
        Ok(())
    }

    /// Explicit layer teardown. Overlays release their engine resources
    /// before the shared surface is cleared.
    fn destroy(&mut self, view: &mut dyn RenderView) {
        let state = self.state_mut();
        state.quadrant.teardown(view);
        state.trendline.teardown(view);
        state.geom = None;
        state.records.clear();
        view.clear();
    }
}

impl std::fmt::Debug for dyn ViewLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("dyn ViewLayer")
            .field("config", self.config())
            .finish()
    }
}

/// Numeric (x, y) pairs of the validated records, for overlay fitting.
fn numeric_points(records: &[Record], x_field: &str, y_field: &str) -> Vec<(f64, f64)> {
    records
        .iter()
        .filter_map(|record| {
            let x = record.get(x_field)?.as_number();
            let y = record.get(y_field)?.as_number();
            (x.is_finite() && y.is_finite()).then_some((x, y))
        })
        .collect()
}
