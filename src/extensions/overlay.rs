use std::fmt;

use tracing::trace;

use crate::error::LayerResult;
use crate::render::RenderView;

/// Auxiliary drawn element layered over the primary geometry.
///
/// Overlays never store the render surface; every call receives it. Whatever
/// `render` draws must be released again by `destroy`.
pub trait Overlay {
    /// Identifying name used in logs.
    fn name(&self) -> &'static str;

    fn render(&mut self, view: &mut dyn RenderView) -> LayerResult<()>;

    fn destroy(&mut self, view: &mut dyn RenderView);
}

/// Lifecycle slot for one overlay variant.
///
/// A slot is either absent or holds exactly one rendered instance. `sync`
/// always tears the previous instance down before deciding whether a
/// replacement should exist, so two consecutive render passes produce exactly
/// one destroy between the two renders.
#[derive(Default)]
pub struct OverlaySlot {
    current: Option<Box<dyn Overlay>>,
}

impl OverlaySlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_rendered(&self) -> bool {
        self.current.is_some()
    }

    /// Post-render transition: destroy any rendered instance, then construct
    /// and render a replacement when `next` supplies one.
    ///
    /// Construction and render failures propagate; the slot stays absent in
    /// that case and nothing is retried.
    pub fn sync<F>(&mut self, view: &mut dyn RenderView, next: Option<F>) -> LayerResult<()>
    where
        F: FnOnce() -> LayerResult<Box<dyn Overlay>>,
    {
        if let Some(mut previous) = self.current.take() {
            trace!(overlay = previous.name(), "destroying previous overlay");
            previous.destroy(view);
        }
        if let Some(build) = next {
            let mut overlay = build()?;
            trace!(overlay = overlay.name(), "rendering overlay");
            overlay.render(view)?;
            self.current = Some(overlay);
        }
        Ok(())
    }

    /// Teardown on layer destroy. Must run before the layer releases shared
    /// surface resources.
    pub fn teardown(&mut self, view: &mut dyn RenderView) {
        if let Some(mut overlay) = self.current.take() {
            trace!(overlay = overlay.name(), "tearing down overlay");
            overlay.destroy(view);
        }
    }
}

impl fmt::Debug for OverlaySlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OverlaySlot")
            .field("rendered", &self.current.as_ref().map(|overlay| overlay.name()))
            .finish()
    }
}
