use crate::api::ScatterConfig;
use crate::core::{ScaleEntry, ScaleSpec};
use crate::interaction::timeline_key;
use crate::render::RenderView;

/// Derives the per-field scale specification for one render pass.
///
/// The x and y entries are always seeded first, so a timeline key field that
/// coincides with an axis field extends the existing entry instead of
/// replacing it.
#[must_use]
pub fn build_scale_spec(config: &ScatterConfig, view: &dyn RenderView) -> ScaleSpec {
    let mut scales = ScaleSpec::new();
    scales.insert(config.x_field.clone(), ScaleEntry::default());
    scales.insert(config.y_field.clone(), ScaleEntry::default());

    if let Some(axis) = &config.x_axis {
        if let Some(entry) = scales.get_mut(&config.x_field) {
            view.extract_scale(entry, axis);
        }
    }
    if let Some(axis) = &config.y_axis {
        if let Some(entry) = scales.get_mut(&config.y_field) {
            view.extract_scale(entry, axis);
        }
    }

    if let Some(key) = timeline_key(&config.interactions) {
        scales.entry(key.to_owned()).or_default().is_key = true;
    }

    scales
}
