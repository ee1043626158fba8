use crate::api::TooltipOptions;
use crate::render::{GeomHandle, TooltipSpec};

/// Derives the tooltip binding for the primary geometry.
///
/// Field list defaults to `[x_field, y_field]` unless an explicit list is
/// configured, which is then used verbatim. A configured formatter becomes
/// the tooltip callback and additionally appends the color field to the end
/// of the list, duplicates included. The title only populates when
/// `show_title` is set.
pub fn extract_tooltip(
    geom: &mut GeomHandle,
    options: &TooltipOptions,
    x_field: &str,
    y_field: &str,
    color_field: Option<&str>,
) {
    let mut fields = match &options.fields {
        Some(fields) => fields.clone(),
        None => vec![x_field.to_owned(), y_field.to_owned()],
    };

    let mut formatter = None;
    if let Some(callback) = &options.formatter {
        if let Some(color) = color_field {
            fields.push(color.to_owned());
        }
        formatter = Some(callback.clone());
    }

    let title_field = if options.show_title {
        options.title_field.clone()
    } else {
        None
    };

    geom.tooltip = Some(TooltipSpec {
        fields,
        title_field,
        formatter,
        offset: None,
    });
}
