use std::sync::Arc;

use scatter_rs::api::{TooltipOptions, extract_tooltip};
use scatter_rs::core::Record;
use scatter_rs::render::{GeomHandle, GeomKind, TooltipFormatter};

fn point_geom() -> GeomHandle {
    GeomHandle::new(GeomKind::Point, "circle")
}

fn formatter() -> TooltipFormatter {
    Arc::new(|record: &Record| format!("{} fields", record.len()))
}

#[test]
fn fields_default_to_axis_fields() {
    let mut geom = point_geom();
    let options = TooltipOptions::default();

    extract_tooltip(&mut geom, &options, "height", "weight", None);

    let tooltip = geom.tooltip.expect("tooltip spec");
    assert_eq!(tooltip.fields, vec!["height", "weight"]);
    assert!(tooltip.title_field.is_none());
    assert!(tooltip.formatter.is_none());
}

#[test]
fn explicit_fields_are_used_verbatim() {
    let mut geom = point_geom();
    let options = TooltipOptions::default().with_fields(vec![
        "weight".to_owned(),
        "weight".to_owned(),
        "note".to_owned(),
    ]);

    extract_tooltip(&mut geom, &options, "height", "weight", None);

    let tooltip = geom.tooltip.expect("tooltip spec");
    assert_eq!(tooltip.fields, vec!["weight", "weight", "note"]);
}

#[test]
fn formatter_appends_color_field_last() {
    let mut geom = point_geom();
    let options = TooltipOptions::default().with_formatter(formatter());

    extract_tooltip(&mut geom, &options, "height", "weight", Some("region"));

    let tooltip = geom.tooltip.expect("tooltip spec");
    assert_eq!(tooltip.fields, vec!["height", "weight", "region"]);
    assert!(tooltip.formatter.is_some());
}

#[test]
fn color_append_keeps_duplicates() {
    let mut geom = point_geom();
    let options = TooltipOptions::default()
        .with_fields(vec!["region".to_owned(), "height".to_owned()])
        .with_formatter(formatter());

    extract_tooltip(&mut geom, &options, "height", "weight", Some("region"));

    let tooltip = geom.tooltip.expect("tooltip spec");
    assert_eq!(tooltip.fields, vec!["region", "height", "region"]);
}

#[test]
fn color_field_without_formatter_is_not_appended() {
    let mut geom = point_geom();
    let options = TooltipOptions::default();

    extract_tooltip(&mut geom, &options, "height", "weight", Some("region"));

    let tooltip = geom.tooltip.expect("tooltip spec");
    assert_eq!(tooltip.fields, vec!["height", "weight"]);
}

#[test]
fn title_populates_only_when_shown() {
    let mut geom = point_geom();
    let mut options = TooltipOptions::default().with_title_field("species");

    extract_tooltip(&mut geom, &options, "height", "weight", None);
    let tooltip = geom.tooltip.take().expect("tooltip spec");
    assert_eq!(tooltip.title_field.as_deref(), Some("species"));

    options.show_title = false;
    extract_tooltip(&mut geom, &options, "height", "weight", None);
    let tooltip = geom.tooltip.expect("tooltip spec");
    assert!(tooltip.title_field.is_none());
}
