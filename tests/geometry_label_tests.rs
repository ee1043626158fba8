use std::sync::Arc;

use scatter_rs::api::{
    BubbleConfig, BubbleLayer, LabelOptions, ScatterConfig, ScatterLayer, TooltipOptions,
    ViewLayer,
};
use scatter_rs::core::Record;
use scatter_rs::render::{GeomKind, LabelState, NullView, SizeChannel};

fn sample_records() -> Vec<Record> {
    vec![
        Record::new()
            .with_field("height", 1.6)
            .with_field("weight", 55.0)
            .with_field("age", 30.0),
        Record::new()
            .with_field("height", 1.9)
            .with_field("weight", 88.0)
            .with_field("age", 45.0),
    ]
}

fn render_scatter(config: ScatterConfig) -> NullView {
    let mut layer = ScatterLayer::new(config).expect("layer init");
    layer.set_data(sample_records());
    let mut view = NullView::default();
    layer.render(&mut view).expect("render");
    view
}

#[test]
fn geometry_is_a_circle_point_with_position_channel() {
    let view = render_scatter(ScatterConfig::new("height", "weight"));

    let geom = view.last_geom().expect("registered geometry");
    assert_eq!(geom.kind, GeomKind::Point);
    assert_eq!(geom.shape, "circle");
    let position = geom.position.as_ref().expect("position channel");
    assert_eq!(position.x_field, "height");
    assert_eq!(position.y_field, "weight");
    assert_eq!(geom.size, SizeChannel::Fixed(4.0));
}

#[test]
fn tooltip_binding_rides_the_geometry() {
    let view = render_scatter(
        ScatterConfig::new("height", "weight")
            .with_color_field("species")
            .with_tooltip(
                TooltipOptions::default()
                    .with_formatter(Arc::new(|record| format!("{} fields", record.len())))
                    .with_offset(8.0),
            ),
    );

    let geom = view.last_geom().expect("registered geometry");
    let tooltip = geom.tooltip.as_ref().expect("tooltip spec");
    assert_eq!(tooltip.fields, vec!["height", "weight", "species"]);
    assert_eq!(tooltip.offset, Some(8.0));
}

#[test]
fn disabled_tooltip_leaves_geometry_unbound() {
    let view =
        render_scatter(ScatterConfig::new("height", "weight").with_tooltip(TooltipOptions::hidden()));

    let geom = view.last_geom().expect("registered geometry");
    assert!(geom.tooltip.is_none());
}

#[test]
fn hidden_label_disables_the_label_channel() {
    let view =
        render_scatter(ScatterConfig::new("height", "weight").with_label(LabelOptions::hidden()));

    let geom = view.last_geom().expect("registered geometry");
    assert_eq!(geom.label, LabelState::Disabled);
}

#[test]
fn label_fields_default_to_y_field() {
    let view =
        render_scatter(ScatterConfig::new("height", "weight").with_label(LabelOptions::default()));

    let geom = view.last_geom().expect("registered geometry");
    match &geom.label {
        LabelState::Enabled(spec) => assert_eq!(spec.fields, vec!["weight"]),
        other => panic!("expected enabled label, got {other:?}"),
    }
}

#[test]
fn label_field_and_offset_carry_over() {
    let view = render_scatter(
        ScatterConfig::new("height", "weight")
            .with_label(LabelOptions::default().with_field("age").with_offset(6.0)),
    );

    let geom = view.last_geom().expect("registered geometry");
    match &geom.label {
        LabelState::Enabled(spec) => {
            assert_eq!(spec.fields, vec!["age"]);
            assert_eq!(spec.offset, Some(6.0));
        }
        other => panic!("expected enabled label, got {other:?}"),
    }
}

#[test]
fn unconfigured_label_stays_unset() {
    let view = render_scatter(ScatterConfig::new("height", "weight"));

    let geom = view.last_geom().expect("registered geometry");
    assert_eq!(geom.label, LabelState::Unset);
}

#[test]
fn animation_defaults_to_engine_behavior() {
    let view = render_scatter(ScatterConfig::new("height", "weight"));

    assert!(view.last_geom().expect("registered geometry").animate);
}

#[test]
fn explicit_animation_opt_out_forces_flag_off() {
    let view = render_scatter(ScatterConfig::new("height", "weight").with_animation(false));

    assert!(!view.last_geom().expect("registered geometry").animate);
}

#[test]
fn bubble_layer_maps_size_field() {
    let config = BubbleConfig::new("height", "weight", "age").with_size_range(3.0, 24.0);
    let mut layer = BubbleLayer::new(config).expect("layer init");
    layer.set_data(sample_records());
    let mut view = NullView::default();
    layer.render(&mut view).expect("render");

    let geom = view.last_geom().expect("registered geometry");
    assert_eq!(
        geom.size,
        SizeChannel::Field {
            field: "age".to_owned(),
            range: (3.0, 24.0),
        }
    );

    let tooltip = geom.tooltip.as_ref().expect("tooltip spec");
    assert_eq!(tooltip.fields, vec!["height", "weight", "age"]);
}

#[test]
fn bubble_keeps_explicit_tooltip_fields() {
    let mut config = BubbleConfig::new("height", "weight", "age");
    config.base.tooltip = TooltipOptions::default().with_fields(vec!["weight".to_owned()]);
    let mut layer = BubbleLayer::new(config).expect("layer init");
    layer.set_data(sample_records());
    let mut view = NullView::default();
    layer.render(&mut view).expect("render");

    let tooltip = view
        .last_geom()
        .expect("registered geometry")
        .tooltip
        .as_ref()
        .expect("tooltip spec")
        .clone();
    assert_eq!(tooltip.fields, vec!["weight"]);
}

#[test]
fn bubble_rejects_degenerate_size_range() {
    let config = BubbleConfig::new("height", "weight", "age").with_size_range(10.0, 2.0);
    assert!(BubbleLayer::new(config).is_err());
}
