use scatter_rs::api::{ScatterConfig, build_scale_spec};
use scatter_rs::core::{AxisKind, AxisSpec};
use scatter_rs::interaction::{InteractionKind, InteractionSpec};
use scatter_rs::render::NullView;

#[test]
fn spec_always_contains_axis_fields() {
    let view = NullView::default();
    let config = ScatterConfig::new("height", "weight");

    let scales = build_scale_spec(&config, &view);

    assert_eq!(scales.len(), 2);
    assert!(scales.contains_key("height"));
    assert!(scales.contains_key("weight"));
}

#[test]
fn axis_hints_merge_into_entries() {
    let view = NullView::default();
    let config = ScatterConfig::new("height", "weight")
        .with_x_axis(AxisSpec::categorical())
        .with_y_axis(AxisSpec::linear().with_nice(false).with_tick_count(5));

    let scales = build_scale_spec(&config, &view);

    let x_entry = scales.get("height").expect("x entry");
    assert_eq!(x_entry.kind, Some(AxisKind::Categorical));
    assert_eq!(x_entry.nice, Some(true));

    let y_entry = scales.get("weight").expect("y entry");
    assert_eq!(y_entry.kind, Some(AxisKind::Linear));
    assert_eq!(y_entry.nice, Some(false));
    assert_eq!(y_entry.tick_count, Some(5));
}

#[test]
fn timeline_key_field_gets_its_own_entry() {
    let view = NullView::default();
    let config = ScatterConfig::new("height", "weight")
        .with_interaction(InteractionSpec::new(InteractionKind::Timeline).with_key("year"));

    let scales = build_scale_spec(&config, &view);

    assert_eq!(scales.len(), 3);
    assert!(scales.get("year").expect("key entry").is_key);
    assert!(!scales.get("height").expect("x entry").is_key);
}

#[test]
fn timeline_key_on_axis_field_extends_existing_entry() {
    let view = NullView::default();
    let config = ScatterConfig::new("year", "weight")
        .with_x_axis(AxisSpec::linear().with_tick_count(10))
        .with_interaction(InteractionSpec::new(InteractionKind::Timeline).with_key("year"));

    let scales = build_scale_spec(&config, &view);

    assert_eq!(scales.len(), 2);
    let entry = scales.get("year").expect("shared entry");
    assert!(entry.is_key);
    assert_eq!(entry.tick_count, Some(10));
}

#[test]
fn only_timeline_interactions_inject_keys() {
    let view = NullView::default();
    let config = ScatterConfig::new("height", "weight")
        .with_interaction(InteractionSpec::new(InteractionKind::Brush).with_key("year"))
        .with_interaction(InteractionSpec::new(InteractionKind::Slider).with_key("month"));

    let scales = build_scale_spec(&config, &view);

    assert_eq!(scales.len(), 2);
    assert!(scales.values().all(|entry| !entry.is_key));
}

#[test]
fn first_timeline_interaction_wins() {
    let view = NullView::default();
    let config = ScatterConfig::new("height", "weight")
        .with_interaction(InteractionSpec::new(InteractionKind::Timeline).with_key("year"))
        .with_interaction(InteractionSpec::new(InteractionKind::Timeline).with_key("month"));

    let scales = build_scale_spec(&config, &view);

    assert!(scales.get("year").expect("first key").is_key);
    assert!(!scales.contains_key("month"));
}

#[test]
fn timeline_without_key_field_adds_nothing() {
    let view = NullView::default();
    let config = ScatterConfig::new("height", "weight")
        .with_interaction(InteractionSpec::new(InteractionKind::Timeline));

    let scales = build_scale_spec(&config, &view);

    assert_eq!(scales.len(), 2);
    assert!(scales.values().all(|entry| !entry.is_key));
}
