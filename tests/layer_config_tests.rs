use scatter_rs::api::{LabelOptions, ScatterConfig, TooltipOptions};
use scatter_rs::core::{AxisKind, AxisSpec, FieldValue, Record};
use scatter_rs::extensions::{QuadrantConfig, TrendlineConfig, TrendlineKind};
use scatter_rs::interaction::{InteractionKind, InteractionSpec};

#[test]
fn config_round_trips_through_json() {
    let config = ScatterConfig::new("gdp", "life_expectancy")
        .with_x_axis(AxisSpec::linear().with_nice(false))
        .with_y_axis(AxisSpec::categorical())
        .with_color_field("continent")
        .with_point_size(6.0)
        .with_label(LabelOptions::default().with_field("country"))
        .with_animation(false)
        .with_quadrant(QuadrantConfig::new(10_000.0, 70.0))
        .with_trendline(TrendlineConfig::new(TrendlineKind::Logarithmic))
        .with_interaction(InteractionSpec::new(InteractionKind::Timeline).with_key("year"));

    let json = config.to_json_pretty().expect("serialize");
    let parsed = ScatterConfig::from_json_str(&json).expect("parse");

    let original = serde_json::to_value(&config).expect("original value");
    let round_tripped = serde_json::to_value(&parsed).expect("parsed value");
    assert_eq!(original, round_tripped);
}

#[test]
fn sparse_json_fills_defaults() {
    let parsed =
        ScatterConfig::from_json_str(r#"{"x_field": "a", "y_field": "b"}"#).expect("parse");

    assert_eq!(parsed.x_field, "a");
    assert_eq!(parsed.y_field, "b");
    assert_eq!(parsed.point_size, 4.0);
    assert!(parsed.tooltip.visible);
    assert!(parsed.x_axis.is_none());
    assert!(parsed.label.is_none());
    assert!(parsed.animation.is_none());
    assert!(parsed.interactions.is_empty());
}

#[test]
fn malformed_json_is_a_config_error() {
    assert!(ScatterConfig::from_json_str("{").is_err());
    assert!(ScatterConfig::from_json_str(r#"{"x_field": "a"}"#).is_err());
}

#[test]
fn axis_defaults_to_linear() {
    let axis = AxisSpec::default();
    assert_eq!(axis.kind, AxisKind::Linear);
    assert!(axis.nice);
    assert!(axis.grid_visible);
    assert!(axis.line_visible);

    let parsed: AxisSpec = serde_json::from_str("{}").expect("empty axis object");
    assert_eq!(parsed.kind, AxisKind::Linear);
}

#[test]
fn tooltip_options_hidden_shortcut() {
    let options = TooltipOptions::hidden();
    assert!(!options.visible);
    assert!(options.fields.is_none());
}

#[test]
fn records_deserialize_from_plain_json_objects() {
    let record: Record =
        serde_json::from_str(r#"{"x": 1.5, "y": "n/a", "note": null}"#).expect("record json");

    assert_eq!(record.get("x"), Some(&FieldValue::Number(1.5)));
    assert_eq!(record.get("y"), Some(&FieldValue::Text("n/a".to_owned())));
    assert_eq!(record.get("note"), Some(&FieldValue::Null));
    assert_eq!(record.len(), 3);
}

#[test]
fn quadrant_config_defaults_are_visible_zero_baselines() {
    let config = QuadrantConfig::default();
    assert!(config.visible);
    assert_eq!(config.x_baseline, 0.0);
    assert_eq!(config.y_baseline, 0.0);
    assert!(config.region_fills.is_empty());

    let parsed: QuadrantConfig = serde_json::from_str("{}").expect("empty quadrant object");
    assert!(parsed.visible);
}

#[test]
fn trendline_config_defaults_to_linear() {
    let parsed: TrendlineConfig = serde_json::from_str("{}").expect("empty trendline object");
    assert!(parsed.visible);
    assert_eq!(parsed.kind, TrendlineKind::Linear);
    assert_eq!(parsed.samples, 64);
}
