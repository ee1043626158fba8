use scatter_rs::api::process_records;
use scatter_rs::core::{AxisKind, FieldValue, Record};

fn record(x: impl Into<FieldValue>, y: impl Into<FieldValue>) -> Record {
    Record::new().with_field("x", x).with_field("y", y)
}

#[test]
fn passthrough_when_no_axis_kind_is_known() {
    let records = vec![record("n/a", FieldValue::Null), record(1.0, 2.0)];

    let out = process_records(&records, "x", "y", None, None);

    assert_eq!(out, records);
}

#[test]
fn linear_axes_drop_invalid_records() {
    let records = vec![record(1.0, 2.0), record("n/a", 3.0), record(0.0, 0.0)];

    let out = process_records(
        &records,
        "x",
        "y",
        Some(AxisKind::Linear),
        Some(AxisKind::Linear),
    );

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].get("x"), Some(&FieldValue::Number(1.0)));
    assert_eq!(out[0].get("y"), Some(&FieldValue::Number(2.0)));
    assert_eq!(out[1].get("x"), Some(&FieldValue::Number(0.0)));
    assert_eq!(out[1].get("y"), Some(&FieldValue::Number(0.0)));
}

#[test]
fn zero_values_survive_linear_validation() {
    let records = vec![record(0.0, "0"), record("0", 0.0)];

    let out = process_records(
        &records,
        "x",
        "y",
        Some(AxisKind::Linear),
        Some(AxisKind::Linear),
    );

    assert_eq!(out.len(), 2);
    for surviving in &out {
        assert_eq!(surviving.get("x"), Some(&FieldValue::Number(0.0)));
        assert_eq!(surviving.get("y"), Some(&FieldValue::Number(0.0)));
    }
}

#[test]
fn surviving_values_are_cast_per_axis_kind() {
    let records = vec![record("3.5", 2)];

    let out = process_records(
        &records,
        "x",
        "y",
        Some(AxisKind::Linear),
        Some(AxisKind::Categorical),
    );

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].get("x"), Some(&FieldValue::Number(3.5)));
    assert_eq!(out[0].get("y"), Some(&FieldValue::Text("2".to_owned())));
}

#[test]
fn null_and_missing_values_drop_on_linear_axis() {
    let records = vec![
        record(FieldValue::Null, 1.0),
        Record::new().with_field("y", 2.0),
        record(1.0, 1.0),
    ];

    let out = process_records(
        &records,
        "x",
        "y",
        Some(AxisKind::Linear),
        Some(AxisKind::Linear),
    );

    assert_eq!(out.len(), 1);
    assert_eq!(out[0].get("x"), Some(&FieldValue::Number(1.0)));
}

#[test]
fn categorical_axis_never_drops_records() {
    let records = vec![record(FieldValue::Null, 1.0), record("west", 2.0)];

    let out = process_records(
        &records,
        "x",
        "y",
        Some(AxisKind::Categorical),
        Some(AxisKind::Linear),
    );

    assert_eq!(out.len(), 2);
    assert_eq!(out[0].get("x"), Some(&FieldValue::Text(String::new())));
    assert_eq!(out[1].get("x"), Some(&FieldValue::Text("west".to_owned())));
}

#[test]
fn input_records_are_not_mutated() {
    let records = vec![record("3", "4")];
    let snapshot = records.clone();

    let _ = process_records(
        &records,
        "x",
        "y",
        Some(AxisKind::Linear),
        Some(AxisKind::Linear),
    );

    assert_eq!(records, snapshot);
    assert_eq!(records[0].get("x"), Some(&FieldValue::Text("3".to_owned())));
}

#[test]
fn other_fields_pass_through_unchanged() {
    let records = vec![record("1", 2.0).with_field("group", "alpha")];

    let out = process_records(
        &records,
        "x",
        "y",
        Some(AxisKind::Linear),
        Some(AxisKind::Linear),
    );

    assert_eq!(out.len(), 1);
    assert_eq!(
        out[0].get("group"),
        Some(&FieldValue::Text("alpha".to_owned()))
    );
}

#[test]
fn whitespace_text_is_not_a_number() {
    let records = vec![record("   ", 1.0), record("", 2.0)];

    let out = process_records(
        &records,
        "x",
        "y",
        Some(AxisKind::Linear),
        Some(AxisKind::Linear),
    );

    assert!(out.is_empty());
}
