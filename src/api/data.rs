use tracing::warn;

use crate::core::{AxisKind, FieldValue, Record};

/// Filters and type-casts raw records per axis kind.
///
/// Records whose x or y value is invalid under a linear axis are silently
/// excluded; surviving records get the axis fields cast to the type the axis
/// implies (number for linear, text for categorical). Output records are new
/// values, the input is never mutated.
///
/// When neither axis kind is known the input passes through unchanged.
#[must_use]
pub fn process_records(
    records: &[Record],
    x_field: &str,
    y_field: &str,
    x_kind: Option<AxisKind>,
    y_kind: Option<AxisKind>,
) -> Vec<Record> {
    if x_kind.is_none() && y_kind.is_none() {
        return records.to_vec();
    }

    let original_count = records.len();
    let surviving: Vec<Record> = records
        .iter()
        .filter(|record| {
            axis_admits(record, x_field, x_kind) && axis_admits(record, y_field, y_kind)
        })
        .map(|record| cast_record(record, x_field, y_field, x_kind, y_kind))
        .collect();

    let dropped_count = original_count - surviving.len();
    if dropped_count > 0 {
        warn!(
            original_count,
            dropped_count,
            surviving_count = surviving.len(),
            "dropped records failing linear-axis validation"
        );
    }
    surviving
}

fn axis_admits(record: &Record, field: &str, kind: Option<AxisKind>) -> bool {
    match kind {
        Some(AxisKind::Linear) => record
            .get(field)
            .is_some_and(FieldValue::is_valid_number),
        Some(AxisKind::Categorical) | None => true,
    }
}

fn cast_record(
    record: &Record,
    x_field: &str,
    y_field: &str,
    x_kind: Option<AxisKind>,
    y_kind: Option<AxisKind>,
) -> Record {
    record
        .iter()
        .map(|(name, value)| {
            let cast = if name == x_field {
                cast_value(value, x_kind)
            } else if name == y_field {
                cast_value(value, y_kind)
            } else {
                value.clone()
            };
            (name.clone(), cast)
        })
        .collect()
}

fn cast_value(value: &FieldValue, kind: Option<AxisKind>) -> FieldValue {
    match kind {
        Some(AxisKind::Linear) => FieldValue::Number(value.as_number()),
        Some(AxisKind::Categorical) => FieldValue::Text(value.as_text()),
        None => value.clone(),
    }
}
