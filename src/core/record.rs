use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Raw value of one record field as received from the caller.
///
/// Datasets arrive untyped; axis configuration decides later whether a field
/// is read numerically or categorically.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Number(f64),
    Text(String),
}

impl FieldValue {
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Numeric coercion. `Null` and unparseable text coerce to NaN.
    #[must_use]
    pub fn as_number(&self) -> f64 {
        match self {
            Self::Null => f64::NAN,
            Self::Number(value) => *value,
            Self::Text(text) => text.trim().parse::<f64>().unwrap_or(f64::NAN),
        }
    }

    /// A value is valid on a linear axis iff it is present and its numeric
    /// coercion is not NaN. `Number(0.0)` and `Text("0")` are valid.
    #[must_use]
    pub fn is_valid_number(&self) -> bool {
        !self.is_null() && !self.as_number().is_nan()
    }

    /// Categorical coercion. Numbers format through `Display`, `Null`
    /// coerces to the empty string.
    #[must_use]
    pub fn as_text(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Number(value) => format!("{value}"),
            Self::Text(text) => text.clone(),
        }
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        Self::Number(f64::from(value))
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

/// One dataset row: an insertion-ordered mapping from field name to raw
/// value. Field names are data, not compile-time symbols.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: IndexMap<String, FieldValue>,
}

impl Record {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    #[must_use]
    pub fn contains_field(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, FieldValue> {
        self.fields.iter()
    }
}

impl FromIterator<(String, FieldValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}
