use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::core::axis::AxisKind;

/// Scale requirements for one data field, built fresh on every render pass.
///
/// Unset hints mean "engine default"; `is_key` marks the field an interaction
/// subsystem keys playback on.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScaleEntry {
    #[serde(default)]
    pub kind: Option<AxisKind>,
    #[serde(default)]
    pub nice: Option<bool>,
    #[serde(default)]
    pub tick_count: Option<usize>,
    #[serde(default)]
    pub is_key: bool,
}

/// Field-name-keyed scale configuration handed to the engine before its own
/// scale-building step runs.
pub type ScaleSpec = IndexMap<String, ScaleEntry>;
