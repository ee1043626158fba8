use serde::{Deserialize, Serialize};

/// Value semantics of one axis role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisKind {
    #[default]
    Linear,
    Categorical,
}

/// Per-axis intent plus rendering hints consumed by the engine's scale step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisSpec {
    #[serde(default)]
    pub kind: AxisKind,
    /// Round the computed domain to friendly tick boundaries.
    #[serde(default = "default_true")]
    pub nice: bool,
    #[serde(default = "default_true")]
    pub grid_visible: bool,
    #[serde(default = "default_true")]
    pub line_visible: bool,
    #[serde(default)]
    pub tick_count: Option<usize>,
}

impl Default for AxisSpec {
    fn default() -> Self {
        Self {
            kind: AxisKind::Linear,
            nice: true,
            grid_visible: true,
            line_visible: true,
            tick_count: None,
        }
    }
}

impl AxisSpec {
    #[must_use]
    pub fn linear() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn categorical() -> Self {
        Self {
            kind: AxisKind::Categorical,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_nice(mut self, nice: bool) -> Self {
        self.nice = nice;
        self
    }

    #[must_use]
    pub fn with_grid_visible(mut self, visible: bool) -> Self {
        self.grid_visible = visible;
        self
    }

    #[must_use]
    pub fn with_line_visible(mut self, visible: bool) -> Self {
        self.line_visible = visible;
        self
    }

    #[must_use]
    pub fn with_tick_count(mut self, count: usize) -> Self {
        self.tick_count = Some(count);
        self
    }
}

fn default_true() -> bool {
    true
}
