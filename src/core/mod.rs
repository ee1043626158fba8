pub mod axis;
pub mod record;
pub mod scale_spec;
pub mod viewport;

pub use axis::{AxisKind, AxisSpec};
pub use record::{FieldValue, Record};
pub use scale_spec::{ScaleEntry, ScaleSpec};
pub use viewport::Viewport;
