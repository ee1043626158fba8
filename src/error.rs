use thiserror::Error;

pub type LayerResult<T> = Result<T, LayerError>;

#[derive(Debug, Error)]
pub enum LayerError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("invalid config: {0}")]
    InvalidConfig(String),

    #[error("unknown plot type `{0}`")]
    UnknownPlotType(String),

    /// A pipeline stage looked up render state (geometry slot, built scales)
    /// before the stage responsible for it ran. Always a caller ordering bug,
    /// never a data problem.
    #[error("render state missing: {0}")]
    MissingRenderState(&'static str),
}
