use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("invalid viewport size: width={width}, height={height}")]
    InvalidViewport { width: u32, height: u32 },

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("cannot summarize an empty group")]
    EmptyGroup,

    #[error("linear domain has zero width at {value}")]
    DegenerateDomain { value: f64 },

    #[error("line {line}: column `{column}` is not a finite number: {value:?}")]
    Parse {
        line: u64,
        column: String,
        value: String,
    },

    #[error("missing required column `{0}`")]
    MissingColumn(String),

    #[error("line {line}: record has no `{field}` value")]
    MissingField { line: u64, field: String },

    #[error("record {index}: `{field}` is required by this chart")]
    MissingMeasurement { index: usize, field: &'static str },

    #[error("serialization failed: {0}")]
    Serialization(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
