use thiserror::Error;

pub type PlotResult<T> = Result<T, PlotError>;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("x unit `{xunit}` and y unit `{yunit}` carry different base units")]
    UnitMismatch { xunit: String, yunit: String },

    #[error("no conversion from `{from}` to `{to}`")]
    UnconvertibleUnit { from: String, to: String },

    #[error("unrecognized style character `{character}` at position {position} in `{style}`")]
    StyleParse {
        style: String,
        character: char,
        position: usize,
    },

    #[error("invalid data: {0}")]
    InvalidData(String),
}
