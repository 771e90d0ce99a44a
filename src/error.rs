use thiserror::Error;

/// Top-level error type for the archwire path synthesis engine.
#[derive(Debug, Error)]
pub enum ArchwireError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Path(#[from] PathError),

    #[error(transparent)]
    History(#[from] HistoryError),

    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to geometric constructions.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("degenerate plane: the three points are collinear")]
    DegeneratePlane,

    #[error("degenerate linear system: determinant below tolerance")]
    DegenerateSystem,

    #[error("zero-length vector")]
    ZeroVector,
}

/// Errors related to path structure edits.
#[derive(Debug, Error)]
pub enum PathError {
    #[error("operation needs {needed} points, {got} supplied")]
    InsufficientPoints { needed: usize, got: usize },

    #[error("invalid selection: {0}")]
    InvalidSelection(String),
}

/// Errors related to the undo history.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("nothing to undo")]
    EmptyHistory,
}

/// Errors related to engine configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    OutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Convenience type alias for results using [`ArchwireError`].
pub type Result<T> = std::result::Result<T, ArchwireError>;
