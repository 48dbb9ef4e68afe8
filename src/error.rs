use thiserror::Error;

/// Top-level error type for superformula curve operations.
#[derive(Debug, Error)]
pub enum SuperformulaError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Errors related to curve sampling and queries.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Errors related to document rendering.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid document parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`SuperformulaError`].
pub type Result<T> = std::result::Result<T, SuperformulaError>;
