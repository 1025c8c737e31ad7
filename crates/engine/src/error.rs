use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    /// An HSL component outside its accepted range (or not finite).
    #[error("invalid {component}: {value} (expected {range})")]
    InvalidArgument {
        component: &'static str,
        value: f64,
        range: &'static str,
    },
    /// Surface table parse / validation error.
    #[error("surface table error: {0}")]
    Table(String),
    /// Theme document serialization error.
    #[error("render error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, EngineError>;
