//! Error type shared by the library
//!
//! Numeric edge cases inside a step (coincident bodies, escaping bodies) are
//! handled as policies and never surface here. Errors only come from
//! rejected control values, malformed scenarios and loading failures.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimulationError {
    /// A control value was rejected (time speed, tail length)
    #[error("invalid value for {name}: {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    /// A scenario body could not be constructed
    #[error("invalid body #{index}: {reason}")]
    InvalidBody { index: usize, reason: String },

    /// Viewport dimensions must be finite and positive
    #[error("invalid viewport {width}x{height}")]
    InvalidViewport { width: f64, height: f64 },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("scenario parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, SimulationError>;
