// src/sim/error.rs
use crate::math::error::MathError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SimulationError {
    #[error("Invalid configuration for `{parameter}`: {message}")]
    InvalidConfiguration {
        parameter: &'static str,
        message: String,
    },

    #[error("Point generation failed: {0}")]
    Generation(#[from] MathError),

    #[error("SVG export failed: {0}")]
    Export(#[from] std::io::Error),
}

pub type SimulationResult<T> = Result<T, SimulationError>;
