use nav_path::PathError;
use thiserror::Error;

use crate::RunState;

#[derive(Debug, Error)]
pub enum SimulatorError {
    #[error("simulator must be idle to start, but is {0}")]
    NotIdle(RunState),

    #[error("invalid configuration: {what} = {value}")]
    InvalidConfiguration { what: &'static str, value: f64 },

    #[error("invalid route path: {0}")]
    Path(#[from] PathError),
}

pub type SimulatorResult<T> = Result<T, SimulatorError>;
