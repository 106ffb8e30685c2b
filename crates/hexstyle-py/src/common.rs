use hexstyle::EngineError;
use pyo3::exceptions::{PyRuntimeError, PyTimeoutError, PyValueError};
use pyo3::PyErr;

pub fn map_engine_err(err: EngineError) -> PyErr {
    match err {
        EngineError::InvalidInput { .. } => PyValueError::new_err(err.to_string()),
        EngineError::Timeout { .. } => PyTimeoutError::new_err(err.to_string()),
        EngineError::WorkerLost => PyRuntimeError::new_err(err.to_string()),
    }
}
