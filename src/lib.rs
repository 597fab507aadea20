//! Wall-block placement engine.
//!
//! Resolves block footprints (bounding rectangles and snap faces) and
//! snaps a new block edge-to-edge against blocks already placed,
//! falling back to a coarse grid. JSON entry points mirror the pure
//! functions; the `python` feature exposes them to Python.

pub mod collision;
pub mod error;
pub mod footprint;
pub mod snap;
pub mod types;

pub use error::EngineError;

use types::{BoundsRequest, SnapRequest};

/// Run `snap::snap_placement` on a JSON `SnapRequest` and return the
/// JSON `SnapResult`.
pub fn snap_placement_json(request_json: &str) -> Result<String, EngineError> {
    let req: SnapRequest =
        serde_json::from_str(request_json).map_err(EngineError::InvalidRequest)?;
    let config = req.config();
    if !(config.grid_size.is_finite() && config.grid_size > 0.0) {
        return Err(EngineError::InvalidGridSize(config.grid_size));
    }

    let result = snap::snap_placement(
        req.position,
        req.category,
        req.thickness,
        req.rotation,
        &req.existing_units,
        &config,
    );

    serde_json::to_string(&result).map_err(EngineError::Serialize)
}

/// Run `footprint::compute_bounds` on a JSON `BoundsRequest` and
/// return the JSON `BoundingRect`.
pub fn compute_bounds_json(request_json: &str) -> Result<String, EngineError> {
    let req: BoundsRequest =
        serde_json::from_str(request_json).map_err(EngineError::InvalidRequest)?;
    let dims = req.dimensions.unwrap_or_default();
    let bounds = footprint::compute_bounds(&req.unit, &dims);
    serde_json::to_string(&bounds).map_err(EngineError::Serialize)
}

#[cfg(feature = "python")]
mod python {
    use pyo3::prelude::*;

    fn to_py_err(e: crate::EngineError) -> PyErr {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(e.to_string())
    }

    #[pyfunction]
    fn snap_placement_json(request_json: &str) -> PyResult<String> {
        crate::snap_placement_json(request_json).map_err(to_py_err)
    }

    #[pyfunction]
    fn compute_bounds_json(request_json: &str) -> PyResult<String> {
        crate::compute_bounds_json(request_json).map_err(to_py_err)
    }

    /// Wall-block snapping engine, importable from Python.
    #[pymodule]
    fn wallsnap_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
        m.add_function(wrap_pyfunction!(snap_placement_json, m)?)?;
        m.add_function(wrap_pyfunction!(compute_bounds_json, m)?)?;
        Ok(())
    }
}
