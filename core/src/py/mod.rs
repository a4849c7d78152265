use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::PlanError;

fn to_py_err(e: PlanError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

#[pyfunction]
#[pyo3(signature = (request_json, cfg_json = None))]
fn generate_plan_json(request_json: &str, cfg_json: Option<&str>) -> PyResult<String> {
    crate::generate_plan_json(request_json, cfg_json).map_err(to_py_err)
}

#[pyfunction]
#[pyo3(signature = (request_json, cfg_json = None))]
fn render_report_json(request_json: &str, cfg_json: Option<&str>) -> PyResult<String> {
    crate::render_report_json(request_json, cfg_json).map_err(to_py_err)
}

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-MODUL
// ──────────────────────────────────────────────────────────────────────────────

#[pymodule]
fn cyclegraph_planner(_py: Python, m: &PyModule) -> PyResult<()> {
    // Tabellene sjekkes ved import, ikke ved første kall
    crate::self_check().map_err(to_py_err)?;

    m.add_function(wrap_pyfunction!(generate_plan_json, m)?)?;
    m.add_function(wrap_pyfunction!(render_report_json, m)?)?;
    Ok(())
}
