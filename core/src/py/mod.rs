use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::wrap_pyfunction;

use crate::error::FitnessError;
use crate::grading::{grade, Gender};
use crate::session::ExerciseKind;

// ──────────────────────────────────────────────────────────────────────────────
// HJELPERE
// ──────────────────────────────────────────────────────────────────────────────

fn to_py_err(e: FitnessError) -> PyErr {
    PyValueError::new_err(e.to_string())
}

/// Tillater både str og dict/list fra Python; alt annet serialiseres via json.dumps.
fn payload_to_json(py: Python<'_>, payload: &PyAny) -> PyResult<String> {
    if let Ok(s) = payload.extract::<&str>() {
        return Ok(s.to_owned());
    }
    let json_mod = py
        .import("json")
        .map_err(|e| PyValueError::new_err(format!("failed to import json: {e}")))?;
    json_mod
        .call_method1("dumps", (payload,))
        .and_then(|o| o.extract::<String>())
        .map_err(|e| PyValueError::new_err(format!("failed to serialize payload with json.dumps: {e}")))
}

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-FUNKSJONER
// ──────────────────────────────────────────────────────────────────────────────

#[pyfunction]
#[pyo3(signature = (frames_json, request_json, cfg_json=None))]
fn analyze_session_json(frames_json: &str, request_json: &str, cfg_json: Option<&str>) -> PyResult<String> {
    crate::analyze_session::analyze_session_json(frames_json, request_json, cfg_json).map_err(to_py_err)
}

/// Samme som `analyze_session_json`, men tar og returnerer Python-objekter (dict).
#[pyfunction]
fn analyze_session(py: Python<'_>, frames: &PyAny, request: &PyAny) -> PyResult<PyObject> {
    let frames_json = payload_to_json(py, frames)?;
    let request_json = payload_to_json(py, request)?;

    let out = crate::analyze_session::analyze_session_json(&frames_json, &request_json, None)
        .map_err(to_py_err)?;

    // Returnér som dict via json.loads (unngår pyo3 serde-feature)
    let json_mod = py
        .import("json")
        .map_err(|e| PyValueError::new_err(format!("failed to import json: {e}")))?;
    let obj = json_mod
        .call_method1("loads", (out.as_str(),))
        .map_err(|e| PyValueError::new_err(format!("internal JSON parse error via json.loads: {e}")))?;
    Ok(obj.into_py(py))
}

#[pyfunction]
fn grade_level(test_type: &str, score: f64, age: u32, gender: &str) -> PyResult<String> {
    let kind: ExerciseKind = test_type.parse().map_err(to_py_err)?;
    let gender: Gender = gender.parse().map_err(to_py_err)?;
    Ok(grade(kind, score, age, gender).to_string())
}

// ──────────────────────────────────────────────────────────────────────────────
// PyO3-MODUL
// ──────────────────────────────────────────────────────────────────────────────

#[pymodule]
fn fitnesstest_core(_py: Python, m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(analyze_session_json, m)?)?;
    m.add_function(wrap_pyfunction!(analyze_session, m)?)?;
    m.add_function(wrap_pyfunction!(grade_level, m)?)?;
    Ok(())
}
