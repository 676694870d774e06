// ─────────────────────────────────────────────────────────────────────
// SCPN Laminate Core — Laminate Python
// © 1998–2026 Miroslav Šotek. All rights reserved.
// Contact: www.anulum.li | protoscience@anulum.li
// ORCID: https://orcid.org/0009-0009-3560-0851
// License: GNU AGPL v3 | Commercial licensing available
// ─────────────────────────────────────────────────────────────────────
//! PyO3 Python bindings for the laminate calculator.
//!
//! A Python dashboard (sliders, plots) calls these on every widget change;
//! all computation and validation stays on the Rust side.

use ndarray::Array1;
use numpy::{IntoPyArray, PyArray1};
use pyo3::exceptions::{PyIOError, PyValueError};
use pyo3::prelude::*;

use laminate_core::evaluate::{evaluate_grammage_method, evaluate_mass_method, Evaluation};
use laminate_core::formulas;
use laminate_core::sweep;
use laminate_types::config::{GrammageMethodConfig, MassMethodConfig, SweepConfig};
use laminate_types::constants::*;
use laminate_types::error::LaminateError;
use laminate_types::records::{FabricSpec, FiberCharge, PanelGeometry, SweepResult};

fn to_py_err(e: LaminateError) -> PyErr {
    match e {
        LaminateError::Io(_) => PyIOError::new_err(e.to_string()),
        other => PyValueError::new_err(other.to_string()),
    }
}

type PyCurve<'py> = (
    Bound<'py, PyArray1<f64>>,
    Bound<'py, PyArray1<f64>>,
    (f64, f64),
);

fn curve_to_py<'py>(py: Python<'py>, sweep: &SweepResult) -> PyCurve<'py> {
    let hl = sweep.highlight();
    (
        Array1::from_vec(sweep.xs()).into_pyarray(py),
        Array1::from_vec(sweep.thicknesses()).into_pyarray(py),
        (hl.x, hl.thickness_mm),
    )
}

// ─── Formulas ───

/// Cured thickness [mm] from fiber mass [kg] over an area [m²].
#[pyfunction]
fn thickness_from_mass(
    fiber_mass_kg: f64,
    area_m2: f64,
    vf: f64,
    fiber_density_kgm3: f64,
) -> PyResult<f64> {
    formulas::thickness_from_mass(fiber_mass_kg, area_m2, vf, fiber_density_kgm3)
        .map_err(to_py_err)
}

/// Resin mass [g] needed for a fiber mass [kg] at volume fraction `vf`.
#[pyfunction]
fn resin_mass(
    fiber_mass_kg: f64,
    vf: f64,
    fiber_density_kgm3: f64,
    matrix_density_kgm3: f64,
) -> PyResult<f64> {
    formulas::resin_mass(fiber_mass_kg, vf, fiber_density_kgm3, matrix_density_kgm3)
        .map_err(to_py_err)
}

/// Cured thickness [mm] of `ply_count` plies of grammage [g/m²].
#[pyfunction]
fn thickness_from_grammage(
    grammage_gm2: f64,
    ply_count: u32,
    fiber_density_kgm3: f64,
    vf: f64,
) -> PyResult<f64> {
    formulas::thickness_from_grammage(grammage_gm2, ply_count, fiber_density_kgm3, vf)
        .map_err(to_py_err)
}

// ─── Sweeps ───

/// Thickness curve over V_f. Returns (vf_values, thickness_mm, (vf, thickness)).
#[pyfunction]
#[pyo3(signature = (
    fiber_mass_g, width_mm, length_mm, fiber_density_kgm3, vf,
    vf_min=DEFAULT_VF_SWEEP_MIN, vf_max=DEFAULT_VF_SWEEP_MAX, samples=DEFAULT_VF_SWEEP_SAMPLES
))]
#[allow(clippy::too_many_arguments)]
fn sweep_fiber_volume_fraction<'py>(
    py: Python<'py>,
    fiber_mass_g: f64,
    width_mm: f64,
    length_mm: f64,
    fiber_density_kgm3: f64,
    vf: f64,
    vf_min: f64,
    vf_max: f64,
    samples: usize,
) -> PyResult<PyCurve<'py>> {
    let charge = FiberCharge::new(fiber_mass_g, fiber_density_kgm3).map_err(to_py_err)?;
    let panel = PanelGeometry::new(width_mm, length_mm).map_err(to_py_err)?;
    let config = SweepConfig {
        vf_min,
        vf_max,
        vf_samples: samples,
        ..SweepConfig::default()
    };
    let result =
        sweep::sweep_fiber_volume_fraction(&charge, &panel, vf, &config).map_err(to_py_err)?;
    Ok(curve_to_py(py, &result))
}

/// Thickness curve over ply count 1..=ply_count+lookahead.
#[pyfunction]
#[pyo3(signature = (grammage_gm2, ply_count, fiber_density_kgm3, vf, lookahead=DEFAULT_PLY_LOOKAHEAD))]
fn sweep_ply_count<'py>(
    py: Python<'py>,
    grammage_gm2: f64,
    ply_count: u32,
    fiber_density_kgm3: f64,
    vf: f64,
    lookahead: u32,
) -> PyResult<PyCurve<'py>> {
    let fabric = FabricSpec::new(grammage_gm2, ply_count).map_err(to_py_err)?;
    let result = sweep::sweep_ply_count(&fabric, fiber_density_kgm3, vf, lookahead)
        .map_err(to_py_err)?;
    Ok(curve_to_py(py, &result))
}

// ─── Full evaluation ───

/// Readout, curve and plot hints for one recompute.
#[pyclass]
#[derive(Clone)]
struct PyEvaluation {
    #[pyo3(get)]
    thickness_mm: f64,
    #[pyo3(get)]
    resin_mass_g: Option<f64>,
    #[pyo3(get)]
    thickness_text: String,
    #[pyo3(get)]
    resin_text: Option<String>,
    #[pyo3(get)]
    title: String,
    #[pyo3(get)]
    x_label: String,
    #[pyo3(get)]
    y_label: String,
    #[pyo3(get)]
    x_range: (f64, f64),
    #[pyo3(get)]
    y_range: (f64, f64),
    #[pyo3(get)]
    y_ticks: Vec<f64>,
    #[pyo3(get)]
    x_ticks: Option<Vec<f64>>,
    #[pyo3(get)]
    highlight: (f64, f64),
    #[pyo3(get)]
    highlight_label_position: (f64, f64),
    xs: Vec<f64>,
    ys: Vec<f64>,
}

impl From<Evaluation> for PyEvaluation {
    fn from(e: Evaluation) -> Self {
        let hl = e.sweep.highlight();
        PyEvaluation {
            thickness_mm: e.readout.thickness_mm,
            resin_mass_g: e.readout.resin_mass_g,
            thickness_text: e.readout.thickness_text(),
            resin_text: e.readout.resin_text(),
            y_ticks: e.hints.y_ticks(),
            title: e.hints.title,
            x_label: e.hints.x_label,
            y_label: e.hints.y_label,
            x_range: e.hints.x_range,
            y_range: e.hints.y_range,
            x_ticks: e.hints.x_ticks,
            highlight: (hl.x, hl.thickness_mm),
            highlight_label_position: e.hints.highlight_label_position,
            xs: e.sweep.xs(),
            ys: e.sweep.thicknesses(),
        }
    }
}

#[pymethods]
impl PyEvaluation {
    /// Curve x values as numpy array.
    fn get_x<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        Array1::from_vec(self.xs.clone()).into_pyarray(py)
    }

    /// Curve thickness values [mm] as numpy array.
    fn get_thickness<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        Array1::from_vec(self.ys.clone()).into_pyarray(py)
    }

    fn __repr__(&self) -> String {
        match &self.resin_text {
            Some(resin) => format!("Evaluation(thickness={}, resin={})", self.thickness_text, resin),
            None => format!("Evaluation(thickness={})", self.thickness_text),
        }
    }
}

/// Method 1 recompute from slider values.
#[pyfunction]
#[pyo3(signature = (
    width_mm=DEFAULT_WIDTH_MM, length_mm=DEFAULT_LENGTH_MM, fiber_mass_g=DEFAULT_FIBER_MASS_G,
    vf=DEFAULT_FIBER_VOLUME_FRACTION, fiber_density_kgm3=DEFAULT_FIBER_DENSITY_KGM3,
    matrix_density_kgm3=DEFAULT_MATRIX_DENSITY_KGM3
))]
fn evaluate_mass(
    width_mm: f64,
    length_mm: f64,
    fiber_mass_g: f64,
    vf: f64,
    fiber_density_kgm3: f64,
    matrix_density_kgm3: f64,
) -> PyResult<PyEvaluation> {
    let config = MassMethodConfig {
        width_mm,
        length_mm,
        fiber_mass_g,
        fiber_volume_fraction: vf,
        fiber_density_kgm3,
        matrix_density_kgm3,
    };
    evaluate_mass_method(&config, &SweepConfig::default())
        .map(PyEvaluation::from)
        .map_err(to_py_err)
}

/// Method 2 recompute from slider values.
#[pyfunction]
#[pyo3(signature = (
    grammage_gm2=DEFAULT_GRAMMAGE_GM2, ply_count=DEFAULT_PLY_COUNT,
    fiber_density_kgm3=DEFAULT_FIBER_DENSITY_KGM3, vf=DEFAULT_FIBER_VOLUME_FRACTION
))]
fn evaluate_grammage(
    grammage_gm2: f64,
    ply_count: u32,
    fiber_density_kgm3: f64,
    vf: f64,
) -> PyResult<PyEvaluation> {
    let config = GrammageMethodConfig {
        grammage_gm2,
        ply_count,
        fiber_density_kgm3,
        fiber_volume_fraction: vf,
    };
    evaluate_grammage_method(&config, &SweepConfig::default())
        .map(PyEvaluation::from)
        .map_err(to_py_err)
}

// ─── Module registration ───

/// SCPN Laminate Core — Rust laminate thickness calculator.
#[pymodule]
fn laminate_rs(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyEvaluation>()?;
    m.add_function(wrap_pyfunction!(thickness_from_mass, m)?)?;
    m.add_function(wrap_pyfunction!(resin_mass, m)?)?;
    m.add_function(wrap_pyfunction!(thickness_from_grammage, m)?)?;
    m.add_function(wrap_pyfunction!(sweep_fiber_volume_fraction, m)?)?;
    m.add_function(wrap_pyfunction!(sweep_ply_count, m)?)?;
    m.add_function(wrap_pyfunction!(evaluate_mass, m)?)?;
    m.add_function(wrap_pyfunction!(evaluate_grammage, m)?)?;
    Ok(())
}
