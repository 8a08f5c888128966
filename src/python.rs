//! Python bindings
//!
//! NOTE: this module is the interface between Rust and Python. The models
//! live in the other modules, which do not use `pyo3`.

use numpy::{PyArray1, PyReadonlyArray1, ToPyArray};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::batch;
use crate::error::{return_status_message, ClutterError};
use crate::models::{self, ClutterLoss, ClutterType};

impl From<ClutterError> for PyErr {
    fn from(e: ClutterError) -> Self {
        PyValueError::new_err(e.to_string())
    }
}

/// Clutter categories of the height gain terminal correction model.
#[pyclass(name = "ClutterType", eq, eq_int)]
#[derive(Debug, Clone, Copy, PartialEq)]
enum PyClutterType {
    WaterSea = 1,
    OpenRural = 2,
    Suburban = 3,
    Urban = 4,
    TreesForest = 5,
    DenseUrban = 6,
}

impl From<PyClutterType> for ClutterType {
    fn from(c: PyClutterType) -> Self {
        match c {
            PyClutterType::WaterSea => ClutterType::WaterSea,
            PyClutterType::OpenRural => ClutterType::OpenRural,
            PyClutterType::Suburban => ClutterType::Suburban,
            PyClutterType::Urban => ClutterType::Urban,
            PyClutterType::TreesForest => ClutterType::TreesForest,
            PyClutterType::DenseUrban => ClutterType::DenseUrban,
        }
    }
}

/// Losses for a batch of inputs.
///
/// This is just a container of two numpy arrays, each dimensioned as
/// (`num_points`, ).
#[pyclass(name = "BatchLoss")]
#[derive(Debug)]
struct PyBatchLoss {
    inner: batch::BatchLoss,
}

/// Implement all the "getters" for the Python properties
#[pymethods]
impl PyBatchLoss {
    #[getter]
    fn loss_db<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.inner.loss_db.to_pyarray(py)
    }

    #[getter]
    fn return_code<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<i32>> {
        self.inner.return_code.to_pyarray(py)
    }

    fn __len__(&self) -> usize {
        self.inner.len()
    }
}

/// Flatten a model result into `(loss_db, return_code)`, with a NaN loss for
/// errors.
fn loss_and_code(result: Result<ClutterLoss, ClutterError>) -> (f64, i32) {
    match result {
        Ok(loss) => (loss.loss_db, loss.return_code()),
        Err(e) => (f64::NAN, e.code()),
    }
}

/// Build the worker pool. `None` or 0 lets rayon choose the number of threads.
fn thread_pool(num_threads: Option<usize>) -> PyResult<rayon::ThreadPool> {
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads.unwrap_or(0))
        .build()
        .map_err(|e| PyValueError::new_err(e.to_string()))
}

/// Earth-space and aeronautical statistical clutter loss.
///
/// `f__ghz`: frequency in GHz, `theta__deg`: elevation angle in degrees, `p`:
/// percentage of locations. Returns `(L_ces__db, return_code)`.
#[pyfunction]
#[allow(non_snake_case)]
fn aeronautical_statistical_model(f__ghz: f64, theta__deg: f64, p: f64) -> (f64, i32) {
    loss_and_code(crate::compute_aeronautical_statistical_loss(
        f__ghz, theta__deg, p,
    ))
}

/// Statistical clutter loss for terrestrial paths.
///
/// `f__ghz`: frequency in GHz, `d__km`: path distance in km, `p`: percentage
/// of locations. Returns `(L_ctt__db, return_code)`.
#[pyfunction]
#[allow(non_snake_case)]
fn terrestrial_statistical_model(f__ghz: f64, d__km: f64, p: f64) -> (f64, i32) {
    loss_and_code(crate::compute_terrestrial_statistical_loss(f__ghz, d__km, p))
}

/// Height gain terminal correction.
///
/// `f__ghz`: frequency in GHz, `h__meter`: antenna height in m,
/// `w_s__meter`: street width in m, `R__meter`: representative clutter height
/// in m. Returns `(A_h__db, return_code)`.
#[pyfunction]
#[allow(non_snake_case)]
fn height_gain_terminal_correction_model(
    f__ghz: f64,
    h__meter: f64,
    w_s__meter: f64,
    R__meter: f64,
    clutter_type: PyClutterType,
) -> (f64, i32) {
    loss_and_code(crate::compute_height_gain_terminal_correction(
        f__ghz,
        h__meter,
        w_s__meter,
        R__meter,
        clutter_type.into(),
    ))
}

/// Aeronautical statistical model over numpy arrays of shape (`num_points`, ).
///
/// The number of worker threads is controlled by `num_threads`. `None` or 0
/// lets rayon choose the number of threads.
#[pyfunction]
#[pyo3(signature = (frequency, elevation, percent, num_threads=None))]
fn aeronautical_statistical_model_batch(
    py: Python<'_>,
    frequency: PyReadonlyArray1<'_, f64>,
    elevation: PyReadonlyArray1<'_, f64>,
    percent: PyReadonlyArray1<'_, f64>,
    num_threads: Option<usize>,
) -> PyResult<PyBatchLoss> {
    let pool = thread_pool(num_threads)?;
    let (frequency, elevation, percent) =
        (frequency.as_array(), elevation.as_array(), percent.as_array());

    let inner = py.allow_threads(|| {
        pool.install(|| batch::aeronautical_statistical_loss(frequency, elevation, percent))
    })?;
    Ok(PyBatchLoss { inner })
}

/// Terrestrial statistical model over numpy arrays of shape (`num_points`, ).
///
/// The number of worker threads is controlled by `num_threads`. `None` or 0
/// lets rayon choose the number of threads.
#[pyfunction]
#[pyo3(signature = (frequency, distance, percent, num_threads=None))]
fn terrestrial_statistical_model_batch(
    py: Python<'_>,
    frequency: PyReadonlyArray1<'_, f64>,
    distance: PyReadonlyArray1<'_, f64>,
    percent: PyReadonlyArray1<'_, f64>,
    num_threads: Option<usize>,
) -> PyResult<PyBatchLoss> {
    let pool = thread_pool(num_threads)?;
    let (frequency, distance, percent) =
        (frequency.as_array(), distance.as_array(), percent.as_array());

    let inner = py.allow_threads(|| {
        pool.install(|| batch::terrestrial_statistical_loss(frequency, distance, percent))
    })?;
    Ok(PyBatchLoss { inner })
}

/// Height gain terminal correction over numpy arrays of shape
/// (`num_points`, ).
///
/// `clutter_type` holds the integer clutter type codes (1 to 6). Any other
/// code raises `ValueError`.
///
/// The number of worker threads is controlled by `num_threads`. `None` or 0
/// lets rayon choose the number of threads.
#[pyfunction]
#[pyo3(signature = (frequency, antenna_height, street_width, clutter_height, clutter_type, num_threads=None))]
fn height_gain_terminal_correction_model_batch(
    py: Python<'_>,
    frequency: PyReadonlyArray1<'_, f64>,
    antenna_height: PyReadonlyArray1<'_, f64>,
    street_width: PyReadonlyArray1<'_, f64>,
    clutter_height: PyReadonlyArray1<'_, f64>,
    clutter_type: PyReadonlyArray1<'_, i32>,
    num_threads: Option<usize>,
) -> PyResult<PyBatchLoss> {
    let clutter_type = clutter_type
        .as_array()
        .iter()
        .map(|&code| ClutterType::try_from(code))
        .collect::<Result<Vec<_>, _>>()?;

    let pool = thread_pool(num_threads)?;
    let (frequency, antenna_height, street_width, clutter_height) = (
        frequency.as_array(),
        antenna_height.as_array(),
        street_width.as_array(),
        clutter_height.as_array(),
    );

    let inner = py.allow_threads(|| {
        pool.install(|| {
            batch::height_gain_terminal_correction(
                frequency,
                antenna_height,
                street_width,
                clutter_height,
                &clutter_type,
            )
        })
    })?;
    Ok(PyBatchLoss { inner })
}

/// Status message for a return code.
#[pyfunction]
fn get_return_status(code: i32) -> String {
    return_status_message(code)
}

/// Default representative clutter height in m for a clutter type.
#[pyfunction]
fn default_representative_clutter_height(clutter_type: PyClutterType) -> f64 {
    ClutterType::from(clutter_type).representative_clutter_height_m()
}

/// A Python module implemented in Rust.
#[pymodule]
fn p2108_clutter(m: &Bound<'_, PyModule>) -> PyResult<()> {
    pyo3_log::init();

    m.add_function(wrap_pyfunction!(aeronautical_statistical_model, m)?)?;
    m.add_function(wrap_pyfunction!(terrestrial_statistical_model, m)?)?;
    m.add_function(wrap_pyfunction!(height_gain_terminal_correction_model, m)?)?;
    m.add_function(wrap_pyfunction!(aeronautical_statistical_model_batch, m)?)?;
    m.add_function(wrap_pyfunction!(terrestrial_statistical_model_batch, m)?)?;
    m.add_function(wrap_pyfunction!(height_gain_terminal_correction_model_batch, m)?)?;
    m.add_function(wrap_pyfunction!(get_return_status, m)?)?;
    m.add_function(wrap_pyfunction!(default_representative_clutter_height, m)?)?;
    m.add("DEFAULT_STREET_WIDTH_M", models::DEFAULT_STREET_WIDTH_M)?;
    m.add_class::<PyClutterType>()?;
    m.add_class::<PyBatchLoss>()?;
    Ok(())
}
