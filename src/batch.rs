//! Evaluate the clutter models over arrays of inputs.
//!
//! Elements are independent, so they're computed in parallel on the current
//! `rayon` thread pool. Run inside `ThreadPool::install` to choose the number
//! of threads.

use log::info;
use ndarray::{Array1, ArrayView1};
use rayon::prelude::*;

use crate::error::ClutterError;
use crate::models::{
    aeronautical_statistical_model, height_gain_terminal_correction_model,
    terrestrial_statistical_model, ClutterLoss, ClutterType,
};

/// Losses and return codes for a batch of inputs.
///
/// Elements whose inputs are invalid have a `NaN` loss and the error's return
/// code; the rest of the batch is unaffected.
#[derive(Debug, Clone, PartialEq)]
pub struct BatchLoss {
    /// Clutter loss in dB
    pub loss_db: Array1<f64>,
    /// Return code per element (0 for success, a warning code, or an error code)
    pub return_code: Array1<i32>,
}

impl BatchLoss {
    fn from_results(results: Vec<Result<ClutterLoss, ClutterError>>) -> Self {
        let (loss_db, return_code): (Vec<f64>, Vec<i32>) = results
            .into_iter()
            .map(|result| match result {
                Ok(loss) => (loss.loss_db, loss.return_code()),
                Err(e) => (f64::NAN, e.code()),
            })
            .unzip();

        Self {
            loss_db: Array1::from(loss_db),
            return_code: Array1::from(return_code),
        }
    }

    /// Number of elements in the batch.
    pub fn len(&self) -> usize {
        self.loss_db.len()
    }

    /// True if the batch has no elements.
    pub fn is_empty(&self) -> bool {
        self.loss_db.is_empty()
    }
}

/// Ensure every input has `len` elements.
fn check_lengths(len: usize, others: &[usize]) -> Result<(), ClutterError> {
    if others.iter().any(|&other| other != len) {
        return Err(ClutterError::InconsistentInputs);
    }
    Ok(())
}

/// Map `compute` over `0..num_points` in parallel, keeping the input order.
fn evaluate<F>(num_points: usize, compute: F) -> BatchLoss
where
    F: Fn(usize) -> Result<ClutterLoss, ClutterError> + Sync + Send,
{
    let mut results = Vec::new();
    (0..num_points)
        .into_par_iter()
        .map(compute)
        .collect_into_vec(&mut results);
    BatchLoss::from_results(results)
}

/// Aeronautical statistical model over arrays of frequency (GHz), elevation
/// angle (degrees), and percentage of locations (%).
pub fn aeronautical_statistical_loss(
    frequency_ghz: ArrayView1<'_, f64>,
    elevation_deg: ArrayView1<'_, f64>,
    percent: ArrayView1<'_, f64>,
) -> Result<BatchLoss, ClutterError> {
    let num_points = frequency_ghz.len();
    check_lengths(num_points, &[elevation_deg.len(), percent.len()])?;
    info!("Processing aeronautical clutter loss for {num_points} points");

    Ok(evaluate(num_points, |i| {
        aeronautical_statistical_model(frequency_ghz[i], elevation_deg[i], percent[i])
    }))
}

/// Terrestrial statistical model over arrays of frequency (GHz), path distance
/// (km), and percentage of locations (%).
pub fn terrestrial_statistical_loss(
    frequency_ghz: ArrayView1<'_, f64>,
    distance_km: ArrayView1<'_, f64>,
    percent: ArrayView1<'_, f64>,
) -> Result<BatchLoss, ClutterError> {
    let num_points = frequency_ghz.len();
    check_lengths(num_points, &[distance_km.len(), percent.len()])?;
    info!("Processing terrestrial clutter loss for {num_points} points");

    Ok(evaluate(num_points, |i| {
        terrestrial_statistical_model(frequency_ghz[i], distance_km[i], percent[i])
    }))
}

/// Height gain terminal correction over arrays of frequency (GHz), antenna
/// height (m), street width (m), representative clutter height (m), and
/// clutter type.
pub fn height_gain_terminal_correction(
    frequency_ghz: ArrayView1<'_, f64>,
    antenna_height_m: ArrayView1<'_, f64>,
    street_width_m: ArrayView1<'_, f64>,
    clutter_height_m: ArrayView1<'_, f64>,
    clutter_type: &[ClutterType],
) -> Result<BatchLoss, ClutterError> {
    let num_points = frequency_ghz.len();
    check_lengths(
        num_points,
        &[
            antenna_height_m.len(),
            street_width_m.len(),
            clutter_height_m.len(),
            clutter_type.len(),
        ],
    )?;
    info!("Processing height gain terminal correction for {num_points} points");

    Ok(evaluate(num_points, |i| {
        height_gain_terminal_correction_model(
            frequency_ghz[i],
            antenna_height_m[i],
            street_width_m[i],
            clutter_height_m[i],
            clutter_type[i],
        )
    }))
}
