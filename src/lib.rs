//! ITU-R P.2108 clutter loss
//!
//! Three independent models of the additional loss caused by clutter
//! (buildings, vegetation) near a terminal:
//!
//! - [`compute_height_gain_terminal_correction`]: Section 3.1
//! - [`compute_terrestrial_statistical_loss`]: Section 3.2
//! - [`compute_aeronautical_statistical_loss`]: Section 3.3
//!
//! Every function returns a [`ClutterLoss`], which pairs the loss with a
//! [`Status`], or a [`ClutterError`] when no meaningful value exists. The
//! models are pure functions and are safe to call from any thread.
//!
//! The [`batch`] module evaluates the models over arrays. With the `python`
//! feature, the crate also builds a Python extension module; the bindings
//! only live in `python.rs` and the rest of the crate does not use `pyo3`.

pub mod batch;
pub(crate) mod error;
pub(crate) mod models;
#[cfg(feature = "python")]
mod python;

use log::{debug, trace};

pub use error::{return_status_message, ClutterError, Warning};
pub use models::{inverse_ccdf, ClutterLoss, ClutterType, Status, DEFAULT_STREET_WIDTH_M};

/// Log the outcome of a model call.
fn traced(
    model: &str,
    result: Result<ClutterLoss, ClutterError>,
) -> Result<ClutterLoss, ClutterError> {
    match &result {
        Ok(loss) => trace!("{model}: {:.4} dB ({:?})", loss.loss_db, loss.status),
        Err(e) => debug!("{model}: rejected inputs, {e}"),
    }
    result
}

/// Earth-space and aeronautical statistical clutter loss.
///
/// `frequency_ghz`: frequency in GHz, from 10 to 100
///
/// `elevation_deg`: elevation angle in degrees, from 0 to 100. Exactly 0° and
/// angles above 90° give an extrapolated result.
///
/// `percent`: percentage of locations, strictly between 0 and 100
///
/// Returns the clutter loss in dB not exceeded for `percent` % of locations.
pub fn compute_aeronautical_statistical_loss(
    frequency_ghz: f64,
    elevation_deg: f64,
    percent: f64,
) -> Result<ClutterLoss, ClutterError> {
    traced(
        "aeronautical statistical model",
        models::aeronautical_statistical_model(frequency_ghz, elevation_deg, percent),
    )
}

/// Height gain terminal correction.
///
/// `frequency_ghz`: frequency in GHz, from 0.03 to 3
///
/// `antenna_height_m`: antenna height in m, above 0 and below
/// `clutter_height_m`
///
/// `street_width_m`: street width in m, above 0. Use
/// [`DEFAULT_STREET_WIDTH_M`] when unknown.
///
/// `clutter_height_m`: representative clutter height in m, above 0. Use
/// [`ClutterType::representative_clutter_height_m`] when unknown.
///
/// `clutter_type`: clutter category around the terminal
///
/// Returns the median additional loss in dB.
pub fn compute_height_gain_terminal_correction(
    frequency_ghz: f64,
    antenna_height_m: f64,
    street_width_m: f64,
    clutter_height_m: f64,
    clutter_type: ClutterType,
) -> Result<ClutterLoss, ClutterError> {
    traced(
        "height gain terminal correction model",
        models::height_gain_terminal_correction_model(
            frequency_ghz,
            antenna_height_m,
            street_width_m,
            clutter_height_m,
            clutter_type,
        ),
    )
}

/// Statistical clutter loss for terrestrial paths.
///
/// `frequency_ghz`: frequency in GHz, from 0.5 to 67
///
/// `distance_km`: path distance in km, above 0. Distances below 0.25 km give
/// an extrapolated result.
///
/// `percent`: percentage of locations, strictly between 0 and 100
///
/// Returns the clutter loss in dB not exceeded for `percent` % of locations.
pub fn compute_terrestrial_statistical_loss(
    frequency_ghz: f64,
    distance_km: f64,
    percent: f64,
) -> Result<ClutterLoss, ClutterError> {
    traced(
        "terrestrial statistical model",
        models::terrestrial_statistical_model(frequency_ghz, distance_km, percent),
    )
}
