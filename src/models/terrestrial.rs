//! Statistical clutter loss for terrestrial paths (Section 3.2).
//!
//! Applies to urban and suburban clutter at both ends of the path.

use log::debug;

use super::{check_closed, check_percentage, check_positive, stats::inverse_ccdf, ClutterLoss};
use crate::error::{ClutterError, Warning};

/// Shortest distance in km of the validated range.
const MIN_VALIDATED_DISTANCE_KM: f64 = 0.25;

/// Distance in km whose loss caps the loss at any other distance.
const CAP_DISTANCE_KM: f64 = 2.0;

/// Clutter loss not exceeded for `p` % of locations.
///
/// For a frequency `f_ghz` in GHz, path distance `d_km` in km, and
/// percentage of locations `p` in %, compute the clutter loss in dB. The loss
/// never exceeds its value at 2 km.
///
/// Distances shorter than 0.25 km are extrapolated and flagged as
/// [`Warning::ShortPath`].
pub(crate) fn terrestrial_statistical_model(
    f_ghz: f64,
    d_km: f64,
    p: f64,
) -> Result<ClutterLoss, ClutterError> {
    check_closed(f_ghz, 0.5, 67.0, ClutterError::TerrestrialFrequency)?;
    check_positive(d_km, ClutterError::PathDistance)?;
    check_percentage(p, ClutterError::TerrestrialPercentage)?;

    let warning = if d_km < MIN_VALIDATED_DISTANCE_KM {
        debug!("path distance {d_km} km is below the validated range");
        Some(Warning::ShortPath)
    } else {
        None
    };

    let capped = loss_at_distance(f_ghz, CAP_DISTANCE_KM, p)?;
    let loss_db = loss_at_distance(f_ghz, d_km, p)?;
    if !loss_db.is_finite() {
        debug!("path distance {d_km} km is too short to evaluate");
        return Err(ClutterError::PathDistance);
    }

    Ok(ClutterLoss::with_warning(capped.min(loss_db), warning))
}

/// Uncapped clutter loss at a single distance (equations 3 through 5).
fn loss_at_distance(f_ghz: f64, d_km: f64, p: f64) -> Result<f64, ClutterError> {
    // Equations 4a, 4b: long path component
    const SIGMA_L_DB: f64 = 4.0;
    let l_l_db = -2.0 * f64::log10(10f64.powf(-5.0 * f_ghz.log10() - 12.5) + 10f64.powf(-16.5));

    // Equations 5a, 5b: short path component
    const SIGMA_S_DB: f64 = 6.0;
    let l_s_db = 32.98 + 23.9 * d_km.log10() + 3.0 * f_ghz.log10();

    let weight_l = 10f64.powf(-0.2 * l_l_db);
    let weight_s = 10f64.powf(-0.2 * l_s_db);

    // Equation 3b
    let sigma_cb_db = f64::sqrt(
        (SIGMA_L_DB.powi(2) * weight_l + SIGMA_S_DB.powi(2) * weight_s) / (weight_l + weight_s),
    );

    // Equation 3a
    Ok(-5.0 * (weight_l + weight_s).log10() - sigma_cb_db * inverse_ccdf(p / 100.0)?)
}
