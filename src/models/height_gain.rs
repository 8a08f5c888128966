//! Height gain terminal correction model (Section 3.1).
//!
//! Gives the median loss due to the surroundings of a terminal embedded in
//! clutter. Applies to either end of the path.

use log::debug;

use super::{check_closed, check_positive, ClutterLoss, ClutterType};
use crate::error::ClutterError;

/// Clutter loss for a terminal below the representative clutter height.
///
/// For a frequency `f_ghz` in GHz, antenna height `h_m` in m, street width
/// `w_s_m` in m, representative clutter height `r_m` in m, and the clutter
/// type, compute the additional loss in dB.
///
/// Open clutter (water/sea and open/rural) follows a logarithmic height gain
/// (eq. 2b). Built-up and forested clutter is modeled as knife-edge
/// diffraction over the clutter seen across the street (eq. 2a).
pub(crate) fn height_gain_terminal_correction_model(
    f_ghz: f64,
    h_m: f64,
    w_s_m: f64,
    r_m: f64,
    clutter_type: ClutterType,
) -> Result<ClutterLoss, ClutterError> {
    check_closed(f_ghz, 0.03, 3.0, ClutterError::HeightGainFrequency)?;
    check_positive(h_m, ClutterError::AntennaHeight)?;
    check_positive(w_s_m, ClutterError::StreetWidth)?;
    check_positive(r_m, ClutterError::ClutterHeight)?;
    if h_m >= r_m {
        debug!("antenna height {h_m} m is not below clutter height {r_m} m");
        return Err(ClutterError::AntennaAboveClutter);
    }

    // Equations 2d, 2e, 2f
    let h_dif_m = r_m - h_m;
    let theta_clut_deg = (h_dif_m / w_s_m).atan().to_degrees();
    let k_h2 = 21.8 + 6.2 * f_ghz.log10();

    let loss_db = match clutter_type {
        ClutterType::WaterSea | ClutterType::OpenRural => equation_2b(k_h2, h_m, r_m),
        ClutterType::Suburban
        | ClutterType::Urban
        | ClutterType::TreesForest
        | ClutterType::DenseUrban => {
            // Equations 2g, 2c
            let k_nu = 0.342 * f_ghz.sqrt();
            let nu = k_nu * (h_dif_m * theta_clut_deg).sqrt();
            equation_2a(nu)
        }
    };
    if !loss_db.is_finite() {
        debug!("clutter height {r_m} m overflows the diffraction parameter");
        return Err(ClutterError::ClutterHeight);
    }

    Ok(ClutterLoss::success(loss_db))
}

/// Knife-edge diffraction loss for the dimensionless parameter `nu`, less the
/// 6.03 dB loss at grazing.
fn equation_2a(nu: f64) -> f64 {
    let j_nu_db = if nu <= -0.78 {
        0.0
    } else {
        6.9 + 20.0 * (((nu - 0.1).powi(2) + 1.0).sqrt() + nu - 0.1).log10()
    };

    j_nu_db - 6.03
}

/// Logarithmic height gain below the representative clutter height `r_m`.
fn equation_2b(k_h2: f64, h_m: f64, r_m: f64) -> f64 {
    -k_h2 * (h_m / r_m).log10()
}
