//! Earth-space and aeronautical statistical clutter loss (Section 3.3).
//!
//! Applies when one end of the path is within man-made clutter and the other
//! end is a satellite, aircraft, or other platform above the Earth.

use std::f64::consts::PI;

use log::debug;

use super::{check_closed, check_percentage, stats::inverse_ccdf, ClutterLoss};
use crate::error::{ClutterError, Warning};

/// Elevation above which the model is evaluated at zenith.
const ZENITH_DEG: f64 = 90.0;

/// Largest accepted elevation angle in degrees.
const MAX_ELEVATION_DEG: f64 = 100.0;

/// Clutter loss not exceeded for `p` % of locations.
///
/// For a frequency `f_ghz` in GHz, elevation angle `theta_deg` in degrees, and
/// percentage of locations `p` in %, compute the clutter loss in dB.
///
/// An elevation of exactly 0° is computed but flagged as
/// [`Warning::GrazingElevation`]; elevations in (90°, 100°] are clamped to 90°
/// and flagged as [`Warning::ElevationAboveZenith`].
pub(crate) fn aeronautical_statistical_model(
    f_ghz: f64,
    theta_deg: f64,
    p: f64,
) -> Result<ClutterLoss, ClutterError> {
    check_closed(f_ghz, 10.0, 100.0, ClutterError::AeronauticalFrequency)?;
    check_closed(theta_deg, 0.0, MAX_ELEVATION_DEG, ClutterError::ElevationAngle)?;
    check_percentage(p, ClutterError::AeronauticalPercentage)?;

    let (theta_deg, warning) = if theta_deg == 0.0 {
        (theta_deg, Some(Warning::GrazingElevation))
    } else if theta_deg > ZENITH_DEG {
        debug!("clamping elevation angle {theta_deg} deg to zenith");
        (ZENITH_DEG, Some(Warning::ElevationAboveZenith))
    } else {
        (theta_deg, None)
    };

    const A_1: f64 = 0.05;
    let k_1 = 93.0 * f_ghz.powf(0.175);

    let log_term = (1.0 - p / 100.0).ln();
    let angle = A_1 * (1.0 - theta_deg / ZENITH_DEG) + PI * theta_deg / 180.0;
    let exponent = 0.5 * (ZENITH_DEG - theta_deg) / ZENITH_DEG;
    let spread = 0.6 * inverse_ccdf(p / 100.0)?;

    let loss_db = (-k_1 * log_term * cot(angle)).powf(exponent) - 1.0 - spread;

    Ok(ClutterLoss::with_warning(loss_db, warning))
}

/// Cotangent.
fn cot(x: f64) -> f64 {
    1.0 / x.tan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn cotangent() {
        assert_eq!(cot(0.0), f64::INFINITY);
        assert_abs_diff_eq!(cot(PI / 2.0), 0.0, epsilon = 1e-15);
        assert_abs_diff_eq!(cot(PI / 4.0), 1.0, epsilon = 1e-15);
    }

    #[test]
    fn frequency_limits() {
        assert_eq!(
            aeronautical_statistical_model(9.0, 1.0, 1.0),
            Err(ClutterError::AeronauticalFrequency)
        );
        assert_eq!(
            aeronautical_statistical_model(101.0, 1.0, 1.0),
            Err(ClutterError::AeronauticalFrequency)
        );
        assert!(aeronautical_statistical_model(10.0, 45.0, 50.0).is_ok());
        assert!(aeronautical_statistical_model(100.0, 45.0, 50.0).is_ok());
    }

    #[test]
    fn elevation_limits() {
        assert_eq!(
            aeronautical_statistical_model(20.0, -1.0, 1.0),
            Err(ClutterError::ElevationAngle)
        );
        assert_eq!(
            aeronautical_statistical_model(20.0, 100.5, 1.0),
            Err(ClutterError::ElevationAngle)
        );
        assert_eq!(
            aeronautical_statistical_model(20.0, f64::NAN, 1.0),
            Err(ClutterError::ElevationAngle)
        );
    }

    #[test]
    fn percentage_limits() {
        for p in [-1.0, 0.0, 100.0, 101.0] {
            assert_eq!(
                aeronautical_statistical_model(20.0, 1.0, p),
                Err(ClutterError::AeronauticalPercentage)
            );
        }
        assert!(aeronautical_statistical_model(50.0, 45.0, 0.1).is_ok());
        assert!(aeronautical_statistical_model(50.0, 45.0, 99.9).is_ok());
    }

    #[test]
    fn elevation_edges_are_flagged() {
        let grazing = aeronautical_statistical_model(20.0, 0.0, 50.0).unwrap();
        assert_eq!(grazing.warning(), Some(Warning::GrazingElevation));
        assert!(grazing.loss_db.is_finite());

        let zenith = aeronautical_statistical_model(20.0, 90.0, 50.0).unwrap();
        assert_eq!(zenith.warning(), None);

        let beyond = aeronautical_statistical_model(20.0, 100.0, 50.0).unwrap();
        assert_eq!(beyond.warning(), Some(Warning::ElevationAboveZenith));
        assert_eq!(beyond.loss_db, zenith.loss_db);
    }

    #[test]
    fn loss_falls_with_elevation() {
        let low = aeronautical_statistical_model(30.0, 10.0, 50.0).unwrap();
        let high = aeronautical_statistical_model(30.0, 60.0, 50.0).unwrap();
        assert!(low.loss_db > high.loss_db);
    }
}
