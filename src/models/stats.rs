//! Statistical helpers shared by the percentile-driven models.

use crate::error::ClutterError;

/// Inverse complementary cumulative normal distribution, Q⁻¹(q).
///
/// For a probability `q` in the open interval (0, 1), return the standard
/// normal deviate exceeded with probability `q`. Uses the rational
/// approximation of Abramowitz & Stegun 26.2.23, as recommended by ITU-R
/// P.1057, with an absolute error below 4.5e-4.
///
/// `q` at or outside the interval bounds returns [`ClutterError::Probability`].
pub fn inverse_ccdf(q: f64) -> Result<f64, ClutterError> {
    #![allow(clippy::excessive_precision)]
    const C0: f64 = 2.515517;
    const C1: f64 = 0.802853;
    const C2: f64 = 0.010328;
    const D1: f64 = 1.432788;
    const D2: f64 = 0.189269;
    const D3: f64 = 0.001308;

    if !(q > 0.0 && q < 1.0) {
        return Err(ClutterError::Probability);
    }

    // Work in the upper tail and mirror the result
    let upper = q > 0.5;
    let x = if upper { 1.0 - q } else { q };

    let t = f64::sqrt(-2.0 * x.ln());
    let zeta = ((C2 * t + C1) * t + C0) / (((D3 * t + D2) * t + D1) * t + 1.0);
    let deviate = t - zeta;

    Ok(if upper { -deviate } else { deviate })
}
