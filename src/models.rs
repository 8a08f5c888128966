//! ITU-R P.2108 clutter loss models

mod aeronautical;
mod height_gain;
mod stats;
mod terrestrial;

#[cfg(test)]
mod tests;

pub(crate) use self::aeronautical::aeronautical_statistical_model;
pub(crate) use self::height_gain::height_gain_terminal_correction_model;
pub use self::stats::inverse_ccdf;
pub(crate) use self::terrestrial::terrestrial_statistical_model;

use crate::error::{ClutterError, Warning};

/// Default street width w_s in meters, used when no local value is known.
pub const DEFAULT_STREET_WIDTH_M: f64 = 27.0;

/// Clutter categories of the height gain terminal correction model.
///
/// The discriminants match the integer codes of Table 3 in Section 3.1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClutterType {
    /// Water/sea
    WaterSea = 1,
    /// Open/rural
    OpenRural = 2,
    /// Suburban
    Suburban = 3,
    /// Urban
    Urban = 4,
    /// Trees/forest
    TreesForest = 5,
    /// Dense urban
    DenseUrban = 6,
}

impl ClutterType {
    /// Every clutter type, in code order.
    pub const ALL: [ClutterType; 6] = [
        ClutterType::WaterSea,
        ClutterType::OpenRural,
        ClutterType::Suburban,
        ClutterType::Urban,
        ClutterType::TreesForest,
        ClutterType::DenseUrban,
    ];

    /// Default representative clutter height R in meters.
    ///
    /// Use this as the `clutter_height_m` input when local information is not
    /// available.
    pub fn representative_clutter_height_m(self) -> f64 {
        match self {
            ClutterType::WaterSea | ClutterType::OpenRural | ClutterType::Suburban => 10.0,
            ClutterType::Urban | ClutterType::TreesForest => 15.0,
            ClutterType::DenseUrban => 20.0,
        }
    }

    /// Integer code of this clutter type.
    pub fn code(self) -> i32 {
        self as i32
    }
}

impl TryFrom<i32> for ClutterType {
    type Error = ClutterError;

    fn try_from(code: i32) -> Result<Self, Self::Error> {
        ClutterType::ALL
            .into_iter()
            .find(|c| c.code() == code)
            .ok_or(ClutterError::ClutterType)
    }
}

impl std::fmt::Display for ClutterType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ClutterType::WaterSea => "Water/sea",
            ClutterType::OpenRural => "Open/rural",
            ClutterType::Suburban => "Suburban",
            ClutterType::Urban => "Urban",
            ClutterType::TreesForest => "Trees/forest",
            ClutterType::DenseUrban => "Dense urban",
        };
        write!(f, "{label}")
    }
}

/// Status of a computed loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    /// All inputs are within the validated range
    Success,
    /// The value was computed outside the validated range
    Extrapolated(Warning),
}

/// Additional loss from one of the clutter models, together with its status.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClutterLoss {
    /// Clutter loss in dB
    pub loss_db: f64,
    /// Whether the loss was computed inside the validated range
    pub status: Status,
}

impl ClutterLoss {
    pub(crate) fn success(loss_db: f64) -> Self {
        Self {
            loss_db,
            status: Status::Success,
        }
    }

    pub(crate) fn with_warning(loss_db: f64, warning: Option<Warning>) -> Self {
        Self {
            loss_db,
            status: warning.map_or(Status::Success, Status::Extrapolated),
        }
    }

    /// True if the loss was computed outside the validated range.
    pub fn is_extrapolated(&self) -> bool {
        matches!(self.status, Status::Extrapolated(_))
    }

    /// The warning attached to the loss, if any.
    pub fn warning(&self) -> Option<Warning> {
        match self.status {
            Status::Success => None,
            Status::Extrapolated(warning) => Some(warning),
        }
    }

    /// Integer return code: 0 on success, otherwise the warning code.
    pub fn return_code(&self) -> i32 {
        self.warning().map_or(0, Warning::code)
    }
}

/// Check `value` is in `[min, max]`. NaN is rejected.
pub(crate) fn check_closed(
    value: f64,
    min: f64,
    max: f64,
    err: ClutterError,
) -> Result<f64, ClutterError> {
    if (min..=max).contains(&value) {
        Ok(value)
    } else {
        Err(err)
    }
}

/// Check `value` is strictly positive and finite. NaN is rejected.
pub(crate) fn check_positive(value: f64, err: ClutterError) -> Result<f64, ClutterError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(err)
    }
}

/// Check a percentage of locations is in the open interval (0, 100).
pub(crate) fn check_percentage(p: f64, err: ClutterError) -> Result<f64, ClutterError> {
    if p > 0.0 && p < 100.0 {
        Ok(p)
    } else {
        Err(err)
    }
}
