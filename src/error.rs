/// Name used as the prefix of status messages.
const LIBRARY_NAME: &str = "P.2108";

/// Possible clutter model errors.
///
/// An error means the inputs are outside any domain where the model gives a
/// physically meaningful value, so no loss is returned with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ClutterError {
    /// Height gain model frequency is outside [0.03, 3] GHz
    HeightGainFrequency,
    /// Antenna height is not positive
    AntennaHeight,
    /// Street width is not positive
    StreetWidth,
    /// Representative clutter height is not positive
    ClutterHeight,
    /// An integer code doesn't name a clutter type
    ClutterType,
    /// Antenna is at or above the representative clutter height
    AntennaAboveClutter,
    /// Terrestrial model frequency is outside [0.5, 67] GHz
    TerrestrialFrequency,
    /// Path distance is not positive
    PathDistance,
    /// Terrestrial model percentage is outside (0, 100)
    TerrestrialPercentage,
    /// Aeronautical model frequency is outside [10, 100] GHz
    AeronauticalFrequency,
    /// Elevation angle is outside [0, 100] degrees
    ElevationAngle,
    /// Aeronautical model percentage is outside (0, 100)
    AeronauticalPercentage,
    /// Inverse CCDF argument is outside (0, 1)
    Probability,
    /// The batch inputs don't have the same length
    InconsistentInputs,
}

/// Reasons a loss was computed outside the validated range of the model.
///
/// The value is still numerically defined but should be treated as lower
/// confidence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Warning {
    /// Elevation angle is exactly 0°
    GrazingElevation,
    /// Elevation angle is above 90°; the model was evaluated at 90°
    ElevationAboveZenith,
    /// Terrestrial path is shorter than 0.25 km
    ShortPath,
}

impl ClutterError {
    /// Integer return code for this error.
    pub fn code(self) -> i32 {
        match self {
            ClutterError::HeightGainFrequency => 32,
            ClutterError::AntennaHeight => 33,
            ClutterError::StreetWidth => 34,
            ClutterError::ClutterHeight => 35,
            ClutterError::ClutterType => 36,
            ClutterError::AntennaAboveClutter => 37,
            ClutterError::TerrestrialFrequency => 48,
            ClutterError::PathDistance => 49,
            ClutterError::TerrestrialPercentage => 50,
            ClutterError::AeronauticalFrequency => 64,
            ClutterError::ElevationAngle => 65,
            ClutterError::AeronauticalPercentage => 66,
            ClutterError::Probability => 96,
            ClutterError::InconsistentInputs => 97,
        }
    }

    /// Look up the error for an integer return code.
    pub fn from_code(code: i32) -> Option<Self> {
        const ALL: [ClutterError; 14] = [
            ClutterError::HeightGainFrequency,
            ClutterError::AntennaHeight,
            ClutterError::StreetWidth,
            ClutterError::ClutterHeight,
            ClutterError::ClutterType,
            ClutterError::AntennaAboveClutter,
            ClutterError::TerrestrialFrequency,
            ClutterError::PathDistance,
            ClutterError::TerrestrialPercentage,
            ClutterError::AeronauticalFrequency,
            ClutterError::ElevationAngle,
            ClutterError::AeronauticalPercentage,
            ClutterError::Probability,
            ClutterError::InconsistentInputs,
        ];
        ALL.into_iter().find(|e| e.code() == code)
    }
}

impl Warning {
    /// Integer return code for this warning.
    pub fn code(self) -> i32 {
        match self {
            Warning::ShortPath => 56,
            Warning::GrazingElevation => 72,
            Warning::ElevationAboveZenith => 73,
        }
    }

    /// Look up the warning for an integer return code.
    pub fn from_code(code: i32) -> Option<Self> {
        [
            Warning::GrazingElevation,
            Warning::ElevationAboveZenith,
            Warning::ShortPath,
        ]
        .into_iter()
        .find(|w| w.code() == code)
    }
}

impl std::fmt::Display for ClutterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClutterError::HeightGainFrequency => {
                write!(f, "frequency must be between 0.03 and 3 GHz, inclusive")
            }
            ClutterError::AntennaHeight => write!(f, "antenna height must be > 0 meters"),
            ClutterError::StreetWidth => write!(f, "street width must be > 0 meters"),
            ClutterError::ClutterHeight => {
                write!(f, "representative clutter height must be > 0 meters")
            }
            ClutterError::ClutterType => write!(f, "invalid value for clutter type"),
            ClutterError::AntennaAboveClutter => write!(
                f,
                "antenna height must be below the representative clutter height"
            ),
            ClutterError::TerrestrialFrequency => {
                write!(f, "frequency must be between 0.5 and 67 GHz, inclusive")
            }
            ClutterError::PathDistance => write!(f, "path distance must be > 0 km"),
            ClutterError::TerrestrialPercentage | ClutterError::AeronauticalPercentage => {
                write!(f, "percentage must be between 0 and 100, exclusive")
            }
            ClutterError::AeronauticalFrequency => {
                write!(f, "frequency must be between 10 and 100 GHz, inclusive")
            }
            ClutterError::ElevationAngle => {
                write!(f, "elevation angle must be between 0 and 100 degrees, inclusive")
            }
            ClutterError::Probability => write!(f, "probability must be between 0 and 1"),
            ClutterError::InconsistentInputs => write!(f, "inputs have different lengths"),
        }
    }
}

impl std::fmt::Display for Warning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Warning::GrazingElevation => {
                write!(f, "elevation angle of 0 degrees is at the edge of the model")
            }
            Warning::ElevationAboveZenith => {
                write!(f, "elevation angle above 90 degrees was evaluated at 90 degrees")
            }
            Warning::ShortPath => write!(f, "path distance below 0.25 km is extrapolated"),
        }
    }
}

impl std::error::Error for ClutterError {}

/// Get a status message for an integer return code.
///
/// Success and warning codes are reported as a status, everything else as an
/// error. Unknown codes give "Undefined return code".
pub fn return_status_message(code: i32) -> String {
    if code == 0 {
        return format!("{LIBRARY_NAME} Status: Successful execution");
    }
    if let Some(warning) = Warning::from_code(code) {
        return format!("{LIBRARY_NAME} Status: Success with warning, {warning}");
    }
    match ClutterError::from_code(code) {
        Some(error) => format!("{LIBRARY_NAME} Error: {error}"),
        None => format!("{LIBRARY_NAME} Error: Undefined return code"),
    }
}
