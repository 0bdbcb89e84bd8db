// ABOUTME: Formula coefficients for the per-activity calorie and distance models
// ABOUTME: Values match the reference tracker firmware calibration

//! Coefficients used by the workout formulas
//!
//! These values come from the reference tracker's calibration and must not be
//! changed independently: the calorie models were fitted against them as a
//! set.

/// Unit conversions shared by every activity
pub mod conversion {
    /// Meters per kilometer
    pub const M_IN_KM: f64 = 1000.0;

    /// Minutes per hour, for calorie models expressed per-minute
    pub const MIN_IN_HOUR: f64 = 60.0;

    /// Centimeters per meter, for height supplied in cm
    pub const CM_IN_M: f64 = 100.0;

    /// km/h to m/s conversion factor (1000 / 3600, rounded as calibrated)
    pub const KMH_TO_MS: f64 = 0.278;
}

/// Running and race-walking stride model
pub mod stride {
    /// Distance covered per step, meters
    pub const STEP_LENGTH_M: f64 = 0.65;
}

/// Running calorie model: `(A * speed + B) * weight / 1000 * minutes`
pub mod running {
    /// Multiplier applied to mean speed (km/h)
    pub const SPEED_MULTIPLIER: f64 = 18.0;

    /// Additive shift applied after the speed term
    pub const SPEED_SHIFT: f64 = 1.79;
}

/// Race-walking calorie model:
/// `(A * weight + (speed_ms^2 / height_m) * B * weight) * minutes`
pub mod race_walking {
    /// Multiplier applied to body weight (kg)
    pub const WEIGHT_MULTIPLIER: f64 = 0.035;

    /// Multiplier applied to the speed-squared-over-height term
    pub const SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
}

/// Swimming stroke and calorie model: `(speed + A) * B * weight * hours`
pub mod swimming {
    /// Distance covered per stroke, meters
    pub const STROKE_LENGTH_M: f64 = 1.38;

    /// Additive shift applied to mean speed (km/h)
    pub const SPEED_SHIFT: f64 = 1.1;

    /// Multiplier applied to body weight (kg)
    pub const WEIGHT_MULTIPLIER: f64 = 2.0;
}
