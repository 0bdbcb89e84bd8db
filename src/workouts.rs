// ABOUTME: Per-activity formula sets for distance, mean speed, and calories
// ABOUTME: Decodes sensor readings into the matching workout variant

//! Workout formula sets and reading dispatch
//!
//! One [`Workout`] variant per supported activity, each carrying its own
//! measurements. Distance and speed derive from a stride model for running
//! and race-walking and from pool geometry for swimming; each activity has
//! its own calorie model. Coefficients live in [`crate::constants`].
//!
//! Measurements are validated once, at construction. Every reading that
//! produces a `Workout` can be summarized without arithmetic faults.

use crate::constants::{conversion, race_walking, running, stride, swimming};
use crate::errors::{AppError, AppResult};
use crate::models::{SensorReading, WorkoutSummary, WorkoutType};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A decoded workout with the measurements its formula set needs
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Workout {
    /// Running: step count, duration, body weight
    Running {
        /// Number of steps registered by the sensor
        action: f64,
        /// Workout duration in hours
        duration_hours: f64,
        /// Athlete body weight in kg
        weight_kg: f64,
    },
    /// Race-walking: step count, duration, body weight, height
    RaceWalking {
        /// Number of steps registered by the sensor
        action: f64,
        /// Workout duration in hours
        duration_hours: f64,
        /// Athlete body weight in kg
        weight_kg: f64,
        /// Athlete height in cm, used by the calorie model
        height_cm: f64,
    },
    /// Swimming: stroke count, duration, body weight, pool geometry
    Swimming {
        /// Number of strokes registered by the sensor
        action: f64,
        /// Workout duration in hours
        duration_hours: f64,
        /// Athlete body weight in kg
        weight_kg: f64,
        /// Pool length in meters
        pool_length_m: f64,
        /// Number of completed pool lengths
        lap_count: f64,
    },
}

impl Workout {
    /// Create a running workout
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if any measurement is non-positive.
    pub fn running(action: f64, duration_hours: f64, weight_kg: f64) -> AppResult<Self> {
        let workout = Self::Running {
            action,
            duration_hours,
            weight_kg,
        };
        workout.validate()?;
        Ok(workout)
    }

    /// Create a race-walking workout
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if any measurement is non-positive.
    pub fn race_walking(
        action: f64,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> AppResult<Self> {
        let workout = Self::RaceWalking {
            action,
            duration_hours,
            weight_kg,
            height_cm,
        };
        workout.validate()?;
        Ok(workout)
    }

    /// Create a swimming workout
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidInput`] if any measurement is non-positive.
    pub fn swimming(
        action: f64,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        lap_count: f64,
    ) -> AppResult<Self> {
        let workout = Self::Swimming {
            action,
            duration_hours,
            weight_kg,
            pool_length_m,
            lap_count,
        };
        workout.validate()?;
        Ok(workout)
    }

    /// Decode a sensor reading into the matching workout variant
    ///
    /// The reading's type code selects the variant; the positional data must
    /// match that variant's constructor arity exactly.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::UnknownWorkoutType`] for codes outside
    /// `RUN`/`WLK`/`SWM`, and [`AppError::InvalidInput`] for arity mismatch
    /// or non-positive measurements.
    pub fn from_reading(reading: &SensorReading) -> AppResult<Self> {
        let workout_type: WorkoutType = reading.workout_type.parse()?;
        let data = &reading.data;
        let expected = workout_type.arity();
        if data.len() != expected {
            return Err(AppError::invalid_input(format!(
                "{} expects {expected} values, got {}",
                workout_type.name(),
                data.len()
            )));
        }

        match workout_type {
            WorkoutType::Running => Self::running(data[0], data[1], data[2]),
            WorkoutType::RaceWalking => Self::race_walking(data[0], data[1], data[2], data[3]),
            WorkoutType::Swimming => {
                Self::swimming(data[0], data[1], data[2], data[3], data[4])
            }
        }
    }

    /// The workout type this variant belongs to
    #[must_use]
    pub const fn workout_type(&self) -> WorkoutType {
        match self {
            Self::Running { .. } => WorkoutType::Running,
            Self::RaceWalking { .. } => WorkoutType::RaceWalking,
            Self::Swimming { .. } => WorkoutType::Swimming,
        }
    }

    /// Workout duration in hours
    #[must_use]
    pub const fn duration_hours(&self) -> f64 {
        match self {
            Self::Running { duration_hours, .. }
            | Self::RaceWalking { duration_hours, .. }
            | Self::Swimming { duration_hours, .. } => *duration_hours,
        }
    }

    /// Covered distance in kilometers
    ///
    /// Running and race-walking multiply step count by the stride model's
    /// step length; swimming multiplies stroke count by stroke length.
    #[must_use]
    pub fn distance_km(&self) -> f64 {
        match self {
            Self::Running { action, .. } | Self::RaceWalking { action, .. } => {
                action * stride::STEP_LENGTH_M / conversion::M_IN_KM
            }
            Self::Swimming { action, .. } => {
                action * swimming::STROKE_LENGTH_M / conversion::M_IN_KM
            }
        }
    }

    /// Mean speed in km/h
    ///
    /// Swimming derives speed from pool geometry rather than stroke distance,
    /// so swum distance and mean speed are intentionally decoupled.
    #[must_use]
    pub fn mean_speed_kmh(&self) -> f64 {
        match self {
            Self::Running { duration_hours, .. } | Self::RaceWalking { duration_hours, .. } => {
                self.distance_km() / duration_hours
            }
            Self::Swimming {
                duration_hours,
                pool_length_m,
                lap_count,
                ..
            } => pool_length_m * lap_count / conversion::M_IN_KM / duration_hours,
        }
    }

    /// Estimated energy expenditure in kcal
    #[must_use]
    pub fn calories_kcal(&self) -> f64 {
        match self {
            Self::Running {
                duration_hours,
                weight_kg,
                ..
            } => {
                running::SPEED_MULTIPLIER.mul_add(self.mean_speed_kmh(), running::SPEED_SHIFT)
                    * weight_kg
                    / conversion::M_IN_KM
                    * duration_hours
                    * conversion::MIN_IN_HOUR
            }
            Self::RaceWalking {
                duration_hours,
                weight_kg,
                height_cm,
                ..
            } => {
                let speed_ms = self.mean_speed_kmh() * conversion::KMH_TO_MS;
                let height_m = height_cm / conversion::CM_IN_M;
                let speed_term = speed_ms.powi(2) / height_m
                    * race_walking::SPEED_HEIGHT_MULTIPLIER
                    * weight_kg;
                race_walking::WEIGHT_MULTIPLIER.mul_add(*weight_kg, speed_term)
                    * duration_hours
                    * conversion::MIN_IN_HOUR
            }
            Self::Swimming {
                duration_hours,
                weight_kg,
                ..
            } => {
                (self.mean_speed_kmh() + swimming::SPEED_SHIFT)
                    * swimming::WEIGHT_MULTIPLIER
                    * weight_kg
                    * duration_hours
            }
        }
    }

    /// Compute the full summary for this workout
    ///
    /// Pure with respect to the workout: calling it twice yields bit-identical
    /// summaries.
    #[must_use]
    pub fn summary(&self) -> WorkoutSummary {
        let summary = WorkoutSummary {
            training_type: self.workout_type().name(),
            duration_hours: self.duration_hours(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            calories_kcal: self.calories_kcal(),
        };
        debug!(
            training_type = summary.training_type,
            distance_km = summary.distance_km,
            calories_kcal = summary.calories_kcal,
            "computed workout summary"
        );
        summary
    }

    fn validate(&self) -> AppResult<()> {
        let workout_type = self.workout_type();
        match *self {
            Self::Running {
                action,
                duration_hours,
                weight_kg,
            } => {
                require_positive(workout_type, "action", action)?;
                require_positive(workout_type, "duration", duration_hours)?;
                require_positive(workout_type, "weight", weight_kg)?;
            }
            Self::RaceWalking {
                action,
                duration_hours,
                weight_kg,
                height_cm,
            } => {
                require_positive(workout_type, "action", action)?;
                require_positive(workout_type, "duration", duration_hours)?;
                require_positive(workout_type, "weight", weight_kg)?;
                require_positive(workout_type, "height", height_cm)?;
            }
            Self::Swimming {
                action,
                duration_hours,
                weight_kg,
                pool_length_m,
                lap_count,
            } => {
                require_positive(workout_type, "action", action)?;
                require_positive(workout_type, "duration", duration_hours)?;
                require_positive(workout_type, "weight", weight_kg)?;
                require_positive(workout_type, "pool length", pool_length_m)?;
                require_positive(workout_type, "lap count", lap_count)?;
            }
        }
        Ok(())
    }
}

/// Decode one reading and compute its summary in a single step
///
/// # Errors
///
/// Propagates the decoding errors of [`Workout::from_reading`].
pub fn summarize_reading(reading: &SensorReading) -> AppResult<WorkoutSummary> {
    Ok(Workout::from_reading(reading)?.summary())
}

fn require_positive(workout_type: WorkoutType, field: &str, value: f64) -> AppResult<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(AppError::invalid_input(format!(
            "{}: {field} must be positive and finite, got {value}",
            workout_type.name()
        )))
    }
}
