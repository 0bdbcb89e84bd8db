// ABOUTME: Domain types for sensor readings and computed workout summaries
// ABOUTME: WorkoutType parses the short codes sensors put on the wire

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Enumeration of supported workout types
///
/// Each type selects a distinct formula set for distance, mean speed, and
/// calories. Sensors identify the type with a three-letter code (`RUN`,
/// `WLK`, `SWM`); anything else is rejected at parse time.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Running workout
    Running,
    /// Race-walking workout
    RaceWalking,
    /// Pool swimming workout
    Swimming,
}

impl WorkoutType {
    /// Human-readable training type name used in summary lines
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::RaceWalking => "RaceWalking",
            Self::Swimming => "Swimming",
        }
    }

    /// The wire code sensors use for this type
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::RaceWalking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    /// Number of positional numeric inputs this type's constructor expects
    #[must_use]
    pub const fn arity(&self) -> usize {
        match self {
            Self::Running => 3,
            Self::RaceWalking => 4,
            Self::Swimming => 5,
        }
    }
}

impl FromStr for WorkoutType {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "RUN" => Ok(Self::Running),
            "WLK" => Ok(Self::RaceWalking),
            "SWM" => Ok(Self::Swimming),
            other => Err(AppError::unknown_workout_type(other)),
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// One raw sensor packet: a workout type code plus positional numeric inputs
///
/// The code stays a plain string here so that packets with unrecognized codes
/// can still be carried to the batch runner and reported there instead of
/// failing deserialization.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SensorReading {
    /// Workout type code as sent by the sensor (`RUN`, `WLK`, `SWM`)
    pub workout_type: String,
    /// Positional numeric inputs matching the type's constructor arity
    pub data: Vec<f64>,
}

impl SensorReading {
    /// Create a reading from a type code and positional data
    #[must_use]
    pub fn new(workout_type: impl Into<String>, data: Vec<f64>) -> Self {
        Self {
            workout_type: workout_type.into(),
            data,
        }
    }
}

/// Computed, human-presentable result for one reading
///
/// Immutable once computed; the formatter renders it without touching the
/// numbers again.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct WorkoutSummary {
    /// Training type name (`Running`, `RaceWalking`, `Swimming`)
    pub training_type: &'static str,
    /// Workout duration in hours
    pub duration_hours: f64,
    /// Covered distance in kilometers
    pub distance_km: f64,
    /// Mean speed in km/h
    pub mean_speed_kmh: f64,
    /// Estimated energy expenditure in kcal
    pub calories_kcal: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_workout_type_codes_round_trip() {
        for workout_type in [
            WorkoutType::Running,
            WorkoutType::RaceWalking,
            WorkoutType::Swimming,
        ] {
            let parsed: WorkoutType = workout_type.code().parse().unwrap();
            assert_eq!(parsed, workout_type);
        }
    }

    #[test]
    fn test_workout_type_parse_is_case_insensitive() {
        assert_eq!("swm".parse::<WorkoutType>().unwrap(), WorkoutType::Swimming);
    }

    #[test]
    fn test_unknown_code_is_rejected() {
        let err = "XYZ".parse::<WorkoutType>().unwrap_err();
        assert_eq!(err, AppError::unknown_workout_type("XYZ"));
    }

    #[test]
    fn test_reading_deserializes_from_json() {
        let reading: SensorReading =
            serde_json::from_str(r#"{"workout_type":"SWM","data":[720,1,80,25,40]}"#).unwrap();
        assert_eq!(reading.workout_type, "SWM");
        assert_eq!(reading.data.len(), 5);
    }
}
