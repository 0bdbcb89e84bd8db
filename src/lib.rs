// ABOUTME: Workout statistics engine - distance, mean speed, and calorie estimates
// ABOUTME: Decodes typed sensor readings and renders fixed-template summary lines

//! # Trainstat
//!
//! A small fitness-statistics engine. Sensors deliver readings as a short
//! workout type code (`RUN`, `WLK`, `SWM`) plus positional numeric inputs;
//! this crate decodes each reading into the matching [`workouts::Workout`]
//! variant, computes distance, mean speed, and calories with that activity's
//! formula set, and renders the result as a fixed-template summary line.
//!
//! ```
//! use trainstat::models::SensorReading;
//! use trainstat::workouts::summarize_reading;
//!
//! # fn main() -> Result<(), trainstat::AppError> {
//! let reading = SensorReading::new("RUN", vec![15000.0, 1.0, 75.0]);
//! let summary = summarize_reading(&reading)?;
//! assert!((summary.distance_km - 9.75).abs() < 1e-9);
//! # Ok(())
//! # }
//! ```

/// Batch runner over reading sequences
pub mod batch;

/// Formula coefficients for the calorie and distance models
pub mod constants;

/// Error types and result alias
pub mod errors;

/// Summary-line rendering
pub mod formatters;

/// Tracing subscriber setup
pub mod logging;

/// Sensor readings, workout types, and computed summaries
pub mod models;

/// Per-activity formula sets and reading dispatch
pub mod workouts;

pub use errors::{AppError, AppResult, ErrorCode};
pub use models::{SensorReading, WorkoutSummary, WorkoutType};
pub use workouts::{summarize_reading, Workout};
