// ABOUTME: Batch runner over sequences of sensor readings
// ABOUTME: Unknown workout codes are reported and skipped, the run continues

//! Batch processing of sensor readings
//!
//! Entries are independent, so one bad packet never aborts the run: unknown
//! workout codes and invalid measurements are reported through `tracing` and
//! the runner moves on to the next reading.

use crate::errors::AppError;
use crate::formatters::summary_line;
use crate::models::SensorReading;
use crate::workouts::summarize_reading;
use tracing::warn;

/// Process a batch of readings into rendered summary lines
///
/// Returns one line per successfully decoded reading, in input order.
/// Readings that fail to decode are logged with the diagnostic for their
/// error kind and skipped.
#[must_use]
pub fn process_batch(readings: &[SensorReading]) -> Vec<String> {
    readings
        .iter()
        .filter_map(|reading| match summarize_reading(reading) {
            Ok(summary) => Some(summary_line(&summary)),
            Err(err @ AppError::UnknownWorkoutType { .. }) => {
                warn!(code = %reading.workout_type, "{err}");
                None
            }
            Err(err) => {
                warn!(code = %reading.workout_type, "skipping reading: {err}");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_code_does_not_abort_the_batch() {
        let readings = vec![
            SensorReading::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
            SensorReading::new("XYZ", vec![1.0, 2.0, 3.0]),
            SensorReading::new("RUN", vec![15000.0, 1.0, 75.0]),
        ];
        let lines = process_batch(&readings);
        assert_eq!(lines.len(), 2, "unknown code must be skipped, not fatal");
        assert!(lines[0].contains("Swimming"));
        assert!(lines[1].contains("Running"));
    }

    #[test]
    fn test_invalid_entry_fails_alone() {
        let readings = vec![
            SensorReading::new("RUN", vec![15000.0]),
            SensorReading::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
        ];
        let lines = process_batch(&readings);
        assert_eq!(lines.len(), 1);
        assert!(lines[0].contains("RaceWalking"));
    }
}
