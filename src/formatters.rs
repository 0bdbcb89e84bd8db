// ABOUTME: Renders computed workout summaries into the fixed report template
// ABOUTME: All numeric fields are printed with exactly three decimal places

//! Summary-line rendering
//!
//! The template matches the reference tracker's display output verbatim,
//! including the Russian field labels, so downstream consumers that scrape
//! the line keep working.

use crate::models::WorkoutSummary;

/// Render a summary into the single-line report format
///
/// Every numeric field is formatted with exactly three decimal places
/// regardless of input precision.
#[must_use]
pub fn summary_line(summary: &WorkoutSummary) -> String {
    format!(
        "Тип тренировки: {}; \
         Длительность: {:.3} ч.; \
         Дистанция: {:.3} км; \
         Ср. скорость: {:.3} км/ч; \
         Потрачено ккал: {:.3}.",
        summary.training_type,
        summary.duration_hours,
        summary.distance_km,
        summary.mean_speed_kmh,
        summary.calories_kcal
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_inputs_still_render_three_decimals() {
        let summary = WorkoutSummary {
            training_type: "Running",
            duration_hours: 1.0,
            distance_km: 9.75,
            mean_speed_kmh: 9.75,
            calories_kcal: 797.805,
        };
        let line = summary_line(&summary);
        assert_eq!(
            line,
            "Тип тренировки: Running; Длительность: 1.000 ч.; Дистанция: 9.750 км; \
             Ср. скорость: 9.750 км/ч; Потрачено ккал: 797.805."
        );
    }

    #[test]
    fn test_values_are_rounded_not_truncated() {
        let summary = WorkoutSummary {
            training_type: "Swimming",
            duration_hours: 1.0,
            distance_km: 0.9936,
            mean_speed_kmh: 1.0,
            calories_kcal: 336.0,
        };
        let line = summary_line(&summary);
        assert!(line.contains("Дистанция: 0.994 км"), "line was: {line}");
        assert!(line.contains("Потрачено ккал: 336.000."), "line was: {line}");
    }
}
