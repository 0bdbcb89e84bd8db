// ABOUTME: Integration tests for batch processing of sensor reading sequences
// ABOUTME: Bad packets are reported and skipped without aborting the run

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use trainstat::batch::process_batch;
use trainstat::models::SensorReading;

#[test]
fn test_demo_batch_produces_three_lines_in_order() {
    let readings = vec![
        SensorReading::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorReading::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorReading::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ];
    let lines = process_batch(&readings);

    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("Swimming"));
    assert!(lines[1].contains("Running"));
    assert!(lines[2].contains("RaceWalking"));
}

#[test]
fn test_unknown_code_in_the_middle_is_skipped() {
    let readings = vec![
        SensorReading::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorReading::new("XYZ", vec![1.0]),
        SensorReading::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
    ];
    let lines = process_batch(&readings);

    assert_eq!(lines.len(), 2, "batch must continue past unknown codes");
    assert!(lines[1].contains("Swimming"));
}

#[test]
fn test_batch_of_only_bad_packets_yields_no_lines() {
    let readings = vec![
        SensorReading::new("XYZ", vec![1.0]),
        SensorReading::new("RUN", vec![]),
    ];
    assert!(process_batch(&readings).is_empty());
}

#[test]
fn test_readings_deserialize_from_json_batch() {
    let raw = r#"[
        {"workout_type": "SWM", "data": [720, 1, 80, 25, 40]},
        {"workout_type": "RUN", "data": [15000, 1, 75]}
    ]"#;
    let readings: Vec<SensorReading> = serde_json::from_str(raw).unwrap();
    let lines = process_batch(&readings);
    assert_eq!(lines.len(), 2);
}
