// ABOUTME: CLI for the workout statistics engine
// ABOUTME: Processes a JSON batch of sensor readings or a built-in demo batch

//! # Trainstat CLI
//!
//! Reads a batch of sensor readings, prints one summary line per valid
//! reading, and reports unknown workout codes without aborting the run.
//!
//! Input is a JSON array of readings:
//!
//! ```json
//! [{"workout_type": "SWM", "data": [720, 1, 80, 25, 40]}]
//! ```
//!
//! Without `--input` the binary runs the built-in demo batch.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use trainstat::batch::process_batch;
use trainstat::logging;
use trainstat::models::SensorReading;

#[derive(Parser)]
#[command(name = "trainstat")]
#[command(about = "Workout statistics - distance, mean speed, and calories from sensor readings")]
struct Args {
    /// JSON file with an array of sensor readings
    #[arg(short, long)]
    input: Option<PathBuf>,
}

/// The reference batch from the tracker's demo firmware
fn demo_batch() -> Vec<SensorReading> {
    vec![
        SensorReading::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorReading::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorReading::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

fn main() -> Result<()> {
    logging::init();
    let args = Args::parse();

    let readings = match args.input {
        Some(path) => {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("failed to read {}", path.display()))?;
            serde_json::from_str(&raw)
                .with_context(|| format!("failed to parse readings from {}", path.display()))?
        }
        None => demo_batch(),
    };

    for line in process_batch(&readings) {
        println!("{line}");
    }

    Ok(())
}
