//! Writes a small demo `output.txt` for `timeplot`.
//!
//! The columns follow the consecutive reaction X -> Y -> Z with rate
//! constants `K1` and `K2`, evaluated in closed form.

use std::path::PathBuf;

use anyhow::{Context, Result};

const K1: f64 = 0.20;
const K2: f64 = 0.05;
const DT: f64 = 0.1;
const STEPS: usize = 500;

/// Concentrations `[x, y, z]` at time `t`, starting from pure X.
fn concentrations(t: f64) -> [f64; 3] {
    let x = (-K1 * t).exp();
    let y = K1 / (K2 - K1) * ((-K1 * t).exp() - (-K2 * t).exp());
    let z = (1.0 - x - y).max(0.0);
    [x, y, z]
}

fn main() -> Result<()> {
    env_logger::init();

    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("output.txt"));

    let mut writer = csv::Writer::from_path(&output_path)
        .with_context(|| format!("creating {}", output_path.display()))?;

    writer.write_record(["time", "x", "y", "z"])?;
    for step in 0..=STEPS {
        let t = step as f64 * DT;
        let [x, y, z] = concentrations(t);
        writer.write_record(&[t.to_string(), x.to_string(), y.to_string(), z.to_string()])?;
    }
    writer.flush()?;

    log::info!("Wrote {} samples to {}", STEPS + 1, output_path.display());
    println!("Wrote {} samples to {}", STEPS + 1, output_path.display());
    Ok(())
}
