use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::info;

use crate::constants::{RANGE_TO_BEST_FILE, RANGE_TO_COST_FILE, RANGE_TO_WEIGHT_FILE};
use crate::errors::{SizingError, SizingResult};

use super::driver::SweepReport;

/// Formats like C's `%.18e`: two-digit signed exponent, lowercase `nan`/`inf`.
pub fn format_value(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }

    // Rust prints `1.5e3`; C pads the exponent to `e+03`.
    let formatted = format!("{:.18e}", value);
    if let Some((mantissa, exponent)) = formatted.split_once('e') {
        if let Ok(exponent) = exponent.parse::<i32>() {
            return format!("{}e{:+03}", mantissa, exponent);
        }
    }
    formatted
}

/// Writes one space-delimited row per pair.
pub fn write_table<I>(path: &Path, rows: I) -> SizingResult<()>
where
    I: IntoIterator<Item = (f64, f64)>,
{
    let io_error = |source| SizingError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_error)?;
    let mut writer = BufWriter::new(file);
    for (x, y) in rows {
        writeln!(writer, "{} {}", format_value(x), format_value(y)).map_err(io_error)?;
    }
    writer.flush().map_err(io_error)?;

    info!(path = %path.display(), "table written");
    Ok(())
}

impl SweepReport {
    /// Writes range/weight and range/cost for the last scenario and the best range of
    /// every scenario into `dir`. Returns the written paths.
    pub fn write_tables(&self, dir: &Path) -> SizingResult<Vec<PathBuf>> {
        let samples = self
            .last_scenario()
            .map(|scenario| scenario.samples.as_slice())
            .unwrap_or_default();

        let weight_path = dir.join(RANGE_TO_WEIGHT_FILE);
        write_table(
            &weight_path,
            samples
                .iter()
                .map(|sample| (sample.range, sample.takeoff_weight_tonnes())),
        )?;

        let cost_path = dir.join(RANGE_TO_COST_FILE);
        write_table(
            &cost_path,
            samples.iter().map(|sample| (sample.range, sample.cost)),
        )?;

        let best_path = dir.join(RANGE_TO_BEST_FILE);
        write_table(&best_path, self.best_ranges())?;

        Ok(vec![weight_path, cost_path, best_path])
    }
}
