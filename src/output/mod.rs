// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Interval file output.
//!
//! Writes one `.ivl` file per scale: a comment header, the scale name,
//! then the normalized pitch offsets in ascending order, one per line.

use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::debug;

use crate::music::pitch::cents_to_voltage;
use crate::music::scale::Scale;

/// File extension for emitted interval files
pub const INTERVAL_EXTENSION: &str = "ivl";

/// Path of the interval file for `scale` inside `folder`
pub fn interval_file_path(folder: &Path, scale: &Scale) -> PathBuf {
    folder.join(format!("{}.{}", scale.name(), INTERVAL_EXTENSION))
}

/// Write a single scale interval file
pub fn write_scale_file(scale: &Scale, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create interval file: {:?}", path))?;
    let mut writer = BufWriter::new(file);

    writeln!(
        writer,
        "; scale interval file: scale \"{}\" has {} pitch intervals",
        scale.name(),
        scale.len()
    )?;
    writeln!(writer, "{}", scale.name())?;
    for pitch in scale.pitches() {
        writeln!(writer, "{}", pitch)?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write interval file: {:?}", path))
}

/// Write interval files for a whole scale set, creating the output
/// folder when missing
pub fn write_scale_files(scales: &[Scale], folder: &Path) -> Result<()> {
    fs::create_dir_all(folder)
        .with_context(|| format!("Failed to create output folder: {:?}", folder))?;

    for scale in scales {
        let path = interval_file_path(folder, scale);
        write_scale_file(scale, &path)?;
        if let Some(&top) = scale.pitches().last() {
            let (freq, volts) = cents_to_voltage(f64::from(top) * 100.0);
            debug!(
                "wrote {:?}: span {} semitones ({:.2} Hz, {:+.2} V above the cycle start)",
                path, top, freq, volts
            );
        }
    }
    Ok(())
}
