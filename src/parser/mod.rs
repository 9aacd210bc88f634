// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale definition parsing.
//!
//! Turns definition lines of the form `<name> = <note> <note> ...` into
//! normalized scales, and loads whole definition files with `;` comment
//! stripping. Problems are recorded as diagnostics and never abort the
//! batch.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::Config;
use crate::diagnostics::{Diagnostic, Diagnostics};
use crate::music::pitch::{self, Pitch};
use crate::music::scale::{Scale, ScaleBuilder};

/// Comment marker for definition files
pub const COMMENT_MARKER: char = ';';

/// Parse one comment-stripped, trimmed definition line into a scale.
///
/// Tokens are resolved left to right. A token below its predecessor (in
/// raw pitch, before accumulation) rolls the running octave forward by
/// 12, so a definition written in plain note-class order still yields a
/// non-decreasing pitch sequence. A `/` prefix marks the cycle-start
/// note; the marker only takes structural effect when
/// `config.enforce_cycle_start` is on.
///
/// Returns `None` for a malformed line (no `=`, or an empty name); the
/// corresponding diagnostic is recorded. Unresolvable tokens are
/// recorded and default to pitch 0 so the rest of the line still parses.
pub fn parse_line(line: &str, config: &Config, diagnostics: &mut Diagnostics) -> Option<Scale> {
    let Some((name, tokens)) = line.split_once('=') else {
        diagnostics.push(Diagnostic::MalformedLine {
            line: line.to_string(),
        });
        return None;
    };
    let name = name.trim();
    if name.is_empty() {
        diagnostics.push(Diagnostic::MalformedLine {
            line: line.to_string(),
        });
        return None;
    }

    let mut builder = ScaleBuilder::new(name);
    let mut prev_pitch: Pitch = 0;
    let mut octave_acc: Pitch = 0;

    for token in tokens.split_whitespace() {
        let (note, cycle_start) = match token.strip_prefix('/') {
            Some(rest) => (rest, config.enforce_cycle_start),
            None => (token, false),
        };

        let raw = match pitch::resolve(note) {
            Ok(pitch) => pitch,
            Err(pitch::UnresolvedNote(token)) => {
                diagnostics.push(Diagnostic::UnresolvedNote { token });
                0
            }
        };
        if raw > config.pitch_limit {
            diagnostics.push(Diagnostic::SuspiciousPitch {
                token: note.to_string(),
                pitch: raw,
                limit: config.pitch_limit,
            });
        }

        // Raw pitch dropped below the previous note: the definition has
        // wrapped into the next octave.
        if raw < prev_pitch {
            octave_acc += 12;
        }

        if cycle_start {
            builder.add_cycle_start(raw + octave_acc);
        } else {
            builder.add_pitch(raw + octave_acc);
        }
        prev_pitch = raw;
    }

    Some(builder.build())
}

/// Load every scale from a definition file.
///
/// Each line is stripped from the first `;` to the end, trimmed, and
/// skipped when blank. Malformed lines and bad tokens accumulate in
/// `diagnostics`; only I/O failures are returned as errors.
pub fn load_definitions(
    path: &Path,
    config: &Config,
    diagnostics: &mut Diagnostics,
) -> Result<Vec<Scale>> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open scale definition file: {:?}", path))?;
    let reader = BufReader::new(file);

    let mut scales = Vec::new();
    for line in reader.lines() {
        let line = line.with_context(|| format!("Failed to read from {:?}", path))?;
        let stripped = match line.find(COMMENT_MARKER) {
            Some(pos) => &line[..pos],
            None => line.as_str(),
        };
        let stripped = stripped.trim();
        if stripped.is_empty() {
            continue;
        }

        if let Some(scale) = parse_line(stripped, config, diagnostics) {
            debug!("loaded scale {}", scale);
            scales.push(scale);
        }
    }
    Ok(scales)
}
