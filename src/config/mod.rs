// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Configuration for scalemaker.
//!
//! Settings that alter how scale definitions are interpreted, loadable
//! from an optional TOML file and overridable from the command line.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::music::Pitch;

fn default_pitch_limit() -> Pitch {
    120
}

/// Tool configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Honor `/` cycle-start markers structurally; when off the marker
    /// is consumed but the note is treated as an ordinary pitch
    #[serde(default)]
    pub enforce_cycle_start: bool,
    /// Resolved pitches above this value are flagged as suspicious
    #[serde(default = "default_pitch_limit")]
    pub pitch_limit: Pitch,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            enforce_cycle_start: false,
            pitch_limit: default_pitch_limit(),
        }
    }
}

impl Config {
    /// Load a configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {:?}", path.as_ref()))?;
        Self::from_toml(&contents)
    }

    /// Parse a configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        toml::from_str(toml_str).context("Failed to parse TOML configuration")
    }
}
