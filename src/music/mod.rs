// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale model for scalemaker.
//!
//! This module provides note-name resolution, the normalized scale
//! representation, and interval-preserving scale extension.

pub mod extend;
pub mod pitch;
pub mod scale;

pub use extend::{extend, Extension};
pub use pitch::{cents_to_voltage, resolve, Pitch, UnresolvedNote, C4_HZ};
pub use scale::{Scale, ScaleBuilder};
