// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Duplicate detection across a loaded scale set.
//!
//! Flags scales that share a name and scales whose normalized interval
//! content is identical. Purely informational; validation never blocks
//! output generation.

use crate::diagnostics::Diagnostic;
use crate::music::scale::Scale;

/// Check whether two scales have identical interval content.
///
/// True iff the normalized pitch sequences have equal length and are
/// pointwise equal (order-sensitive). Symmetric; false whenever the
/// lengths differ.
pub fn is_interval_match(a: &Scale, b: &Scale) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.pitches().iter().zip(b.pitches()).all(|(x, y)| x == y)
}

/// Validate a loaded scale set, reporting duplicate names and duplicate
/// interval patterns. Each unordered pair is compared once; a scale is
/// never compared against itself. Quadratic over the set size, which is
/// expected to stay in the tens.
pub fn validate(scales: &[Scale]) -> Vec<Diagnostic> {
    let mut diagnostics = Vec::new();
    for (index, scale) in scales.iter().enumerate() {
        for other in &scales[index + 1..] {
            if scale.name() == other.name() {
                diagnostics.push(Diagnostic::DuplicateName {
                    name: scale.name().to_string(),
                });
            }
            if is_interval_match(scale, other) {
                diagnostics.push(Diagnostic::DuplicateIntervals {
                    first: scale.name().to_string(),
                    second: other.name().to_string(),
                });
            }
        }
    }
    diagnostics
}
