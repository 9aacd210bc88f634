// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Scale model and normalization.
//!
//! A scale is an ordered collection of pitch offsets with a marked
//! repeat-cycle start. Scales are assembled through [`ScaleBuilder`],
//! which defers sorting and normalization to [`ScaleBuilder::build`] so
//! the cycle-start note is tracked by identity rather than by a raw
//! index, and normalization can only run once.

use std::fmt;

use super::pitch::Pitch;

/// A named scale of normalized pitch offsets.
///
/// Pitches are sorted ascending and expressed as signed semitone deltas
/// from the cycle-start pitch: 0 is the first note of the repeat cycle,
/// negative values precede the cycle (a handpan ding, for example), and
/// positive values lie within or after the first cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    name: String,
    pitches: Vec<Pitch>,
    cycle_start: usize,
    cycle_length: usize,
}

impl Scale {
    /// Scale name as written in the definition file
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Normalized pitch offsets, ascending
    pub fn pitches(&self) -> &[Pitch] {
        &self.pitches
    }

    /// Index of the cycle-start pitch (always 0 semitones once built)
    pub fn cycle_start(&self) -> usize {
        self.cycle_start
    }

    /// Number of pitches at or above the cycle start
    pub fn cycle_length(&self) -> usize {
        self.cycle_length
    }

    /// Number of pitches in the scale
    pub fn len(&self) -> usize {
        self.pitches.len()
    }

    /// Check if the scale has no pitches
    pub fn is_empty(&self) -> bool {
        self.pitches.is_empty()
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: pitches={:?}, cycle_start={}, cycle_length={}",
            self.name, self.pitches, self.cycle_start, self.cycle_length
        )
    }
}

/// Accumulates the pitches of one scale definition.
///
/// Pitches arrive in definition order with at most a cycle-start tag;
/// `build` sorts them, locates the tagged note, recenters every pitch on
/// it, and produces the immutable [`Scale`]. Consuming the builder is
/// what makes normalization a one-shot operation.
#[derive(Debug)]
pub struct ScaleBuilder {
    name: String,
    notes: Vec<(Pitch, bool)>,
}

impl ScaleBuilder {
    /// Create an empty builder for the named scale
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            notes: Vec::new(),
        }
    }

    /// Add an ordinary pitch
    pub fn add_pitch(&mut self, pitch: Pitch) {
        self.notes.push((pitch, false));
    }

    /// Add a pitch marked as the start of the repeat cycle
    pub fn add_cycle_start(&mut self, pitch: Pitch) {
        self.notes.push((pitch, true));
    }

    /// Number of pitches added so far
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Check if no pitches have been added
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Sort, locate the cycle start, and normalize into a [`Scale`].
    ///
    /// When several pitches were marked, the last mark wins; with no mark
    /// the lowest pitch starts the cycle. Every pitch is recentered so the
    /// cycle-start pitch becomes 0, and the cycle length is the count of
    /// recentered pitches >= 0.
    pub fn build(self) -> Scale {
        let Self { name, mut notes } = self;

        // Only the last mark is structural; clear the rest so the tagged
        // note can be found by identity after sorting.
        if let Some(last) = notes.iter().rposition(|&(_, marked)| marked) {
            for (index, note) in notes.iter_mut().enumerate() {
                note.1 = index == last;
            }
        }
        notes.sort_by_key(|&(pitch, _)| pitch);

        let cycle_start = notes.iter().position(|&(_, marked)| marked).unwrap_or(0);
        let mut pitches: Vec<Pitch> = notes.into_iter().map(|(pitch, _)| pitch).collect();

        let cycle_length = if pitches.is_empty() {
            0
        } else {
            let base = pitches[cycle_start];
            for pitch in &mut pitches {
                *pitch -= base;
            }
            pitches.iter().filter(|&&pitch| pitch >= 0).count()
        };

        Scale {
            name,
            pitches,
            cycle_start,
            cycle_length,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_sorts_and_recenters_on_lowest() {
        let mut builder = ScaleBuilder::new("test");
        builder.add_pitch(50);
        builder.add_pitch(38);
        builder.add_pitch(45);

        let scale = builder.build();
        assert_eq!(scale.pitches(), &[0, 7, 12]);
        assert_eq!(scale.cycle_start(), 0);
        assert_eq!(scale.cycle_length(), 3);
    }

    #[test]
    fn test_build_keeps_pitches_non_decreasing() {
        let mut builder = ScaleBuilder::new("test");
        for pitch in [48, 38, 46, 45, 50] {
            builder.add_pitch(pitch);
        }
        let scale = builder.build();
        assert!(scale.pitches().windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_marked_cycle_start_yields_negative_prefix() {
        // Handpan-style: the ding (38) precedes the cycle start (45).
        let mut builder = ScaleBuilder::new("handpan");
        builder.add_pitch(38);
        builder.add_cycle_start(45);
        builder.add_pitch(46);
        builder.add_pitch(48);
        builder.add_pitch(50);

        let scale = builder.build();
        assert_eq!(scale.pitches(), &[-7, 0, 1, 3, 5]);
        assert_eq!(scale.cycle_start(), 1);
        assert_eq!(scale.cycle_length(), 4);
    }

    #[test]
    fn test_cycle_start_survives_later_lower_insertions() {
        // Notes added after the mark sort in front of it; the mark must
        // follow the note, not the insertion index.
        let mut builder = ScaleBuilder::new("test");
        builder.add_cycle_start(45);
        builder.add_pitch(38);
        builder.add_pitch(40);

        let scale = builder.build();
        assert_eq!(scale.cycle_start(), 2);
        assert_eq!(scale.pitches(), &[-7, -5, 0]);
        assert_eq!(scale.cycle_length(), 1);
    }

    #[test]
    fn test_last_cycle_start_mark_wins() {
        let mut builder = ScaleBuilder::new("test");
        builder.add_cycle_start(40);
        builder.add_cycle_start(45);
        builder.add_pitch(50);

        let scale = builder.build();
        assert_eq!(scale.pitches(), &[-5, 0, 5]);
        assert_eq!(scale.cycle_start(), 1);
    }

    #[test]
    fn test_duplicate_pitches_are_kept() {
        let mut builder = ScaleBuilder::new("test");
        builder.add_pitch(40);
        builder.add_pitch(40);
        builder.add_pitch(45);

        let scale = builder.build();
        assert_eq!(scale.pitches(), &[0, 0, 5]);
        assert_eq!(scale.len(), 3);
    }

    #[test]
    fn test_empty_builder_builds_empty_scale() {
        let scale = ScaleBuilder::new("empty").build();
        assert!(scale.is_empty());
        assert_eq!(scale.cycle_length(), 0);
        assert_eq!(scale.cycle_start(), 0);
    }

    #[test]
    fn test_display_format() {
        let mut builder = ScaleBuilder::new("demo");
        builder.add_pitch(38);
        builder.add_pitch(45);
        let scale = builder.build();
        assert_eq!(
            scale.to_string(),
            "demo: pitches=[0, 7], cycle_start=0, cycle_length=2"
        );
    }
}
