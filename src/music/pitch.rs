// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Note-name to pitch resolution.
//!
//! Maps note-name tokens like `C#4`, `Bb`, `g3` to integer semitone
//! offsets above a reference C, and provides the cents-to-voltage
//! conversion used for diagnostic output.

use thiserror::Error;

/// Semitone offset above the reference C
pub type Pitch = i32;

/// Reference frequency for C4 in Hz (used by the 1 V/octave conversion)
pub const C4_HZ: f64 = 261.6256;

/// A token that does not match the note-name grammar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unable to determine pitch for \"{0}\"")]
pub struct UnresolvedNote(pub String);

/// Resolve a note-name token to a semitone offset above C.
///
/// The grammar is one letter A-G (case-insensitive), an optional single
/// accidental (`#` or `b`), and an optional non-negative octave number.
/// Without octave digits the result is the pitch class in 0-11; octave
/// digits add `octave * 12`.
pub fn resolve(token: &str) -> Result<Pitch, UnresolvedNote> {
    let unresolved = || UnresolvedNote(token.to_string());

    let mut chars = token.chars();
    let letter = chars.next().ok_or_else(unresolved)?.to_ascii_uppercase();
    let rest = chars.as_str();
    let (accidental, octave_digits) = match rest.bytes().next() {
        Some(b'#') => (Some('#'), &rest[1..]),
        Some(b'b') => (Some('b'), &rest[1..]),
        _ => (None, rest),
    };

    // Chromatic semitone positions. B#/C and Cb/B alias to the same
    // pitch class (enharmonic wraparound).
    let base = match (letter, accidental) {
        ('C', None) => 0,
        ('D', None) => 2,
        ('E', None) => 4,
        ('F', None) => 5,
        ('G', None) => 7,
        ('A', None) => 9,
        ('B', None) => 11,

        ('C', Some('b')) => 11,
        ('D', Some('b')) => 1,
        ('E', Some('b')) => 3,
        ('F', Some('b')) => 4,
        ('G', Some('b')) => 6,
        ('A', Some('b')) => 8,
        ('B', Some('b')) => 10,

        ('C', Some('#')) => 1,
        ('D', Some('#')) => 3,
        ('E', Some('#')) => 5,
        ('F', Some('#')) => 6,
        ('G', Some('#')) => 8,
        ('A', Some('#')) => 10,
        ('B', Some('#')) => 0,

        _ => return Err(unresolved()),
    };

    if octave_digits.is_empty() {
        return Ok(base);
    }
    if !octave_digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(unresolved());
    }
    let octave: Pitch = octave_digits.parse().map_err(|_| unresolved())?;
    Ok(base + octave * 12)
}

/// Convert a cents offset from C4 to `(frequency_hz, volts)`.
///
/// Volts follow the 1 V/octave convention with C4 at 0 V.
pub fn cents_to_voltage(cents: f64) -> (f64, f64) {
    let freq = C4_HZ * (cents / 1200.0).exp2();
    let volts = (freq / C4_HZ).log2();
    (freq, volts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_naturals() {
        assert_eq!(resolve("C"), Ok(0));
        assert_eq!(resolve("D"), Ok(2));
        assert_eq!(resolve("E"), Ok(4));
        assert_eq!(resolve("F"), Ok(5));
        assert_eq!(resolve("G"), Ok(7));
        assert_eq!(resolve("A"), Ok(9));
        assert_eq!(resolve("B"), Ok(11));
    }

    #[test]
    fn test_resolve_without_octave_stays_in_pitch_class_range() {
        for token in [
            "C", "D", "E", "F", "G", "A", "B", "Cb", "Db", "Eb", "Fb", "Gb", "Ab", "Bb", "C#",
            "D#", "E#", "F#", "G#", "A#", "B#",
        ] {
            let pitch = resolve(token).unwrap();
            assert!((0..12).contains(&pitch), "{} resolved to {}", token, pitch);
        }
    }

    #[test]
    fn test_resolve_octaves() {
        assert_eq!(resolve("C0"), Ok(0));
        assert_eq!(resolve("C4"), Ok(48));
        assert_eq!(resolve("D3"), Ok(38));
        assert_eq!(resolve("A4"), Ok(57));
        assert_eq!(resolve("Bb3"), Ok(46));
        assert_eq!(resolve("G10"), Ok(127));
    }

    #[test]
    fn test_resolve_enharmonics() {
        assert_eq!(resolve("C#"), resolve("Db"));
        assert_eq!(resolve("D#"), resolve("Eb"));
        assert_eq!(resolve("F#"), resolve("Gb"));
        assert_eq!(resolve("G#"), resolve("Ab"));
        assert_eq!(resolve("A#"), resolve("Bb"));
        // Wraparound aliases
        assert_eq!(resolve("B#"), resolve("C"));
        assert_eq!(resolve("Cb"), resolve("B"));
        assert_eq!(resolve("E#"), resolve("F"));
        assert_eq!(resolve("Fb"), resolve("E"));
    }

    #[test]
    fn test_resolve_is_case_insensitive_on_the_letter() {
        assert_eq!(resolve("c4"), resolve("C4"));
        assert_eq!(resolve("bb3"), resolve("Bb3"));
        assert_eq!(resolve("f#2"), resolve("F#2"));
    }

    #[test]
    fn test_resolve_rejects_bad_tokens() {
        assert!(resolve("").is_err());
        assert!(resolve("X9").is_err());
        assert!(resolve("H").is_err());
        assert!(resolve("C##").is_err());
        assert!(resolve("C#x").is_err());
        assert!(resolve("4C").is_err());
        assert!(resolve("C-1").is_err());
    }

    #[test]
    fn test_cents_to_voltage_reference() {
        let (freq, volts) = cents_to_voltage(0.0);
        assert!((freq - C4_HZ).abs() < 1e-9);
        assert!(volts.abs() < 1e-9);
    }

    #[test]
    fn test_cents_to_voltage_octaves() {
        let (freq, volts) = cents_to_voltage(1200.0);
        assert!((freq - 2.0 * C4_HZ).abs() < 1e-6);
        assert!((volts - 1.0).abs() < 1e-9);

        let (freq, volts) = cents_to_voltage(-2400.0);
        assert!((freq - C4_HZ / 4.0).abs() < 1e-6);
        assert!((volts + 2.0).abs() < 1e-9);
    }
}
