// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! Typed diagnostics for batch processing.
//!
//! The pipeline records every problem it meets and keeps going, so a
//! whole definition file can be fixed in one pass. Diagnostics carry a
//! severity; only Error-severity records affect the process exit status.

use thiserror::Error;

use crate::music::Pitch;

/// Severity of a diagnostic record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Severity::Warning => write!(f, "WARNING"),
            Severity::Error => write!(f, "ERROR"),
        }
    }
}

/// A single problem found while loading or validating scale definitions
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Diagnostic {
    /// Token did not match the note-name grammar; pitch defaulted to 0
    #[error("unable to determine pitch for \"{token}\"")]
    UnresolvedNote { token: String },

    /// Resolved pitch is suspiciously high, likely a data-entry mistake
    #[error("pitch {pitch} for \"{token}\" is > {limit}")]
    SuspiciousPitch {
        token: String,
        pitch: Pitch,
        limit: Pitch,
    },

    /// Definition line has no `=` separator or no name
    #[error("badly formed line: \"{line}\"")]
    MalformedLine { line: String },

    /// Two scales in the set share a name
    #[error("scale named \"{name}\" is multiply defined")]
    DuplicateName { name: String },

    /// Two scales in the set have identical normalized intervals
    #[error("duplicate scale intervals: \"{first}\" and \"{second}\"")]
    DuplicateIntervals { first: String, second: String },
}

impl Diagnostic {
    pub fn severity(&self) -> Severity {
        match self {
            Diagnostic::UnresolvedNote { .. } | Diagnostic::MalformedLine { .. } => Severity::Error,
            Diagnostic::SuspiciousPitch { .. }
            | Diagnostic::DuplicateName { .. }
            | Diagnostic::DuplicateIntervals { .. } => Severity::Warning,
        }
    }
}

/// Ordered collection of diagnostics for one batch run
#[derive(Debug, Default)]
pub struct Diagnostics {
    records: Vec<Diagnostic>,
}

impl Diagnostics {
    /// Create an empty collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a diagnostic
    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.records.push(diagnostic);
    }

    /// Record several diagnostics in order
    pub fn extend(&mut self, diagnostics: impl IntoIterator<Item = Diagnostic>) {
        self.records.extend(diagnostics);
    }

    /// Iterate over records in the order they were produced
    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.records.iter()
    }

    /// Total number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if no diagnostics were recorded
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of Error-severity records
    pub fn error_count(&self) -> usize {
        self.records
            .iter()
            .filter(|d| d.severity() == Severity::Error)
            .count()
    }

    /// Number of Warning-severity records
    pub fn warning_count(&self) -> usize {
        self.records
            .iter()
            .filter(|d| d.severity() == Severity::Warning)
            .count()
    }

    /// Check if any Error-severity record was produced
    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }
}
