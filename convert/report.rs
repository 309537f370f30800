//! Diagnostics accumulated during extraction.
//!
//! Extraction never logs directly; recoverable oddities are collected here
//! and the binary decides how to surface them.

use std::fmt;

#[derive(Debug)]
pub enum Diagnostic {
    /// A data row was dropped because a required link was missing.
    RowSkipped { section: String, detail: String },
    /// A media link matched neither the image nor the video patterns.
    UnknownMedia { url: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::RowSkipped { section, detail } => {
                write!(f, "skipped row in section {section:?}: {detail}")
            }
            Diagnostic::UnknownMedia { url } => {
                write!(f, "unknown media type for url {url}")
            }
        }
    }
}

#[derive(Debug, Default)]
pub struct Report {
    events: Vec<Diagnostic>,
}

impl Report {
    pub fn new() -> Self {
        Report::default()
    }

    pub fn row_skipped(&mut self, section: &str, detail: String) {
        self.events.push(Diagnostic::RowSkipped {
            section: section.to_string(),
            detail,
        });
    }

    pub fn unknown_media(&mut self, url: &str) {
        self.events.push(Diagnostic::UnknownMedia {
            url: url.to_string(),
        });
    }

    pub fn events(&self) -> &[Diagnostic] {
        &self.events
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
