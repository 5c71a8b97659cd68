//! Manuscript-level types.

use super::Metadata;
use serde::{Deserialize, Serialize};

/// A parsed manuscript: preamble metadata plus the reflowed body.
///
/// Paragraphs are kept as plain text; chapter and scene-break markers stay
/// embedded and are classified by the emitter.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Manuscript {
    /// Metadata extracted from the preamble
    pub metadata: Metadata,

    /// Body paragraphs in document order
    pub paragraphs: Vec<String>,
}

impl Manuscript {
    /// Create a new empty manuscript.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of body paragraphs.
    pub fn paragraph_count(&self) -> usize {
        self.paragraphs.len()
    }

    /// Check if the manuscript has no body content.
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Body text with one paragraph per line, markers included.
    pub fn plain_text(&self) -> String {
        self.paragraphs.join("\n")
    }

    /// Word count estimated from the body text.
    ///
    /// This is a whitespace-split count over the raw paragraphs, distinct
    /// from the author-declared `\wordcount` value.
    pub fn estimated_word_count(&self) -> usize {
        self.paragraphs
            .iter()
            .map(|p| p.split_whitespace().count())
            .sum()
    }
}
