//! Manuscript metadata.

use serde::{Deserialize, Serialize};

/// Metadata extracted from the manuscript preamble.
///
/// Every field defaults to the empty string; a field is overwritten each
/// time its tag is encountered, so the last occurrence wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    /// Full document title (`\title`)
    pub title: String,

    /// Short title printed in the page header (`\runningtitle`)
    pub running_title: String,

    /// Author byline (`\author`)
    pub author: String,

    /// Author's legal/display name (`\authorname`)
    pub author_name: String,

    /// Surname used in the running header (`\surname`)
    pub surname: String,

    /// Postal address, may span multiple lines (`\address`)
    pub address: String,

    /// Declared word count (`\wordcount`)
    pub word_count: String,
}

impl Metadata {
    /// Create empty metadata.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fill derived fields that were not set explicitly.
    ///
    /// The running title falls back to the full title, and both the
    /// display name and the surname fall back to the author byline.
    pub fn apply_defaults(&mut self) {
        if self.running_title.is_empty() {
            self.running_title = self.title.clone();
        }
        if self.author_name.is_empty() {
            self.author_name = self.author.clone();
        }
        if self.surname.is_empty() {
            self.surname = self.author.clone();
        }
    }
}
