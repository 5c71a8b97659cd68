//! Manuscript parsing module.
//!
//! The pipeline runs strictly left to right: resolve inclusions into a
//! flat line sequence, normalize lines, extract metadata and the body,
//! then reflow the body into paragraphs.

mod extract;
mod includes;
mod lines;
mod options;
mod reflow;

pub use extract::MetadataExtractor;
pub use includes::IncludeResolver;
pub use lines::normalize_lines;
pub use options::ParseOptions;
pub use reflow::reflow;

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::model::Manuscript;

/// Parser for sffms manuscript files.
#[derive(Debug)]
pub struct ManuscriptParser {
    path: PathBuf,
    options: ParseOptions,
}

impl ManuscriptParser {
    /// Open a manuscript root file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a manuscript root file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::InvalidInput(path.to_path_buf()));
        }
        Ok(Self {
            path: path.to_path_buf(),
            options,
        })
    }

    /// Path of the root file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Run the full pipeline and return the parsed manuscript.
    pub fn parse(&self) -> Result<Manuscript> {
        let resolver = IncludeResolver::new(self.options.max_include_depth);
        let raw = resolver.resolve(&self.path)?;
        log::debug!("resolved {} lines from {}", raw.len(), self.path.display());

        let lines = normalize_lines(&raw);
        let extractor = MetadataExtractor::new();
        let (metadata, body) = extractor.extract(&lines);
        let paragraphs = reflow(&body);
        log::debug!("{} body paragraphs", paragraphs.len());

        Ok(Manuscript {
            metadata,
            paragraphs,
        })
    }
}
