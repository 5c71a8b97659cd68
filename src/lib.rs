//! # sffms2rtf
//!
//! Converts sffms LaTeX manuscripts to standard-manuscript-format RTF.
//!
//! The converter resolves `\include`/`\input` directives into one flat
//! document, extracts the preamble metadata (title, author, address, word
//! count), reflows the body into paragraphs, and maps structural markers
//! (chapters, scene breaks, emphasis) to RTF control sequences. It is a
//! one-shot batch tool: one root file in, one RTF file out.
//!
//! ## Quick Start
//!
//! ```no_run
//! fn main() -> sffms2rtf::Result<()> {
//!     // Parse the manuscript and write story.rtf next to it
//!     let output = sffms2rtf::convert_file("story.tex")?;
//!     println!("wrote {}", output.display());
//!     Ok(())
//! }
//! ```
//!
//! ## Supported markup
//!
//! - **Inclusions**: `\include{file}`, `\input{file}` (nested, cycle-checked)
//! - **Metadata**: `\runningtitle`, `\title`, `\author`, `\authorname`,
//!   `\surname`, `\address`, `\wordcount`
//! - **Structure**: `\begin{document}`/`\end{document}`, `\chapter{}`,
//!   `\chapter*{}`, `\scenebreak`, `\newscene`
//! - **Emphasis**: `\emph{}`, `\thought{}` (rendered underlined)

pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Block, BlockClassifier, Manuscript, Metadata};
pub use parser::{ManuscriptParser, ParseOptions};

use std::fs;
use std::path::{Path, PathBuf};

/// Parse a manuscript root file into a [`Manuscript`].
///
/// # Example
///
/// ```no_run
/// let manuscript = sffms2rtf::parse_file("story.tex").unwrap();
/// println!("{} paragraphs", manuscript.paragraph_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Manuscript> {
    let parser = ManuscriptParser::open(path)?;
    parser.parse()
}

/// Parse a manuscript root file with custom options.
pub fn parse_file_with_options<P: AsRef<Path>>(
    path: P,
    options: ParseOptions,
) -> Result<Manuscript> {
    let parser = ManuscriptParser::open_with_options(path, options)?;
    parser.parse()
}

/// Convert a manuscript and write the RTF next to the input.
///
/// The output path is the input path with its extension changed to `.rtf`.
/// Returns the path written.
pub fn convert_file<P: AsRef<Path>>(path: P) -> Result<PathBuf> {
    let input = path.as_ref();
    let manuscript = parse_file(input)?;
    let output = output_path_for(input);
    fs::write(&output, render::to_rtf(&manuscript))?;
    Ok(output)
}

/// Output path derived from an input path: same location, `.rtf` extension.
pub fn output_path_for(input: &Path) -> PathBuf {
    input.with_extension("rtf")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_for() {
        assert_eq!(
            output_path_for(Path::new("dir/story.tex")),
            PathBuf::from("dir/story.rtf")
        );
        assert_eq!(
            output_path_for(Path::new("story")),
            PathBuf::from("story.rtf")
        );
    }

    #[test]
    fn test_parse_file_missing_input() {
        let result = parse_file("no-such-manuscript.tex");
        assert!(matches!(result, Err(Error::InvalidInput(_))));
    }
}
