//! RTF emission.
//!
//! Produces standard-manuscript-format RTF: fixed header and font table,
//! info block, running header with a page-number field, double-spaced
//! indented prose, centered chapter headings and scene breaks, and the
//! closing end-of-manuscript marker.

use crate::model::{Block, BlockClassifier, Manuscript, Metadata};

const CENTER: &str = r"\qc ";
const LINE_BREAK: &str = r"\line ";
const START_PAR: &str = r"\pard ";
const INDENT: &str = r"\fi720 ";
const END_PAR: &str = r"\par ";
const DOUBLE_SPACE: &str = r"\sl480\slmult1 ";
const SIZE_12: &str = r"\f0\fs24 ";
const HALF_PAGE_VERTICAL_SPACE: &str = r"\sb3600";

/// Document-format declaration and font table. Static boilerplate, not
/// derived from input.
const FILE_HEADER: &str = "{\\rtf1\\ansi\\deff1\\ansicpg10000{\\fonttbl\\f0\\fmodern\
\\fcharset77 Courier;\\f1\\froman\\fcharset77 Times New Roman;}\
\\margl1440\\margr1440\\vieww12240\\viewh15840\\viewkind1\
\\viewscale100\\titlepg";

/// Convert a parsed manuscript to an RTF document string.
pub fn to_rtf(manuscript: &Manuscript) -> String {
    let mut renderer = RtfRenderer::new();
    renderer.add_file_header();
    renderer.add_metadata_header(&manuscript.metadata);
    renderer.add_body(&manuscript.paragraphs);
    renderer.finish()
}

/// RTF document builder.
///
/// Fragments are appended in order and concatenated without separators on
/// [`finish`](RtfRenderer::finish); RTF readers do not need line breaks
/// between control sequences.
pub struct RtfRenderer {
    lines: Vec<String>,
    chapter_number: u32,
    classifier: BlockClassifier,
}

impl RtfRenderer {
    /// Create an empty renderer.
    pub fn new() -> Self {
        Self {
            lines: Vec::new(),
            chapter_number: 1,
            classifier: BlockClassifier::new(),
        }
    }

    /// Append the fixed file header and font table.
    pub fn add_file_header(&mut self) {
        self.lines.push(FILE_HEADER.to_string());
    }

    /// Append the info block, running header, and title page front matter.
    pub fn add_metadata_header(&mut self, metadata: &Metadata) {
        self.lines.extend([
            "{\\info".to_string(),
            format!("{{\\title {}}}", metadata.title),
            "{\\doccomm Generated from latex! }".to_string(),
            format!("{{\\author {}}}}}", metadata.author),
            "{\\headerf}".to_string(),
            format!(
                "{{\\header{}}}",
                single_space_p(&format!(
                    "\\qr\\f0{{{} / {} / {{\\field{{\\*\\fldinst PAGE }}}}}}",
                    metadata.surname,
                    metadata.running_title.to_uppercase()
                ))
            ),
            "{\\i0\\scaps0\\b0".to_string(),
            single_space_p(&format!(
                "\\tqr\\tx10000{}\\tab {} words",
                metadata.author_name, metadata.word_count
            )),
            LINE_BREAK.to_string(),
            single_space_p(&metadata.address.replace('\n', LINE_BREAK)),
            p(HALF_PAGE_VERTICAL_SPACE),
            centered_p(&metadata.title.to_uppercase()),
            centered_p(&format!("by {}", metadata.author)),
            blank_line(),
            blank_line(),
        ]);
    }

    /// Append the body paragraphs and the closing sequence.
    pub fn add_body(&mut self, paragraphs: &[String]) {
        for paragraph in paragraphs {
            match self.classifier.classify(paragraph) {
                Block::Chapter { title } => {
                    self.lines
                        .push(centered_bold_p(&format!("Chapter {}", self.chapter_number)));
                    self.lines.push(centered_bold_p(&title));
                    self.chapter_number += 1;
                }
                Block::UnnumberedChapter { title } => {
                    self.lines.push(centered_bold_p(&title));
                }
                Block::SceneBreak => {
                    self.lines.push(centered_p("#"));
                }
                Block::Prose(text) => {
                    // the opening marker maps to an underline group; the
                    // matching closing brace already reads as the group
                    // terminator in RTF
                    let text = text
                        .replace(r"\emph{", "{\\ul ")
                        .replace(r"\thought{", "{\\ul ");
                    self.lines.push(indented_p(&text));
                }
            }
        }
        self.lines.push(centered_p("# # # # #"));
        self.lines.push("}}".to_string());
    }

    /// Concatenate all fragments into the final document.
    pub fn finish(self) -> String {
        self.lines.concat()
    }
}

impl Default for RtfRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn centered_p(text: &str) -> String {
    format!("{START_PAR}{DOUBLE_SPACE}{CENTER}{SIZE_12}{text}{END_PAR}")
}

fn centered_bold_p(text: &str) -> String {
    centered_p(&format!("{{\\b {text} }}"))
}

fn indented_p(text: &str) -> String {
    format!("{START_PAR}{INDENT}{DOUBLE_SPACE}{SIZE_12}{text}{END_PAR}")
}

fn p(text: &str) -> String {
    format!("{START_PAR}{DOUBLE_SPACE}{SIZE_12}{text}{END_PAR}")
}

fn single_space_p(text: &str) -> String {
    format!("{START_PAR}{SIZE_12}{text}{END_PAR}")
}

fn blank_line() -> String {
    p("")
}
