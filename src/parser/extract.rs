//! Metadata and body extraction.
//!
//! One forward scan over the normalized lines fills the metadata record
//! and locates the document body boundaries.

use regex::Regex;

use crate::model::Metadata;

/// Extracts preamble metadata and the document body from normalized lines.
pub struct MetadataExtractor {
    tags: Regex,
    begin_document: Regex,
    end_document: Regex,
}

impl MetadataExtractor {
    /// Create a new extractor.
    pub fn new() -> Self {
        Self {
            // Tags match only at the start of a line. Captures are
            // non-greedy and may span embedded newlines left by
            // continuation joining (the address is usually multi-line).
            tags: Regex::new(
                r"(?s)^(?:\\runningtitle\{(?P<running_title>.*?)\}|\\title\{(?P<title>.*?)\}|\\author\{(?P<author>.*?)\}|\\authorname\{(?P<author_name>.*?)\}|\\surname\{(?P<surname>.*?)\}|\\address\{(?P<address>.*?)\}|\\wordcount\{(?P<word_count>.*?)\})",
            )
            .unwrap(),
            begin_document: Regex::new(r"\\begin\{document\}").unwrap(),
            end_document: Regex::new(r"\\end\{document\}").unwrap(),
        }
    }

    /// Scan the lines, returning the metadata record and the body lines.
    ///
    /// The body runs from the line after `\begin{document}` up to but not
    /// including the line before `\end{document}`; that trailing line is
    /// dropped by the boundary convention. A field is overwritten on each
    /// non-empty capture, so the last occurrence of a tag wins. Missing
    /// document markers yield an empty body with a warning rather than an
    /// error.
    pub fn extract(&self, lines: &[String]) -> (Metadata, Vec<String>) {
        let mut metadata = Metadata::new();
        let mut start_document = 0usize;
        let mut end_document = 0usize;
        let mut markers_found = false;

        for (i, line) in lines.iter().enumerate() {
            if let Some(captures) = self.tags.captures(line) {
                set_field(&mut metadata.running_title, &captures, "running_title");
                set_field(&mut metadata.title, &captures, "title");
                set_field(&mut metadata.author, &captures, "author");
                set_field(&mut metadata.author_name, &captures, "author_name");
                set_field(&mut metadata.surname, &captures, "surname");
                set_field(&mut metadata.address, &captures, "address");
                set_field(&mut metadata.word_count, &captures, "word_count");
            }

            if self.begin_document.is_match(line) {
                start_document = i + 1;
                markers_found = true;
            }
            if self.end_document.is_match(line) {
                end_document = i.saturating_sub(1);
                markers_found = true;
            }
        }

        metadata.apply_defaults();

        if !markers_found {
            log::warn!("no \\begin{{document}}/\\end{{document}} markers found, body is empty");
        }

        let body = lines
            .get(start_document..end_document)
            .unwrap_or(&[])
            .to_vec();
        (metadata, body)
    }
}

impl Default for MetadataExtractor {
    fn default() -> Self {
        Self::new()
    }
}

fn set_field(field: &mut String, captures: &regex::Captures<'_>, name: &str) {
    if let Some(value) = captures.name(name) {
        if !value.as_str().is_empty() {
            *field = value.as_str().to_string();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_all_tags() {
        let extractor = MetadataExtractor::new();
        let (metadata, _) = extractor.extract(&lines(&[
            r"\runningtitle{Short}",
            r"\title{A Longer Title}",
            r"\author{J. Doe}",
            r"\authorname{Jane Doe}",
            r"\surname{Doe}",
            r"\address{12 Example Road}",
            r"\wordcount{5000}",
        ]));

        assert_eq!(metadata.running_title, "Short");
        assert_eq!(metadata.title, "A Longer Title");
        assert_eq!(metadata.author, "J. Doe");
        assert_eq!(metadata.author_name, "Jane Doe");
        assert_eq!(metadata.surname, "Doe");
        assert_eq!(metadata.address, "12 Example Road");
        assert_eq!(metadata.word_count, "5000");
    }

    #[test]
    fn test_last_match_wins() {
        let extractor = MetadataExtractor::new();
        let (metadata, _) =
            extractor.extract(&lines(&[r"\title{First}", r"\title{Second}"]));
        assert_eq!(metadata.title, "Second");
    }

    #[test]
    fn test_tag_not_at_line_start_ignored() {
        let extractor = MetadataExtractor::new();
        let (metadata, _) = extractor.extract(&lines(&[r"see \title{Not Mine}"]));
        assert_eq!(metadata.title, "");
    }

    #[test]
    fn test_multiline_address_capture() {
        let extractor = MetadataExtractor::new();
        let (metadata, _) =
            extractor.extract(&lines(&["\\address{12 Example Road \nSpringfield}"]));
        assert_eq!(metadata.address, "12 Example Road \nSpringfield");
    }

    #[test]
    fn test_defaulting_from_author() {
        let extractor = MetadataExtractor::new();
        let (metadata, _) = extractor.extract(&lines(&[r"\author{Jane Doe}"]));
        assert_eq!(metadata.author_name, "Jane Doe");
        assert_eq!(metadata.surname, "Jane Doe");
        assert_eq!(metadata.running_title, "");
    }

    #[test]
    fn test_body_boundary_offsets() {
        let extractor = MetadataExtractor::new();
        let (_, body) = extractor.extract(&lines(&[
            r"\begin{document}",
            "first",
            "second",
            "trailing",
            r"\end{document}",
        ]));
        // the line before \end{document} is excluded
        assert_eq!(body, vec!["first", "second"]);
    }

    #[test]
    fn test_missing_markers_yield_empty_body() {
        let extractor = MetadataExtractor::new();
        let (_, body) = extractor.extract(&lines(&["just text", "more text"]));
        assert!(body.is_empty());
    }

    #[test]
    fn test_empty_body_when_markers_adjacent() {
        let extractor = MetadataExtractor::new();
        let (_, body) =
            extractor.extract(&lines(&[r"\begin{document}", r"\end{document}"]));
        assert!(body.is_empty());
    }
}
