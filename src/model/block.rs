//! Structural classification of body paragraphs.

use regex::Regex;

/// The structural role of one body paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// A numbered chapter heading (`\chapter{...}`)
    Chapter {
        /// Chapter title text
        title: String,
    },

    /// An unnumbered chapter heading (`\chapter*{...}`)
    UnnumberedChapter {
        /// Chapter title text
        title: String,
    },

    /// A scene separation (`\scenebreak` or `\newscene`)
    SceneBreak,

    /// Ordinary prose, markers left untouched
    Prose(String),
}

/// Classifies paragraphs into [`Block`]s.
///
/// Chapter markers are only recognized at the start of a paragraph; scene
/// breaks are recognized anywhere within it.
pub struct BlockClassifier {
    chapter: Regex,
    scene_break: Regex,
}

impl BlockClassifier {
    /// Create a new classifier.
    pub fn new() -> Self {
        Self {
            chapter: Regex::new(
                r"^\\chapter\{(?P<numbered>.*?)\}|^\\chapter\*\{(?P<unnumbered>.*?)\}",
            )
            .unwrap(),
            scene_break: Regex::new(r"\\scenebreak|\\newscene").unwrap(),
        }
    }

    /// Classify one paragraph.
    pub fn classify(&self, paragraph: &str) -> Block {
        if let Some(captures) = self.chapter.captures(paragraph) {
            if let Some(title) = captures.name("numbered") {
                return Block::Chapter {
                    title: title.as_str().to_string(),
                };
            }
            if let Some(title) = captures.name("unnumbered") {
                return Block::UnnumberedChapter {
                    title: title.as_str().to_string(),
                };
            }
        }
        if self.scene_break.is_match(paragraph) {
            return Block::SceneBreak;
        }
        Block::Prose(paragraph.to_string())
    }
}

impl Default for BlockClassifier {
    fn default() -> Self {
        Self::new()
    }
}
