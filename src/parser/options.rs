//! Parsing options and configuration.

/// Options for parsing sffms manuscripts.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Maximum inclusion nesting depth
    pub max_include_depth: usize,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum inclusion nesting depth.
    pub fn with_max_include_depth(mut self, depth: usize) -> Self {
        self.max_include_depth = depth;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_include_depth: 10,
        }
    }
}
