//! Inclusion directive resolution.
//!
//! Expands `\include{...}` and `\input{...}` lines into the referenced
//! file's contents, recursively, producing one flat line sequence. The
//! inclusion stack gives true cycle detection; the depth limit guards
//! against pathologically deep nesting.

use std::fs;
use std::path::{Path, PathBuf};

use regex::Regex;

use crate::error::{Error, Result};

/// Resolves nested file inclusions into a flat line sequence.
pub struct IncludeResolver {
    max_depth: usize,
    directive: Regex,
}

impl IncludeResolver {
    /// Create a resolver with the given nesting limit.
    pub fn new(max_depth: usize) -> Self {
        Self {
            max_depth,
            directive: Regex::new(r"^(?:\\include|\\input)\{(?P<filename>.*?)\}").unwrap(),
        }
    }

    /// Read the root file and expand every inclusion directive.
    ///
    /// The result contains no unresolved directives, so resolving an
    /// already-flattened file is a no-op read.
    pub fn resolve<P: AsRef<Path>>(&self, root: P) -> Result<Vec<String>> {
        let root = root.as_ref();
        let lines = read_lines(root)?;
        let mut stack = vec![canonical(root)?];
        self.expand(root, &lines, &mut stack, 0)
    }

    fn expand(
        &self,
        source: &Path,
        lines: &[String],
        stack: &mut Vec<PathBuf>,
        depth: usize,
    ) -> Result<Vec<String>> {
        let mut complete = Vec::with_capacity(lines.len());
        for line in lines {
            let Some(captures) = self.directive.captures(line) else {
                complete.push(line.clone());
                continue;
            };

            let mut sub_path = PathBuf::from(&captures["filename"]);
            // a bare name refers to a .tex file
            if sub_path.extension().is_none() {
                sub_path.set_extension("tex");
            }
            // relative names resolve against the including file's directory
            if !sub_path.is_absolute() {
                if let Some(parent) = source.parent() {
                    sub_path = parent.join(sub_path);
                }
            }

            if !sub_path.exists() {
                return Err(Error::MissingInclude(sub_path));
            }
            if depth + 1 > self.max_depth {
                return Err(Error::InclusionDepthExceeded(self.max_depth));
            }
            let canon = canonical(&sub_path)?;
            if stack.contains(&canon) {
                return Err(Error::IncludeCycle(sub_path));
            }

            log::debug!("including {}", sub_path.display());
            let sub_lines = read_lines(&sub_path)?;
            stack.push(canon);
            let expanded = self.expand(&sub_path, &sub_lines, stack, depth + 1)?;
            stack.pop();
            complete.extend(expanded);
        }
        Ok(complete)
    }
}

impl Default for IncludeResolver {
    fn default() -> Self {
        Self::new(10)
    }
}

fn read_lines(path: &Path) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)?;
    Ok(content.lines().map(String::from).collect())
}

fn canonical(path: &Path) -> Result<PathBuf> {
    Ok(path.canonicalize()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_no_includes_passthrough() {
        let dir = tempdir().unwrap();
        let root = write(dir.path(), "main.tex", "one\ntwo\n");

        let lines = IncludeResolver::default().resolve(&root).unwrap();
        assert_eq!(lines, vec!["one", "two"]);
    }

    #[test]
    fn test_include_with_default_extension() {
        let dir = tempdir().unwrap();
        write(dir.path(), "chapter.tex", "chapter text\n");
        let root = write(dir.path(), "main.tex", "before\n\\include{chapter}\nafter\n");

        let lines = IncludeResolver::default().resolve(&root).unwrap();
        assert_eq!(lines, vec!["before", "chapter text", "after"]);
    }

    #[test]
    fn test_input_directive() {
        let dir = tempdir().unwrap();
        write(dir.path(), "front.tex", "front matter\n");
        let root = write(dir.path(), "main.tex", "\\input{front.tex}\nbody\n");

        let lines = IncludeResolver::default().resolve(&root).unwrap();
        assert_eq!(lines, vec!["front matter", "body"]);
    }

    #[test]
    fn test_nested_include_resolves_against_including_file() {
        let dir = tempdir().unwrap();
        let sub = dir.path().join("parts");
        fs::create_dir(&sub).unwrap();
        write(&sub, "inner.tex", "deep\n");
        write(&sub, "outer.tex", "\\include{inner}\n");
        let root = write(dir.path(), "main.tex", "\\include{parts/outer}\n");

        let lines = IncludeResolver::default().resolve(&root).unwrap();
        assert_eq!(lines, vec!["deep"]);
    }

    #[test]
    fn test_missing_include() {
        let dir = tempdir().unwrap();
        let root = write(dir.path(), "main.tex", "\\include{nope}\n");

        let err = IncludeResolver::default().resolve(&root).unwrap_err();
        assert!(matches!(err, Error::MissingInclude(_)));
    }

    #[test]
    fn test_cycle_detected() {
        let dir = tempdir().unwrap();
        write(dir.path(), "a.tex", "\\include{b}\n");
        write(dir.path(), "b.tex", "\\include{a}\n");
        let root = dir.path().join("a.tex");

        let err = IncludeResolver::default().resolve(&root).unwrap_err();
        assert!(matches!(err, Error::IncludeCycle(_)));
    }

    #[test]
    fn test_depth_limit() {
        let dir = tempdir().unwrap();
        for i in 0..12 {
            write(
                dir.path(),
                &format!("f{}.tex", i),
                &format!("\\include{{f{}}}\n", i + 1),
            );
        }
        write(dir.path(), "f12.tex", "bottom\n");
        let root = dir.path().join("f0.tex");

        let err = IncludeResolver::default().resolve(&root).unwrap_err();
        assert!(matches!(err, Error::InclusionDepthExceeded(10)));
    }

    #[test]
    fn test_depth_within_limit() {
        let dir = tempdir().unwrap();
        for i in 0..10 {
            write(
                dir.path(),
                &format!("f{}.tex", i),
                &format!("\\include{{f{}}}\n", i + 1),
            );
        }
        write(dir.path(), "f10.tex", "bottom\n");
        let root = dir.path().join("f0.tex");

        let lines = IncludeResolver::default().resolve(&root).unwrap();
        assert_eq!(lines, vec!["bottom"]);
    }

    #[test]
    fn test_same_file_included_twice_sequentially() {
        // only re-entry on the current branch is a cycle
        let dir = tempdir().unwrap();
        write(dir.path(), "part.tex", "part\n");
        let root = write(dir.path(), "main.tex", "\\include{part}\n\\include{part}\n");

        let lines = IncludeResolver::default().resolve(&root).unwrap();
        assert_eq!(lines, vec!["part", "part"]);
    }

    #[test]
    fn test_resolution_idempotent() {
        let dir = tempdir().unwrap();
        write(dir.path(), "chapter.tex", "chapter text\n");
        let root = write(dir.path(), "main.tex", "\\include{chapter}\nend\n");

        let resolver = IncludeResolver::default();
        let once = resolver.resolve(&root).unwrap();
        let flat = write(dir.path(), "flat.tex", &(once.join("\n") + "\n"));
        let twice = resolver.resolve(&flat).unwrap();
        assert_eq!(once, twice);
    }
}
