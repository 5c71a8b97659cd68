//! Logical line normalization.

/// Trim raw lines and join explicit continuations.
///
/// Every line is trimmed of surrounding whitespace. A line ending in `\\`
/// has the marker stripped and the following line appended after a newline,
/// repeating across any run of continued lines. Ordering is preserved.
pub fn normalize_lines(lines: &[String]) -> Vec<String> {
    let mut joined: Vec<String> = Vec::new();
    let mut join_next_line = false;

    for line in lines {
        let trimmed = line.trim();
        if join_next_line {
            join_next_line = false;
            if let Some(last) = joined.last_mut() {
                last.push('\n');
                last.push_str(trimmed);
            }
        } else {
            joined.push(trimmed.to_string());
        }

        if trimmed.ends_with(r"\\") {
            if let Some(last) = joined.last_mut() {
                last.truncate(last.len() - 2);
            }
            join_next_line = true;
        }
    }

    joined
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_trims_whitespace() {
        let out = normalize_lines(&lines(&["  hello  ", "\tworld\t"]));
        assert_eq!(out, vec!["hello", "world"]);
    }

    #[test]
    fn test_joins_continuation() {
        let out = normalize_lines(&lines(&[r"12 Example Road \\", "Springfield"]));
        assert_eq!(out, vec!["12 Example Road \nSpringfield"]);
    }

    #[test]
    fn test_joins_consecutive_continuations() {
        let out = normalize_lines(&lines(&[r"a \\", r"b \\", "c"]));
        assert_eq!(out, vec!["a \nb \nc"]);
    }

    #[test]
    fn test_no_reordering() {
        let out = normalize_lines(&lines(&["one", "", "two"]));
        assert_eq!(out, vec!["one", "", "two"]);
    }

    #[test]
    fn test_trailing_continuation_at_end_of_input() {
        let out = normalize_lines(&lines(&[r"dangling \\"]));
        assert_eq!(out, vec!["dangling "]);
    }
}
