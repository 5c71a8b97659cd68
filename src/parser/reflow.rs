//! Paragraph reflow.

/// Merge body lines into paragraphs.
///
/// Blank lines separate paragraphs; consecutive non-blank lines are joined
/// with single spaces. Reflowing a single blank-free paragraph returns it
/// unchanged apart from trimming.
pub fn reflow(lines: &[String]) -> Vec<String> {
    // a blank line becomes an explicit break token so one join/split pass
    // does the grouping
    let tokens: Vec<&str> = lines
        .iter()
        .map(|line| if line.is_empty() { "\n" } else { line.as_str() })
        .collect();

    tokens
        .join(" ")
        .split('\n')
        .map(str::trim)
        .filter(|paragraph| !paragraph.is_empty())
        .map(String::from)
        .collect()
}
