/// Rules for treating a line as a section heading
#[derive(Debug, Clone, Copy)]
pub struct HeadingRules {
    /// Lines at least this many characters long (untrimmed) are never headings
    pub max_len: usize,
    /// Most headings returned
    pub limit: usize,
    /// Reject lines that contain no letters at all, such as page numbers
    pub require_letter: bool,
}

/// Short, fully upper-case lines of `text`, in their original order.
pub fn detect_headings(text: &str, rules: &HeadingRules) -> Vec<String> {
    text.split('\n')
        .filter(|line| line.chars().count() < rules.max_len)
        .map(str::trim)
        .filter(|line| !line.is_empty() && is_upper(line, rules.require_letter))
        .take(rules.limit)
        .map(str::to_string)
        .collect()
}

/// No lower-case letters. Lines without any letters pass unless
/// `require_letter` is set.
fn is_upper(line: &str, require_letter: bool) -> bool {
    if line.chars().any(char::is_lowercase) {
        return false;
    }
    !require_letter || line.chars().any(char::is_alphabetic)
}
