/// Lower-case `text`, drop ASCII punctuation and split on whitespace.
///
/// The result is only used for analysis; preview and export keep the
/// original text.
pub fn normalize(text: &str) -> Vec<String> {
    let clean: String = text
        .to_lowercase()
        .chars()
        .filter(|c| !c.is_ascii_punctuation())
        .collect();

    clean.split_whitespace().map(str::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_and_strips_punctuation() {
        let tokens = normalize("Hello, World! It's a \"test\"-case.");
        assert_eq!(tokens, vec!["hello", "world", "its", "a", "testcase"]);
    }

    #[test]
    fn test_punctuation_only_tokens_vanish() {
        let tokens = normalize("one -- two ... three");
        assert_eq!(tokens, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_non_ascii_punctuation_is_kept() {
        let tokens = normalize("R\u{e9}SUM\u{c9} \u{201c}quoted\u{201d}");
        assert_eq!(tokens, vec!["r\u{e9}sum\u{e9}", "\u{201c}quoted\u{201d}"]);
    }

    #[test]
    fn test_blank_input() {
        assert!(normalize("  \n\t ").is_empty());
        assert!(normalize("").is_empty());
    }
}
