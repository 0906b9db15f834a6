use crate::stopwords::StopwordSet;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct KeywordEntry {
    pub token: String,
    pub frequency: usize,
}

/// Count tokens longer than `min_len` characters that are not stopwords
/// and return the `limit` most frequent. Equal counts keep the order in
/// which the tokens were first seen.
pub fn rank_keywords(
    tokens: &[String],
    stopwords: &StopwordSet,
    min_len: usize,
    limit: usize,
) -> Vec<KeywordEntry> {
    // Entries stay in first-seen order; `index` points into them.
    let mut entries: Vec<KeywordEntry> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for token in tokens {
        if stopwords.contains(token) || token.chars().count() <= min_len {
            continue;
        }
        match index.get(token.as_str()) {
            Some(&i) => entries[i].frequency += 1,
            None => {
                index.insert(token.as_str(), entries.len());
                entries.push(KeywordEntry {
                    token: token.clone(),
                    frequency: 1,
                });
            }
        }
    }

    // sort_by is stable
    entries.sort_by(|a, b| b.frequency.cmp(&a.frequency));
    entries.truncate(limit);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize;

    fn rank(text: &str, limit: usize) -> Vec<KeywordEntry> {
        rank_keywords(&normalize(text), &StopwordSet::english(), 5, limit)
    }

    fn tokens(entries: &[KeywordEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.token.as_str()).collect()
    }

    #[test]
    fn test_counts_and_filters() {
        let entries = rank(
            "this is a test document about documentation systems",
            20,
        );
        assert_eq!(tokens(&entries), vec!["document", "documentation", "systems"]);
        assert!(entries.iter().all(|e| e.frequency == 1));
    }

    #[test]
    fn test_ties_keep_first_seen_order() {
        let text = "systems modules systems modules systems modules";
        let entries = rank(text, 20);
        assert_eq!(
            entries,
            vec![
                KeywordEntry {
                    token: "systems".into(),
                    frequency: 3
                },
                KeywordEntry {
                    token: "modules".into(),
                    frequency: 3
                },
            ]
        );
    }

    #[test]
    fn test_higher_frequency_first() {
        let text = "parsing lexers lexers grammar grammar grammar parsing lexers";
        let entries = rank(text, 20);
        assert_eq!(tokens(&entries), vec!["lexers", "grammar", "parsing"]);
        assert_eq!(entries[0].frequency, 3);
        assert_eq!(entries[2].frequency, 2);
    }

    #[test]
    fn test_length_is_in_characters() {
        // five characters, ten bytes
        let entries = rank("\u{e9}\u{e9}\u{e9}\u{e9}\u{e9} \u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}", 20);
        assert_eq!(tokens(&entries), vec!["\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}\u{e9}"]);
    }

    #[test]
    fn test_stopwords_and_short_tokens_excluded() {
        let mut stopwords = StopwordSet::english();
        stopwords.extend(&["reference"]);
        let tokens_in = normalize("reference reference shorty short their theirs");
        let entries = rank_keywords(&tokens_in, &stopwords, 5, 20);
        assert_eq!(tokens(&entries), vec!["shorty", "theirs"]);
        for entry in &entries {
            assert!(entry.token.chars().count() > 5);
            assert!(!stopwords.contains(&entry.token));
        }
    }

    #[test]
    fn test_limit_and_empty() {
        let entries = rank("alphabet bravado charlie deltoid", 2);
        assert_eq!(tokens(&entries), vec!["alphabet", "bravado"]);
        assert!(rank("a an the tiny", 20).is_empty());
    }

    #[test]
    fn test_deterministic_across_runs() {
        let text = "kernel driver kernel module driver module scheduler";
        assert_eq!(rank(text, 20), rank(text, 20));
    }
}
