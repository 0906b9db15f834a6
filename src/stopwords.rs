use std::collections::HashSet;

/// Common English words never ranked as keywords
const ENGLISH: &[&str] = &[
    "the", "and", "for", "with", "this", "that", "from", "have", "are", "was", "were", "will",
    "shall", "into", "your", "our", "their", "there", "here", "about",
];

/// A set of lower-case words excluded from keyword ranking
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StopwordSet {
    words: HashSet<String>,
}

impl StopwordSet {
    /// The built-in English set
    pub fn english() -> Self {
        Self::from_list(ENGLISH)
    }

    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        let mut set = Self::default();
        set.extend(words);
        set
    }

    /// Add words to the set, lower-cased
    pub fn extend<S: AsRef<str>>(&mut self, words: &[S]) {
        for word in words {
            self.words.insert(word.as_ref().to_lowercase());
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.words.contains(token)
    }
}
