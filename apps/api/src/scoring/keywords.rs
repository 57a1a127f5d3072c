use std::collections::BTreeSet;

/// The vocabulary of a text: its unique lowercase whitespace-delimited tokens.
///
/// No stemming, no stopword removal and no punctuation stripping, so
/// `"results,"` and `"results"` are different keywords. Backed by a `BTreeSet`
/// so iteration is always in lexicographic order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeywordSet {
    tokens: BTreeSet<String>,
}

impl KeywordSet {
    pub fn from_text(text: &str) -> Self {
        Self {
            tokens: text
                .split_whitespace()
                .map(|token| token.to_lowercase())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, keyword: &str) -> bool {
        self.tokens.contains(keyword)
    }

    /// Keywords in lexicographic order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}
