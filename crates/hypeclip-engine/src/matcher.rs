//! Keyword matching over transcript tokens.

use serde::{Deserialize, Serialize};

use hypeclip_models::{KeywordHit, Token};

/// Substring matching policy for a token against a keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchPolicy {
    /// A token qualifies when a keyword is a substring of its text.
    #[default]
    KeywordInToken,
    /// A token qualifies when a keyword is a substring of its text,
    /// or its text is a substring of a keyword.
    Either,
}

/// A normalized, ordered set of keywords.
///
/// Keywords are lowercased and trimmed on construction; empty entries
/// are dropped and duplicates keep their first occurrence, so match
/// resolution order is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSet {
    keywords: Vec<String>,
    #[serde(default)]
    policy: MatchPolicy,
}

impl KeywordSet {
    pub fn new<I, S>(keywords: I, policy: MatchPolicy) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut normalized: Vec<String> = Vec::new();
        for kw in keywords {
            let kw = kw.as_ref().trim().to_lowercase();
            if !kw.is_empty() && !normalized.contains(&kw) {
                normalized.push(kw);
            }
        }
        Self {
            keywords: normalized,
            policy,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }

    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    /// Return the first configured keyword matching `text`, if any.
    ///
    /// `text` must already be lowercased by the caller.
    fn first_match(&self, text: &str) -> Option<&str> {
        self.keywords
            .iter()
            .find(|kw| match self.policy {
                MatchPolicy::KeywordInToken => text.contains(kw.as_str()),
                MatchPolicy::Either => {
                    text.contains(kw.as_str()) || (!text.is_empty() && kw.contains(text))
                }
            })
            .map(String::as_str)
    }

    /// Filter an ordered token stream into an ordered sequence of
    /// keyword hits, one per qualifying token.
    ///
    /// An empty keyword set yields empty output. No side effects.
    pub fn scan(&self, tokens: &[Token]) -> Vec<KeywordHit> {
        if self.keywords.is_empty() {
            return Vec::new();
        }

        tokens
            .iter()
            .filter_map(|token| {
                let normalized = token.text.to_lowercase();
                self.first_match(normalized.trim()).map(|kw| KeywordHit {
                    timestamp: token.start,
                    matched_text: token.text.clone(),
                    keyword: kw.to_string(),
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(entries: &[(&str, f64)]) -> Vec<Token> {
        entries
            .iter()
            .map(|(text, start)| Token::new(*text, *start, start + 2.0))
            .collect()
    }

    #[test]
    fn test_case_insensitive_substring_match() {
        let set = KeywordSet::new(["lol", "scream"], MatchPolicy::KeywordInToken);
        let hits = set.scan(&tokens(&[
            ("that was hilarious LOLOLOL", 3.0),
            ("nothing here", 8.0),
            ("he Screamed so loud", 12.5),
        ]));

        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].timestamp, 3.0);
        assert_eq!(hits[0].keyword, "lol");
        assert_eq!(hits[1].timestamp, 12.5);
        assert_eq!(hits[1].keyword, "scream");
    }

    #[test]
    fn test_order_preserved_and_every_match_emitted() {
        let set = KeywordSet::new(["haha"], MatchPolicy::KeywordInToken);
        let hits = set.scan(&tokens(&[
            ("hahaha", 1.0),
            ("quiet", 2.0),
            ("hahahaha", 3.0),
            ("HAHA", 4.0),
        ]));
        let stamps: Vec<f64> = hits.iter().map(|h| h.timestamp).collect();
        assert_eq!(stamps, vec![1.0, 3.0, 4.0]);
    }

    #[test]
    fn test_first_keyword_wins_when_multiple_match() {
        let set = KeywordSet::new(["laugh", "laughing"], MatchPolicy::KeywordInToken);
        let hits = set.scan(&tokens(&[("everyone was laughing", 10.0)]));
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].keyword, "laugh");
    }

    #[test]
    fn test_empty_keyword_set_yields_empty_output() {
        let set = KeywordSet::new(Vec::<&str>::new(), MatchPolicy::KeywordInToken);
        assert!(set.is_empty());
        assert!(set.scan(&tokens(&[("anything", 0.0)])).is_empty());
    }

    #[test]
    fn test_normalization_drops_blank_and_duplicate_keywords() {
        let set = KeywordSet::new(["  LOL ", "", "lol", "haha"], MatchPolicy::KeywordInToken);
        assert_eq!(set.keywords(), &["lol", "haha"]);
    }

    #[test]
    fn test_multi_word_keywords_match_as_substrings() {
        let set = KeywordSet::new(["no way"], MatchPolicy::KeywordInToken);
        let hits = set.scan(&tokens(&[("there is NO WAY that happened", 7.0)]));
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_either_policy_matches_token_inside_keyword() {
        let set = KeywordSet::new(["hahaha"], MatchPolicy::Either);
        // Token text "haha" is a substring of the keyword.
        let hits = set.scan(&tokens(&[("haha", 2.0)]));
        assert_eq!(hits.len(), 1);

        let strict = KeywordSet::new(["hahaha"], MatchPolicy::KeywordInToken);
        assert!(strict.scan(&tokens(&[("haha", 2.0)])).is_empty());
    }

    #[test]
    fn test_hit_records_source_token_text() {
        let set = KeywordSet::new(["aduh"], MatchPolicy::KeywordInToken);
        let hits = set.scan(&tokens(&[("Aduh, that hurt", 42.0)]));
        assert_eq!(hits[0].matched_text, "Aduh, that hurt");
    }
}
