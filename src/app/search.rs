//! Text query matching.
//!
//! A [`TextMatcher`] is built from the raw query typed by the user. Queries
//! of [`MIN_QUERY_LEN`] characters or fewer do not filter at all; the session
//! treats them as "every item active".

use super::modes::SearchMode;
use crate::domain::Item;
use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;
use regex::{Regex, RegexBuilder};

/// Queries must be longer than this many characters to filter.
pub const MIN_QUERY_LEN: usize = 2;

/// Compiled text query.
pub enum TextMatcher {
    Pattern(Regex),
    Fuzzy {
        matcher: SkimMatcherV2,
        tokens: Vec<String>,
    },
}

impl std::fmt::Debug for TextMatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pattern(regex) => f.debug_tuple("Pattern").field(&regex.as_str()).finish(),
            Self::Fuzzy { tokens, .. } => f.debug_struct("Fuzzy").field("tokens", tokens).finish_non_exhaustive(),
        }
    }
}

impl TextMatcher {
    /// Compiles `query`, or returns `None` if it is too short to filter.
    ///
    /// # Examples
    ///
    /// ```
    /// use facetpage::app::modes::SearchMode;
    /// use facetpage::app::search::TextMatcher;
    /// use facetpage::domain::{Item, ItemRecord};
    ///
    /// assert!(TextMatcher::new("ab", SearchMode::Pattern).is_none());
    ///
    /// let matcher = TextMatcher::new("SHIRT", SearchMode::Pattern).unwrap();
    /// let item = Item::from_record(ItemRecord::new("a", "Red shirt"), 0);
    /// assert!(matcher.matches(&item));
    /// ```
    #[must_use]
    pub fn new(query: &str, mode: SearchMode) -> Option<Self> {
        if query.chars().count() <= MIN_QUERY_LEN {
            return None;
        }

        match mode {
            SearchMode::Pattern => {
                let regex = RegexBuilder::new(query)
                    .case_insensitive(true)
                    .build()
                    .or_else(|e| {
                        tracing::debug!(query = %query, error = %e, "invalid pattern, matching literally");
                        RegexBuilder::new(&regex::escape(query))
                            .case_insensitive(true)
                            .build()
                    })
                    .ok()?;
                Some(Self::Pattern(regex))
            }
            SearchMode::Fuzzy => {
                let tokens: Vec<String> = query.split_whitespace().map(str::to_lowercase).collect();
                if tokens.is_empty() {
                    return None;
                }
                Some(Self::Fuzzy {
                    matcher: SkimMatcherV2::default(),
                    tokens,
                })
            }
        }
    }

    /// Whether the item's text matches the query.
    #[must_use]
    pub fn matches(&self, item: &Item) -> bool {
        match self {
            Self::Pattern(regex) => regex.is_match(&item.text),
            Self::Fuzzy { matcher, tokens } => {
                let text = item.text.to_lowercase();
                tokens
                    .iter()
                    .all(|token| matcher.fuzzy_match(&text, token).is_some())
            }
        }
    }
}
