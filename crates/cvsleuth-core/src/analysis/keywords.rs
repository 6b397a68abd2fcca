/// Keyword categorisation: counts dictionary keywords per category.
///
/// Two kinds of keyword, decided by their folded spelling:
/// - **Word keywords** (ASCII letters and digits only, e.g. `python`, `r`)
///   are counted by exact match against the unfiltered token stream.
/// - **Phrase keywords** (anything else, e.g. `machine learning`, `c++`,
///   `ci/cd`) are counted in the folded text, non-overlapping, where the
///   match is neither preceded nor followed by an alphanumeric character.
///
/// Results are dense: every category and every keyword of the dictionary is
/// present, in dictionary order, with zero counts where nothing matched.
use crate::analysis::frequency::count_words;
use crate::analysis::normalizer::{fold_text, Token};
use crate::dictionary::CategoryDictionary;
use serde::{Deserialize, Serialize};

/// Occurrences of one keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordCount {
    pub keyword: String,
    pub count: u64,
}

/// Keyword counts for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryHits {
    pub category: String,
    pub keywords: Vec<KeywordCount>,
}

impl CategoryHits {
    /// Sum of all keyword counts in this category.
    pub fn total(&self) -> u64 {
        self.keywords.iter().map(|k| k.count).sum()
    }

    /// Look up one keyword's count by its dictionary spelling.
    pub fn count_of(&self, keyword: &str) -> Option<u64> {
        self.keywords
            .iter()
            .find(|k| k.keyword == keyword)
            .map(|k| k.count)
    }
}

/// Per-category keyword counts, in dictionary order.
pub type CategoryResult = Vec<CategoryHits>;

/// Count every dictionary keyword in `tokens` / `folded`.
///
/// `tokens` should be the unfiltered token stream (`NormalizedText::all_tokens`)
/// and `folded` the folded text it was split from.
pub fn categorize(tokens: &[Token], folded: &str, dict: &CategoryDictionary) -> CategoryResult {
    let table = count_words(tokens);

    dict.categories()
        .iter()
        .map(|category| CategoryHits {
            category: category.name.clone(),
            keywords: category
                .keywords
                .iter()
                .map(|keyword| {
                    let needle = fold_text(keyword);
                    let count = if is_word_keyword(&needle) {
                        table.get(needle.as_str()).copied().unwrap_or(0)
                    } else {
                        count_phrase(folded, &needle)
                    };
                    KeywordCount {
                        keyword: keyword.clone(),
                        count,
                    }
                })
                .collect(),
        })
        .collect()
}

fn is_word_keyword(folded_keyword: &str) -> bool {
    !folded_keyword.is_empty() && folded_keyword.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Non-overlapping, boundary-checked occurrences of `needle` in `haystack`.
fn count_phrase(haystack: &str, needle: &str) -> u64 {
    if needle.is_empty() {
        return 0;
    }

    let mut count = 0;
    let mut from = 0;
    while let Some(offset) = haystack[from..].find(needle) {
        let start = from + offset;
        let end = start + needle.len();
        let before_ok = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let after_ok = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());

        if before_ok && after_ok {
            count += 1;
            from = end;
        } else {
            // Advance one character past the rejected start.
            from = start + haystack[start..].chars().next().map_or(1, char::len_utf8);
        }
    }
    count
}
