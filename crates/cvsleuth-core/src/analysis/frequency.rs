/// Word frequency analysis: counts tokens and ranks the top N.
///
/// Ranking is a total order (count descending, then word ascending) so the
/// result is identical across runs regardless of hash-map iteration order.
use crate::analysis::normalizer::Token;
use crate::error::AnalysisError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Token → occurrence count.
pub type FrequencyTable = HashMap<Token, u64>;

/// A single entry in the top-words results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: Token,
    pub count: u64,
}

impl WordCount {
    pub fn new(word: impl Into<Token>, count: u64) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Count exact-match occurrences of each token.
pub fn count_words(tokens: &[Token]) -> FrequencyTable {
    let mut table = FrequencyTable::with_capacity(tokens.len() / 2);
    for token in tokens {
        *table.entry(token.clone()).or_insert(0) += 1;
    }
    table
}

/// The `n` most frequent tokens, highest count first, ties alphabetical.
///
/// Fails with [`AnalysisError::InvalidN`] when `n == 0`.
pub fn top_words(tokens: &[Token], n: usize) -> Result<Vec<WordCount>, AnalysisError> {
    top_words_from_table(&count_words(tokens), n)
}

/// Rank an existing frequency table. See [`top_words`].
pub fn top_words_from_table(
    table: &FrequencyTable,
    n: usize,
) -> Result<Vec<WordCount>, AnalysisError> {
    if n == 0 {
        return Err(AnalysisError::InvalidN);
    }

    let mut entries: Vec<WordCount> = table
        .iter()
        .map(|(word, &count)| WordCount::new(word.clone(), count))
        .collect();

    // Partial sort: O(n) select + O(k log k) sort of top-k.
    if entries.len() > n {
        entries.select_nth_unstable_by(n - 1, rank);
        entries.truncate(n);
    }
    entries.sort_unstable_by(rank);
    Ok(entries)
}

fn rank(a: &WordCount, b: &WordCount) -> Ordering {
    b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn toks(words: &[&str]) -> Vec<Token> {
        words.iter().map(|w| Token::new(w)).collect()
    }

    #[test]
    fn ranks_by_count_descending() {
        let tokens = toks(&["rust", "python", "rust", "go", "rust", "python"]);
        let top = top_words(&tokens, 3).unwrap();
        assert_eq!(
            top,
            vec![
                WordCount::new("rust", 3),
                WordCount::new("python", 2),
                WordCount::new("go", 1),
            ]
        );
    }

    #[test]
    fn ties_are_broken_alphabetically() {
        let tokens = toks(&["zeta", "alpha", "mid", "zeta", "alpha", "mid"]);
        let top = top_words(&tokens, 2).unwrap();
        assert_eq!(
            top,
            vec![WordCount::new("alpha", 2), WordCount::new("mid", 2)]
        );
    }

    #[test]
    fn never_returns_more_than_n() {
        let tokens = toks(&["a1", "b2", "c3", "d4", "e5"]);
        for n in 1..=7 {
            let top = top_words(&tokens, n).unwrap();
            assert!(top.len() <= n, "n={n} returned {}", top.len());
            assert_eq!(top.len(), n.min(5));
        }
    }

    #[test]
    fn repeated_calls_are_identical() {
        let tokens = toks(&["k8s", "aws", "gcp", "aws", "k8s", "azure", "gcp"]);
        let first = top_words(&tokens, 3).unwrap();
        for _ in 0..20 {
            assert_eq!(top_words(&tokens, 3).unwrap(), first);
        }
    }

    #[test]
    fn zero_n_is_invalid() {
        let tokens = toks(&["rust"]);
        assert!(matches!(top_words(&tokens, 0), Err(AnalysisError::InvalidN)));
    }

    #[test]
    fn counts_sum_to_token_count() {
        let tokens = toks(&["sql", "sql", "excel", "tableau", "sql", "excel"]);
        let table = count_words(&tokens);
        assert_eq!(table.values().sum::<u64>(), tokens.len() as u64);
    }

    #[test]
    fn empty_stream_yields_empty_ranking() {
        assert!(top_words(&[], 10).unwrap().is_empty());
    }
}
