/// Text normalisation: case folding, ASCII transliteration, tokenisation,
/// and stopword filtering.
///
/// One pass over the extracted text produces three views:
/// - `folded`: lowercased, transliterated text with whitespace collapsed and
///   punctuation kept. Phrase keywords such as "machine learning" or "c++"
///   are matched here, because tokenisation destroys word adjacency.
/// - `all_tokens`: every alphanumeric run in `folded`, before any filtering.
///   Single-word keywords match here so that stopwords which are also
///   keywords ("data", "team") still count.
/// - `tokens`: `all_tokens` without digits-only tokens, short tokens, and
///   stopwords. Word frequencies are computed from this view.
use crate::analysis::stopwords;
use compact_str::CompactString;
use std::collections::HashSet;

/// A normalised word token. Most CV words fit inline (no heap allocation).
pub type Token = CompactString;

/// Configuration options for token filtering.
#[derive(Debug, Clone)]
pub struct NormalizerConfig {
    /// Tokens with fewer characters than this are dropped.
    pub min_token_len: usize,
    /// Stopwords in addition to the built-in English and CV lists.
    pub extra_stopwords: Vec<String>,
}

impl Default for NormalizerConfig {
    fn default() -> Self {
        Self {
            min_token_len: 2,
            extra_stopwords: Vec::new(),
        }
    }
}

/// The views of one extracted text that the analysis stages consume.
#[derive(Debug, Clone, Default)]
pub struct NormalizedText {
    pub folded: String,
    pub all_tokens: Vec<Token>,
    pub tokens: Vec<Token>,
}

/// Stateless-per-call normaliser; safe to share across threads.
#[derive(Debug, Clone)]
pub struct TextNormalizer {
    min_token_len: usize,
    extra_stopwords: HashSet<String>,
}

impl Default for TextNormalizer {
    fn default() -> Self {
        Self::new(NormalizerConfig::default())
    }
}

impl TextNormalizer {
    pub fn new(config: NormalizerConfig) -> Self {
        Self {
            min_token_len: config.min_token_len,
            extra_stopwords: config
                .extra_stopwords
                .iter()
                .map(|w| fold_text(w))
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// Produce all normalised views of `text`.
    pub fn normalize(&self, text: &str) -> NormalizedText {
        let folded = fold_text(text);
        let all_tokens = split_tokens(&folded);
        let tokens = all_tokens
            .iter()
            .filter(|t| self.keeps(t))
            .cloned()
            .collect();
        NormalizedText {
            folded,
            all_tokens,
            tokens,
        }
    }

    /// Whether an already-folded token survives filtering.
    pub fn keeps(&self, token: &str) -> bool {
        !token.is_empty()
            && !token.bytes().all(|b| b.is_ascii_digit())
            && token.chars().count() >= self.min_token_len
            && !stopwords::is_builtin_stopword(token)
            && !self.extra_stopwords.contains(token)
    }
}

/// Split folded text into alphanumeric runs.
pub fn split_tokens(folded: &str) -> Vec<Token> {
    folded
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(CompactString::new)
        .collect()
}

/// Lowercase, transliterate to the nearest ASCII, and collapse whitespace
/// runs into single spaces. Punctuation is kept.
pub fn fold_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut prev_space = true;

    let mut push = |c: char, out: &mut String| {
        if c.is_whitespace() {
            if !prev_space {
                out.push(' ');
                prev_space = true;
            }
        } else {
            out.push(c.to_ascii_lowercase());
            prev_space = false;
        }
    };

    for c in text.chars() {
        if c.is_ascii() || c.is_whitespace() {
            push(c, &mut out);
            continue;
        }
        // Combining diacritical marks (from decomposed input).
        if ('\u{0300}'..='\u{036F}').contains(&c) {
            continue;
        }
        for lowered in c.to_lowercase() {
            match deunicode::deunicode_char(lowered) {
                Some(ascii) => ascii.chars().for_each(|a| push(a, &mut out)),
                None => push(lowered, &mut out),
            }
        }
    }

    if out.ends_with(' ') {
        out.pop();
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn as_strings(tokens: &[Token]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    fn tokens(input: &str) -> Vec<String> {
        as_strings(&TextNormalizer::default().normalize(input).tokens)
    }

    #[test]
    fn lowercases_and_strips_punctuation() {
        assert_eq!(tokens("Python, RUST; Kotlin!"), vec!["python", "rust", "kotlin"]);
    }

    #[test]
    fn transliterates_accents() {
        assert_eq!(tokens("Café Zürich Ångström"), vec!["cafe", "zurich", "angstrom"]);
        assert_eq!(tokens("Straße"), vec!["strasse"]);
    }

    #[test]
    fn transliterates_stacked_and_extended_latin() {
        assert_eq!(
            tokens("Nguyễn Trần Đặng Øystein Włodzimierz Şahin Ŵales"),
            vec!["nguyen", "tran", "dang", "oystein", "wlodzimierz", "sahin", "wales"]
        );
    }

    #[test]
    fn typographic_punctuation_becomes_ascii() {
        let out = TextNormalizer::default().normalize("\u{201C}Rust\u{201D} \u{2013} \u{2018}Go\u{2019}");
        assert!(out.folded.is_ascii(), "got: {}", out.folded);
        assert_eq!(as_strings(&out.all_tokens), vec!["rust", "go"]);
    }

    #[test]
    fn decomposed_accents_are_dropped() {
        // "e" followed by U+0301 COMBINING ACUTE ACCENT.
        assert_eq!(tokens("Jose\u{0301}"), vec!["jose"]);
    }

    #[test]
    fn drops_digits_only_tokens_but_keeps_mixed() {
        assert_eq!(tokens("2015 python3 42"), vec!["python3"]);
    }

    #[test]
    fn drops_short_tokens_and_stopwords() {
        // "x" is below the default minimum length; "the"/"and"/"worked" are stopwords.
        assert_eq!(tokens("x the Kubernetes and worked Docker"), vec!["kubernetes", "docker"]);
    }

    #[test]
    fn min_length_is_configurable() {
        let n = TextNormalizer::new(NormalizerConfig {
            min_token_len: 4,
            extra_stopwords: Vec::new(),
        });
        let out = n.normalize("aws azure gcp docker");
        assert_eq!(as_strings(&out.tokens), vec!["azure", "docker"]);
    }

    #[test]
    fn extra_stopwords_are_folded_and_applied() {
        let n = TextNormalizer::new(NormalizerConfig {
            min_token_len: 2,
            extra_stopwords: vec!["Agile".into()],
        });
        let out = n.normalize("agile scrum");
        assert_eq!(as_strings(&out.tokens), vec!["scrum"]);
    }

    #[test]
    fn all_tokens_keep_stopwords_and_numbers() {
        let out = TextNormalizer::default().normalize("Data team of 5, since 2019");
        assert_eq!(
            as_strings(&out.all_tokens),
            vec!["data", "team", "of", "5", "since", "2019"]
        );
    }

    #[test]
    fn folded_view_keeps_punctuation_and_collapses_whitespace() {
        let out = TextNormalizer::default().normalize("  C++ and\n\tCI/CD  ");
        assert_eq!(out.folded, "c++ and ci/cd");
    }

    #[test]
    fn order_is_preserved() {
        assert_eq!(tokens("zeta alpha zeta"), vec!["zeta", "alpha", "zeta"]);
    }

    #[test]
    fn empty_input() {
        let out = TextNormalizer::default().normalize("");
        assert!(out.folded.is_empty());
        assert!(out.tokens.is_empty());
        assert!(out.all_tokens.is_empty());
    }
}
