/// Stopword sets: words too common to say anything about a CV.
///
/// Two built-in lists, merged once per process:
/// - the usual English function words;
/// - CV boilerplate ("responsible", "worked", "skills", ...) that appears in
///   nearly every résumé and would otherwise dominate the word cloud.
use once_cell::sync::Lazy;
use std::collections::HashSet;

const ENGLISH: &[&str] = &[
    "a", "about", "above", "after", "again", "against", "ain", "all", "am", "an", "and", "any",
    "are", "aren", "as", "at", "be", "because", "been", "before", "being", "below", "between",
    "both", "but", "by", "can", "couldn", "d", "did", "didn", "do", "does", "doesn", "doing",
    "don", "down", "during", "each", "few", "for", "from", "further", "had", "hadn", "has",
    "hasn", "have", "haven", "having", "he", "her", "here", "hers", "herself", "him", "himself",
    "his", "how", "i", "if", "in", "into", "is", "isn", "it", "its", "itself", "just", "ll", "m",
    "ma", "me", "mightn", "more", "most", "mustn", "my", "myself", "needn", "no", "nor", "not",
    "now", "o", "of", "off", "on", "once", "only", "or", "other", "our", "ours", "ourselves",
    "out", "over", "own", "re", "s", "same", "shan", "she", "should", "shouldn", "so", "some",
    "such", "t", "than", "that", "the", "their", "theirs", "them", "themselves", "then",
    "there", "these", "they", "this", "those", "through", "to", "too", "under", "until", "up",
    "ve", "very", "was", "wasn", "we", "were", "weren", "what", "when", "where", "which",
    "while", "who", "whom", "why", "will", "with", "won", "wouldn", "y", "you", "your", "yours",
    "yourself", "yourselves",
];

const CV_BOILERPLATE: &[&str] = &[
    "cv", "resume", "responsible", "worked", "using", "project", "projects", "tool",
    "performed", "objective", "summary", "include", "data", "management", "experience",
    "senior", "lead", "team", "develop", "developed", "design", "designed", "implement",
    "implemented", "build", "built", "created", "skills", "skill", "abilities", "ability",
    "proficient", "knowledge", "strong", "understanding", "etc",
];

static BUILTIN: Lazy<HashSet<&'static str>> =
    Lazy::new(|| ENGLISH.iter().chain(CV_BOILERPLATE).copied().collect());

/// Whether `word` (already lowercased) is a built-in stopword.
pub fn is_builtin_stopword(word: &str) -> bool {
    BUILTIN.contains(word)
}
