//! Linguistic preprocessing applied before reduction.
//!
//! Documents are segmented into sentences, each sentence is tokenized into
//! words and punctuation, English stopwords are dropped, and the remaining
//! tokens are rejoined with single spaces. This shrinks the input the
//! generation service has to read without losing content words.

use crate::io::unicode::{split_sentences, word_tokens};
use std::collections::HashSet;
use std::sync::LazyLock;

/// English stopwords (the NLTK list).
pub const ENGLISH_STOPWORDS: &[&str] = &[
    "i", "me", "my", "myself", "we", "our", "ours", "ourselves", "you", "you're", "you've",
    "you'll", "you'd", "your", "yours", "yourself", "yourselves", "he", "him", "his", "himself",
    "she", "she's", "her", "hers", "herself", "it", "it's", "its", "itself", "they", "them",
    "their", "theirs", "themselves", "what", "which", "who", "whom", "this", "that", "that'll",
    "these", "those", "am", "is", "are", "was", "were", "be", "been", "being", "have", "has",
    "had", "having", "do", "does", "did", "doing", "a", "an", "the", "and", "but", "if", "or",
    "because", "as", "until", "while", "of", "at", "by", "for", "with", "about", "against",
    "between", "into", "through", "during", "before", "after", "above", "below", "to", "from",
    "up", "down", "in", "out", "on", "off", "over", "under", "again", "further", "then", "once",
    "here", "there", "when", "where", "why", "how", "all", "any", "both", "each", "few", "more",
    "most", "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than",
    "too", "very", "s", "t", "can", "will", "just", "don", "don't", "should", "should've", "now",
    "d", "ll", "m", "o", "re", "ve", "y", "ain", "aren", "aren't", "couldn", "couldn't", "didn",
    "didn't", "doesn", "doesn't", "hadn", "hadn't", "hasn", "hasn't", "haven", "haven't", "isn",
    "isn't", "ma", "mightn", "mightn't", "mustn", "mustn't", "needn", "needn't", "shan", "shan't",
    "shouldn", "shouldn't", "wasn", "wasn't", "weren", "weren't", "won", "won't", "wouldn",
    "wouldn't",
];

static STOPWORDS: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| ENGLISH_STOPWORDS.iter().copied().collect());

/// Returns whether `token` is an English stopword (case-insensitive).
#[must_use]
pub fn is_stopword(token: &str) -> bool {
    STOPWORDS.contains(token.to_lowercase().as_str())
}

/// Removes stopwords sentence by sentence and flattens the result.
///
/// # Examples
///
/// ```
/// use recursum::io::preprocess;
///
/// let text = "The buyer shall pay the price. It is due on delivery.";
/// assert_eq!(preprocess(text), "buyer shall pay price . due delivery .");
/// ```
#[must_use]
pub fn preprocess(text: &str) -> String {
    split_sentences(text)
        .into_iter()
        .map(|sentence| {
            word_tokens(sentence)
                .into_iter()
                .filter(|token| !is_stopword(token))
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|sentence| !sentence.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
