//! Lexicon-based text sentiment.
//!
//! Counts hits against two small, disjoint word lists and normalises by the
//! number of tokens in the text. Deterministic and total over any input.

use serde::{Deserialize, Serialize};

pub const POSITIVE_WORDS: &[&str] = &[
    "happy",
    "good",
    "great",
    "excellent",
    "wonderful",
    "amazing",
    "fantastic",
    "glad",
    "excited",
    "joy",
    "love",
    "positive",
    "beautiful",
    "nice",
    "enjoy",
    "success",
    "successful",
    "win",
    "winning",
    "better",
    "best",
    "improved",
];

pub const NEGATIVE_WORDS: &[&str] = &[
    "sad",
    "bad",
    "terrible",
    "awful",
    "horrible",
    "disappointed",
    "upset",
    "angry",
    "mad",
    "hate",
    "dislike",
    "negative",
    "unfortunate",
    "poor",
    "failure",
    "fail",
    "worst",
    "worse",
    "problem",
    "difficult",
    "hard",
    "trouble",
];

pub const POSITIVE_THRESHOLD: f32 = 0.1;
pub const NEGATIVE_THRESHOLD: f32 = -0.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}

impl Sentiment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sentiment::Positive => "positive",
            Sentiment::Negative => "negative",
            Sentiment::Neutral => "neutral",
        }
    }

    fn from_score(score: f32) -> Self {
        if score > POSITIVE_THRESHOLD {
            Sentiment::Positive
        } else if score < NEGATIVE_THRESHOLD {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub sentiment: Sentiment,
    /// Signed lean of the text, within [-1, 1].
    pub score: f32,
}

impl SentimentResult {
    /// Confidence reported for an observation built from this result.
    pub fn confidence(&self) -> f32 {
        self.score.abs().min(1.0)
    }
}

pub fn score(text: &str) -> SentimentResult {
    let lowered = text.to_lowercase();
    let mut total = 0usize;
    let mut positive = 0i64;
    let mut negative = 0i64;

    for token in tokens(&lowered) {
        total += 1;
        if POSITIVE_WORDS.contains(&token) {
            positive += 1;
        } else if NEGATIVE_WORDS.contains(&token) {
            negative += 1;
        }
    }

    let score = if total == 0 {
        0.0
    } else {
        (positive - negative) as f32 / total.max(1) as f32
    };

    SentimentResult {
        sentiment: Sentiment::from_score(score),
        score,
    }
}

fn tokens(text: &str) -> impl Iterator<Item = &str> {
    text.split(|c: char| !is_word_char(c))
        .filter(|t| !t.is_empty())
}

/// ASCII word characters only; anything else, accented letters included,
/// splits tokens.
fn is_word_char(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}
