//! Lexicon-based sentiment scoring.
//!
//! A fixed signed-weight word table in the AFINN tradition: each token of the
//! input either contributes its weight or contributes nothing. No negation
//! handling and no model, so the same input always produces the same score.

use crate::types::{AnalysisResult, SentimentLabel};

/// Signed word weights, process-wide and immutable. Weights follow the
/// AFINN convention of integers in [-5, 5].
const LEXICON: &[(&str, i32)] = &[
    ("abandoned", -2),
    ("amazing", 4),
    ("angry", -3),
    ("annoying", -2),
    ("avoid", -1),
    ("awesome", 4),
    ("awful", -3),
    ("bad", -3),
    ("beautiful", 3),
    ("best", 3),
    ("better", 2),
    ("boring", -3),
    ("brilliant", 4),
    ("broke", -1),
    ("broken", -1),
    ("buggy", -3),
    ("cheap", -1),
    ("cool", 1),
    ("crash", -2),
    ("crashed", -2),
    ("crashes", -2),
    ("disappointed", -2),
    ("disappointing", -2),
    ("disappointment", -2),
    ("disaster", -2),
    ("dreadful", -3),
    ("enjoy", 2),
    ("enjoyed", 2),
    ("excellent", 3),
    ("excited", 3),
    ("exciting", 3),
    ("fail", -2),
    ("failed", -2),
    ("failure", -2),
    ("fake", -3),
    ("fantastic", 4),
    ("fraud", -4),
    ("frustrated", -2),
    ("frustrating", -2),
    ("fun", 4),
    ("garbage", -3),
    ("glad", 3),
    ("good", 3),
    ("great", 3),
    ("happy", 3),
    ("hate", -3),
    ("hated", -3),
    ("hates", -3),
    ("helpful", 2),
    ("horrible", -3),
    ("impressive", 3),
    ("improved", 2),
    ("improvement", 2),
    ("incredible", 4),
    ("interesting", 2),
    ("like", 2),
    ("liked", 2),
    ("likes", 2),
    ("love", 3),
    ("loved", 3),
    ("loves", 3),
    ("mess", -2),
    ("misleading", -2),
    ("nice", 3),
    ("outstanding", 5),
    ("overpriced", -2),
    ("pathetic", -2),
    ("perfect", 3),
    ("poor", -2),
    ("problem", -2),
    ("problems", -2),
    ("recommend", 2),
    ("recommended", 2),
    ("regret", -2),
    ("reliable", 2),
    ("ruined", -2),
    ("sad", -2),
    ("scam", -2),
    ("slow", -2),
    ("smooth", 2),
    ("solid", 2),
    ("stunning", 4),
    ("superb", 5),
    ("terrible", -3),
    ("thank", 2),
    ("thanks", 2),
    ("trash", -2),
    ("ugly", -3),
    ("unhappy", -2),
    ("unreliable", -2),
    ("upset", -2),
    ("useful", 2),
    ("useless", -2),
    ("waste", -1),
    ("wasted", -2),
    ("win", 4),
    ("winner", 4),
    ("wonderful", 4),
    ("worried", -3),
    ("worse", -3),
    ("worst", -3),
    ("worth", 2),
    ("wrong", -2),
];

/// Classification thresholds over the unclamped comparative, first match wins.
pub const VERY_POSITIVE_THRESHOLD: f64 = 0.5;
pub const POSITIVE_THRESHOLD: f64 = 0.1;
pub const VERY_NEGATIVE_THRESHOLD: f64 = -0.5;
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Comparative values cluster in roughly ±0.5 for typical short posts; this
/// divisor maps that practical range onto the ±100 mood scale.
const MOOD_SCALE: f64 = 0.5;

/// Raw outcome of scoring one text against the lexicon.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentScore {
    pub raw_score: i64,
    pub comparative: f64,
    pub matched_positive: Vec<String>,
    pub matched_negative: Vec<String>,
    pub token_count: usize,
}

fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .replace('\'', "")
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect::<String>()
        .split_whitespace()
        .map(str::to_string)
        .collect()
}

fn lookup(token: &str) -> Option<i32> {
    LEXICON
        .iter()
        .find(|(word, _)| *word == token)
        .map(|(_, weight)| *weight)
}

/// Score a text against the lexicon. Degenerate input (empty, whitespace,
/// no letters) yields zeroes and empty match sets, never an error.
pub fn score(text: &str) -> SentimentScore {
    let tokens = tokenize(text);
    let mut raw_score = 0i64;
    let mut matched_positive = Vec::new();
    let mut matched_negative = Vec::new();

    for token in &tokens {
        if let Some(weight) = lookup(token) {
            raw_score += i64::from(weight);
            if weight > 0 {
                matched_positive.push(token.clone());
            } else {
                matched_negative.push(token.clone());
            }
        }
    }

    // max(1) guards empty text; never divide by zero
    let comparative = raw_score as f64 / tokens.len().max(1) as f64;

    SentimentScore {
        raw_score,
        comparative,
        matched_positive,
        matched_negative,
        token_count: tokens.len(),
    }
}

/// Map a comparative value to the bounded mood score and the discrete label.
pub fn classify(comparative: f64) -> (i32, SentimentLabel) {
    let mood_score = (comparative / MOOD_SCALE * 100.0).round().clamp(-100.0, 100.0) as i32;

    let classification = if comparative > VERY_POSITIVE_THRESHOLD {
        SentimentLabel::VeryPositive
    } else if comparative > POSITIVE_THRESHOLD {
        SentimentLabel::Positive
    } else if comparative < VERY_NEGATIVE_THRESHOLD {
        SentimentLabel::VeryNegative
    } else if comparative < NEGATIVE_THRESHOLD {
        SentimentLabel::Negative
    } else {
        SentimentLabel::Neutral
    };

    (mood_score, classification)
}

/// Score and classify in one step.
pub fn analyze(text: &str) -> AnalysisResult {
    let scored = score(text);
    let (mood_score, classification) = classify(scored.comparative);

    AnalysisResult {
        raw_score: scored.raw_score,
        comparative: scored.comparative,
        mood_score,
        classification,
        matched_positive: scored.matched_positive,
        matched_negative: scored.matched_negative,
        token_count: scored.token_count,
    }
}
