//! Aggregation of per-post analysis results into a single mood summary.

use crate::types::{AnalysisResult, MoodSummary, SentimentLabel, Trend};

/// Minimum number of results before a trend is computed; below this the
/// signal is too thin and the trend stays `stable`.
pub const TREND_MIN_RESULTS: usize = 10;

/// Half-mean difference beyond which the trend leaves `stable`.
pub const TREND_THRESHOLD: f64 = 0.1;

/// Reduce a sequence of analysis results into a `MoodSummary`.
///
/// Results must be passed in acquisition order: the trend compares the first
/// and second half of the input sequence, so order matters.
pub fn aggregate(results: &[AnalysisResult]) -> MoodSummary {
    if results.is_empty() {
        return MoodSummary {
            mood_score: 0,
            total_posts: 0,
            positive_percentage: 0,
            negative_percentage: 0,
            neutral_percentage: 0,
            average_polarity: 0.0,
            trend: Trend::Stable,
        };
    }

    let total = results.len();
    let positive = results
        .iter()
        .filter(|r| r.classification.is_positive())
        .count();
    let negative = results
        .iter()
        .filter(|r| r.classification.is_negative())
        .count();
    let neutral = results
        .iter()
        .filter(|r| r.classification == SentimentLabel::Neutral)
        .count();

    let mean = results.iter().map(|r| r.comparative).sum::<f64>() / total as f64;

    MoodSummary {
        mood_score: (mean * 100.0).round().clamp(-100.0, 100.0) as i32,
        total_posts: total,
        // Percentages are rounded independently and may not sum to exactly
        // 100; consumers tolerate the drift, so it is not corrected here.
        positive_percentage: percentage(positive, total),
        negative_percentage: percentage(negative, total),
        neutral_percentage: percentage(neutral, total),
        average_polarity: (mean * 1000.0).round() / 1000.0,
        trend: trend(results),
    }
}

fn percentage(count: usize, total: usize) -> i32 {
    (count as f64 / total as f64 * 100.0).round() as i32
}

fn trend(results: &[AnalysisResult]) -> Trend {
    if results.len() < TREND_MIN_RESULTS {
        return Trend::Stable;
    }

    let mid = results.len() / 2;
    let first_half =
        results[..mid].iter().map(|r| r.comparative).sum::<f64>() / mid as f64;
    let second_half = results[mid..].iter().map(|r| r.comparative).sum::<f64>()
        / (results.len() - mid) as f64;
    let diff = second_half - first_half;

    if diff > TREND_THRESHOLD {
        Trend::Improving
    } else if diff < -TREND_THRESHOLD {
        Trend::Declining
    } else {
        Trend::Stable
    }
}

/// Human-readable label for an aggregate mood score.
pub fn mood_label(score: i32) -> &'static str {
    if score >= 60 {
        "Very Positive"
    } else if score >= 30 {
        "Positive"
    } else if score >= 10 {
        "Slightly Positive"
    } else if score >= -10 {
        "Neutral"
    } else if score >= -30 {
        "Slightly Negative"
    } else if score >= -60 {
        "Negative"
    } else {
        "Very Negative"
    }
}

/// Emoji counterpart of `mood_label`, same breakpoints.
pub fn mood_emoji(score: i32) -> &'static str {
    if score >= 60 {
        "😄"
    } else if score >= 30 {
        "🙂"
    } else if score >= 10 {
        "😐"
    } else if score >= -10 {
        "😕"
    } else if score >= -30 {
        "😟"
    } else if score >= -60 {
        "😠"
    } else {
        "🤬"
    }
}
