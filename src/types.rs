use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A configured content channel. The set is closed per deployment:
/// `discussion-forum` is backed by a real search endpoint, `micro-blog`
/// is always simulated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "micro-blog")]
    MicroBlog,
    #[serde(rename = "discussion-forum")]
    Forum,
}

impl Platform {
    pub fn label(&self) -> &'static str {
        match self {
            Platform::MicroBlog => "micro-blog",
            Platform::Forum => "discussion-forum",
        }
    }

    /// Whether this platform is served by the external fetcher rather than
    /// the synthesizer.
    pub fn is_real_backed(&self) -> bool {
        matches!(self, Platform::Forum)
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Platform {
    type Err = TrackerError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "micro-blog" => Ok(Platform::MicroBlog),
            "discussion-forum" => Ok(Platform::Forum),
            other => Err(TrackerError::UnknownPlatform(other.to_string())),
        }
    }
}

/// Sentiment label attached to a post. The synthesizer samples from
/// `positive`/`negative`/`neutral`/`mixed`; after analysis every post carries
/// one of the five classifier values (`mixed` never survives scoring).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentLabel {
    VeryNegative,
    Negative,
    Neutral,
    Mixed,
    Positive,
    VeryPositive,
}

impl SentimentLabel {
    pub fn is_positive(&self) -> bool {
        matches!(self, SentimentLabel::Positive | SentimentLabel::VeryPositive)
    }

    pub fn is_negative(&self) -> bool {
        matches!(self, SentimentLabel::Negative | SentimentLabel::VeryNegative)
    }
}

/// Sparse per-platform engagement counters. A platform only populates the
/// counters meaningful to it; absent counters are omitted from JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Engagement {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likes: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shares: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upvotes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comments: Option<u32>,
}

/// One unit of content from a platform, either fetched or synthesized.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub text: String,
    pub author: String,
    pub platform: Platform,
    #[serde(default)]
    pub engagement: Engagement,
    pub timestamp: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subreddit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub sentiment_category: SentimentLabel,
}

impl Post {
    /// The text fed to the scorer. Forum posts carry title and body together
    /// when both are non-empty; otherwise whichever one exists.
    pub fn analyzable_text(&self) -> String {
        let title = self.title.as_deref().unwrap_or("").trim();
        let body = self.text.trim();
        if !title.is_empty() && !body.is_empty() {
            format!("{} {}", title, body)
        } else if !body.is_empty() {
            body.to_string()
        } else {
            title.to_string()
        }
    }
}

/// Per-post scoring outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub raw_score: i64,
    /// Polarity normalized by token count.
    pub comparative: f64,
    /// `comparative` rescaled to [-100, 100].
    pub mood_score: i32,
    pub classification: SentimentLabel,
    pub matched_positive: Vec<String>,
    pub matched_negative: Vec<String>,
    pub token_count: usize,
}

/// Directional change in mean polarity between the first and second half of
/// a result sequence, in acquisition order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Improving,
    Declining,
    Stable,
}

/// Aggregate over a sequence of analysis results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodSummary {
    pub mood_score: i32,
    pub total_posts: usize,
    pub positive_percentage: i32,
    pub negative_percentage: i32,
    pub neutral_percentage: i32,
    pub average_polarity: f64,
    pub trend: Trend,
}

/// Where a source's posts actually came from. The degrade-to-synthetic
/// fallback is observable only through this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Real,
    Simulated,
}

/// Posts acquired for one platform, tagged with their provenance.
#[derive(Debug, Clone)]
pub struct SourceBatch {
    pub provenance: Provenance,
    pub posts: Vec<Post>,
}

/// Per-platform slice of an analysis report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformReport {
    pub mood: MoodSummary,
    pub total_posts: usize,
    pub provenance: Provenance,
}

/// Full outcome of one topic analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub topic: String,
    pub timestamp: DateTime<Utc>,
    pub overall: MoodSummary,
    pub platforms: BTreeMap<Platform, PlatformReport>,
    pub mood_label: String,
    pub mood_emoji: String,
    /// Capped display feed; capping happens after scoring, so `overall`
    /// counts every acquired post even when this list is shorter.
    pub posts: Vec<Post>,
}

/// Configuration for the outbound search client.
#[derive(Debug, Clone)]
pub struct FetchConfig {
    pub user_agent: String,
    pub timeout_seconds: u64,
    /// Base URL of the search endpoint.
    pub endpoint: String,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            user_agent: "SentimentTracker/1.0".to_string(),
            timeout_seconds: 10,
            endpoint: "https://www.reddit.com".to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Topic is empty")]
    EmptyTopic,

    #[error("Unknown platform: {0}")]
    UnknownPlatform(String),

    #[error("General error: {0}")]
    General(String),
}

pub type Result<T> = std::result::Result<T, TrackerError>;
