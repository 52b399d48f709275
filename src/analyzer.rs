//! Per-request orchestration: acquire, score, aggregate, report.

use crate::acquisition::acquire;
use crate::fetcher::RedditFetcher;
use crate::synthesizer::{CategoryWeights, EntropyRandom, Synthesizer};
use crate::traits::SearchSource;
use crate::types::{
    AnalysisReport, AnalysisResult, FetchConfig, Platform, PlatformReport, Post, Result,
    TrackerError,
};
use crate::{mood, sentiment};
use chrono::Utc;
use std::collections::BTreeMap;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info};

/// Display feed cap. Applied after scoring, so every acquired post is
/// counted in the summaries even when the feed is truncated.
pub const MAX_FEED_POSTS: usize = 20;

/// Platforms are processed in this fixed order; the overall trend is
/// computed over the concatenated results, so the order is part of the
/// contract.
const PLATFORM_ORDER: [Platform; 2] = [Platform::Forum, Platform::MicroBlog];

pub struct Analyzer {
    source: Arc<dyn SearchSource>,
    weights: CategoryWeights,
}

impl Analyzer {
    pub fn new(config: FetchConfig) -> Self {
        Self {
            source: Arc::new(RedditFetcher::new(config)),
            weights: CategoryWeights::default(),
        }
    }

    /// Build an analyzer over a custom search source; tests use this to
    /// stub the remote endpoint.
    pub fn with_source(source: Arc<dyn SearchSource>) -> Self {
        Self {
            source,
            weights: CategoryWeights::default(),
        }
    }

    /// Run one full topic analysis. Stateless between calls: each request
    /// builds its own post graph and nothing is shared across requests.
    pub async fn analyze(
        &self,
        topic: &str,
        platforms: &[Platform],
        limit: usize,
    ) -> Result<AnalysisReport> {
        let topic = topic.trim();
        if topic.is_empty() {
            return Err(TrackerError::EmptyTopic);
        }

        let start = Instant::now();
        info!(
            "Analysis started - topic={}, platforms={}, limit={}",
            topic,
            platforms.len(),
            limit
        );

        let mut synthesizer =
            Synthesizer::with_random(self.weights, Box::new(EntropyRandom::new()));
        let mut batches =
            acquire(self.source.as_ref(), &mut synthesizer, topic, limit, platforms).await;

        let mut all_results: Vec<AnalysisResult> = Vec::new();
        let mut reports = BTreeMap::new();
        let mut feed: Vec<Post> = Vec::new();

        for platform in PLATFORM_ORDER {
            let Some(mut batch) = batches.remove(&platform) else {
                continue;
            };

            let mut results = Vec::with_capacity(batch.posts.len());
            for post in batch.posts.iter_mut() {
                let result = sentiment::analyze(&post.analyzable_text());
                post.sentiment_category = result.classification;
                results.push(result);
            }

            let summary = mood::aggregate(&results);
            debug!(
                "Platform scored - platform={}, posts={}, mood_score={}",
                platform,
                results.len(),
                summary.mood_score
            );

            reports.insert(
                platform,
                PlatformReport {
                    mood: summary,
                    total_posts: results.len(),
                    provenance: batch.provenance,
                },
            );
            all_results.extend(results);
            feed.extend(batch.posts);
        }

        if reports.is_empty() {
            return Err(TrackerError::General(format!(
                "no sources produced posts for '{}'",
                topic
            )));
        }

        let overall = mood::aggregate(&all_results);
        feed.truncate(MAX_FEED_POSTS);

        info!(
            "Analysis completed - topic={}, total_posts={}, mood_score={}, trend={:?}, duration={:.2}s",
            topic,
            overall.total_posts,
            overall.mood_score,
            overall.trend,
            start.elapsed().as_secs_f32()
        );

        Ok(AnalysisReport {
            topic: topic.to_string(),
            timestamp: Utc::now(),
            mood_label: mood::mood_label(overall.mood_score).to_string(),
            mood_emoji: mood::mood_emoji(overall.mood_score).to_string(),
            overall,
            platforms: reports,
            posts: feed,
        })
    }
}
