use async_trait::async_trait;
use chrono::Utc;
use sentiment_tracker::{
    Analyzer, Engagement, Platform, Post, Provenance, SearchSource, SentimentLabel, TrackerError,
    MAX_FEED_POSTS,
};
use std::sync::Arc;
use std::sync::Once;
use tracing::info;

static INIT: Once = Once::new();

fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::INFO)
            .try_init()
            .ok();
    });
}

/// Search source that returns a fixed set of posts, ignoring the topic.
struct StubSource(Vec<Post>);

#[async_trait]
impl SearchSource for StubSource {
    fn source_name(&self) -> String {
        "stub".to_string()
    }

    async fn search(&self, _topic: &str, limit: usize) -> Vec<Post> {
        self.0.iter().take(limit).cloned().collect()
    }
}

/// Search source that always comes back empty, as an unreachable or
/// rate-limited endpoint would.
struct FailingSource;

#[async_trait]
impl SearchSource for FailingSource {
    fn source_name(&self) -> String {
        "failing".to_string()
    }

    async fn search(&self, _topic: &str, _limit: usize) -> Vec<Post> {
        Vec::new()
    }
}

fn forum_post(id: &str, title: &str, text: &str) -> Post {
    Post {
        id: id.to_string(),
        title: Some(title.to_string()),
        text: text.to_string(),
        author: "poster".to_string(),
        platform: Platform::Forum,
        engagement: Engagement {
            upvotes: Some(10),
            comments: Some(2),
            ..Default::default()
        },
        timestamp: Utc::now(),
        subreddit: Some("gadgets".to_string()),
        url: None,
        sentiment_category: SentimentLabel::Neutral,
    }
}

fn ten_real_posts() -> Vec<Post> {
    (0..10)
        .map(|i| {
            let (title, text) = if i % 2 == 0 {
                ("Great device", "I love it, works perfectly")
            } else {
                ("Not convinced", "Battery life is terrible and support is poor")
            };
            forum_post(&format!("real_{}", i), title, text)
        })
        .collect()
}

#[tokio::test]
async fn end_to_end_analysis_with_real_and_simulated_sources() {
    init_tracing();

    let analyzer = Analyzer::with_source(Arc::new(StubSource(ten_real_posts())));
    let report = analyzer
        .analyze("iPhone 15", &[Platform::Forum, Platform::MicroBlog], 50)
        .await
        .expect("analysis should succeed");

    info!(
        "Report: overall mood={} across {} posts",
        report.overall.mood_score, report.overall.total_posts
    );

    let forum = &report.platforms[&Platform::Forum];
    assert_eq!(forum.total_posts, 10);
    assert_eq!(forum.provenance, Provenance::Real);

    // micro-blog gets the remainder of the proportional split
    let micro = &report.platforms[&Platform::MicroBlog];
    assert_eq!(micro.total_posts, 15);
    assert_eq!(micro.provenance, Provenance::Simulated);

    assert_eq!(
        report.overall.total_posts,
        forum.total_posts + micro.total_posts
    );
    assert_eq!(report.topic, "iPhone 15");
    assert!((-100..=100).contains(&report.overall.mood_score));
}

#[tokio::test]
async fn failed_fetch_degrades_to_simulated_posts() {
    init_tracing();

    let analyzer = Analyzer::with_source(Arc::new(FailingSource));
    let report = analyzer
        .analyze("coffee", &[Platform::Forum, Platform::MicroBlog], 50)
        .await
        .expect("fallback analysis should succeed");

    let forum = &report.platforms[&Platform::Forum];
    assert_eq!(forum.provenance, Provenance::Simulated);
    assert_eq!(forum.total_posts, 35);

    let micro = &report.platforms[&Platform::MicroBlog];
    assert_eq!(micro.total_posts, 15);
    assert_eq!(report.overall.total_posts, 50);
}

#[tokio::test]
async fn every_emitted_post_is_classified() {
    init_tracing();

    let analyzer = Analyzer::with_source(Arc::new(StubSource(ten_real_posts())));
    let report = analyzer
        .analyze("coffee", &[Platform::Forum, Platform::MicroBlog], 40)
        .await
        .expect("analysis should succeed");

    for post in &report.posts {
        // the synthesizer's `mixed` category never survives scoring
        assert_ne!(post.sentiment_category, SentimentLabel::Mixed);
    }

    // stub posts alternate clearly positive and clearly negative text, so
    // the forum feed cannot be all placeholder-neutral
    assert!(report
        .posts
        .iter()
        .filter(|p| p.platform == Platform::Forum)
        .any(|p| p.sentiment_category != SentimentLabel::Neutral));
}

#[tokio::test]
async fn display_feed_is_capped_after_scoring() {
    init_tracing();

    let analyzer = Analyzer::with_source(Arc::new(FailingSource));
    let report = analyzer
        .analyze("coffee", &[Platform::Forum, Platform::MicroBlog], 100)
        .await
        .expect("analysis should succeed");

    assert!(report.posts.len() <= MAX_FEED_POSTS);
    // summaries still count every acquired post
    assert_eq!(report.overall.total_posts, 100);
}

#[tokio::test]
async fn single_platform_request_gets_the_full_limit() {
    init_tracing();

    let analyzer = Analyzer::with_source(Arc::new(FailingSource));
    let report = analyzer
        .analyze("coffee", &[Platform::MicroBlog], 30)
        .await
        .expect("analysis should succeed");

    assert!(!report.platforms.contains_key(&Platform::Forum));
    assert_eq!(report.platforms[&Platform::MicroBlog].total_posts, 30);
    assert_eq!(report.overall.total_posts, 30);
}

#[tokio::test]
async fn blank_topic_is_rejected() {
    init_tracing();

    let analyzer = Analyzer::with_source(Arc::new(FailingSource));
    let result = analyzer
        .analyze("   ", &[Platform::Forum, Platform::MicroBlog], 50)
        .await;

    assert!(matches!(result, Err(TrackerError::EmptyTopic)));
}

#[tokio::test]
async fn empty_platform_set_is_an_orchestration_failure() {
    init_tracing();

    let analyzer = Analyzer::with_source(Arc::new(FailingSource));
    let result = analyzer.analyze("coffee", &[], 50).await;

    assert!(matches!(result, Err(TrackerError::General(_))));
}

#[tokio::test]
async fn report_serializes_with_platform_labels() {
    init_tracing();

    let analyzer = Analyzer::with_source(Arc::new(StubSource(ten_real_posts())));
    let report = analyzer
        .analyze("coffee", &[Platform::Forum, Platform::MicroBlog], 50)
        .await
        .expect("analysis should succeed");

    let json = serde_json::to_value(&report).expect("report serializes");
    assert!(json["platforms"].get("discussion-forum").is_some());
    assert!(json["platforms"].get("micro-blog").is_some());
    assert!(json["overall"]["mood_score"].is_i64());
    assert_eq!(json["platforms"]["discussion-forum"]["provenance"], "real");
}
