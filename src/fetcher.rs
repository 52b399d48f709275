//! Outbound search against the public Reddit endpoint.
//!
//! The fetcher never raises to its caller: any transport, status, or decode
//! failure is logged and reported as an empty result, which the acquisition
//! layer treats as the signal to fall back to synthesized posts.

use crate::traits::SearchSource;
use crate::types::{Engagement, FetchConfig, Platform, Post, SentimentLabel};
use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Wire shape of the remote listing. Every field is optional: the endpoint
/// is untrusted and records are routinely partial.
#[derive(Debug, Deserialize)]
pub(crate) struct Listing {
    data: Option<ListingData>,
}

#[derive(Debug, Default, Deserialize)]
struct ListingData {
    #[serde(default)]
    children: Vec<ListingChild>,
}

#[derive(Debug, Default, Deserialize)]
struct ListingChild {
    #[serde(default)]
    data: RemotePost,
}

#[derive(Debug, Default, Deserialize)]
struct RemotePost {
    id: Option<String>,
    title: Option<String>,
    selftext: Option<String>,
    author: Option<String>,
    ups: Option<i64>,
    num_comments: Option<u32>,
    created_utc: Option<f64>,
    subreddit: Option<String>,
    url: Option<String>,
}

pub struct RedditFetcher {
    client: Client,
    config: FetchConfig,
}

impl RedditFetcher {
    pub fn new(config: FetchConfig) -> Self {
        let client = Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .expect("Failed to create HTTP client");

        Self { client, config }
    }
}

#[async_trait]
impl SearchSource for RedditFetcher {
    fn source_name(&self) -> String {
        "reddit-search".to_string()
    }

    async fn search(&self, topic: &str, limit: usize) -> Vec<Post> {
        let url = format!("{}/search.json", self.config.endpoint);
        let start = Instant::now();

        debug!("Searching posts - topic={}, limit={}", topic, limit);

        let limit_param = limit.to_string();
        let response = match self
            .client
            .get(&url)
            .query(&[
                ("q", topic),
                ("limit", limit_param.as_str()),
                ("sort", "new"),
                ("t", "month"),
            ])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Search request failed for '{}': {}", topic, e);
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            warn!(
                "Search endpoint returned HTTP {} for '{}'",
                response.status(),
                topic
            );
            return Vec::new();
        }

        let listing: Listing = match response.json().await {
            Ok(listing) => listing,
            Err(e) => {
                warn!("Malformed search response for '{}': {}", topic, e);
                return Vec::new();
            }
        };

        let posts = map_listing(listing, limit);

        info!(
            "Search completed - topic={}, usable={}, duration={:.2}s",
            topic,
            posts.len(),
            start.elapsed().as_secs_f32()
        );

        posts
    }
}

/// Map the remote listing into internal posts: drop unusable records first,
/// then apply the limit cutoff, so the caller receives up to `limit` usable
/// posts when they are available.
pub(crate) fn map_listing(listing: Listing, limit: usize) -> Vec<Post> {
    listing
        .data
        .unwrap_or_default()
        .children
        .into_iter()
        .map(|child| child.data)
        .filter(is_usable)
        .take(limit)
        .map(map_post)
        .collect()
}

fn is_usable(record: &RemotePost) -> bool {
    let has_title = record
        .title
        .as_deref()
        .is_some_and(|t| !t.trim().is_empty());
    let has_body = record
        .selftext
        .as_deref()
        .is_some_and(|s| !s.trim().is_empty());
    has_title || has_body
}

fn map_post(record: RemotePost) -> Post {
    let title = record.title.filter(|t| !t.trim().is_empty());
    let body = record.selftext.filter(|s| !s.trim().is_empty());
    let text = body.or_else(|| title.clone()).unwrap_or_default();

    let timestamp = record
        .created_utc
        .and_then(|seconds| Utc.timestamp_opt(seconds as i64, 0).single())
        .unwrap_or_else(Utc::now);

    Post {
        id: record.id.unwrap_or_else(|| Uuid::new_v4().to_string()),
        title,
        text,
        author: record.author.unwrap_or_else(|| "unknown".to_string()),
        platform: Platform::Forum,
        engagement: Engagement {
            upvotes: record.ups,
            comments: record.num_comments,
            ..Default::default()
        },
        timestamp,
        subreddit: record.subreddit,
        url: record.url,
        // placeholder until analysis overwrites it
        sentiment_category: SentimentLabel::Neutral,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing_from(json: &str) -> Listing {
        serde_json::from_str(json).expect("valid listing JSON")
    }

    #[test]
    fn maps_remote_fields_onto_posts() {
        let listing = listing_from(
            r#"{
                "data": {
                    "children": [{
                        "data": {
                            "id": "abc123",
                            "title": "New phone released",
                            "selftext": "First impressions are good",
                            "author": "some_user",
                            "ups": 42,
                            "num_comments": 7,
                            "created_utc": 1700000000.0,
                            "subreddit": "gadgets",
                            "url": "https://example.com/post"
                        }
                    }]
                }
            }"#,
        );

        let posts = map_listing(listing, 10);
        assert_eq!(posts.len(), 1);

        let post = &posts[0];
        assert_eq!(post.id, "abc123");
        assert_eq!(post.title.as_deref(), Some("New phone released"));
        assert_eq!(post.text, "First impressions are good");
        assert_eq!(post.author, "some_user");
        assert_eq!(post.platform, Platform::Forum);
        assert_eq!(post.engagement.upvotes, Some(42));
        assert_eq!(post.engagement.comments, Some(7));
        assert_eq!(post.timestamp.timestamp(), 1_700_000_000);
        assert_eq!(post.subreddit.as_deref(), Some("gadgets"));
        assert_eq!(post.sentiment_category, SentimentLabel::Neutral);
    }

    #[test]
    fn drops_records_without_usable_text() {
        let listing = listing_from(
            r#"{
                "data": {
                    "children": [
                        {"data": {"id": "empty", "title": "", "selftext": "  "}},
                        {"data": {"id": "keep", "title": "Usable title"}},
                        {"data": {"id": "bare"}}
                    ]
                }
            }"#,
        );

        let posts = map_listing(listing, 10);
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].id, "keep");
        // title-only record falls back to the title as analyzable body
        assert_eq!(posts[0].text, "Usable title");
    }

    #[test]
    fn filters_before_truncating() {
        // with truncate-then-filter the unusable head record would eat the
        // limit and only one post would survive
        let listing = listing_from(
            r#"{
                "data": {
                    "children": [
                        {"data": {"id": "junk"}},
                        {"data": {"id": "a", "title": "first"}},
                        {"data": {"id": "b", "title": "second"}},
                        {"data": {"id": "c", "title": "third"}}
                    ]
                }
            }"#,
        );

        let posts = map_listing(listing, 2);
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, "a");
        assert_eq!(posts[1].id, "b");
    }

    #[test]
    fn tolerates_missing_listing_data() {
        let posts = map_listing(listing_from("{}"), 10);
        assert!(posts.is_empty());
    }

    #[test]
    fn missing_fields_get_defaults() {
        let listing = listing_from(
            r#"{"data": {"children": [{"data": {"title": "Only a title"}}]}}"#,
        );

        let posts = map_listing(listing, 10);
        assert_eq!(posts.len(), 1);
        assert_eq!(posts[0].author, "unknown");
        assert!(!posts[0].id.is_empty());
        assert!(posts[0].engagement.upvotes.is_none());
    }
}
