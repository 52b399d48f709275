//! Fan-out acquisition across the configured platforms.
//!
//! One concurrent join per request: the remote search and the synthetic
//! generation both complete (or fail-safe to empty) before this layer
//! returns. When the real-data source yields nothing, its allotment is
//! silently filled with synthesized posts; callers see the degrade only
//! through the batch's provenance tag.

use crate::synthesizer::Synthesizer;
use crate::traits::SearchSource;
use crate::types::{Platform, Provenance, SourceBatch};
use std::collections::BTreeMap;
use tracing::{debug, warn};

/// Share of the overall limit allotted to the real-data-backed forum source
/// when both platforms are enabled; the micro-blog source gets the remainder.
const FORUM_SHARE: f64 = 0.7;

/// Acquire up to `limit` posts about `topic`, split proportionally across
/// the enabled platforms.
pub async fn acquire(
    source: &dyn SearchSource,
    synthesizer: &mut Synthesizer,
    topic: &str,
    limit: usize,
    platforms: &[Platform],
) -> BTreeMap<Platform, SourceBatch> {
    let forum_enabled = platforms.contains(&Platform::Forum);
    let micro_enabled = platforms.contains(&Platform::MicroBlog);
    let (forum_count, micro_count) = split_limit(limit, forum_enabled, micro_enabled);

    debug!(
        "Acquisition split - topic={}, forum={}, micro_blog={}",
        topic, forum_count, micro_count
    );

    let fetch = async {
        if forum_count > 0 {
            source.search(topic, forum_count).await
        } else {
            Vec::new()
        }
    };
    let synthesize = async {
        if micro_count > 0 {
            synthesizer.synthesize(topic, micro_count, Platform::MicroBlog)
        } else {
            Vec::new()
        }
    };

    let (fetched, micro_posts) = tokio::join!(fetch, synthesize);

    let mut batches = BTreeMap::new();

    if forum_enabled {
        let batch = if fetched.is_empty() && forum_count > 0 {
            warn!(
                "No real posts for '{}' from {}; substituting {} synthesized posts",
                topic,
                source.source_name(),
                forum_count
            );
            SourceBatch {
                provenance: Provenance::Simulated,
                posts: synthesizer.synthesize(topic, forum_count, Platform::Forum),
            }
        } else {
            SourceBatch {
                provenance: Provenance::Real,
                posts: fetched,
            }
        };
        batches.insert(Platform::Forum, batch);
    }

    if micro_enabled {
        batches.insert(
            Platform::MicroBlog,
            SourceBatch {
                provenance: Provenance::Simulated,
                posts: micro_posts,
            },
        );
    }

    batches
}

fn split_limit(limit: usize, forum: bool, micro: bool) -> (usize, usize) {
    match (forum, micro) {
        (true, true) => {
            let forum_count = (limit as f64 * FORUM_SHARE).floor() as usize;
            (forum_count, limit - forum_count)
        }
        (true, false) => (limit, 0),
        (false, true) => (0, limit),
        (false, false) => (0, 0),
    }
}
