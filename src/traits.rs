use crate::types::Post;
use async_trait::async_trait;

/// Trait for searching posts about a topic on a remote platform endpoint.
#[async_trait]
pub trait SearchSource: Send + Sync {
    /// Human-readable name for this source.
    fn source_name(&self) -> String;

    /// Fetch up to `limit` usable posts about `topic`.
    ///
    /// Implementations report upstream failures as an empty vec, never as an
    /// error; callers must treat empty as a valid, expected outcome.
    async fn search(&self, topic: &str, limit: usize) -> Vec<Post>;
}

/// Injectable randomness for the synthesizer: one uniform draw in [0, 1).
///
/// Production uses an OS-seeded generator; tests substitute a deterministic
/// sequence to pin down category sampling and template choice.
pub trait RandomSource: Send {
    fn next_f64(&mut self) -> f64;
}
