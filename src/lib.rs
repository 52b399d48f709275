pub mod acquisition;
pub mod analyzer;
pub mod fetcher;
pub mod mood;
pub mod sentiment;
pub mod synthesizer;
pub mod traits;
pub mod types;

pub use acquisition::acquire;
pub use analyzer::{Analyzer, MAX_FEED_POSTS};
pub use fetcher::RedditFetcher;
pub use mood::{aggregate, mood_emoji, mood_label};
pub use sentiment::{classify, score, SentimentScore};
pub use synthesizer::{CategoryWeights, EntropyRandom, Synthesizer};
pub use traits::{RandomSource, SearchSource};
pub use types::*;
