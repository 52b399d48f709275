//! Template-driven generation of plausible posts for a topic.
//!
//! Used for the simulated micro-blog source and as the substitute when the
//! real-data source comes back empty. Randomness goes through the
//! `RandomSource` trait so tests can pin the draws.

use crate::traits::RandomSource;
use crate::types::{Engagement, Platform, Post, SentimentLabel};
use chrono::{Duration, Utc};
use rand::{rngs::StdRng, Rng, SeedableRng};
use uuid::Uuid;

const POSITIVE_TEMPLATES: &[&str] = &[
    "Just tried {topic} and it's absolutely amazing! Best decision ever!",
    "Can't believe how much I love {topic}. Completely exceeded expectations!",
    "If you haven't tried {topic} yet, what are you waiting for? It's incredible!",
    "Finally got my hands on {topic}. The hype is REAL!",
    "{topic} is hands down the best thing I've experienced this year!",
    "Been using {topic} for a week now and I'm blown away. Highly recommend!",
    "Who else is obsessed with {topic}? This is game-changing!",
    "Just had the best experience with {topic}. Absolutely love it!",
    "{topic} keeps getting better. The team is doing amazing work!",
    "My review of {topic}: 10/10 would recommend to everyone!",
];

const NEGATIVE_TEMPLATES: &[&str] = &[
    "Really disappointed with {topic}. Total waste of money.",
    "{topic} is the worst. Should have read the reviews first.",
    "Never buying {topic} again. Complete disaster.",
    "Customer service for {topic} is absolutely terrible. Avoid!",
    "Regret purchasing {topic}. Such poor quality.",
    "{topic} broke after one week. Very unhappy customer here.",
    "Update ruined {topic}. Bring back the old version!",
    "False advertising with {topic}. Not happy at all.",
    "{topic} is a complete scam. Don't fall for it!",
    "Frustrated beyond words with {topic}. Worst experience ever.",
];

const NEUTRAL_TEMPLATES: &[&str] = &[
    "Just saw an ad for {topic}. Interesting approach.",
    "Anyone else using {topic}? How are you finding it?",
    "Thinking about trying {topic} next month.",
    "{topic} has some good features but also some flaws.",
    "The price of {topic} seems reasonable for what you get.",
    "Reading reviews about {topic} today. Mixed feelings.",
    "{topic} is available in my area now. Might check it out.",
    "Planning to compare {topic} with other options.",
    "Saw someone using {topic} at the coffee shop today.",
    "{topic} might be worth checking out. Anyone tried it?",
];

const MIXED_TEMPLATES: &[&str] = &[
    "{topic} is okay I guess. Some things are good, some not so much.",
    "Mixed feelings about {topic}. It has potential but needs work.",
    "{topic} is decent but not worth the hype honestly.",
    "Love some features of {topic} but hate others.",
];

const AUTHORS: &[&str] = &[
    "techlover99",
    "reviewking",
    "honest_mike",
    "sarah_says",
    "product_junkie",
    "daily_user",
    "first_timer",
    "expert_buyer",
    "casual_shopper",
    "trendy_tom",
    "gadget_guru",
    "real_talker",
    "no_hype",
    "fanboy_alert",
    "neutral_nancy",
    "big_spender",
    "savvy_shopper",
    "truth_seeker",
    "early_adopter",
    "late_bloomer",
];

/// Synthesized posts carry a timestamp within this window before now.
const MAX_POST_AGE_SECONDS: f64 = 3600.0;

/// Probability distribution over the sentiment categories a synthesized
/// post is drawn from.
#[derive(Debug, Clone, Copy)]
pub struct CategoryWeights {
    pub positive: f64,
    pub negative: f64,
    pub neutral: f64,
    pub mixed: f64,
}

impl Default for CategoryWeights {
    fn default() -> Self {
        Self {
            positive: 0.40,
            negative: 0.25,
            neutral: 0.25,
            mixed: 0.10,
        }
    }
}

/// Production randomness backed by an OS-seeded generator.
pub struct EntropyRandom(StdRng);

impl EntropyRandom {
    pub fn new() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl Default for EntropyRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropyRandom {
    fn next_f64(&mut self) -> f64 {
        self.0.gen::<f64>()
    }
}

pub struct Synthesizer {
    weights: CategoryWeights,
    rng: Box<dyn RandomSource>,
}

impl Synthesizer {
    pub fn new() -> Self {
        Self::with_random(CategoryWeights::default(), Box::new(EntropyRandom::new()))
    }

    pub fn with_random(weights: CategoryWeights, rng: Box<dyn RandomSource>) -> Self {
        Self { weights, rng }
    }

    /// Generate `count` posts about `topic`, engagement counters and
    /// category distribution shaped by `platform` and the configured weights.
    pub fn synthesize(&mut self, topic: &str, count: usize, platform: Platform) -> Vec<Post> {
        (0..count).map(|_| self.synthesize_one(topic, platform)).collect()
    }

    fn sample_category(&mut self) -> SentimentLabel {
        let draw = self.rng.next_f64();
        let w = self.weights;
        if draw < w.positive {
            SentimentLabel::Positive
        } else if draw < w.positive + w.negative {
            SentimentLabel::Negative
        } else if draw < w.positive + w.negative + w.neutral {
            SentimentLabel::Neutral
        } else {
            SentimentLabel::Mixed
        }
    }

    fn pick<'a>(&mut self, options: &[&'a str]) -> &'a str {
        let index = (self.rng.next_f64() * options.len() as f64) as usize;
        options[index.min(options.len() - 1)]
    }

    fn draw_count(&mut self, upper: f64) -> u32 {
        (self.rng.next_f64() * upper) as u32
    }

    fn synthesize_one(&mut self, topic: &str, platform: Platform) -> Post {
        let category = self.sample_category();
        let template = self.pick(templates_for(category));
        let text = template.replace("{topic}", topic);
        let author = self.pick(AUTHORS).to_string();

        let engagement = match platform {
            Platform::MicroBlog => Engagement {
                likes: Some(self.draw_count(500.0)),
                shares: Some(self.draw_count(100.0)),
                comments: Some(self.draw_count(50.0)),
                ..Default::default()
            },
            Platform::Forum => Engagement {
                upvotes: Some(i64::from(self.draw_count(500.0)) - 50),
                comments: Some(self.draw_count(50.0)),
                ..Default::default()
            },
        };

        let age_seconds = (self.rng.next_f64() * MAX_POST_AGE_SECONDS) as i64;

        Post {
            id: Uuid::new_v4().to_string(),
            title: None,
            text,
            author,
            platform,
            engagement,
            timestamp: Utc::now() - Duration::seconds(age_seconds),
            subreddit: None,
            url: None,
            sentiment_category: category,
        }
    }
}

impl Default for Synthesizer {
    fn default() -> Self {
        Self::new()
    }
}

fn templates_for(category: SentimentLabel) -> &'static [&'static str] {
    match category {
        SentimentLabel::Positive | SentimentLabel::VeryPositive => POSITIVE_TEMPLATES,
        SentimentLabel::Negative | SentimentLabel::VeryNegative => NEGATIVE_TEMPLATES,
        SentimentLabel::Mixed => MIXED_TEMPLATES,
        SentimentLabel::Neutral => NEUTRAL_TEMPLATES,
    }
}
