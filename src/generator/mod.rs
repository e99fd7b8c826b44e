pub mod selector;

pub use selector::{RngSelector, Selector};

use crate::catalog::TemplateCatalog;
use crate::RequestError;

#[derive(Debug, Clone)]
pub struct TweetRequest {
    pub message: String,
    pub company: String,
    pub industry: String,
    pub brand_voice: String,
    pub word_count_target: usize,
    pub sentiment_target: f64,
    pub has_media: bool,
}

impl Default for TweetRequest {
    fn default() -> Self {
        Self {
            message: String::new(),
            company: "Our Company".to_string(),
            industry: "general".to_string(),
            brand_voice: "casual".to_string(),
            word_count_target: 25,
            sentiment_target: 0.0,
            has_media: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentBand {
    Positive,
    Neutral,
    Negative,
}

impl SentimentBand {
    pub fn from_target(target: f64) -> Self {
        if target > 0.5 {
            SentimentBand::Positive
        } else if target < -0.5 {
            SentimentBand::Negative
        } else {
            SentimentBand::Neutral
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SentimentBand::Positive => "positive",
            SentimentBand::Neutral => "neutral",
            SentimentBand::Negative => "negative",
        }
    }
}

/// Composes a promo tweet from the catalog. Choice points draw from the
/// injected selector in a fixed order: base template, media marker, hashtag,
/// call-to-action.
pub fn compose(
    request: &TweetRequest,
    catalog: &TemplateCatalog,
    selector: &mut dyn Selector,
) -> Result<String, RequestError> {
    let message = request.message.trim();
    if message.is_empty() {
        return Err(RequestError::Validation(
            "Please provide a message to base the tweet on! 📝".to_string(),
        ));
    }

    let band = SentimentBand::from_target(request.sentiment_target);

    // Strong sentiment intent overrides industry flavor for the base
    // sentence; the neutral band never takes the first branch.
    let base = if request.sentiment_target.abs() > 0.5 {
        pick(selector, catalog.band_templates(band))?
    } else {
        pick(selector, catalog.industry_bucket(&request.industry))?
    };

    let voice = catalog.voice(&request.brand_voice);
    let marker = if request.has_media && voice.emojis {
        Some(pick(selector, &catalog.media_markers)?)
    } else {
        None
    };

    let mut tweet = base
        .replace("{company}", &request.company)
        .replace("{message}", message);

    if let Some(marker) = marker {
        let suffix = format!(" {}", marker);
        // Some templates already carry the glyph; skip the marker then.
        if !tweet.contains(&suffix) {
            tweet.push_str(&suffix);
        }
    }

    let hashtag = pick(selector, catalog.hashtag_bucket(&request.industry))?;
    tweet.push(' ');
    tweet.push_str(hashtag);

    let cta = pick(selector, catalog.cta_bucket(band))?;
    tweet.push(' ');
    tweet.push_str(cta);

    Ok(enforce_word_budget(tweet.trim(), request.word_count_target))
}

/// Hard post-hoc truncation: it may cut through the hashtag or CTA that was
/// just appended, which is accepted behavior.
fn enforce_word_budget(text: &str, target: usize) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() > target {
        format!("{}...", words[..target].join(" "))
    } else {
        text.to_string()
    }
}

fn pick<'a>(selector: &mut dyn Selector, bucket: &'a [String]) -> Result<&'a str, RequestError> {
    if bucket.is_empty() {
        return Err(RequestError::Failed(
            "template catalog bucket is empty".to_string(),
        ));
    }
    Ok(bucket[selector.pick(bucket.len())].as_str())
}
