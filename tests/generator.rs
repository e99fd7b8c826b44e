use likecast::catalog::TemplateCatalog;
use likecast::generator::{compose, RngSelector, Selector, SentimentBand, TweetRequest};

/// Always picks the first entry of every bucket.
struct ZeroSelector;

impl Selector for ZeroSelector {
    fn pick(&mut self, _len: usize) -> usize {
        0
    }
}

fn request(message: &str) -> TweetRequest {
    TweetRequest {
        message: message.to_string(),
        ..TweetRequest::default()
    }
}

#[test]
fn empty_message_is_a_validation_error() {
    let catalog = TemplateCatalog::default();
    let err = compose(&request("   "), &catalog, &mut ZeroSelector).unwrap_err();
    assert!(err.is_validation());
}

#[test]
fn band_boundaries_are_exclusive_at_half() {
    assert_eq!(SentimentBand::from_target(0.5), SentimentBand::Neutral);
    assert_eq!(SentimentBand::from_target(0.51), SentimentBand::Positive);
    assert_eq!(SentimentBand::from_target(-0.5), SentimentBand::Neutral);
    assert_eq!(SentimentBand::from_target(-0.51), SentimentBand::Negative);
    assert_eq!(SentimentBand::from_target(0.0), SentimentBand::Neutral);
}

#[test]
fn neutral_sentiment_uses_the_industry_bucket() {
    let catalog = TemplateCatalog::default();
    let mut request = request("Launching X");
    request.company = "Acme".to_string();
    request.industry = "Tech".to_string();

    let tweet = compose(&request, &catalog, &mut ZeroSelector).unwrap();
    assert_eq!(
        tweet,
        "🚀 Innovation alert: Launching X #TechNews What are your thoughts?"
    );
}

#[test]
fn strong_sentiment_overrides_industry_and_unknown_industry_falls_back() {
    let catalog = TemplateCatalog::default();
    let mut request = request("Launch day");
    request.company = "Acme".to_string();
    request.industry = "Aerospace".to_string();
    request.sentiment_target = 0.8;

    let tweet = compose(&request, &catalog, &mut ZeroSelector).unwrap();
    assert_eq!(tweet, "Great news from Acme! Launch day 🎉 #Update Stay tuned!");
}

#[test]
fn strong_negative_sentiment_draws_negative_templates_and_cta() {
    let catalog = TemplateCatalog::default();
    let mut request = request("Shipments delayed");
    request.company = "Acme".to_string();
    request.sentiment_target = -0.8;

    let tweet = compose(&request, &catalog, &mut ZeroSelector).unwrap();
    assert_eq!(
        tweet,
        "Acme faces a challenge: Shipments delayed 😔 #Update We're working on it."
    );
}

#[test]
fn truncation_cuts_at_the_word_budget_and_marks_with_ellipsis() {
    let catalog = TemplateCatalog::default();
    let mut request = request("Launching X");
    request.company = "Acme".to_string();
    request.industry = "Tech".to_string();
    request.word_count_target = 6;

    let tweet = compose(&request, &catalog, &mut ZeroSelector).unwrap();
    assert_eq!(tweet, "🚀 Innovation alert: Launching X #TechNews...");
    assert!(tweet.split_whitespace().count() <= 6);
}

#[test]
fn composed_tweet_never_exceeds_the_word_budget() {
    let catalog = TemplateCatalog::default();
    let mut request = request(
        "one two three four five six seven eight nine ten eleven twelve thirteen fourteen",
    );
    request.word_count_target = 5;

    let tweet = compose(&request, &catalog, &mut ZeroSelector).unwrap();
    assert_eq!(tweet.split_whitespace().count(), 5);
    assert!(tweet.ends_with("..."));
}

#[test]
fn media_marker_respects_the_voice_emoji_gate() {
    let catalog = TemplateCatalog::default();

    let mut request = request("Launching X");
    request.has_media = true;
    request.brand_voice = "Casual".to_string();
    let tweet = compose(&request, &catalog, &mut ZeroSelector).unwrap();
    assert!(tweet.contains("📷"));

    request.brand_voice = "Professional".to_string();
    let tweet = compose(&request, &catalog, &mut ZeroSelector).unwrap();
    assert!(!tweet.contains("📷"));
}

#[test]
fn unknown_voice_falls_back_to_casual() {
    let catalog = TemplateCatalog::default();
    let mut request = request("Launching X");
    request.has_media = true;
    request.brand_voice = "corporate-ish".to_string();

    let tweet = compose(&request, &catalog, &mut ZeroSelector).unwrap();
    assert!(tweet.contains("📷"));
}

#[test]
fn media_marker_is_not_duplicated_when_the_template_carries_it() {
    let mut catalog = TemplateCatalog::default();
    catalog
        .industry_templates
        .insert("Tech".to_string(), vec!["{message} 📷".to_string()]);

    let mut request = request("Launching X");
    request.industry = "Tech".to_string();
    request.has_media = true;

    let tweet = compose(&request, &catalog, &mut ZeroSelector).unwrap();
    assert_eq!(tweet.matches("📷").count(), 1);
}

#[test]
fn placeholders_fill_verbatim() {
    let catalog = TemplateCatalog::default();
    let mut request = request("50% off {today}");
    request.company = "Bob's \"Shop\"".to_string();
    request.industry = "Fashion".to_string();

    let tweet = compose(&request, &catalog, &mut ZeroSelector).unwrap();
    assert!(tweet.contains("50% off {today}"));
}

#[test]
fn seeded_selector_is_deterministic() {
    let catalog = TemplateCatalog::default();
    let mut request = request("Launching X");
    request.industry = "Food".to_string();
    request.has_media = true;

    let first = compose(&request, &catalog, &mut RngSelector::seeded(42)).unwrap();
    let second = compose(&request, &catalog, &mut RngSelector::seeded(42)).unwrap();
    assert_eq!(first, second);
}

#[test]
fn partial_catalog_toml_merges_with_defaults() {
    let catalog: TemplateCatalog = toml::from_str(
        r#"
        neutral_templates = ["Note from {company}: {message}"]
        "#,
    )
    .unwrap();

    let tweet = compose(&request("Launching X"), &catalog, &mut ZeroSelector).unwrap();
    assert!(tweet.starts_with("Our Company update: Launching X"));
    assert_eq!(
        catalog.neutral_templates,
        vec!["Note from {company}: {message}".to_string()]
    );
}

#[test]
fn empty_bucket_surfaces_as_a_failure() {
    let mut catalog = TemplateCatalog::default();
    catalog.neutral_templates.clear();
    catalog.industry_templates.clear();

    let err = compose(&request("Launching X"), &catalog, &mut ZeroSelector).unwrap_err();
    assert!(!err.is_validation());
}
