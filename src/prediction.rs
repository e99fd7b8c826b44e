use crate::model::{
    LabelLookup, LabelTable, LexiconScorer, LinearModel, ModelConfig, Predictor, SentimentScorer,
    FEATURE_COUNT,
};
use crate::RequestError;

#[derive(Debug, Clone)]
pub struct PredictionRequest {
    pub content: String,
    pub has_media: bool,
    pub hour: i64,
    pub day: String,
    pub username: String,
    pub company: String,
}

impl Default for PredictionRequest {
    fn default() -> Self {
        Self {
            content: String::new(),
            has_media: false,
            hour: 12,
            day: "Monday".to_string(),
            username: "AnonymousUser".to_string(),
            company: "UnknownCompany".to_string(),
        }
    }
}

/// The model's input, in the order it was fitted with. The order is part of
/// the contract: the predictor is position-sensitive.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureVector {
    pub has_media: f64,
    pub hour: f64,
    pub word_count: f64,
    pub char_count: f64,
    pub sentiment: f64,
    pub company_id: f64,
    pub username_id: f64,
    pub day_id: f64,
}

impl FeatureVector {
    pub fn as_array(&self) -> [f64; FEATURE_COUNT] {
        [
            self.has_media,
            self.hour,
            self.word_count,
            self.char_count,
            self.sentiment,
            self.company_id,
            self.username_id,
            self.day_id,
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PopularityTier {
    GrowingReach,
    TrendingSoon,
    ViralAlert,
}

impl PopularityTier {
    pub fn from_likes(likes: u64) -> Self {
        if likes >= 1000 {
            PopularityTier::ViralAlert
        } else if likes >= 100 {
            PopularityTier::TrendingSoon
        } else {
            PopularityTier::GrowingReach
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PopularityTier::GrowingReach => "📈 Growing Reach",
            PopularityTier::TrendingSoon => "🚀 Trending Soon",
            PopularityTier::ViralAlert => "🔥 Viral Alert!",
        }
    }
}

#[derive(Debug, Clone)]
pub struct PredictionResult {
    pub predicted_likes: u64,
    pub tier: PopularityTier,
    pub word_count: usize,
    pub char_count: usize,
    pub sentiment: f64,
    pub company: String,
    pub username: String,
    pub day: String,
    pub hour: i64,
    pub has_media: bool,
}

/// Feature derivation plus model interpretation, wired to injected
/// collaborators so tests can run with deterministic stubs.
pub struct LikePredictor {
    model: Box<dyn Predictor + Send + Sync>,
    companies: Box<dyn LabelLookup + Send + Sync>,
    usernames: Box<dyn LabelLookup + Send + Sync>,
    days: Box<dyn LabelLookup + Send + Sync>,
    sentiment: Box<dyn SentimentScorer + Send + Sync>,
}

impl LikePredictor {
    pub fn new(
        model: Box<dyn Predictor + Send + Sync>,
        companies: Box<dyn LabelLookup + Send + Sync>,
        usernames: Box<dyn LabelLookup + Send + Sync>,
        days: Box<dyn LabelLookup + Send + Sync>,
        sentiment: Box<dyn SentimentScorer + Send + Sync>,
    ) -> Self {
        Self {
            model,
            companies,
            usernames,
            days,
            sentiment,
        }
    }

    pub fn from_config(config: &ModelConfig) -> Result<Self, String> {
        let model = LinearModel::from_config(config)?;
        Ok(Self::new(
            Box::new(model),
            Box::new(LabelTable::new(config.companies.clone())),
            Box::new(LabelTable::new(config.usernames.clone())),
            Box::new(LabelTable::new(config.days.clone())),
            Box::new(LexiconScorer),
        ))
    }

    pub fn score(&self, request: &PredictionRequest) -> Result<PredictionResult, RequestError> {
        if request.content.trim().is_empty() {
            return Err(RequestError::Validation(
                "Content (tweet text) cannot be empty! ✍️".to_string(),
            ));
        }

        if !(0..=23).contains(&request.hour) {
            return Err(RequestError::Failed(format!(
                "hour out of range (0-23): {}",
                request.hour
            )));
        }

        let features = self.derive_features(request);
        let raw = self
            .model
            .predict(&features.as_array())
            .map_err(RequestError::Failed)?;
        let predicted_likes = likes_from_log(raw);

        Ok(PredictionResult {
            predicted_likes,
            tier: PopularityTier::from_likes(predicted_likes),
            word_count: features.word_count as usize,
            char_count: features.char_count as usize,
            sentiment: features.sentiment,
            company: request.company.clone(),
            username: request.username.clone(),
            day: request.day.clone(),
            hour: request.hour,
            has_media: request.has_media,
        })
    }

    /// Counts run over the content exactly as received, so the echoed
    /// metrics match what the caller typed.
    pub fn derive_features(&self, request: &PredictionRequest) -> FeatureVector {
        FeatureVector {
            has_media: if request.has_media { 1.0 } else { 0.0 },
            hour: request.hour as f64,
            word_count: request.content.split_whitespace().count() as f64,
            char_count: request.content.chars().count() as f64,
            sentiment: self.sentiment.polarity(&request.content),
            company_id: self.companies.id_of(&request.company) as f64,
            username_id: self.usernames.id_of(&request.username) as f64,
            day_id: self.days.id_of(&request.day) as f64,
        }
    }
}

/// The model predicts on a log scale. Rounding edge cases must never leak a
/// negative count, so anything non-finite or below zero becomes 0.
fn likes_from_log(raw: f64) -> u64 {
    let likes = raw.exp().round();
    if likes.is_nan() || likes < 0.0 {
        0
    } else if likes > u64::MAX as f64 {
        u64::MAX
    } else {
        likes as u64
    }
}
