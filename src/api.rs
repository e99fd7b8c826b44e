use likecast::generator::TweetRequest;
use likecast::prediction::{PredictionRequest, PredictionResult};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct ApiPredictRequest {
    pub content: Option<String>,
    pub has_media: Option<bool>,
    pub hour: Option<i64>,
    pub day: Option<String>,
    pub username: Option<String>,
    pub company: Option<String>,
}

impl ApiPredictRequest {
    pub fn into_request(self) -> PredictionRequest {
        let mut request = PredictionRequest::default();
        if let Some(content) = self.content {
            request.content = content;
        }
        if let Some(has_media) = self.has_media {
            request.has_media = has_media;
        }
        if let Some(hour) = self.hour {
            request.hour = hour;
        }
        if let Some(day) = self.day {
            request.day = day;
        }
        if let Some(username) = self.username {
            request.username = username;
        }
        if let Some(company) = self.company {
            request.company = company;
        }
        request
    }
}

#[derive(Debug, Serialize)]
pub struct PredictDetails {
    pub word_count: usize,
    pub sentiment: String,
    pub company: String,
    pub username: String,
    pub day: String,
    pub hour_of_posting: i64,
    pub has_media: bool,
}

#[derive(Debug, Serialize)]
pub struct ApiPredictResponse {
    pub success: bool,
    pub predicted_likes: u64,
    pub popularity_estimate: String,
    pub details: PredictDetails,
}

impl ApiPredictResponse {
    pub fn from_result(result: PredictionResult) -> Self {
        Self {
            success: true,
            predicted_likes: result.predicted_likes,
            popularity_estimate: result.tier.label().to_string(),
            details: PredictDetails {
                word_count: result.word_count,
                sentiment: format!("{:.2}", result.sentiment),
                company: result.company,
                username: result.username,
                day: result.day,
                hour_of_posting: result.hour,
                has_media: result.has_media,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiGenerateRequest {
    pub message: Option<String>,
    pub company: Option<String>,
    pub industry: Option<String>,
    pub brand_voice: Option<String>,
    pub word_count_target: Option<usize>,
    pub sentiment_target: Option<f64>,
    pub has_media: Option<bool>,
}

impl ApiGenerateRequest {
    pub fn into_request(self) -> TweetRequest {
        let mut request = TweetRequest::default();
        if let Some(message) = self.message {
            request.message = message;
        }
        if let Some(company) = self.company {
            request.company = company;
        }
        if let Some(industry) = self.industry {
            request.industry = industry;
        }
        if let Some(brand_voice) = self.brand_voice {
            request.brand_voice = brand_voice;
        }
        if let Some(target) = self.word_count_target {
            request.word_count_target = target;
        }
        if let Some(target) = self.sentiment_target {
            request.sentiment_target = target;
        }
        if let Some(has_media) = self.has_media {
            request.has_media = has_media;
        }
        request
    }
}

#[derive(Debug, Serialize)]
pub struct GenerateInfo {
    pub brand_voice: String,
    pub industry: String,
    pub word_goal: usize,
    pub sentiment_goal: f64,
}

#[derive(Debug, Serialize)]
pub struct ApiGenerateResponse {
    pub success: bool,
    pub generated_tweet: String,
    pub description: String,
    pub info: GenerateInfo,
}

impl ApiGenerateResponse {
    pub fn from_tweet(tweet: String, request: &TweetRequest) -> Self {
        Self {
            success: true,
            generated_tweet: tweet,
            description: "🎉 Here's your AI-crafted tweet! 🚀".to_string(),
            info: GenerateInfo {
                brand_voice: request.brand_voice.clone(),
                industry: request.industry.clone(),
                word_goal: request.word_count_target,
                sentiment_goal: request.sentiment_target,
            },
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub success: bool,
    pub error: String,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            error: message.into(),
        }
    }
}
