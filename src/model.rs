use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

pub const FEATURE_COUNT: usize = 8;

/// Fitted regression model over the 8-feature vector. The raw output is a
/// log-scale like count; interpretation happens in the prediction pipeline.
pub trait Predictor {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<f64, String>;
}

/// Categorical encoder: a label seen at fit time maps to a stable id, an
/// unseen label maps to -1. The sentinel is a valid signal, not an error.
pub trait LabelLookup {
    fn id_of(&self, label: &str) -> i64;
}

/// Polarity in [-1, 1] for arbitrary text.
pub trait SentimentScorer {
    fn polarity(&self, text: &str) -> f64;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    pub intercept: f64,
    pub coefficients: Vec<f64>,
    pub companies: Vec<String>,
    pub usernames: Vec<String>,
    pub days: Vec<String>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            intercept: 2.4,
            // Vector order: has_media, hour, word_count, char_count,
            // sentiment, company_id, username_id, day_id.
            coefficients: vec![0.45, 0.012, 0.03, 0.004, 0.85, 0.02, 0.008, 0.05],
            companies: strings(&["Acme", "Globex", "Initech", "Umbrella", "Stark"]),
            usernames: strings(&["acme_hq", "globex_news", "initech_dev", "umbrella_pr"]),
            days: strings(&[
                "Friday",
                "Monday",
                "Saturday",
                "Sunday",
                "Thursday",
                "Tuesday",
                "Wednesday",
            ]),
        }
    }
}

impl ModelConfig {
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let config_path = path.or_else(default_model_path);
        let config = if let Some(path) = config_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read model config: {}", err))?;
                toml::from_str(&contents)
                    .map_err(|err| format!("failed to parse model config: {}", err))?
            } else {
                ModelConfig::default()
            }
        } else {
            ModelConfig::default()
        };
        Ok((config, config_path))
    }
}

/// Linear regression fitted offline; coefficients arrive via `ModelConfig`.
#[derive(Debug, Clone)]
pub struct LinearModel {
    intercept: f64,
    coefficients: [f64; FEATURE_COUNT],
}

impl LinearModel {
    pub fn new(intercept: f64, coefficients: [f64; FEATURE_COUNT]) -> Self {
        Self {
            intercept,
            coefficients,
        }
    }

    pub fn from_config(config: &ModelConfig) -> Result<Self, String> {
        if config.coefficients.len() != FEATURE_COUNT {
            return Err(format!(
                "model config needs {} coefficients, found {}",
                FEATURE_COUNT,
                config.coefficients.len()
            ));
        }
        let mut coefficients = [0.0; FEATURE_COUNT];
        coefficients.copy_from_slice(&config.coefficients);
        Ok(Self::new(config.intercept, coefficients))
    }
}

impl Predictor for LinearModel {
    fn predict(&self, features: &[f64; FEATURE_COUNT]) -> Result<f64, String> {
        let mut output = self.intercept;
        for (coefficient, feature) in self.coefficients.iter().zip(features.iter()) {
            output += coefficient * feature;
        }
        if output.is_nan() {
            return Err("model produced a non-finite output".to_string());
        }
        Ok(output)
    }
}

/// Ordered class list; ids are positions, matching is case-sensitive.
#[derive(Debug, Clone)]
pub struct LabelTable {
    classes: Vec<String>,
}

impl LabelTable {
    pub fn new(classes: Vec<String>) -> Self {
        Self { classes }
    }
}

impl LabelLookup for LabelTable {
    fn id_of(&self, label: &str) -> i64 {
        self.classes
            .iter()
            .position(|class| class == label)
            .map(|index| index as i64)
            .unwrap_or(-1)
    }
}

const POSITIVE_WORDS: &[&str] = &[
    "amazing", "awesome", "best", "brilliant", "excellent", "excited", "exciting", "fantastic",
    "glad", "good", "great", "happy", "impressive", "incredible", "love", "nice", "outstanding",
    "perfect", "proud", "smooth", "strong", "success", "thrilled", "win", "wonderful",
];

const NEGATIVE_WORDS: &[&str] = &[
    "awful", "bad", "broken", "bug", "delay", "disappointed", "down", "fail", "failure", "hate",
    "horrible", "issue", "late", "lost", "outage", "poor", "problem", "sad", "slow", "sorry",
    "terrible", "worst", "wrong",
];

/// Word-list polarity scorer: the mean of +1/-1 hits over matched tokens,
/// 0.0 when nothing matches.
#[derive(Debug, Clone, Default)]
pub struct LexiconScorer;

impl SentimentScorer for LexiconScorer {
    fn polarity(&self, text: &str) -> f64 {
        let mut total = 0.0;
        let mut matched = 0usize;

        for token in text.split_whitespace() {
            let word: String = token
                .chars()
                .filter(|ch| ch.is_alphanumeric())
                .collect::<String>()
                .to_lowercase();
            if word.is_empty() {
                continue;
            }
            if POSITIVE_WORDS.contains(&word.as_str()) {
                total += 1.0;
                matched += 1;
            } else if NEGATIVE_WORDS.contains(&word.as_str()) {
                total -= 1.0;
                matched += 1;
            }
        }

        if matched == 0 {
            0.0
        } else {
            (total / matched as f64).clamp(-1.0, 1.0)
        }
    }
}

fn default_model_path() -> Option<PathBuf> {
    env::var("MODEL_CONFIG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/model.toml")))
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
