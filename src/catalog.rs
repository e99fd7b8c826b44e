use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;

use crate::generator::SentimentBand;

const DEFAULT_INDUSTRY: &str = "General";
const DEFAULT_VOICE: &str = "Casual";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrandVoice {
    pub emojis: bool,
    pub tone: String,
}

impl Default for BrandVoice {
    fn default() -> Self {
        Self {
            emojis: true,
            tone: "friendly".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CtaPhrases {
    pub positive: Vec<String>,
    pub neutral: Vec<String>,
    pub negative: Vec<String>,
}

impl Default for CtaPhrases {
    fn default() -> Self {
        Self {
            positive: strings(&["Stay tuned!", "More coming soon!", "Tell us what you think!"]),
            neutral: strings(&[
                "What are your thoughts?",
                "More updates soon.",
                "Keep an eye on this.",
            ]),
            negative: strings(&[
                "We're working on it.",
                "Appreciate your support.",
                "We'll improve.",
            ]),
        }
    }
}

/// Read-only template tables shared by every generate call. Loaded once at
/// startup; unknown industry or voice keys fall back to the "General" and
/// "Casual" entries rather than failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateCatalog {
    pub brand_voices: HashMap<String, BrandVoice>,
    pub industry_templates: HashMap<String, Vec<String>>,
    pub positive_templates: Vec<String>,
    pub neutral_templates: Vec<String>,
    pub negative_templates: Vec<String>,
    pub hashtags: HashMap<String, Vec<String>>,
    pub cta_phrases: CtaPhrases,
    pub media_markers: Vec<String>,
}

impl Default for TemplateCatalog {
    fn default() -> Self {
        let mut brand_voices = HashMap::new();
        brand_voices.insert(
            "Casual".to_string(),
            BrandVoice {
                emojis: true,
                tone: "friendly".to_string(),
            },
        );
        brand_voices.insert(
            "Professional".to_string(),
            BrandVoice {
                emojis: false,
                tone: "formal".to_string(),
            },
        );
        brand_voices.insert(
            "Playful".to_string(),
            BrandVoice {
                emojis: true,
                tone: "fun".to_string(),
            },
        );

        let mut industry_templates = HashMap::new();
        industry_templates.insert(
            "Tech".to_string(),
            strings(&[
                "🚀 Innovation alert: {message}",
                "Tech news: {message}",
                "{company} breakthrough: {message}",
            ]),
        );
        industry_templates.insert(
            "Food".to_string(),
            strings(&[
                "🍕 Delicious update: {message}",
                "Tasty news: {message}",
                "Fresh drop from {company}: {message}",
            ]),
        );
        industry_templates.insert(
            "Fashion".to_string(),
            strings(&[
                "✨ Style update: {message}",
                "Fashion alert: {message}",
                "New from {company}: {message}",
            ]),
        );
        industry_templates.insert(
            "General".to_string(),
            strings(&[
                "{company} update: {message}",
                "From the {company} team: {message}",
            ]),
        );

        let mut hashtags = HashMap::new();
        hashtags.insert("Tech".to_string(), strings(&["#TechNews", "#Innovation", "#AI"]));
        hashtags.insert("Food".to_string(), strings(&["#Foodie", "#Yum", "#Delicious"]));
        hashtags.insert(
            "Fashion".to_string(),
            strings(&["#OOTD", "#StyleDrop", "#NewLook"]),
        );
        hashtags.insert("General".to_string(), strings(&["#Update", "#News"]));

        Self {
            brand_voices,
            industry_templates,
            positive_templates: strings(&[
                "Great news from {company}! {message} 🎉",
                "{company} just shared something exciting: {message} 🌟",
                "We're thrilled to announce: {message} – Thanks, {company}! 🙌",
                "{company} just dropped this! {message} 🔥",
                "Big win for {company}: {message} 💪",
                "Can't wait to see this in action: {message} 🚀",
            ]),
            neutral_templates: strings(&[
                "{company} has an update: {message}",
                "FYI: {company} shared this today – {message}",
                "Here's the latest from {company}: {message}",
                "Heads up from {company}: {message}",
                "Straight from {company}'s playbook: {message}",
            ]),
            negative_templates: strings(&[
                "{company} faces a challenge: {message} 😔",
                "Not ideal: {message} says {company} 😕",
                "Things to fix: {message} - {company}",
                "Tough day at {company}: {message} 😓",
                "Here's what went wrong at {company}: {message} ⚠️",
            ]),
            hashtags,
            cta_phrases: CtaPhrases::default(),
            media_markers: strings(&["📷", "🎥", "🖼️", "📸"]),
        }
    }
}

impl TemplateCatalog {
    /// Loads the catalog from a TOML file, falling back to the compiled-in
    /// tables when no file exists at the resolved path.
    pub fn load(path: Option<PathBuf>) -> Result<(Self, Option<PathBuf>), String> {
        let catalog_path = path.or_else(default_catalog_path);
        let catalog = if let Some(path) = catalog_path.as_ref() {
            if path.exists() {
                let contents = std::fs::read_to_string(path)
                    .map_err(|err| format!("failed to read catalog: {}", err))?;
                toml::from_str(&contents)
                    .map_err(|err| format!("failed to parse catalog: {}", err))?
            } else {
                TemplateCatalog::default()
            }
        } else {
            TemplateCatalog::default()
        };
        Ok((catalog, catalog_path))
    }

    /// Industry keys are matched case-sensitively; anything unknown uses the
    /// "General" bucket.
    pub fn industry_bucket(&self, industry: &str) -> &[String] {
        self.industry_templates
            .get(industry)
            .or_else(|| self.industry_templates.get(DEFAULT_INDUSTRY))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn hashtag_bucket(&self, industry: &str) -> &[String] {
        self.hashtags
            .get(industry)
            .or_else(|| self.hashtags.get(DEFAULT_INDUSTRY))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn voice(&self, name: &str) -> BrandVoice {
        self.brand_voices
            .get(name)
            .or_else(|| self.brand_voices.get(DEFAULT_VOICE))
            .cloned()
            .unwrap_or_default()
    }

    pub fn band_templates(&self, band: SentimentBand) -> &[String] {
        match band {
            SentimentBand::Positive => &self.positive_templates,
            SentimentBand::Neutral => &self.neutral_templates,
            SentimentBand::Negative => &self.negative_templates,
        }
    }

    pub fn cta_bucket(&self, band: SentimentBand) -> &[String] {
        match band {
            SentimentBand::Positive => &self.cta_phrases.positive,
            SentimentBand::Neutral => &self.cta_phrases.neutral,
            SentimentBand::Negative => &self.cta_phrases.negative,
        }
    }
}

fn default_catalog_path() -> Option<PathBuf> {
    env::var("CATALOG_PATH")
        .ok()
        .filter(|value| !value.trim().is_empty())
        .map(PathBuf::from)
        .or_else(|| Some(PathBuf::from("config/catalog.toml")))
}

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
