mod api;
mod server;

use clap::{Args, Parser, Subcommand};
use std::io::{self, Read};
use std::path::Path;
use tracing::{info, warn};

use likecast::catalog::TemplateCatalog;
use likecast::{format_float, format_number};
use likecast::generator::{self, RngSelector, TweetRequest};
use likecast::model::ModelConfig;
use likecast::prediction::{LikePredictor, PredictionRequest};

#[derive(Parser)]
#[command(name = "likecast", about = "Tweet engagement predictor and generator")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    Predict(PredictArgs),
    Generate(GenerateArgs),
    Serve(ServeArgs),
}

#[derive(Args, Debug, Clone)]
struct PredictArgs {
    #[arg(long)]
    content: Option<String>,
    #[arg(long)]
    has_media: bool,
    #[arg(long, default_value_t = 12)]
    hour: i64,
    #[arg(long, default_value = "Monday")]
    day: String,
    #[arg(long, default_value = "AnonymousUser")]
    username: String,
    #[arg(long, default_value = "UnknownCompany")]
    company: String,
}

impl Default for PredictArgs {
    fn default() -> Self {
        Self {
            content: None,
            has_media: false,
            hour: 12,
            day: "Monday".to_string(),
            username: "AnonymousUser".to_string(),
            company: "UnknownCompany".to_string(),
        }
    }
}

#[derive(Args, Debug, Clone)]
struct GenerateArgs {
    #[arg(long)]
    message: Option<String>,
    #[arg(long, default_value = "Our Company")]
    company: String,
    #[arg(long, default_value = "general")]
    industry: String,
    #[arg(long, default_value = "casual")]
    brand_voice: String,
    #[arg(long, default_value_t = 25)]
    word_count_target: usize,
    #[arg(long, default_value_t = 0.0)]
    sentiment_target: f64,
    #[arg(long)]
    has_media: bool,
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Args, Debug, Clone)]
pub struct ServeArgs {
    #[arg(long, default_value = "127.0.0.1")]
    host: String,
    #[arg(long, default_value_t = 8787)]
    port: u16,
    #[arg(long, default_value = "frontend/build")]
    web_root: String,
}

#[tokio::main]
async fn main() {
    load_dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), String> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or(Command::Predict(PredictArgs::default()));

    match command {
        Command::Predict(args) => run_predict(args),
        Command::Generate(args) => run_generate(args),
        Command::Serve(args) => {
            let predictor = load_predictor()?;
            let catalog = load_catalog()?;
            server::serve(args, predictor, catalog).await
        }
    }
}

fn run_predict(args: PredictArgs) -> Result<(), String> {
    let predictor = load_predictor()?;

    let request = PredictionRequest {
        content: read_text(args.content)?,
        has_media: args.has_media,
        hour: args.hour,
        day: args.day,
        username: args.username,
        company: args.company,
    };

    let result = predictor.score(&request).map_err(|err| err.to_string())?;

    println!(
        "Predicted likes: {} ({})",
        format_number(result.predicted_likes),
        result.tier.label()
    );
    println!(
        "Details: {} words | {} chars | sentiment {}",
        result.word_count,
        result.char_count,
        format_float(result.sentiment, 2)
    );
    println!(
        "Posted by {} for {} on {} at {}:00{}",
        result.username,
        result.company,
        result.day,
        result.hour,
        if result.has_media { " with media" } else { "" }
    );

    Ok(())
}

fn run_generate(args: GenerateArgs) -> Result<(), String> {
    let catalog = load_catalog()?;

    let request = TweetRequest {
        message: read_text(args.message)?,
        company: args.company,
        industry: args.industry,
        brand_voice: args.brand_voice,
        word_count_target: args.word_count_target,
        sentiment_target: args.sentiment_target,
        has_media: args.has_media,
    };

    let mut selector = match args.seed {
        Some(seed) => RngSelector::seeded(seed),
        None => RngSelector::from_entropy(),
    };

    let tweet =
        generator::compose(&request, &catalog, &mut selector).map_err(|err| err.to_string())?;
    println!("{}", tweet);

    Ok(())
}

fn load_predictor() -> Result<LikePredictor, String> {
    let (config, path) = ModelConfig::load(None)?;
    match path.as_ref().filter(|path| path.exists()) {
        Some(path) => info!(path = %path.display(), "loaded model config"),
        None => warn!("model config not found, using built-in defaults"),
    }
    LikePredictor::from_config(&config)
}

fn load_catalog() -> Result<TemplateCatalog, String> {
    let (catalog, path) = TemplateCatalog::load(None)?;
    match path.as_ref().filter(|path| path.exists()) {
        Some(path) => info!(path = %path.display(), "loaded template catalog"),
        None => warn!("template catalog not found, using built-in defaults"),
    }
    Ok(catalog)
}

fn read_text(arg: Option<String>) -> Result<String, String> {
    if let Some(text) = arg {
        if !text.trim().is_empty() {
            return Ok(text);
        }
    }

    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .map_err(|err| format!("failed reading stdin: {}", err))?;
    let trimmed = buffer.trim();
    if trimmed.is_empty() {
        return Err("missing text: pass it as a flag or pipe stdin".to_string());
    }
    Ok(trimmed.to_string())
}

fn load_dotenv() {
    let _ = dotenvy::dotenv();
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let manifest_path = Path::new(manifest_dir).join(".env");
    let _ = dotenvy::from_path(manifest_path);
}
