mod analysis;
mod cli;
mod config;
mod errors;
mod llm_client;
mod matching;
mod models;
mod resume;
mod routes;
mod state;
mod text;
mod tools;

use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{AnalyzeArgs, Cli, Command, ServeArgs};
use crate::config::{Config, ExtractorBackend};
use crate::llm_client::LlmClient;
use crate::models::posting::load_postings;
use crate::models::JobPosting;
use crate::resume::extraction::{
    LlmSkillExtractor, SkillExtractor, VocabularySkillExtractor, DEFAULT_SKILL_COUNT,
};
use crate::routes::build_router;
use crate::state::AppState;
use crate::tools::Toolkit;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Logs go to stderr so `analyze` output stays clean JSON on stdout
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match cli.command() {
        Command::Serve(args) => serve(config, args).await,
        Command::Analyze(args) => analyze(config, args).await,
    }
}

async fn serve(config: Config, args: ServeArgs) -> Result<()> {
    info!("Starting jobmatch API v{}", env!("CARGO_PKG_VERSION"));

    let toolkit = build_toolkit(&config, &config.jobs_csv)?;
    let port = args.port.unwrap_or(config.port);

    let state = AppState { toolkit, config };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{port}").parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn analyze(config: Config, args: AnalyzeArgs) -> Result<()> {
    let jobs_csv = args.jobs.as_deref().unwrap_or(config.jobs_csv.as_path());
    let toolkit = build_toolkit(&config, jobs_csv)?;

    let resume_text = read_resume(&args.resume)?;
    let report = toolkit.analyze(&resume_text).await;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

fn build_toolkit(config: &Config, jobs_csv: &Path) -> Result<Toolkit> {
    let postings = load_posting_table(jobs_csv)?;
    let extractor = build_extractor(config)?;
    info!(
        "Toolkit ready: {} postings, {} extractor",
        postings.len(),
        extractor.backend()
    );
    Ok(Toolkit::new(Arc::new(postings), extractor))
}

/// A missing table starts the service empty; a malformed one is fatal.
fn load_posting_table(path: &Path) -> Result<Vec<JobPosting>> {
    if !path.exists() {
        warn!(
            "Job postings file {} not found; matching will report no jobs available",
            path.display()
        );
        return Ok(vec![]);
    }
    load_postings(path)
        .with_context(|| format!("Failed to load job postings from {}", path.display()))
}

fn build_extractor(config: &Config) -> Result<Arc<dyn SkillExtractor>> {
    match (config.skill_extractor, &config.google_api_key) {
        (ExtractorBackend::Llm, Some(api_key)) => {
            let client = LlmClient::new(
                api_key.clone(),
                config.llm_model.clone(),
                config.llm_timeout,
            )?;
            let client = match &config.llm_base_url {
                Some(base_url) => client.with_base_url(base_url.clone()),
                None => client,
            };
            info!("LLM client initialized (model: {})", client.model());
            Ok(Arc::new(LlmSkillExtractor::new(
                Arc::new(client),
                DEFAULT_SKILL_COUNT,
            )))
        }
        (ExtractorBackend::Llm, None) => {
            warn!("SKILL_EXTRACTOR=llm but GOOGLE_API_KEY is not set; using vocabulary extractor");
            Ok(Arc::new(VocabularySkillExtractor))
        }
        (ExtractorBackend::Vocabulary, _) => Ok(Arc::new(VocabularySkillExtractor)),
    }
}

fn read_resume(path: &Path) -> Result<String> {
    let is_pdf = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));

    if is_pdf {
        pdf_extract::extract_text(path)
            .map_err(|e| anyhow!("Failed to extract text from {}: {e}", path.display()))
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read resume {}", path.display()))
    }
}
