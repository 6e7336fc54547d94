use anyhow::Result;
use classify_core::config;
use classify_core::config::AppConfig;
use classify_core::rules::IconRuleSet;
use classify_core::{ClassificationRequest, ClassifierClient, ClassifierKind, RequestSlot};
use clap::{Parser, Subcommand};
use cli::{input, render};
use std::path::{Path, PathBuf};
use tracing::error;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref())?;

    match cli.command {
        Commands::Serve { port } => run_serve(cfg, port).await,
        Commands::Image { path, json } => {
            let request = input::image_request(&path).await?;
            run_classify(cfg, request, json).await
        }
        Commands::Intent { text, json } => {
            let request = ClassificationRequest::text(ClassifierKind::IntentText, text)?;
            run_classify(cfg, request, json).await
        }
        Commands::Emotion { text, json } => {
            let request = ClassificationRequest::text(ClassifierKind::EmotionText, text)?;
            run_classify(cfg, request, json).await
        }
    }
}

#[derive(Parser)]
#[command(name = "model-gateway")]
#[command(about = "Client and forwarding proxy for hosted classifiers", long_about = None)]
struct Cli {
    /// Path to config TOML
    #[arg(short, long)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the forwarding proxy (POST /api/predict/intent)
    Serve {
        /// Listening port; overrides config and PORT
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Classify an aircraft image
    Image {
        /// Image file to upload
        path: PathBuf,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// Classify the intent of a message
    Intent {
        /// Message text
        text: String,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
    /// Classify the emotion of a message
    Emotion {
        /// Message text
        text: String,
        /// Output JSON
        #[arg(long)]
        json: bool,
    },
}

async fn run_serve(mut cfg: AppConfig, port: Option<u16>) -> Result<()> {
    if let Some(port) = port {
        cfg.server.port = port;
    }
    proxy_server::run(cfg.server).await
}

async fn run_classify(cfg: AppConfig, request: ClassificationRequest, json: bool) -> Result<()> {
    let icons = IconRuleSet::load(cfg.icons.rules_path.as_deref().map(Path::new))?;
    let client = ClassifierClient::new(&cfg.client, icons)?;
    let slot = RequestSlot::new();
    let kind = request.kind();

    match slot.run(&client, request).await {
        Ok(result) => {
            let status = slot.status(kind);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&render::result_json(&result, &status))?
                );
            } else {
                println!("{}", render::panel(&result.view()));
                println!("{}", render::status(&status));
            }
            Ok(())
        }
        Err(err) => {
            error!(%kind, error = %err, "classification failed");
            let status = slot.status(kind);
            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&serde_json::json!({
                        "status": status.kind,
                        "message": status.message,
                    }))?
                );
            } else {
                eprintln!("{}", render::status(&status));
            }
            std::process::exit(1);
        }
    }
}
