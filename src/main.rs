// file: src/main.rs
// description: commandline application entry point with command handling
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use paper_classifier::utils::logging::{Status, status_line};
use paper_classifier::{AppState, ClassificationRequest, Config, InferenceDispatcher, Validator};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "paper_classifier")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Classify academic paper titles and abstracts into subject areas", long_about = None)]
struct Cli {
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    #[arg(long, default_value_t = true, action = ArgAction::Set)]
    color: bool,

    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,

    /// Override the model artifact root directory
    #[arg(long, value_name = "DIR", env = "PAPER_CLASSIFIER_MODELS_DIR")]
    models_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP classification API
    Serve {
        #[arg(long)]
        host: Option<String>,

        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List the models available on disk
    Models,

    /// Classify a single paper and print the result as JSON
    Classify {
        #[arg(short, long, default_value = "")]
        title: String,

        #[arg(short = 'a', long = "abstract", default_value = "")]
        abstract_text: String,

        #[arg(short, long)]
        model: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    paper_classifier::utils::logging::init_logger(cli.color, cli.verbose);

    info!("Paper Classifier");
    info!("Loading configuration from: {}", cli.config.display());

    let mut config = if cli.config.exists() {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
        Config::load(None).unwrap_or_else(|e| {
            warn!("Falling back to built-in defaults: {}", e);
            Config::default_config()
        })
    };

    if let Some(models_dir) = cli.models_dir {
        config.models.root = models_dir;
    }

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            cmd_serve(config).await?;
        }
        Commands::Models => {
            cmd_models(&config).await?;
        }
        Commands::Classify {
            title,
            abstract_text,
            model,
        } => {
            let request = ClassificationRequest {
                title,
                abstract_text,
                model,
            };
            cmd_classify(&config, request).await?;
        }
    }

    Ok(())
}

async fn cmd_serve(config: Config) -> Result<()> {
    info!(
        "Starting classification API on {}:{}",
        config.server.host, config.server.port
    );

    let state = AppState::new(config);
    paper_classifier::web::start_server(state)
        .await
        .context("Web server failed")?;

    Ok(())
}

async fn cmd_models(config: &Config) -> Result<()> {
    if let Err(e) = Validator::validate_directory(&config.models.root) {
        println!("{}", status_line(Status::Warning, &e.to_string()));
    }

    let dispatcher = InferenceDispatcher::new(config.models.clone());
    let models = tokio::task::spawn_blocking(move || dispatcher.catalog().list())
        .await
        .context("Model listing task failed")?
        .context("Failed to list models")?;

    for (category, names) in [
        ("traditional", &models.traditional),
        ("ensemble", &models.ensemble),
    ] {
        println!("\n{}", status_line(Status::Info, &format!("{} ({})", category, names.len())));
        if names.is_empty() {
            println!("  {}", status_line(Status::Warning, "no models found"));
        }
        for name in names {
            println!("  - {}", name);
        }
    }
    println!();

    Ok(())
}

async fn cmd_classify(config: &Config, request: ClassificationRequest) -> Result<()> {
    let dispatcher = InferenceDispatcher::new(config.models.clone());
    let outcome = tokio::task::spawn_blocking(move || dispatcher.classify(&request))
        .await
        .context("Classification task failed")?;

    match outcome {
        Ok(result) => {
            println!("{}", serde_json::to_string_pretty(&result)?);
            eprintln!(
                "{}",
                status_line(
                    Status::Success,
                    &format!("Classified with model '{}'", result.model_used)
                )
            );
            Ok(())
        }
        Err(e) => {
            eprintln!("{}", status_line(Status::Failure, &e.chain()));
            Err(e).context("Classification failed")
        }
    }
}
