use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use postforge::{
    build_prompt, export_csv, links, Batcher, BatchExecutor, FormSession, GeneratorConfig,
    OpenAiClient, PostType, SheetWebhook, DEFAULT_CEILING,
};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "postforge")]
#[command(about = "Generate social media posts or statistics with an LLM")]
#[command(version)]
struct Args {
    /// Load .env from the current directory
    #[arg(long = "dot-env", global = true)]
    _dot_env: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate items and optionally export them
    Generate {
        #[command(flatten)]
        target: Target,

        /// Write the items to a CSV file
        #[arg(long, value_name = "PATH")]
        csv: Option<PathBuf>,

        /// Post the items to a spreadsheet webhook
        #[arg(long, value_name = "URL", env = "POSTFORGE_SHEET_WEBHOOK")]
        webhook: Option<String>,

        /// Print the items as JSON instead of a list
        #[arg(long)]
        json: bool,

        #[command(flatten)]
        api: ApiArgs,
    },
    /// Show how a request would be split and the first prompt, without calling the API
    Plan {
        #[command(flatten)]
        target: Target,
    },
}

#[derive(clap::Args)]
struct Target {
    /// social-media or statistic
    #[arg(long = "type", value_name = "TYPE")]
    post_type: PostType,

    #[arg(long)]
    topic: String,

    #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
    count: u32,

    /// Maximum items requested per API call
    #[arg(long, default_value_t = DEFAULT_CEILING)]
    ceiling: u32,
}

#[derive(clap::Args)]
struct ApiArgs {
    #[arg(long, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    #[arg(long, env = "OPENAI_BASE_URL")]
    api_base: Option<String>,

    #[arg(long, env = "POSTFORGE_MODEL")]
    model: Option<String>,

    #[arg(long, env = "POSTFORGE_TEMPERATURE")]
    temperature: Option<f32>,

    #[arg(long, env = "POSTFORGE_MAX_TOKENS")]
    max_tokens: Option<u32>,

    /// Per-request timeout in seconds
    #[arg(long)]
    timeout: Option<u64>,
}

impl ApiArgs {
    fn into_config(self) -> Result<GeneratorConfig> {
        let api_key = self.api_key.unwrap_or_default();
        let mut config = GeneratorConfig::new(api_key)?;
        if let Some(base) = self.api_base {
            config = config.with_api_base(base);
        }
        if let Some(model) = self.model {
            config = config.with_model(model);
        }
        if let Some(temperature) = self.temperature {
            config = config.with_temperature(temperature)?;
        }
        if let Some(max) = self.max_tokens {
            config = config.with_max_output_size(max);
        }
        if let Some(secs) = self.timeout {
            config = config.with_request_timeout(Duration::from_secs(secs));
        }
        Ok(config)
    }
}

fn session_for(target: &Target) -> FormSession {
    let mut session = FormSession::new();
    session.set_post_type(target.post_type);
    session.set_topic(target.topic.clone());
    session.set_count(target.count);
    session
}

fn plan(target: Target) -> Result<()> {
    let session = session_for(&target);
    let request = session.request()?;
    let counts = Batcher::new(target.ceiling).counts(request.total_count());

    if let Some(summary) = session.summary() {
        println!("{}\n", summary);
    }
    println!("Sub-requests: {:?}", counts);
    if let Some(first) = counts.first() {
        println!("\nFirst prompt:\n{}", build_prompt(request.post_type(), request.topic(), *first));
    }
    Ok(())
}

async fn generate(
    target: Target,
    csv: Option<PathBuf>,
    webhook: Option<String>,
    json: bool,
    api: ApiArgs,
) -> Result<()> {
    let executor = BatchExecutor::new(OpenAiClient::new(api.into_config()?)?)
        .with_batcher(Batcher::new(target.ceiling));
    info!(config = ?executor.backend().config(), "Using generator config");
    let mut session = session_for(&target);

    if let Some(summary) = session.summary() {
        eprintln!("{}", summary);
    }
    eprintln!("Generating desired posts...");
    session.generate(&executor).await?;

    if let Some(message) = session.visible_error(Instant::now()) {
        bail!("{}", message);
    }

    let items = session.items();
    if json {
        println!("{}", serde_json::to_string_pretty(items)?);
    } else {
        for item in items {
            match target.post_type {
                PostType::Statistic => println!("- {}", links::render_plain(&item.text)),
                PostType::SocialMedia => println!("- {}", item.text),
            }
        }
    }
    eprintln!("✓ Counter: {} items", items.len());

    if let Some(path) = csv {
        export_csv(&path, items)
            .with_context(|| format!("Failed to export CSV to {}", path.display()))?;
        eprintln!("✓ Wrote {}", path.display());
    }

    if let Some(url) = webhook {
        SheetWebhook::new(url)
            .send(target.post_type, items)
            .await
            .context("Failed to export to spreadsheet webhook")?;
        eprintln!("✓ Exported to spreadsheet");
    }

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "postforge=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Env-backed flags are resolved during parsing, so .env has to load first
    if std::env::args().any(|arg| arg == "--dot-env") {
        let _ = dotenvy::dotenv();
    }
    let args = Args::parse();

    match args.command {
        Commands::Generate {
            target,
            csv,
            webhook,
            json,
            api,
        } => generate(target, csv, webhook, json, api).await,
        Commands::Plan { target } => plan(target),
    }
}
