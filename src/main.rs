//! Latency Probe - HTTP Round-Trip Measurement Binary
//!
//! Probes a latency target from this node, prints or stores every sample,
//! and finishes with summary statistics.

use anyhow::{bail, Context};
use clap::Parser;
use latency_probe::{
    open_sink, resolve_public_ip, HttpProber, ProbeConfig, ProbeRunner, StorageConfig, Summary,
    DEFAULT_IP_ECHO_URL, DEFAULT_LANG, DEFAULT_REPEATS, DEFAULT_TARGET_URL,
};
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[derive(Parser)]
#[command(name = "latency_probe")]
#[command(about = "Measure HTTP round-trip latency from this node")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(author = "Austin Couch")]
#[command(
    long_about = "Times a fixed number of GET requests against a target, tags each sample \
                  with this node's public IP, and stores samples in MongoDB when \
                  MONGO_URI, MONGO_DB and MONGO_COLLECTION are set"
)]
struct Cli {
    /// Number of requests to issue
    #[arg(short = 'n', long, default_value_t = DEFAULT_REPEATS)]
    repeats: usize,

    /// URL to measure latency against
    #[arg(long, default_value = DEFAULT_TARGET_URL)]
    target: String,

    /// Service that echoes the caller's public IP
    #[arg(long, default_value = DEFAULT_IP_ECHO_URL)]
    ip_echo_url: String,

    /// Implementation tag stored with each sample
    #[arg(long, default_value = DEFAULT_LANG)]
    lang: String,

    /// Environment file with MongoDB settings
    #[arg(long, default_value = ".env")]
    env_file: PathBuf,

    /// Print samples instead of storing them, even if MongoDB is configured
    #[arg(long)]
    no_store: bool,

    /// Summary format: pretty or json
    #[arg(short, long, default_value = "pretty")]
    format: String,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

impl Cli {
    fn probe_config(&self) -> ProbeConfig {
        ProbeConfig::default()
            .with_repeats(self.repeats)
            .with_target_url(&self.target)
            .with_ip_echo_url(&self.ip_echo_url)
            .with_lang(&self.lang)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(&cli) {
        eprintln!("Error: failed to initialise logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(&cli).await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let subscriber = build_subscriber(log_filter(cli, directives.as_deref()));

    tracing::subscriber::set_global_default(subscriber)?;

    Ok(())
}

fn log_level(cli: &Cli) -> Level {
    if cli.debug {
        Level::DEBUG
    } else if cli.verbose {
        Level::INFO
    } else {
        Level::WARN
    }
}

/// `RUST_LOG` directives win when present and valid; otherwise the CLI level applies.
fn log_filter(cli: &Cli, directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(log_level(cli).as_str()))
}

fn build_subscriber(filter: EnvFilter) -> impl tracing::Subscriber + Send + Sync {
    FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .finish()
}

async fn run(cli: &Cli) -> anyhow::Result<()> {
    if !matches!(cli.format.as_str(), "pretty" | "json") {
        bail!("Unsupported format: {}. Use 'json' or 'pretty'", cli.format);
    }

    let config = cli.probe_config();
    config.validate()?;

    let storage = if cli.no_store {
        info!("Storage disabled from the command line");
        None
    } else {
        StorageConfig::load(&cli.env_file)
    };

    let sink = open_sink(storage.as_ref())
        .await
        .context("Failed to connect to MongoDB")?;

    let prober = HttpProber::new();
    let ip = match resolve_public_ip(prober.client(), &config.ip_echo_url).await {
        Ok(ip) => ip,
        Err(e) => {
            if let Err(close_err) = sink.close().await {
                warn!("Failed to close {} sink: {}", sink.name(), close_err);
            }
            return Err(e).context("Failed to get public IP");
        }
    };
    info!("Public IP: {}", ip);

    let report = ProbeRunner::new(prober, config).run(&ip, sink.as_ref()).await;

    if let Err(e) = sink.close().await {
        warn!("Failed to close {} sink: {}", sink.name(), e);
    }

    let summary = report.summary()?;
    print_summary(&cli.format, report.requested, &summary)?;

    Ok(())
}

fn print_summary(format: &str, requested: usize, summary: &Summary) -> anyhow::Result<()> {
    if format == "json" {
        println!("{}", serde_json::to_string_pretty(summary)?);
        return Ok(());
    }

    println!();
    println!("Results over {} requests:", requested);
    println!("{}", summary);
    Ok(())
}
