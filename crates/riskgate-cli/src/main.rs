mod config;
mod serve;

use clap::{Parser, Subcommand};
use riskgate_classify::{classify_value, parse_signals};
use riskgate_core::{RiskGateError, RiskGateResult, Thresholds};
use riskgate_flow::RiskClassifierNode;
use tracing::warn;

#[derive(Parser)]
#[command(name = "riskgate")]
#[command(about = "Classify the akamai-user-risk header into auth flow outcomes")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Classify {
        #[arg(help = "Raw header value to classify")]
        value: String,
        #[arg(long, default_value = "50", help = "High risk threshold")]
        high: f64,
        #[arg(long, default_value = "25", help = "Medium risk threshold")]
        medium: f64,
    },
    Serve {
        #[arg(
            short = 'f',
            long,
            default_value = "riskgate.toml",
            help = "Path to config file"
        )]
        config: String,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "riskgate=info".into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Classify {
            value,
            high,
            medium,
        } => run_classify(value, high, medium),
        Commands::Serve { config: config_path } => {
            match config::RiskGateConfig::from_file(&config_path) {
                Ok(cfg) => run_serve(cfg).await,
                Err(e) => Err(RiskGateError::Config(format!(
                    "failed to load config {}: {}",
                    config_path, e
                ))),
            }
        }
    };

    if let Err(e) = result {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn check_thresholds(thresholds: &Thresholds) {
    if thresholds.high <= thresholds.medium || thresholds.medium < 0.0 {
        warn!(
            high = thresholds.high,
            medium = thresholds.medium,
            "thresholds do not satisfy high > medium >= 0; tiering will be skewed"
        );
    }
}

fn run_classify(value: String, high: f64, medium: f64) -> RiskGateResult<()> {
    let thresholds = Thresholds { high, medium };
    check_thresholds(&thresholds);

    let evaluation = classify_value(&value, &thresholds);

    println!("--- classification ---");
    println!("outcome: {}", evaluation.outcome);
    if let Some(score) = evaluation.score {
        println!("score: {}", score);
    }

    let signals = parse_signals(&value);
    if !signals.is_empty() {
        println!("\nsignals ({}):", signals.len());
        for (key, val) in &signals {
            println!("  {} = {}", key, val);
        }
    }

    Ok(())
}

async fn run_serve(cfg: config::RiskGateConfig) -> RiskGateResult<()> {
    let thresholds = cfg.thresholds();
    check_thresholds(&thresholds);

    let node = RiskClassifierNode::new(thresholds).with_save_header(cfg.save_header);
    let server = cfg.server.unwrap_or_default();

    serve::run_serve(&server.bind, server.port, node).await
}
