use std::path::PathBuf;

use airhockey_ai::config::{self, Config};
use airhockey_ai::game::{AiMode, Difficulty};
use airhockey_ai::server;
use anyhow::{anyhow, Context};
use tracing::info;

/// Settings taken from the command line
#[derive(Debug, Default)]
struct CliArgs {
    config_path: Option<PathBuf>,
    host: Option<String>,
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let cli = parse_args(&args)?;

    let config_path = cli.config_path.clone().unwrap_or_else(config::get_config_path);
    let mut config = config::load_config(&config_path)
        .with_context(|| format!("loading {}", config_path.display()))?;
    apply_overrides(&mut config, &cli);

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_max_level(config.logging.log_level()?)
        .init();
    info!("Using configuration from {}", config_path.display());

    server::serve(&config).await
}

/// Parse command line arguments
fn parse_args(args: &[String]) -> anyhow::Result<CliArgs> {
    let mut cli = CliArgs::default();
    let mut rest = args.iter().skip(1);

    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "--config" | "-c" => {
                let path = rest.next().ok_or_else(|| anyhow!("--config requires a path"))?;
                cli.config_path = Some(PathBuf::from(path));
            }
            "--host" => {
                let host = rest.next().ok_or_else(|| anyhow!("--host requires an address"))?;
                cli.host = Some(host.clone());
            }
            "--port" | "-p" => {
                let port = rest.next().ok_or_else(|| anyhow!("--port requires a number"))?;
                cli.port = Some(
                    port.parse()
                        .with_context(|| format!("invalid port \"{}\"", port))?,
                );
            }
            "--help" | "-h" => {
                print_usage(&args[0]);
                std::process::exit(0);
            }
            other => {
                print_usage(&args[0]);
                return Err(anyhow!("unknown argument: {}", other));
            }
        }
    }

    Ok(cli)
}

fn apply_overrides(config: &mut Config, cli: &CliArgs) {
    if let Some(host) = &cli.host {
        config.server.host = host.clone();
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
}

fn print_usage(program: &str) {
    println!("Air hockey AI service");
    println!();
    println!("Usage:");
    println!("  {} [--config <path>] [--host <addr>] [--port <port>]", program);
    println!();
    println!("Endpoints:");
    println!("  POST /ai/move       game state in, target position out");
    println!("  GET  /ai/ws         same, one JSON message per frame");
    println!("  GET  /ai/profiles   difficulty settings in effect");
    println!("  GET  /health");
    println!();
    println!("AI modes:");
    for mode in AiMode::all() {
        println!("  {:<12} {}", mode.display_name(), mode.description());
    }
    let levels: Vec<&str> = Difficulty::all().iter().map(|d| d.as_str()).collect();
    println!();
    println!("Difficulties: {}", levels.join(", "));
    println!();
    println!("Default config file: {}", config::get_config_path().display());
}
