//! Command-line front end for balancing runs
//!
//! Reads a JSON run description, validates it, allocates customers to agents
//! and prints the winning agent id (or a fuller report).

mod report;

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, info, Level};

use cs_balancing_core::{setup_logging, validation, BalancingConfig, BalancingInput};
use report::OutputFormat;

#[derive(Parser, Debug)]
#[command(author, version, about = "Assign customers to customer-success agents by score", long_about = None)]
struct Args {
    /// JSON run description with agents, customers and unavailable agent ids
    #[arg(short, long)]
    input: PathBuf,

    /// TOML configuration file (defaults to <config dir>/cs-balance/config.toml)
    #[arg(short, long, env = "CS_BALANCE_CONFIG")]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Id)]
    format: OutputFormat,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cs-balance").join("config.toml"))
}

/// An explicit `--config` must exist; the default location is optional.
fn load_config(args: &Args) -> anyhow::Result<BalancingConfig> {
    let path = match &args.config {
        Some(path) => path.clone(),
        None => match default_config_path() {
            Some(path) if path.is_file() => path,
            _ => return Ok(BalancingConfig::default()),
        },
    };

    BalancingConfig::from_path(&path).with_context(|| format!("loading config {}", path.display()))
}

fn run(args: &Args, config: &BalancingConfig) -> anyhow::Result<String> {
    let input = BalancingInput::from_path(&args.input)
        .with_context(|| format!("loading input {}", args.input.display()))?;
    validation::validate_input(&input, &config.validation)?;
    debug!(
        agents = input.agents.len(),
        customers = input.customers.len(),
        unavailable = input.unavailable.len(),
        "Loaded run description"
    );

    let allocation = input.into_balancer().allocate();
    info!(winner = ?allocation.winner(), "Allocation complete");

    report::render(&allocation, args.format)
}

fn start(args: &Args) -> anyhow::Result<String> {
    let config = load_config(args)?;
    let logging = config
        .logging
        .clone()
        .with_overrides(args.verbose.then_some(Level::DEBUG), args.json_logs);
    setup_logging(&logging)?;

    run(args, &config)
}

fn main() {
    let args = Args::parse();

    match start(&args) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
