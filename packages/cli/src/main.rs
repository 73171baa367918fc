mod commands;
mod config;
mod outline;

use clap::{Parser, Subcommand};
use colored::Colorize;
use commands::{check, init, replay, CheckArgs, InitArgs, ReplayArgs};
use config::Config;
use tracing_subscriber::EnvFilter;

/// Pagesmith CLI - replay page-building intents against the document engine
#[derive(Parser, Debug)]
#[command(name = "pagesmith")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Write a config file and an example intent script
    Init(InitArgs),

    /// Apply an intent script to an empty document and print the result
    Replay(ReplayArgs),

    /// Apply an intent script, validating the tree after every step
    Check(CheckArgs),
}

fn init_logging(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Load the config and install logging for commands that run the engine
fn load_config(cwd: &str) -> anyhow::Result<Config> {
    let config = Config::load(cwd)?;
    init_logging(&config);
    Ok(config)
}

fn run(cli: Cli, cwd: &str) -> anyhow::Result<()> {
    match cli.command {
        Command::Init(args) => init(args, cwd),
        Command::Replay(args) => replay(args, &load_config(cwd)?),
        Command::Check(args) => check(args, &load_config(cwd)?),
    }
}

fn main() {
    let cli = Cli::parse();

    let cwd = std::env::current_dir()
        .expect("Cannot get current directory")
        .display()
        .to_string();

    if let Err(err) = run(cli, &cwd) {
        eprintln!();
        eprintln!("{} {}", "Error:".red().bold(), err);
        eprintln!();
        std::process::exit(1);
    }
}
