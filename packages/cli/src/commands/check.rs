use super::load_script;
use crate::config::Config;
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// JSON file holding an array of intents
    pub script: PathBuf,
}

/// Replay a script and verify the tree invariants after every intent
pub fn check(args: CheckArgs, config: &Config) -> Result<()> {
    let (mut session, mutations) = load_script(&args.script, config)?;
    let total = mutations.len();
    let mut failures = 0;

    for (step, mutation) in mutations.into_iter().enumerate() {
        let name = mutation.name();
        session.apply(mutation);

        if let Err(err) = session.check() {
            failures += 1;
            eprintln!("  {} #{} {} - {}", "✗".red(), step, name, err);
        }
    }

    if failures > 0 {
        return Err(anyhow!("{} of {} steps left the tree malformed", failures, total));
    }

    println!("{} {} steps, tree well-formed", "✓".green(), total);
    Ok(())
}
