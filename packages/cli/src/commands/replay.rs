use super::load_script;
use crate::config::Config;
use crate::outline::Outline;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use pagesmith_editor::MutationOutcome;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ReplayArgs {
    /// JSON file holding an array of intents
    pub script: PathBuf,

    /// Print the final tree as JSON instead of an outline
    #[arg(long)]
    pub json: bool,

    /// Print the outcome of every intent
    #[arg(short, long)]
    pub verbose: bool,
}

pub fn replay(args: ReplayArgs, config: &Config) -> Result<()> {
    let (mut session, mutations) = load_script(&args.script, config)?;
    let mut ignored = 0;

    for (step, mutation) in mutations.into_iter().enumerate() {
        let name = mutation.name();
        match session.apply(mutation) {
            MutationOutcome::Applied { version } => {
                if args.verbose {
                    println!("  {} #{} {} → v{}", "✓".green(), step, name, version);
                }
            }
            MutationOutcome::Noop { reason } => {
                ignored += 1;
                if args.verbose {
                    println!("  {} #{} {} ignored: {}", "·".yellow(), step, name, reason);
                }
            }
        }
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(session.tree())?);
    } else {
        println!("{}", Outline::render(session.tree()));
        println!();
        println!(
            "{} v{}, {} nodes, {} ignored",
            "Done".green().bold(),
            session.version(),
            session.tree().node_count(),
            ignored
        );
        if let Some(selected) = session.selected_id() {
            println!("Selected: {}", selected.bright_white());
        }
    }

    Ok(())
}
