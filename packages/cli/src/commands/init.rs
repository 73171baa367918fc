use crate::config::{Config, DEFAULT_CONFIG_NAME};
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Document name (seeds node ids)
    #[arg(short, long, default_value = "untitled")]
    pub name: String,

    /// Force overwrite existing config
    #[arg(short, long)]
    pub force: bool,
}

const EXAMPLE_SCRIPT: &str = r#"[
  { "type": "addElement", "node": { "kind": "heading1", "content": "New Title" } },
  { "type": "selectElement", "nodeId": null },
  { "type": "addElement", "node": { "kind": "grid", "gridConfig": { "columnCount": 2 } } },
  { "type": "addElement", "node": { "kind": "paragraph", "content": "Left column" } }
]
"#;

pub fn init(args: InitArgs, cwd: &str) -> Result<()> {
    let config_path = Config::path(cwd);

    // Check if config already exists
    if config_path.exists() && !args.force {
        println!(
            "{} {} already exists",
            "⚠️".yellow(),
            DEFAULT_CONFIG_NAME.bright_white()
        );
        println!("Use --force to overwrite");
        return Ok(());
    }

    println!("{}", "📝 Initializing Pagesmith project...".bright_blue().bold());

    let config = Config {
        document_name: args.name,
        ..Config::default()
    };
    fs::write(&config_path, serde_json::to_string_pretty(&config)?)?;
    println!("  {} Created {}", "✓".green(), DEFAULT_CONFIG_NAME);

    let example = PathBuf::from(cwd).join("example.intents.json");
    if !example.exists() {
        fs::write(&example, EXAMPLE_SCRIPT)?;
        println!("  {} Created example.intents.json", "✓".green());
    }

    println!();
    println!("{}", "✅ Project initialized!".green().bold());
    println!();
    println!("Next steps:");
    println!("  1. Edit example.intents.json");
    println!("  2. Run: pagesmith replay example.intents.json");

    Ok(())
}
