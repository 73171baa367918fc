pub mod check;
pub mod init;
pub mod replay;

pub use check::{check, CheckArgs};
pub use init::{init, InitArgs};
pub use replay::{replay, ReplayArgs};

use crate::config::Config;
use anyhow::{Context, Result};
use pagesmith_editor::{parse_script, EditSession, Mutation};
use std::path::Path;

/// Read an intent script and open a fresh session configured from `config`
pub(crate) fn load_script(path: &Path, config: &Config) -> Result<(EditSession, Vec<Mutation>)> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read script {}", path.display()))?;
    let mutations = parse_script(&source)
        .with_context(|| format!("Cannot parse script {}", path.display()))?;

    let session =
        EditSession::new(&config.document_name).with_policy(config.insertion_policy());
    Ok((session, mutations))
}
