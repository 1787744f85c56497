use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;

/// Write completions for `shell` to stdout.
pub fn handle_completions(shell: Shell) -> anyhow::Result<()> {
    let mut cmd = Cli::command();
    let bin_name = cmd.get_name().to_string();
    generate(shell, &mut cmd, bin_name, &mut std::io::stdout().lock());
    Ok(())
}
