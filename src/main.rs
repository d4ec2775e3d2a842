use clap::{Parser, Subcommand};

/// Claude Code PreToolUse hook that blocks the Bash subagent of the Task tool.
#[derive(Debug, Parser)]
#[command(name = "claude-bash-subagent-hook", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Run as a Claude Code PreToolUse hook (reads stdin, writes stdout)
    Hook,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Hook => claude_bash_subagent_hook::run_hook(),
    }
}
