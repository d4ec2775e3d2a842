pub mod decision;
pub mod protocol;

pub(crate) mod cli;

/// Run the hook subcommand: read JSON from stdin, evaluate, write at most one
/// JSON line to stdout.
///
/// This is the binary entry point. It exists to bridge the binary crate
/// (`main.rs`) to the library without exposing `cli` internals. Not a stable
/// integration API — callers should use [`decision::evaluate`] directly.
pub fn run_hook() {
    cli::hook::run()
}
