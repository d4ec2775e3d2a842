use std::io::Read;

use thiserror::Error;

use crate::decision;
use crate::protocol::{HookInput, HookOutput};

/// Why the hook input could not be obtained.
///
/// Never surfaced: the hook's single error policy is fail-open, so both
/// variants collapse to "no output, exit 0" at the top of [`run`].
#[derive(Debug, Error)]
enum InputError {
    #[error("failed to read stdin: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse hook input: {0}")]
    Json(#[from] serde_json::Error),
}

/// Execute the hook subcommand: read JSON from stdin, evaluate, write at most
/// one JSON line to stdout.
///
/// Fail-open on every branch: unreadable stdin, malformed JSON, and inputs
/// the hook has no opinion about all produce no output. A missing denial is
/// how the host knows to proceed, so blocking on error would turn every
/// glitch into a stuck tool call. The process always exits 0; the decision
/// is carried entirely by the stdout payload.
pub fn run() {
    let Ok(input) = read_from_stdin() else {
        return;
    };
    if let Some(output) = decision::evaluate(&input) {
        output_json(&output);
    }
}

fn read_from_stdin() -> Result<HookInput, InputError> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;
    Ok(serde_json::from_str(&input)?)
}

/// Serialize a HookOutput to JSON and print to stdout.
///
/// # Panics
///
/// Panics if serialization fails, which cannot happen with the derived
/// `Serialize` impl on strings and enums. This is an invariant, not a
/// runtime error — failure here indicates a programming bug.
fn output_json(output: &HookOutput) {
    let json = serde_json::to_string(output).expect("HookOutput serialization cannot fail");
    println!("{json}");
}
