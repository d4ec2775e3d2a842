use serde::Deserialize;
use serde_json::Value;

/// The input received from Claude Code on stdin for a PreToolUse hook.
///
/// Field names match the snake_case JSON that Claude Code sends. Only the two
/// fields this hook inspects are modeled; everything else (session_id,
/// transcript_path, cwd, ...) is silently ignored.
///
/// Both fields default when absent: a missing `tool_name` becomes the empty
/// string and a missing `tool_input` becomes JSON null. Absence is never a
/// parse error — the hook must stay out of the way of events it does not
/// recognize.
#[derive(Debug, Default, Deserialize)]
pub struct HookInput {
    #[serde(default)]
    pub tool_name: String,
    #[serde(default)]
    pub tool_input: Value,
}
