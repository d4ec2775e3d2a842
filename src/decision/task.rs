use crate::protocol::HookOutput;

/// The one subagent this hook refuses to dispatch.
///
/// Comparison is exact and case-sensitive: "bash" or "BASH" name different
/// (hypothetical) subagents and pass through untouched.
const BLOCKED_SUBAGENT: &str = "Bash";

const DENY_REASON: &str = "Bash subagent is disabled. Use mcp__acp__Bash tool directly instead.";

/// Evaluate a Task tool invocation.
///
/// Receives the already-extracted `subagent_type` from `ToolUse::parse()`.
/// `None` means the field was missing from tool_input; a Task call without a
/// subagent type is not ours to judge.
pub(super) fn evaluate_task(subagent_type: Option<&str>) -> Option<HookOutput> {
    if subagent_type == Some(BLOCKED_SUBAGENT) {
        Some(HookOutput::deny(DENY_REASON))
    } else {
        None
    }
}
