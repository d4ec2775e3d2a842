mod task;

use crate::protocol::{HookInput, HookOutput, ToolUse};

/// Evaluate a hook input and return a permission decision.
///
/// Returns `None` when the hook has no opinion, which Claude Code treats as
/// "proceed as normal". The only input that produces a decision is a Task
/// tool call dispatching the Bash subagent, which is denied.
///
/// # Examples
///
/// ```
/// use claude_bash_subagent_hook::decision::evaluate;
/// use claude_bash_subagent_hook::protocol::{Decision, HookInput};
///
/// let input: HookInput = serde_json::from_str(r#"{
///     "tool_name": "Task",
///     "tool_input": {"subagent_type": "Bash"}
/// }"#).unwrap();
///
/// let output = evaluate(&input).unwrap();
/// assert_eq!(output.hook_specific_output.permission_decision, Decision::Deny);
///
/// let input: HookInput = serde_json::from_str(r#"{"tool_name": "Read"}"#).unwrap();
/// assert!(evaluate(&input).is_none());
/// ```
pub fn evaluate(input: &HookInput) -> Option<HookOutput> {
    let tool_use = ToolUse::parse(&input.tool_name, &input.tool_input);
    match &tool_use {
        ToolUse::Task { subagent_type } => task::evaluate_task(subagent_type.as_deref()),
        ToolUse::Unknown { .. } => None,
    }
}
