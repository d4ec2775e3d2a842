use serde::Serialize;

/// The output returned to Claude Code on stdout, emitted only on denial.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HookOutput {
    pub hook_specific_output: PreToolUseOutput,
}

impl HookOutput {
    /// Build a deny output with the given reason.
    pub fn deny(reason: impl Into<String>) -> Self {
        Self {
            hook_specific_output: PreToolUseOutput {
                hook_event_name: HookEventName::PreToolUse,
                permission_decision: Decision::Deny,
                reason: reason.into(),
            },
        }
    }
}

/// PreToolUse-specific output containing the permission decision.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PreToolUseOutput {
    pub hook_event_name: HookEventName,
    pub permission_decision: Decision,
    pub reason: String,
}

/// The hook event this output responds to. Always `PreToolUse` here.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub enum HookEventName {
    PreToolUse,
}

/// The permission decision. This hook only ever denies; when it has no
/// opinion it emits nothing at all rather than an allow.
#[derive(Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Deny,
}
