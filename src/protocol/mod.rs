pub mod input;
pub mod output;
pub mod tool_use;

pub use input::HookInput;
pub use output::{Decision, HookEventName, HookOutput, PreToolUseOutput};
pub use tool_use::ToolUse;
