use serde_json::Value;

/// Typed representation of a tool invocation, parsed at the protocol boundary.
///
/// Replaces stringly-typed `tool_name` matching. Each variant carries the
/// tool-specific fields extracted from `tool_input`.
pub enum ToolUse {
    /// Subagent dispatch through the Task tool.
    Task {
        /// Subagent name from tool_input["subagent_type"].
        /// `None` when the field is missing or not a string.
        subagent_type: Option<String>,
    },
    /// Any tool this hook has no opinion about.
    Unknown {
        tool_name: String,
    },
}

impl ToolUse {
    /// Parse a tool name and its input value into a typed tool use.
    ///
    /// A `tool_input` that is not a JSON object is treated as an empty one:
    /// the field lookups simply come back `None`.
    pub fn parse(tool_name: &str, tool_input: &Value) -> Self {
        match tool_name {
            "Task" => ToolUse::Task {
                subagent_type: extract_string(tool_input, "subagent_type"),
            },
            other => ToolUse::Unknown {
                tool_name: other.to_string(),
            },
        }
    }
}

/// Extract a string field from a JSON object, `None` if absent or wrong type.
fn extract_string(value: &Value, field: &str) -> Option<String> {
    value.get(field).and_then(Value::as_str).map(String::from)
}
