//! Shared helpers for integration tests: spawn the real binary with a JSON
//! document on stdin and capture everything it does.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

pub fn binary_path() -> PathBuf {
    let path = PathBuf::from(env!("CARGO_BIN_EXE_claude-bash-subagent-hook"));
    assert!(path.exists(), "binary not found at {}", path.display());
    path
}

/// Run `claude-bash-subagent-hook hook` with the given stdin.
/// Returns (stdout, stderr, exit_code).
pub fn run_hook(stdin_input: &str) -> (String, String, i32) {
    let output: Output = Command::new(binary_path())
        .arg("hook")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .and_then(|mut child| {
            use std::io::Write;
            child
                .stdin
                .take()
                .expect("stdin should be piped")
                .write_all(stdin_input.as_bytes())
                .expect("failed to write stdin");
            child.wait_with_output()
        })
        .expect("failed to execute binary");

    let stdout = String::from_utf8(output.stdout).expect("stdout not valid UTF-8");
    let stderr = String::from_utf8(output.stderr).expect("stderr not valid UTF-8");
    let exit_code = output.status.code().unwrap_or(-1);
    (stdout, stderr, exit_code)
}

/// Parse the hook's stdout as a JSON value.
pub fn parse_hook_output(stdout: &str) -> serde_json::Value {
    serde_json::from_str(stdout.trim()).expect("stdout should be valid JSON")
}

/// Build a hook input JSON document for the given tool.
pub fn make_input_json(tool_name: &str, tool_input: serde_json::Value) -> String {
    serde_json::json!({
        "session_id": "sess-e2e-test",
        "transcript_path": "/tmp/transcript.json",
        "cwd": "/tmp/test",
        "permission_mode": "default",
        "hook_event_name": "PreToolUse",
        "tool_name": tool_name,
        "tool_input": tool_input,
        "tool_use_id": "toolu_e2e"
    })
    .to_string()
}

/// Build a Task tool input JSON document for the given subagent type.
pub fn task_input_json(subagent_type: &str) -> String {
    make_input_json("Task", serde_json::json!({"subagent_type": subagent_type}))
}
