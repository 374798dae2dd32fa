use serde::Serialize;

use crate::cli::GreetArgs;
use crate::error::CommandResult;
use crate::output::render_json;

/// Structured result of the `greet` command.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct GreetingResponse {
    pub message: String,
    pub user_input: String,
    // Always true when emitted; failures exit before a response exists.
    pub success: bool,
}

/// Wraps `input` in the greeting template. Any text is accepted as-is.
pub fn build_greeting(input: &str) -> GreetingResponse {
    GreetingResponse {
        message: format!("Hello! 👋 I received your input: '{input}'. Nice to meet you!"),
        user_input: input.to_owned(),
        success: true,
    }
}

/// Builds the greeting for the provided arguments and renders it as JSON.
pub fn execute(args: &GreetArgs) -> CommandResult<String> {
    // Invalid UTF-8 sequences become U+FFFD rather than a usage error.
    let input = args.input.to_string_lossy();
    tracing::debug!(
        target: "qoder_cli::greet",
        input_len = input.len(),
        "building greeting"
    );

    render_json(&build_greeting(&input))
}
