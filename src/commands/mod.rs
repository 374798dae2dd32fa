pub mod greet;

use crate::cli::{Args, Command};
use crate::error::CommandResult;

/// Dispatches execution to the appropriate command handler and returns the
/// line to print on stdout.
pub fn execute(args: &Args) -> CommandResult<String> {
    match &args.command {
        Command::Greet(greet_args) => {
            tracing::debug!(target: "qoder_cli::commands", command = "greet", "dispatching");
            greet::execute(greet_args)
        }
    }
}
