use std::ffi::OsString;

use clap::{Parser, Subcommand};

/// Command-line arguments for the Qoder CLI.
#[derive(Debug, Parser)]
#[command(
    name = "qoder-cli",
    version,
    about = "Qoder CLI tool for GitHub Action processing",
    long_about = "A CLI tool that processes user input and generates greetings for GitHub Actions",
    arg_required_else_help = true
)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Echo user input and generate a friendly greeting
    Greet(GreetArgs),
}

#[derive(Debug, Clone, clap::Args)]
pub struct GreetArgs {
    /// Text to echo back inside the greeting.
    ///
    /// Kept as raw OS text so bytes that are not UTF-8 still reach the command.
    #[arg(value_name = "INPUT", value_parser = clap::value_parser!(OsString))]
    pub input: OsString,
}
