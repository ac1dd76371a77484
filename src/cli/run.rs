//! Dispatch a parsed command to its handler.
//!
//! # Returns
//! - `Ok(CommandResult)` with the summary to report
//! - `Err` if the command fails (e.g., config or document errors)

use anyhow::Result;

use super::{
    args::{Arguments, Command},
    commands::{CommandResult, init::init, render::render, status::status},
};

pub fn run(Arguments { command }: Arguments) -> Result<CommandResult> {
    match command {
        Some(Command::Render(args)) => render(args),
        Some(Command::Status(args)) => status(args),
        Some(Command::Init) => init(),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}
