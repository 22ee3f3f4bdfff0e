//! The main entry point for the profile terminal.
mod app;
mod config;
mod terminal;
mod ui;

use anyhow::Result;

/// The main function of the application.
///
/// This function parses the command line, prepares the session and runs
/// the terminal front-end until the user exits.
///
/// # Errors
///
/// Returns an error if the configuration cannot be loaded or the terminal
/// cannot be driven.
#[tokio::main]
async fn main() -> Result<()> {
    app::launch().await
}
