//! This module handles the initial setup of the application.
use super::args::AppArgs;
use crate::config::{ProfileConfig, TimingConfig};
use crate::terminal::{BootSequence, CommandRegistry, HostPlatform, PlatformProbe, Session};
use anyhow::{Context, Result};
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "info,profile_terminal=debug";

/// Contains all the necessary components for the terminal to run.
pub struct PreparedApp {
    /// The command-line arguments.
    pub args: AppArgs,
    /// The loaded profile, shared with the session.
    pub profile: Arc<ProfileConfig>,
    /// Pacing of boot playback and command latency.
    pub timing: TimingConfig,
    /// A fresh session, ready to start booting.
    pub session: Session,
}

/// Prepares the application for running.
///
/// This function performs the following steps:
/// 1. Configures logging.
/// 2. Loads and validates the profile config.
/// 3. Builds the command registry and the boot sequence.
/// 4. Creates the session.
///
/// # Errors
///
/// This function will return an error if the log file cannot be created or
/// the profile config cannot be loaded.
pub fn prepare(args: AppArgs) -> Result<PreparedApp> {
    configure_logging(args.log_file.as_deref())?;

    let profile = Arc::new(
        ProfileConfig::load(args.config.as_deref()).context("Failed to load profile config")?,
    );
    let timing = args.timing();

    let session = build_session(profile.clone(), &HostPlatform, args.history_limit);
    info!(
        "Prepared session for {} with {} boot lines",
        profile.service,
        session.boot_len()
    );

    Ok(PreparedApp {
        args,
        profile,
        timing,
        session,
    })
}

/// Builds a session over the built-in command vocabulary.
pub fn build_session(
    profile: Arc<ProfileConfig>,
    probe: &dyn PlatformProbe,
    history_limit: Option<usize>,
) -> Session {
    let registry = Arc::new(CommandRegistry::builtin());
    let boot = BootSequence::build(&profile, probe);
    Session::new(profile, registry, boot, history_limit)
}

/// Configures logging for the application.
///
/// The alternate screen owns the terminal, so logs only go to a file and
/// nothing is installed without one.
fn configure_logging(log_file: Option<&Path>) -> Result<()> {
    let Some(path) = log_file else {
        return Ok(());
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create log file '{}'", path.display()))?;
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(file))
        .with_ansi(false)
        .try_init();
    Ok(())
}
