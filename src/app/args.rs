use clap::Parser;
use std::path::PathBuf;

use crate::config::TimingConfig;

#[derive(Parser, Debug, Clone)]
#[command(name = "profile-terminal")]
#[command(about = "An interactive profile presented as a simulated terminal session")]
pub struct AppArgs {
    #[arg(long, help = "Profile config file (JSON); built-in profile if omitted")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value_t = 260, help = "Delay between boot lines, in milliseconds")]
    pub boot_interval_ms: u64,

    #[arg(
        long,
        default_value_t = 150,
        help = "Simulated command latency, in milliseconds"
    )]
    pub processing_delay_ms: u64,

    #[arg(long, help = "Keep at most this many commands for recall")]
    pub history_limit: Option<usize>,

    #[arg(long, help = "Write diagnostic logs to this file")]
    pub log_file: Option<PathBuf>,

    #[arg(long, help = "Print the effective profile config as JSON and exit")]
    pub print_config: bool,
}

impl AppArgs {
    pub fn from_cli() -> Self {
        <Self as Parser>::parse()
    }

    pub fn timing(&self) -> TimingConfig {
        TimingConfig::from_millis(self.boot_interval_ms, self.processing_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    #[test]
    fn defaults_match_builtin_timing() {
        let args = AppArgs::try_parse_from(["profile-terminal"]).unwrap();
        assert_eq!(args.timing(), TimingConfig::default());
        assert_eq!(args.history_limit, None);
        assert!(!args.print_config);
    }

    #[test]
    fn timing_flags_override_defaults() {
        let args = AppArgs::try_parse_from([
            "profile-terminal",
            "--boot-interval-ms",
            "0",
            "--processing-delay-ms",
            "500",
            "--history-limit",
            "50",
        ])
        .unwrap();

        assert_eq!(args.timing().boot_interval, Duration::ZERO);
        assert_eq!(args.timing().processing_delay, Duration::from_millis(500));
        assert_eq!(args.history_limit, Some(50));
    }
}
