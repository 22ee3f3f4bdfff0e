use std::time::Duration;

pub const DEFAULT_BOOT_INTERVAL: Duration = Duration::from_millis(260);
pub const DEFAULT_PROCESSING_DELAY: Duration = Duration::from_millis(150);

/// Pacing of the two scheduled transitions: boot playback and command latency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimingConfig {
    /// Delay between two consecutive boot lines.
    pub boot_interval: Duration,
    /// Simulated latency between accepting a command and showing its outcome.
    pub processing_delay: Duration,
}

impl TimingConfig {
    pub fn from_millis(boot_interval_ms: u64, processing_delay_ms: u64) -> Self {
        Self {
            boot_interval: Duration::from_millis(boot_interval_ms),
            processing_delay: Duration::from_millis(processing_delay_ms),
        }
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            boot_interval: DEFAULT_BOOT_INTERVAL,
            processing_delay: DEFAULT_PROCESSING_DELAY,
        }
    }
}
