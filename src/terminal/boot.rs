//! The scripted startup sequence played before input is accepted.
use crate::config::ProfileConfig;

/// Reports the platform the client runs on.
pub trait PlatformProbe {
    /// Lower-case platform name, or `None` when it cannot be determined.
    fn platform(&self) -> Option<String>;

    fn is_windows(&self) -> bool {
        self.platform()
            .map(|p| p.to_lowercase().contains("windows"))
            .unwrap_or(false)
    }
}

/// Probe backed by the target the binary was built for.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostPlatform;

impl PlatformProbe for HostPlatform {
    fn platform(&self) -> Option<String> {
        let os = std::env::consts::OS;
        (!os.is_empty()).then(|| os.to_string())
    }
}

/// The fixed, ordered lines of the boot banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BootSequence {
    lines: Vec<String>,
}

impl BootSequence {
    /// Builds the banner from the profile; the probe is consulted once, here.
    pub fn build(profile: &ProfileConfig, probe: &dyn PlatformProbe) -> Self {
        let host = &profile.host;
        let user = &profile.user;
        let record = &profile.profile.record;

        let platform_warning = if probe.is_windows() {
            "[ WARNING ] Windows detected! Consider installing Linux.".to_string()
        } else {
            String::new()
        };

        let lines = vec![
            format!("Trying {}...", host),
            format!("Connected to {}.", host),
            "Escape character is '^]'.".to_string(),
            String::new(),
            format!(
                "{} {} (interactive profile terminal)",
                profile.service, profile.version
            ),
            "[ INFO ] This is fictional demo software running entirely in your terminal."
                .to_string(),
            "[ INFO ] No real network requests are performed.".to_string(),
            String::new(),
            platform_warning,
            "[ BOOT ] Initializing runtime...".to_string(),
            format!("[ OK   ] Allocated client session (user: {})", user),
            "[ OK   ] Loaded core modules".to_string(),
            format!("[ OK   ] Loaded profile record: {}", record),
            "[ OK   ] Loaded biography".to_string(),
            "[ OK   ] Loaded skills index".to_string(),
            "[ OK   ] Loaded projects list".to_string(),
            "[ OK   ] Bound command router".to_string(),
            "[ OK   ] Ready".to_string(),
            String::new(),
            format!(
                "[ INFO ] As {}, you can browse information about user: {}.",
                user, record
            ),
            "[ INFO ] Use commands like 'profile', 'bio', 'skills', 'projects', 'contact'."
                .to_string(),
            String::new(),
            "Type `help` and press ENTER to see all available commands.".to_string(),
        ];

        Self { lines }
    }

    #[cfg(test)]
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self { lines }
    }

    #[cfg(test)]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.lines.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    pub(crate) struct FixedPlatform(pub Option<&'static str>);

    impl PlatformProbe for FixedPlatform {
        fn platform(&self) -> Option<String> {
            self.0.map(str::to_string)
        }
    }

    const WARNING_SLOT: usize = 8;

    #[test]
    fn windows_adds_warning_line() {
        let boot = BootSequence::build(&ProfileConfig::default(), &FixedPlatform(Some("Windows")));
        assert_eq!(
            boot.get(WARNING_SLOT),
            Some("[ WARNING ] Windows detected! Consider installing Linux.")
        );
    }

    #[test]
    fn unknown_or_other_platform_leaves_empty_slot() {
        let profile = ProfileConfig::default();
        let unknown = BootSequence::build(&profile, &FixedPlatform(None));
        let linux = BootSequence::build(&profile, &FixedPlatform(Some("linux")));

        assert_eq!(unknown.get(WARNING_SLOT), Some(""));
        assert_eq!(unknown, linux);
        assert_eq!(unknown.len(), 23);
    }

    #[test]
    fn banner_uses_profile_facts() {
        let boot = BootSequence::build(&ProfileConfig::default(), &FixedPlatform(None));

        assert_eq!(boot.get(0), Some("Trying eger.software..."));
        assert_eq!(
            boot.get(4),
            Some("eger.software 0.9.3 (interactive profile terminal)")
        );
        assert_eq!(
            boot.get(10),
            Some("[ OK   ] Allocated client session (user: guest)")
        );
        assert_eq!(
            boot.lines().last().map(String::as_str),
            Some("Type `help` and press ENTER to see all available commands.")
        );
    }
}
