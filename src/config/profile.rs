//! The profile content shown by the terminal.
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ConfigError;

/// Everything the terminal knows about the person and the service it impersonates.
///
/// Missing fields in a config file fall back to the built-in profile, so a
/// file only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileConfig {
    /// Name of the session user; forms the prompt and `whoami`.
    pub user: String,
    /// Name of the fictional service; used in the prompt and error lines.
    pub service: String,
    /// Host shown in the connection banner.
    pub host: String,
    /// Version string printed in the boot banner.
    pub version: String,
    pub profile: ProfileRecord,
    /// Biography paragraphs, one per line.
    pub bio: Vec<String>,
    pub skills: Vec<String>,
    pub certificates: Vec<String>,
    pub projects: Vec<Project>,
    pub contact: Vec<ContactEntry>,
    /// Extra `label: value` lines shown by `sysinfo` after service and host.
    pub status: Vec<StatusFact>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProfileRecord {
    pub id: String,
    pub name: String,
    pub role: String,
    /// Identifier of the loaded record, echoed during boot.
    pub record: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactEntry {
    pub label: String,
    pub value: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusFact {
    pub label: String,
    pub value: String,
}

impl ProfileConfig {
    /// Loads the profile from `path`, or returns the built-in profile when no path is given.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, is not valid JSON, or
    /// fails validation.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => {
                debug!("Loading profile config from {}", path.display());
                let raw = fs::read_to_string(path).map_err(|source| ConfigError::Io {
                    path: path.to_path_buf(),
                    source,
                })?;
                serde_json::from_str(&raw).map_err(|source| ConfigError::Parse {
                    path: path.to_path_buf(),
                    source,
                })?
            }
            None => Self::default(),
        };

        config.validate()?;
        Ok(config)
    }

    /// Checks the fields the engine relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, value) in [
            ("user", &self.user),
            ("service", &self.service),
            ("host", &self.host),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("`{}` must not be empty", field)));
            }
        }

        for (field, value) in [("user", &self.user), ("service", &self.service)] {
            if value.chars().any(char::is_whitespace) {
                return Err(ConfigError::Invalid(format!(
                    "`{}` must not contain whitespace, got '{}'",
                    field, value
                )));
            }
        }

        Ok(())
    }

    /// The `user@service` identity, lower-cased.
    pub fn identity(&self) -> String {
        format!(
            "{}@{}",
            self.user.to_lowercase(),
            self.service.to_lowercase()
        )
    }

    /// The prompt printed before input, e.g. `guest@eger.software:~$`.
    pub fn prompt(&self) -> String {
        format!("{}:~$", self.identity())
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            user: "guest".to_string(),
            service: "eger.software".to_string(),
            host: "eger.software".to_string(),
            version: "0.9.3".to_string(),
            profile: ProfileRecord::default(),
            bio: vec![
                "I am soon-to-be high school graduate stepping into the IT industry, focused on building real projects primarily with Java and Spring Boot.".to_string(),
                "I run my own homelab and work comfortably in Linux, using it as a playground to keep improving my skills.".to_string(),
            ],
            skills: [
                "Java / Spring Boot",
                "Object Oriented Programming",
                "Python",
                "C# / .NET",
                "Linux / Bash",
                "Testing",
                "Computer Networks",
                "Troubleshooting",
                "Server Management",
                "Docker",
                "ProxmoxVE",
                "SQL / PostgreSQL / MySQL / ...",
                "Git / GitHub",
                "Unity",
                "JavaScript / Node.js / React",
                "HTML / CSS",
                "MongoDB",
            ]
            .into_iter()
            .map(String::from)
            .collect(),
            certificates: Vec::new(),
            projects: vec![
                Project {
                    name: "this terminal".to_string(),
                    url: None,
                    summary: "built using Rust".to_string(),
                },
                Project {
                    name: "DummyPay".to_string(),
                    url: Some("https://github.com/Profex993/DummyPay".to_string()),
                    summary: "demo payment gateway for testing and demonstration purposes, built using Spring Boot and Maven".to_string(),
                },
                Project {
                    name: "Hosting service".to_string(),
                    url: None,
                    summary: "My custom solution for my own web hosting business, built using Spring Boot, PostgreSQL and Maven".to_string(),
                },
                Project {
                    name: "Music Player".to_string(),
                    url: Some("https://github.com/Profex993/Music-player".to_string()),
                    summary: "simple music player built using Java".to_string(),
                },
                Project {
                    name: "Inventory Manager".to_string(),
                    url: Some("https://github.com/Profex993/Inventory_Manager".to_string()),
                    summary: "application for small warehouse management, built using C# and postgreSQL".to_string(),
                },
            ],
            contact: vec![
                ContactEntry {
                    label: "github".to_string(),
                    value: "Profex993".to_string(),
                    url: Some("https://github.com/Profex993".to_string()),
                },
                ContactEntry {
                    label: "email".to_string(),
                    value: "luky.eger@gmail.com".to_string(),
                    url: None,
                },
            ],
            status: [
                ("Mode", "read-only, single-tenant profile session"),
                ("Runtime", "terminal (crossterm-based UI)"),
                ("Transport", "TCP/telnet"),
                ("Persistence", "none"),
                ("Telemetry", "disabled"),
            ]
            .into_iter()
            .map(|(label, value)| StatusFact {
                label: label.to_string(),
                value: value.to_string(),
            })
            .collect(),
        }
    }
}

impl Default for ProfileRecord {
    fn default() -> Self {
        Self {
            id: "profex".to_string(),
            name: "Profex".to_string(),
            role: "developer".to_string(),
            record: "lukas_eger".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn no_path_yields_builtin_profile() {
        let config = ProfileConfig::load(None).unwrap();
        assert_eq!(config, ProfileConfig::default());
        assert_eq!(config.prompt(), "guest@eger.software:~$");
    }

    #[test]
    fn partial_file_keeps_builtin_defaults() {
        let file = write_config(r#"{ "user": "Visitor", "skills": ["Rust"] }"#);
        let config = ProfileConfig::load(Some(file.path())).unwrap();

        assert_eq!(config.user, "Visitor");
        assert_eq!(config.skills, vec!["Rust".to_string()]);
        assert_eq!(config.service, "eger.software");
        assert_eq!(config.identity(), "visitor@eger.software");
    }

    #[test]
    fn malformed_file_is_a_parse_error() {
        let file = write_config("{ not json");
        let err = ProfileConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = ProfileConfig::load(Some(&dir.path().join("absent.json"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn blank_service_is_rejected() {
        let file = write_config(r#"{ "service": "   " }"#);
        let err = ProfileConfig::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn user_with_spaces_is_rejected() {
        let config = ProfileConfig {
            user: "two words".to_string(),
            ..ProfileConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }
}
