//! The session state machine: boot playback, submission, settling and recall.
//!
//! Every transition here is synchronous and infallible. Scheduling (when a
//! boot tick or a settle happens) belongs to the host, which calls
//! [`Session::advance_boot`] and [`Session::settle`] from its timers.
use std::sync::Arc;

use tracing::debug;

use crate::config::ProfileConfig;

use super::boot::BootSequence;
use super::history::CommandHistory;
use super::input::InputLine;
use super::log_entry::LogEntry;
use super::registry::{CommandAction, CommandRegistry};
use super::resolver::resolve;

/// Coarse state of the session, as the front-end sees it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Booting,
    Idle,
    Processing,
}

/// Result of one boot tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BootStep {
    /// A line was appended; `finished` is set when it was the last one.
    Emitted { finished: bool },
    /// Playback had already completed; nothing changed.
    AlreadyComplete,
}

/// Why a submission was not accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ignored {
    Booting,
    Busy,
    Blank,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    /// The input was echoed and is now in flight until [`Session::settle`].
    Accepted { matched_name: Option<String> },
    Ignored(Ignored),
}

/// What settling the in-flight command did to the log.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    NotFound,
    Cleared,
    Rendered { command_name: String },
}

#[derive(Debug, Clone)]
struct InFlight {
    raw_text: String,
    matched_name: Option<String>,
}

pub struct Session {
    profile: Arc<ProfileConfig>,
    registry: Arc<CommandRegistry>,
    log: Vec<LogEntry>,
    boot: BootSequence,
    boot_cursor: usize,
    boot_complete: bool,
    input: InputLine,
    in_flight: Option<InFlight>,
    history: CommandHistory,
}

impl Session {
    pub fn new(
        profile: Arc<ProfileConfig>,
        registry: Arc<CommandRegistry>,
        boot: BootSequence,
        history_limit: Option<usize>,
    ) -> Self {
        let boot_complete = boot.is_empty();
        Self {
            profile,
            registry,
            log: Vec::new(),
            boot,
            boot_cursor: 0,
            boot_complete,
            input: InputLine::default(),
            in_flight: None,
            history: CommandHistory::new(history_limit),
        }
    }

    pub fn phase(&self) -> Phase {
        if !self.boot_complete {
            Phase::Booting
        } else if self.in_flight.is_some() {
            Phase::Processing
        } else {
            Phase::Idle
        }
    }

    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    pub fn input(&self) -> &InputLine {
        &self.input
    }

    #[cfg(test)]
    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    pub fn profile(&self) -> &ProfileConfig {
        &self.profile
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    pub fn boot_complete(&self) -> bool {
        self.boot_complete
    }

    pub fn boot_cursor(&self) -> usize {
        self.boot_cursor
    }

    pub fn boot_len(&self) -> usize {
        self.boot.len()
    }

    /// Appends the next boot line.
    pub fn advance_boot(&mut self) -> BootStep {
        if self.boot_complete {
            return BootStep::AlreadyComplete;
        }

        if let Some(line) = self.boot.get(self.boot_cursor) {
            self.log.push(LogEntry::boot_line(line));
        }
        self.boot_cursor += 1;

        if self.boot_cursor >= self.boot.len() {
            self.boot_complete = true;
            debug!("Boot sequence complete after {} lines", self.boot_cursor);
        }

        BootStep::Emitted {
            finished: self.boot_complete,
        }
    }

    /// Accepts the pending input as a command, if the session can take one.
    ///
    /// Ignored submissions leave every piece of state, including the
    /// pending input, untouched.
    pub fn submit(&mut self) -> Submission {
        if !self.boot_complete {
            return Submission::Ignored(Ignored::Booting);
        }
        if self.in_flight.is_some() {
            debug!("Dropping submission while a command is in flight");
            return Submission::Ignored(Ignored::Busy);
        }
        if self.input.is_blank() {
            return Submission::Ignored(Ignored::Blank);
        }

        let raw_text = self.input.text().trim().to_string();
        let matched_name = resolve(&self.registry, &raw_text).map(|c| c.name.clone());
        debug!("Accepted '{}' (matched: {:?})", raw_text, matched_name);

        self.history.push(raw_text.clone());
        self.log.push(LogEntry::input_echo(raw_text.clone()));
        self.log.push(LogEntry::CommandResult {
            raw_text: raw_text.clone(),
            matched_name: matched_name.clone(),
        });
        self.input.clear();
        self.in_flight = Some(InFlight {
            raw_text,
            matched_name: matched_name.clone(),
        });

        Submission::Accepted { matched_name }
    }

    /// Finalises the in-flight command and returns to idle.
    ///
    /// Returns `None` when nothing was in flight.
    pub fn settle(&mut self) -> Option<Outcome> {
        let InFlight {
            raw_text,
            matched_name,
        } = self.in_flight.take()?;

        let command = matched_name.as_deref().and_then(|name| self.registry.get(name));
        let outcome = match command {
            None => {
                self.log.push(LogEntry::error(format!(
                    "{}: {}: command not found",
                    self.profile.service.to_lowercase(),
                    raw_text
                )));
                Outcome::NotFound
            }
            Some(command) => match command.action {
                CommandAction::ClearScrollback => {
                    self.log = Vec::new();
                    Outcome::Cleared
                }
                CommandAction::Render(_) => {
                    let command_name = command.name.clone();
                    self.log.push(LogEntry::RenderedOutput {
                        command_name: command_name.clone(),
                    });
                    Outcome::Rendered { command_name }
                }
            },
        };

        debug!("Settled '{}': {:?}", raw_text, outcome);
        Some(outcome)
    }

    /// Up: recall the previous submission. Returns whether the input changed.
    pub fn recall_older(&mut self) -> bool {
        match self.history.older() {
            Some(text) => {
                self.input.set(text);
                true
            }
            None => false,
        }
    }

    /// Down: recall the next submission, or an empty line past the newest.
    pub fn recall_newer(&mut self) -> bool {
        match self.history.newer() {
            Some(text) => {
                self.input.set(text);
                true
            }
            None => false,
        }
    }

    /// Applies an edit to the pending input; any edit stops browsing history.
    ///
    /// The input does not exist until boot completes, so edits are dropped
    /// before then.
    pub fn edit_input<F>(&mut self, edit: F)
    where
        F: FnOnce(&mut InputLine),
    {
        if !self.boot_complete {
            return;
        }
        let before = self.input.text().to_string();
        edit(&mut self.input);
        if self.input.text() != before {
            self.history.reset_cursor();
        }
    }
}
