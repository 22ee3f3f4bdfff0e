//! This module defines the structure of a single scrollback entry.

/// One immutable record in the terminal scrollback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogEntry {
    /// A line produced during boot playback.
    BootLine { text: String },
    /// The submitted input, echoed back after the prompt.
    InputEcho { text: String },
    /// Marks whether the submitted input resolved to a registered command.
    CommandResult {
        raw_text: String,
        /// The registered name, or `None` when the input was not recognised.
        matched_name: Option<String>,
    },
    /// A synthetic line from the terminal itself.
    SystemMessage { text: String, is_error: bool },
    /// A reference to a command's content block, looked up when drawn.
    RenderedOutput { command_name: String },
}

impl LogEntry {
    pub fn boot_line<S: Into<String>>(text: S) -> Self {
        Self::BootLine { text: text.into() }
    }

    pub fn input_echo<S: Into<String>>(text: S) -> Self {
        Self::InputEcho { text: text.into() }
    }

    pub fn error<S: Into<String>>(text: S) -> Self {
        Self::SystemMessage {
            text: text.into(),
            is_error: true,
        }
    }
}
