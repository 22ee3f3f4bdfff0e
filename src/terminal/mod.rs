//! The host-independent core of the profile terminal.
//!
//! It covers the scrollback model, the command vocabulary and resolver, the
//! content producers, boot playback, history recall and the session state
//! machine that ties them together. Nothing in here touches the real
//! terminal.
pub mod boot;
pub mod content;
pub mod history;
pub mod input;
pub mod log_entry;
pub mod registry;
pub mod resolver;
pub mod session;
pub mod timer;

pub use boot::{BootSequence, HostPlatform, PlatformProbe};
pub use content::{RenderContext, Span, Tone};
pub use log_entry::LogEntry;
pub use registry::CommandRegistry;
pub use session::{BootStep, Phase, Session, Submission};
pub use timer::TimerHandle;
