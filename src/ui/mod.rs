//! The crossterm front-end: draws the session and feeds it keys and timer events.
pub mod event;
pub mod runner;
pub mod state;
pub mod terminal;
pub mod view;

pub use event::UIEvent;
pub use runner::run_tui;
pub use state::UIState;
pub use terminal::TerminalUI;
