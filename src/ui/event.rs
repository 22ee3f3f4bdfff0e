use crossterm::event::KeyEvent;

/// Everything the terminal UI loop reacts to.
#[derive(Debug, Clone)]
pub enum UIEvent {
    KeyPress(KeyEvent),
    Resize(u16, u16),
    /// The boot timer elapsed; show the next boot line.
    BootTick,
    /// The processing delay of the in-flight command elapsed.
    CommandSettled,
}
