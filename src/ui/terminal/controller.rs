use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::config::TimingConfig;
use crate::terminal::{Session, TimerHandle};
use crate::ui::{UIEvent, UIState};

pub struct TerminalUI {
    pub(super) state: UIState,
    pub(super) session: Session,
    pub(super) timing: TimingConfig,
    pub(super) event_rx: mpsc::UnboundedReceiver<UIEvent>,
    /// Handed to timers so they can post back into the loop.
    pub(super) event_tx: mpsc::UnboundedSender<UIEvent>,
    pub(super) boot_timer: Option<TimerHandle>,
    pub(super) settle_timer: Option<TimerHandle>,
    pub(super) should_exit: bool,
    pub(super) terminal_active: bool,
}

impl TerminalUI {
    pub fn new(
        session: Session,
        timing: TimingConfig,
        event_rx: mpsc::UnboundedReceiver<UIEvent>,
        event_tx: mpsc::UnboundedSender<UIEvent>,
    ) -> Self {
        Self {
            state: UIState::new(),
            session,
            timing,
            event_rx,
            event_tx,
            boot_timer: None,
            settle_timer: None,
            should_exit: false,
            terminal_active: false,
        }
    }

    /// Starts boot playback. Does nothing once the boot sequence is complete.
    ///
    /// A zero interval plays the whole sequence at once.
    pub fn start_boot(&mut self) {
        if self.session.boot_complete() || self.boot_timer.is_some() {
            return;
        }
        if self.timing.boot_interval.is_zero() {
            while !self.session.boot_complete() {
                self.session.advance_boot();
            }
            return;
        }
        debug!("Starting boot playback every {:?}", self.timing.boot_interval);
        self.boot_timer = Some(TimerHandle::repeating(
            self.timing.boot_interval,
            self.event_tx.clone(),
            UIEvent::BootTick,
        ));
    }

    pub async fn run(&mut self) -> Result<()> {
        self.initialize_terminal()?;
        self.start_boot();
        self.render()?;

        debug!("Starting terminal UI loop");

        while !self.should_exit {
            match self.event_rx.recv().await {
                Some(event) => {
                    if let Err(e) = self.handle_event(event) {
                        error!("Error handling UI event: {}", e);
                    }
                }
                None => break,
            }

            self.render()?;
        }

        info!("Terminal UI loop finished");
        Ok(())
    }
}
