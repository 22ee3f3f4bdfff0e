use super::{TerminalUI, UIEvent};
use crate::config::TimingConfig;
use crate::terminal::Session;
use anyhow::Result;
use crossterm::event::{self, Event};
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

const INPUT_POLL_INTERVAL: Duration = Duration::from_millis(100);

pub async fn run_tui(session: Session, timing: TimingConfig) -> Result<()> {
    info!(
        "Starting {} terminal as {}",
        session.profile().service,
        session.profile().identity()
    );

    let (ui_event_tx, ui_event_rx) = mpsc::unbounded_channel::<UIEvent>();

    // Terminal input is read on a blocking thread; it stops once the UI drops its receiver.
    let input_tx = ui_event_tx.clone();
    tokio::task::spawn_blocking(move || {
        while !input_tx.is_closed() {
            match event::poll(INPUT_POLL_INTERVAL) {
                Ok(true) => {}
                Ok(false) => continue,
                Err(e) => {
                    warn!("Failed to poll terminal input: {}", e);
                    break;
                }
            }

            let forwarded = match event::read() {
                Ok(Event::Key(key_event)) => input_tx.send(UIEvent::KeyPress(key_event)),
                Ok(Event::Resize(width, height)) => input_tx.send(UIEvent::Resize(width, height)),
                Ok(_) => Ok(()),
                Err(e) => {
                    warn!("Failed to read terminal input: {}", e);
                    break;
                }
            };

            if let Err(e) = forwarded {
                debug!("Failed to forward terminal event: {}", e);
                break;
            }
        }
    });

    let mut terminal_ui = TerminalUI::new(session, timing, ui_event_rx, ui_event_tx);
    terminal_ui.run().await
}
