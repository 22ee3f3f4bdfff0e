use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::debug;

use crate::terminal::{BootStep, Submission, TimerHandle};
use crate::ui::UIEvent;

use super::TerminalUI;

const PAGE_SCROLL: usize = 10;

impl TerminalUI {
    pub(super) fn handle_event(&mut self, event: UIEvent) -> Result<()> {
        match event {
            UIEvent::KeyPress(key_event) => {
                self.handle_key_event(key_event);
            }
            UIEvent::Resize(width, height) => {
                self.state.terminal_size = (width, height);
            }
            UIEvent::BootTick => {
                self.handle_boot_tick();
            }
            UIEvent::CommandSettled => {
                self.settle_timer = None;
                if let Some(outcome) = self.session.settle() {
                    debug!("Command settled: {:?}", outcome);
                    self.state.jump_to_bottom();
                }
            }
        }
        Ok(())
    }

    fn handle_boot_tick(&mut self) {
        match self.session.advance_boot() {
            BootStep::Emitted { finished } => {
                self.state.jump_to_bottom();
                if finished {
                    debug!("Boot finished, input enabled");
                    self.boot_timer = None;
                }
            }
            BootStep::AlreadyComplete => {
                self.boot_timer = None;
            }
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }

        if let (KeyCode::Char('c'), KeyModifiers::CONTROL) = (key.code, key.modifiers) {
            self.should_exit = true;
            return;
        }

        match key.code {
            KeyCode::Enter => self.submit_input(),
            KeyCode::Up => {
                self.session.recall_older();
            }
            KeyCode::Down => {
                self.session.recall_newer();
            }
            KeyCode::Char(_)
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {}
            KeyCode::Char(c) => self.session.edit_input(|line| line.insert_char(c)),
            KeyCode::Backspace => self.session.edit_input(|line| {
                line.remove_before();
            }),
            KeyCode::Delete => self.session.edit_input(|line| {
                line.remove_at();
            }),
            KeyCode::Left => self.session.edit_input(|line| line.move_left()),
            KeyCode::Right => self.session.edit_input(|line| line.move_right()),
            KeyCode::Home => self.session.edit_input(|line| line.move_home()),
            KeyCode::End => self.session.edit_input(|line| line.move_end()),
            KeyCode::PageUp => self.state.scroll_up(PAGE_SCROLL),
            KeyCode::PageDown => self.state.scroll_down(PAGE_SCROLL),
            KeyCode::Esc => self.state.jump_to_bottom(),
            _ => {}
        }
    }

    fn submit_input(&mut self) {
        match self.session.submit() {
            Submission::Accepted { .. } => {
                self.state.jump_to_bottom();
                self.settle_timer = Some(TimerHandle::once(
                    self.timing.processing_delay,
                    self.event_tx.clone(),
                    UIEvent::CommandSettled,
                ));
            }
            Submission::Ignored(reason) => {
                debug!("Submission ignored: {:?}", reason);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::time::Duration;

    use crossterm::event::{KeyEvent, KeyModifiers};
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc;

    use super::*;
    use crate::config::{ProfileConfig, TimingConfig};
    use crate::terminal::boot::tests::FixedPlatform;
    use crate::terminal::{BootSequence, CommandRegistry, LogEntry, Phase, Session};

    fn ui() -> TerminalUI {
        let profile = Arc::new(ProfileConfig::default());
        let boot = BootSequence::build(&profile, &FixedPlatform(None));
        let session = Session::new(profile, Arc::new(CommandRegistry::builtin()), boot, None);
        let (tx, rx) = mpsc::unbounded_channel();
        TerminalUI::new(session, TimingConfig::default(), rx, tx)
    }

    fn press(ui: &mut TerminalUI, code: KeyCode) {
        ui.handle_event(UIEvent::KeyPress(KeyEvent::new(code, KeyModifiers::NONE)))
            .unwrap();
    }

    fn type_text(ui: &mut TerminalUI, text: &str) {
        for c in text.chars() {
            press(ui, KeyCode::Char(c));
        }
    }

    /// Feeds timer events back into the UI until `done` holds.
    async fn pump_until<F>(ui: &mut TerminalUI, done: F)
    where
        F: Fn(&TerminalUI) -> bool,
    {
        while !done(ui) {
            let event = ui.event_rx.recv().await.unwrap();
            ui.handle_event(event).unwrap();
        }
    }

    #[tokio::test(start_paused = true)]
    async fn boot_plays_out_on_the_timer() {
        let mut ui = ui();
        let started = tokio::time::Instant::now();
        ui.start_boot();

        let event = ui.event_rx.recv().await.unwrap();
        assert!(started.elapsed() >= Duration::from_millis(260));
        ui.handle_event(event).unwrap();
        assert_eq!(ui.session.log().len(), 1);
        assert_eq!(ui.session.phase(), Phase::Booting);

        pump_until(&mut ui, |ui| ui.session.boot_complete()).await;
        assert_eq!(ui.session.log().len(), 23);
        assert!(ui.boot_timer.is_none());
        assert!(started.elapsed() >= Duration::from_millis(260 * 23));
    }

    #[tokio::test(start_paused = true)]
    async fn command_settles_after_processing_delay() {
        let mut ui = ui();
        ui.start_boot();
        pump_until(&mut ui, |ui| ui.session.boot_complete()).await;
        let boot_len = ui.session.log().len();

        type_text(&mut ui, "whoami");
        press(&mut ui, KeyCode::Enter);
        assert_eq!(ui.session.phase(), Phase::Processing);

        type_text(&mut ui, "bio");
        press(&mut ui, KeyCode::Enter);
        assert_eq!(ui.session.log().len(), boot_len + 2);

        let submitted = tokio::time::Instant::now();
        pump_until(&mut ui, |ui| ui.session.phase() == Phase::Idle).await;
        assert!(submitted.elapsed() >= Duration::from_millis(150));
        assert_eq!(
            ui.session.log().last(),
            Some(&LogEntry::RenderedOutput {
                command_name: "whoami".to_string()
            })
        );
        assert_eq!(ui.session.input().text(), "bio");
    }

    #[tokio::test(start_paused = true)]
    async fn arrow_keys_recall_history() {
        let mut ui = ui();
        ui.start_boot();
        pump_until(&mut ui, |ui| ui.session.boot_complete()).await;

        for command in ["a", "b"] {
            type_text(&mut ui, command);
            press(&mut ui, KeyCode::Enter);
            pump_until(&mut ui, |ui| ui.session.phase() == Phase::Idle).await;
        }

        press(&mut ui, KeyCode::Up);
        assert_eq!(ui.session.input().text(), "b");
        press(&mut ui, KeyCode::Up);
        press(&mut ui, KeyCode::Down);
        press(&mut ui, KeyCode::Down);
        assert_eq!(ui.session.input().text(), "");
    }

    #[tokio::test]
    async fn zero_boot_interval_plays_everything_at_once() {
        let mut ui = ui();
        ui.timing = TimingConfig::from_millis(0, 150);
        ui.start_boot();

        assert!(ui.session.boot_complete());
        assert!(ui.boot_timer.is_none());
        assert_eq!(ui.session.log().len(), 23);
    }

    #[test]
    fn typing_while_booting_leaves_input_empty() {
        let mut ui = ui();
        type_text(&mut ui, "help");
        press(&mut ui, KeyCode::Backspace);
        press(&mut ui, KeyCode::Left);

        assert_eq!(ui.session.phase(), Phase::Booting);
        assert_eq!(ui.session.input().text(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn modified_chars_are_not_inserted() {
        let mut ui = ui();
        ui.start_boot();
        pump_until(&mut ui, |ui| ui.session.boot_complete()).await;

        type_text(&mut ui, "help");
        for modifiers in [KeyModifiers::CONTROL, KeyModifiers::ALT] {
            ui.handle_event(UIEvent::KeyPress(KeyEvent::new(KeyCode::Char('l'), modifiers)))
                .unwrap();
        }
        ui.handle_event(UIEvent::KeyPress(KeyEvent::new(
            KeyCode::Char('P'),
            KeyModifiers::SHIFT,
        )))
        .unwrap();

        assert_eq!(ui.session.input().text(), "helpP");
        assert!(!ui.should_exit);
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_ui_cancels_a_pending_settle() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        {
            let mut ui = ui();
            ui.timing = TimingConfig::from_millis(0, 150);
            ui.start_boot();
            ui.event_tx = tx;

            type_text(&mut ui, "help");
            press(&mut ui, KeyCode::Enter);
            assert_eq!(ui.session.phase(), Phase::Processing);
            assert!(ui.settle_timer.is_some());
        }

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.recv().await.is_none());
    }

    #[test]
    fn ctrl_c_requests_exit() {
        let mut ui = ui();
        ui.handle_event(UIEvent::KeyPress(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL,
        )))
        .unwrap();
        assert!(ui.should_exit);
        assert_eq!(ui.session.input().text(), "");
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_ui_cancels_pending_timers() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        {
            let mut ui = ui();
            ui.event_tx = tx;
            ui.start_boot();
        }

        tokio::time::sleep(Duration::from_secs(5)).await;
        assert!(rx.recv().await.is_none());
    }
}
