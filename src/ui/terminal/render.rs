use anyhow::Result;
use crossterm::{
    cursor, queue,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal::{Clear, ClearType},
};
use std::io::{stdout, Write};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::terminal::{Phase, RenderContext};
use crate::ui::view::{self, LineStyle, ViewLine};

use super::TerminalUI;

impl TerminalUI {
    pub(super) fn render(&mut self) -> Result<()> {
        let mut stdout = stdout();

        queue!(stdout, Clear(ClearType::All), cursor::MoveTo(0, 0))?;

        let (width, height) = self.state.terminal_size;
        let scrollback_height = height.saturating_sub(2);
        let status_line_row = scrollback_height;
        let input_row = status_line_row + 1;

        self.render_scrollback(&mut stdout, width, scrollback_height)?;
        self.render_status_line(&mut stdout, status_line_row, width)?;
        self.render_input_line(&mut stdout, input_row, width)?;

        stdout.flush()?;
        Ok(())
    }

    fn render_scrollback(&mut self, stdout: &mut impl Write, width: u16, height: u16) -> Result<()> {
        let ctx = RenderContext::new(self.session.profile(), self.session.registry());
        let rows: Vec<ViewLine> = view::scrollback(&self.session, &ctx)
            .iter()
            .flat_map(|line| view::wrap(line, width as usize))
            .collect();

        let visible = height as usize;
        self.state.update_scroll_state(rows.len(), visible);

        for (line_idx, row_idx) in self.state.visible_range(rows.len(), visible).enumerate() {
            queue!(stdout, cursor::MoveTo(0, line_idx as u16))?;
            for segment in &rows[row_idx].segments {
                queue!(
                    stdout,
                    SetForegroundColor(style_color(segment.style)),
                    Print(&segment.text),
                    ResetColor
                )?;
            }
        }

        if self.state.scroll_offset > 0 {
            let indicator = format!("↑ +{} more", self.state.scroll_offset);
            let x = (width as usize).saturating_sub(indicator.width()) as u16;
            queue!(
                stdout,
                cursor::MoveTo(x, 0),
                SetForegroundColor(Color::Yellow),
                Print(indicator),
                ResetColor
            )?;
        }

        Ok(())
    }

    fn render_status_line(&self, stdout: &mut impl Write, row: u16, width: u16) -> Result<()> {
        queue!(
            stdout,
            cursor::MoveTo(0, row),
            SetBackgroundColor(Color::DarkGrey),
            SetForegroundColor(Color::White)
        )?;

        let phase = match self.session.phase() {
            Phase::Booting => format!(
                "Booting {}/{}",
                self.session.boot_cursor(),
                self.session.boot_len()
            ),
            Phase::Idle => "Ready".to_string(),
            Phase::Processing => "Processing...".to_string(),
        };
        let status_text = format!(
            " {} | {} | ↑↓: history | PgUp/PgDn: scroll | Ctrl+C: exit",
            self.session.profile().service,
            phase
        );

        let display_text = if status_text.width() > width as usize {
            truncate_to_width(&status_text, width as usize)
        } else {
            status_text
        };

        queue!(stdout, Print(&display_text))?;

        let padding = (width as usize).saturating_sub(display_text.width());
        if padding > 0 {
            queue!(stdout, Print(" ".repeat(padding)))?;
        }

        queue!(stdout, ResetColor)?;
        Ok(())
    }

    fn render_input_line(&self, stdout: &mut impl Write, row: u16, width: u16) -> Result<()> {
        if !self.session.boot_complete() {
            queue!(stdout, cursor::Hide)?;
            return Ok(());
        }

        let prompt = format!("{} ", self.session.profile().prompt());
        let input = self.session.input();

        queue!(
            stdout,
            cursor::MoveTo(0, row),
            SetForegroundColor(style_color(LineStyle::Prompt)),
            Print(&prompt),
            ResetColor,
            Print(input.text())
        )?;

        let cursor_x = prompt.width()
            + input
                .text()
                .chars()
                .take(input.cursor())
                .map(|c| c.width().unwrap_or(0))
                .sum::<usize>();

        if cursor_x < width as usize {
            queue!(stdout, cursor::MoveTo(cursor_x as u16, row), cursor::Show)?;
        } else {
            queue!(stdout, cursor::Hide)?;
        }

        Ok(())
    }
}

fn style_color(style: LineStyle) -> Color {
    match style {
        LineStyle::System => Color::Grey,
        LineStyle::Plain => Color::White,
        LineStyle::Prompt => Color::Cyan,
        LineStyle::Accent => Color::Green,
        LineStyle::Error => Color::Red,
        LineStyle::Dim => Color::DarkGrey,
        LineStyle::Link => Color::Blue,
    }
}

fn truncate_to_width(text: &str, width: usize) -> String {
    let mut used = 0;
    text.chars()
        .take_while(|c| {
            used += c.width().unwrap_or(0);
            used <= width
        })
        .collect()
}
