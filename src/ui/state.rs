//! Presentation-only state: terminal size and scrollback position.

#[derive(Debug)]
pub struct UIState {
    pub terminal_size: (u16, u16),
    /// Lines scrolled up from the bottom of the scrollback.
    pub scroll_offset: usize,
    pub is_at_bottom: bool,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            terminal_size: (80, 24),
            scroll_offset: 0,
            is_at_bottom: true,
        }
    }

    pub fn scroll_up(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_add(lines);
        self.is_at_bottom = false;
    }

    pub fn scroll_down(&mut self, lines: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(lines);
        self.is_at_bottom = self.scroll_offset == 0;
    }

    pub fn jump_to_bottom(&mut self) {
        self.scroll_offset = 0;
        self.is_at_bottom = true;
    }

    /// Clamps the offset so the view never scrolls past the first line.
    pub fn update_scroll_state(&mut self, total_lines: usize, visible_lines: usize) {
        let max_scroll = total_lines.saturating_sub(visible_lines);
        self.scroll_offset = self.scroll_offset.min(max_scroll);
        self.is_at_bottom = self.scroll_offset == 0;
    }

    /// Index range of the lines to draw, given the current offset.
    pub fn visible_range(&self, total_lines: usize, visible_lines: usize) -> std::ops::Range<usize> {
        let start = total_lines.saturating_sub(visible_lines + self.scroll_offset);
        let end = (start + visible_lines).min(total_lines);
        start..end
    }
}

impl Default for UIState {
    fn default() -> Self {
        Self::new()
    }
}
