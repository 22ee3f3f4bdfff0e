//! The pending input line and its character-indexed cursor.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputLine {
    text: String,
    /// Cursor position in characters, not bytes.
    cursor: usize,
}

impl InputLine {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    /// Replaces the whole line and moves the cursor to its end.
    pub fn set(&mut self, text: &str) {
        self.text = text.to_string();
        self.move_end();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        let byte_pos = self.byte_offset(self.cursor);
        self.text.insert(byte_pos, c);
        self.cursor += 1;
    }

    /// Removes the character before the cursor. Returns whether anything changed.
    pub fn remove_before(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let byte_pos = self.byte_offset(self.cursor - 1);
        self.text.remove(byte_pos);
        self.cursor -= 1;
        true
    }

    /// Removes the character under the cursor. Returns whether anything changed.
    pub fn remove_at(&mut self) -> bool {
        if self.cursor >= self.char_count() {
            return false;
        }
        let byte_pos = self.byte_offset(self.cursor);
        self.text.remove(byte_pos);
        true
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.char_count() {
            self.cursor += 1;
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn editing_is_unicode_safe() {
        let mut line = InputLine::default();
        for c in "zdá".chars() {
            line.insert_char(c);
        }
        line.move_left();
        line.insert_char('ř');

        assert_eq!(line.text(), "zdřá");
        assert_eq!(line.cursor(), 3);

        assert!(line.remove_before());
        assert!(line.remove_at());
        assert_eq!(line.text(), "zd");
        assert!(!line.remove_at());
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let mut line = InputLine::default();
        line.move_left();
        assert!(!line.remove_before());

        line.set("ab");
        line.move_right();
        assert_eq!(line.cursor(), 2);
        line.move_home();
        assert_eq!(line.cursor(), 0);
    }

    #[test]
    fn blank_detection_ignores_whitespace() {
        let mut line = InputLine::default();
        line.set(" \t ");
        assert!(line.is_blank());
        line.set(" x ");
        assert!(!line.is_blank());
    }
}
