//! Recall of previously submitted input.
use std::collections::VecDeque;

/// Submitted commands, oldest first, plus the recall cursor.
#[derive(Debug, Clone, Default)]
pub struct CommandHistory {
    entries: VecDeque<String>,
    /// Index of the entry currently recalled, `None` when not browsing.
    index: Option<usize>,
    /// Optional cap; the oldest entry is dropped once it is reached.
    limit: Option<usize>,
}

impl CommandHistory {
    pub fn new(limit: Option<usize>) -> Self {
        Self {
            entries: VecDeque::new(),
            index: None,
            limit: limit.filter(|&limit| limit > 0),
        }
    }

    /// Records a submission and stops browsing.
    pub fn push(&mut self, entry: String) {
        if let Some(limit) = self.limit {
            while self.entries.len() >= limit {
                self.entries.pop_front();
            }
        }
        self.entries.push_back(entry);
        self.index = None;
    }

    pub fn reset_cursor(&mut self) {
        self.index = None;
    }

    /// Moves toward the oldest entry, clamping there.
    ///
    /// Returns the recalled text, or `None` when there is no history.
    pub fn older(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }

        let index = match self.index {
            None => self.entries.len() - 1,
            Some(i) => i.saturating_sub(1),
        };
        self.index = Some(index);
        self.entries.get(index).map(String::as_str)
    }

    /// Moves toward the newest entry.
    ///
    /// Stepping past the newest entry stops browsing and yields an empty
    /// string. Returns `None` when nothing changes (not browsing, or no history).
    pub fn newer(&mut self) -> Option<&str> {
        let current = self.index?;

        if current + 1 >= self.entries.len() {
            self.index = None;
            Some("")
        } else {
            self.index = Some(current + 1);
            self.entries.get(current + 1).map(String::as_str)
        }
    }

    #[cfg(test)]
    pub fn cursor(&self) -> Option<usize> {
        self.index
    }

    #[cfg(test)]
    pub fn is_browsing(&self) -> bool {
        self.index.is_some()
    }

    #[cfg(test)]
    pub fn entries(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
