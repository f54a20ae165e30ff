//! List-field editor for skills, highlights and links.
//!
//! Owns the pending input and the selection cursor; the entries themselves
//! live in the draft and are passed in on every call.

use crate::profile::list;
use std::ops::Range;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListEditor {
    /// Text typed but not yet added
    pub input: String,
    selected: usize,
}

impl ListEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn push_char(&mut self, c: char) {
        self.input.push(c);
    }

    pub fn pop_char(&mut self) {
        self.input.pop();
    }

    /// Add the pending input to `items`. Blank input leaves both untouched;
    /// a successful add clears the input and selects the new entry.
    pub fn commit(&mut self, items: &mut Vec<String>) -> bool {
        if !list::add_trimmed(items, &self.input) {
            return false;
        }
        self.input.clear();
        self.selected = items.len() - 1;
        true
    }

    /// Remove the selected entry and keep the cursor on a valid index
    pub fn remove_selected(&mut self, items: &mut Vec<String>) -> Option<String> {
        let removed = list::remove_at(items, self.selected)?;
        self.clamp(items.len());
        Some(removed)
    }

    pub fn select_next(&mut self, len: usize) {
        if len > 0 && self.selected + 1 < len {
            self.selected += 1;
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep the cursor inside a list that may have shrunk
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Rows to draw when only `height` fit, keeping the selection in view
    pub fn visible_window(&self, len: usize, height: usize) -> Range<usize> {
        if height == 0 || len == 0 {
            return 0..0;
        }
        if len <= height {
            return 0..len;
        }
        let selected = self.selected.min(len - 1);
        let start = (selected + 1).saturating_sub(height);
        start..start + height
    }
}
