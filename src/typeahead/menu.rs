//! The suggestion menu region.
//!
//! The menu owns its open/closed state and its own scroll window, separate
//! from whatever scrolls around it. Only `height` rows are shown at a time;
//! [`Menu::scroll_to`] moves the window the least amount needed to show a row.

use std::ops::Range;

/// Rows shown before the menu starts scrolling.
pub const DEFAULT_HEIGHT: usize = 8;

/// Open state and scroll window of the suggestion menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    open: bool,
    offset: usize,
    height: usize,
}

impl Default for Menu {
    fn default() -> Self {
        Self::new(DEFAULT_HEIGHT)
    }
}

impl Menu {
    /// Creates a closed menu showing at most `height` rows (at least one).
    pub fn new(height: usize) -> Self {
        Self {
            open: false,
            offset: 0,
            height: height.max(1),
        }
    }

    /// Whether the menu is open.
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Opens the menu.
    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closes the menu and rewinds its scroll window.
    pub fn close(&mut self) {
        self.open = false;
        self.offset = 0;
    }

    /// Maximum rows shown.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Changes the maximum rows shown (at least one).
    pub fn set_height(&mut self, height: usize) {
        self.height = height.max(1);
    }

    /// First row in view.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Rewinds the scroll window to the first row.
    pub fn reset_scroll(&mut self) {
        self.offset = 0;
    }

    /// Scrolls the least amount needed for `index` to be in view.
    pub fn scroll_to(&mut self, index: usize, len: usize) {
        if index >= len {
            return;
        }
        if index < self.offset {
            self.offset = index;
        } else if index >= self.offset + self.height {
            self.offset = index + 1 - self.height;
        }
        self.clamp(len);
    }

    fn clamp(&mut self, len: usize) {
        let max_offset = len.saturating_sub(self.height);
        self.offset = self.offset.min(max_offset);
    }

    /// Indices of the rows in view for a list of `len` items.
    pub fn visible_range(&self, len: usize) -> Range<usize> {
        let start = self.offset.min(len);
        let end = (self.offset + self.height).min(len);
        start..end
    }

    /// Item index shown at `row` (0 is the first menu row).
    pub fn item_at(&self, row: usize, len: usize) -> Option<usize> {
        let range = self.visible_range(len);
        let index = range.start + row;
        range.contains(&index).then_some(index)
    }
}
