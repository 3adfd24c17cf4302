//! Rendering and layout for the typeahead component.

use super::model::Model;
use super::types::Region;
use crate::matcher::Match;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cuts `s` to at most `width` columns.
fn truncate(s: &str, width: usize) -> &str {
    let mut used = 0;
    for (i, ch) in s.char_indices() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            return &s[..i];
        }
        used += w;
    }
    s
}

impl Model {
    /// View renders the input line followed by the suggestion menu or the
    /// "No options" line.
    pub fn view(&self) -> String {
        let mut lines = vec![self.input_view()];

        if self.menu_visible() {
            for i in self.visible_range() {
                lines.push(self.item_view(&self.matches[i], Some(i) == self.active));
            }
        } else if self.shows_no_options() {
            let indent = " ".repeat(self.prompt.width());
            lines.push(format!(
                "{}{}",
                indent,
                self.styles.no_options.render(&self.no_options_text)
            ));
        }

        lines.join("\n")
    }

    fn input_view(&self) -> String {
        let mut v = self.styles.prompt.render(&self.prompt);

        if self.editor.is_empty() && !self.placeholder.is_empty() {
            v.push_str(&self.placeholder_view());
        } else {
            v.push_str(&self.text_view());
        }

        if self.loading {
            v.push(' ');
            v.push_str(&self.spinner.view());
        }
        v
    }

    fn text_view(&self) -> String {
        let chars = self.editor.chars();
        let pos = self.editor.position();
        let before: String = chars[..pos].iter().collect();
        let mut v = self.styles.text.render(&before);
        let mut used = before.width();

        if self.focus {
            let under = chars.get(pos).map_or(" ".to_string(), char::to_string);
            v.push_str(&self.styles.cursor.render(&under));
            used += under.width();
            if pos + 1 < chars.len() {
                let after: String = chars[pos + 1..].iter().collect();
                used += after.width();
                v.push_str(&self.styles.text.render(&after));
            }
        } else if pos < chars.len() {
            let after: String = chars[pos..].iter().collect();
            used += after.width();
            v.push_str(&self.styles.text.render(&after));
        }

        if self.width > used {
            v.push_str(&" ".repeat(self.width - used));
        }
        v
    }

    fn placeholder_view(&self) -> String {
        let mut chars = self.placeholder.chars();
        let mut v = String::new();
        if self.focus {
            if let Some(first) = chars.next() {
                v.push_str(&self.styles.cursor.render(&first.to_string()));
            }
        }
        let rest: String = chars.collect();
        v.push_str(&self.styles.placeholder.render(&rest));

        let used = self.placeholder.width();
        if self.width > used {
            v.push_str(&" ".repeat(self.width - used));
        }
        v
    }

    fn item_view(&self, m: &Match, active: bool) -> String {
        let (highlight_style, item_style) = if active {
            (&self.styles.active_highlight, &self.styles.active_item)
        } else {
            (&self.styles.highlight, &self.styles.item)
        };

        let (head, tail) = if self.width > 0 {
            let head = truncate(&m.highlighted, self.width);
            let tail = truncate(&m.remaining, self.width - head.width());
            let pad = self.width - head.width() - tail.width();
            (head.to_string(), format!("{}{}", tail, " ".repeat(pad)))
        } else {
            (m.highlighted.clone(), m.remaining.clone())
        };

        let mut v = " ".repeat(self.prompt.width());
        if !head.is_empty() {
            v.push_str(&highlight_style.render(&head));
        }
        if !tail.is_empty() {
            v.push_str(&item_style.render(&tail));
        }
        v
    }

    /// Classifies a position relative to the widget's top-left corner.
    ///
    /// Row 0 is the input line; the rows below it are the visible menu rows
    /// or the "No options" line. With a fixed width, columns past the input
    /// line are outside.
    pub fn region_at(&self, col: usize, row: usize) -> Region {
        if self.width > 0 {
            // Prompt, text, cursor cell and spinner.
            let extent = self.prompt.width() + self.width + 3;
            if col >= extent {
                return Region::Outside;
            }
        }

        if row == 0 {
            return Region::Input;
        }

        if self.menu_visible() {
            return match self.menu.item_at(row - 1, self.matches.len()) {
                Some(i) => Region::Item(i),
                None => Region::Outside,
            };
        }

        if row == 1 && self.shows_no_options() {
            return Region::Menu;
        }

        Region::Outside
    }
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn test_truncate_by_columns() {
        assert_eq!(truncate("Paris", 3), "Par");
        assert_eq!(truncate("Paris", 10), "Paris");
        assert_eq!(truncate("東京都", 3), "東");
        assert_eq!(truncate("abc", 0), "");
    }
}
