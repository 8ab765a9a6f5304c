//! Sizing rules for the feedback window.
//!
//! Kept free of FLTK so the rules can be tested without a display.

use crate::app::domain::FontSize;

pub const MIN_TEXT_LINES: i32 = 3;
pub const MAX_TEXT_LINES: i32 = 15;
pub const MIN_WINDOW_WIDTH: i32 = 600;
pub const MAX_WINDOW_WIDTH: i32 = 1200;
pub const MIN_WINDOW_HEIGHT: i32 = 300;

/// Room for margins and the scrollbar around the longest line
const HORIZONTAL_PADDING: i32 = 100;

/// Editor frame plus 5px of breathing room
const TEXT_PADDING: i32 = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextMetrics {
    pub row_height: i32,
    pub padding: i32,
}

impl TextMetrics {
    /// Line height of FLTK's Helvetica at the given point size
    pub fn for_font_size(size: FontSize) -> Self {
        let points = size.as_fltk();
        Self {
            row_height: points + points / 4 + 2,
            padding: TEXT_PADDING,
        }
    }

    pub fn text_height(&self, lines: i32) -> i32 {
        lines * self.row_height + self.padding
    }

    pub fn initial_text_height(&self) -> i32 {
        self.text_height(MIN_TEXT_LINES)
    }

    /// Height of a single-line control (checkbox, label, button)
    pub fn control_height(&self) -> i32 {
        self.row_height + 10
    }
}

/// Rows a label needs when word-wrapped to `width`.
///
/// Hard line breaks always start a new row. A word wider than `width`
/// gets a row to itself, as FLTK does not break inside words.
pub fn wrapped_rows<F>(text: &str, width: i32, measure: F) -> i32
where
    F: Fn(&str) -> i32,
{
    let space = measure(" ");
    let mut rows = 0i32;

    for line in text.split('\n') {
        rows = rows.saturating_add(1);
        let mut used = 0;
        for word in line.split(' ').filter(|w| !w.is_empty()) {
            let word_width = measure(word);
            if used == 0 {
                used = word_width;
            } else if used + space + word_width > width {
                rows = rows.saturating_add(1);
                used = word_width;
            } else {
                used += space + word_width;
            }
        }
    }

    rows
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resize {
    pub text_height: i32,
    pub window_width: i32,
    pub window_height: i32,
}

/// Fit the text area and window to the current feedback text.
///
/// `measure` returns the pixel width of a single line.
pub fn resize_for_text<F>(
    text: &str,
    metrics: &TextMetrics,
    measure: F,
    current_window_height: i32,
    current_text_height: i32,
) -> Resize
where
    F: Fn(&str) -> i32,
{
    let lines: Vec<&str> = text.split('\n').collect();
    let line_count = i32::try_from(lines.len()).unwrap_or(i32::MAX);
    let widest = lines.iter().map(|line| measure(line)).max().unwrap_or(0);

    // +1 leaves a row for the cursor
    let visible_lines = line_count.saturating_add(1).clamp(MIN_TEXT_LINES, MAX_TEXT_LINES);
    let text_height = metrics.text_height(visible_lines);

    let window_width = (widest + HORIZONTAL_PADDING).clamp(MIN_WINDOW_WIDTH, MAX_WINDOW_WIDTH);
    let window_height =
        (current_window_height + text_height - current_text_height).max(MIN_WINDOW_HEIGHT);

    Resize {
        text_height,
        window_width,
        window_height,
    }
}
