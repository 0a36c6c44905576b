//! Screen layout and text measurement
//!
//! Everything here is renderer-agnostic: a frontend supplies a `TextMeasure`
//! matching its font, and the layout hands back rectangles in pixels.

use super::geometry::Rect;

/// Font metrics needed for word wrapping
pub trait TextMeasure {
    /// Rendered width of `text` in pixels
    fn text_width(&self, text: &str) -> i32;

    /// Distance between consecutive baselines in pixels
    fn line_height(&self) -> i32;
}

/// Fixed-cell measure: narrow characters take one cell, East Asian wide
/// characters (Hangul, CJK, full-width forms) take two.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellMeasure {
    pub cell_width: i32,
    pub line_height: i32,
}

impl CellMeasure {
    pub const fn new(cell_width: i32, line_height: i32) -> Self {
        Self {
            cell_width,
            line_height,
        }
    }

    /// One pixel per cell and line, used for terminal output
    pub const fn terminal() -> Self {
        Self::new(1, 1)
    }
}

impl Default for CellMeasure {
    /// Approximates a 30px proportional font
    fn default() -> Self {
        Self::new(15, 36)
    }
}

impl TextMeasure for CellMeasure {
    fn text_width(&self, text: &str) -> i32 {
        text.chars().map(char_cells).sum::<i32>() * self.cell_width
    }

    fn line_height(&self) -> i32 {
        self.line_height
    }
}

/// Terminal cells occupied by `c`
pub fn char_cells(c: char) -> i32 {
    let cp = c as u32;
    let wide = matches!(
        cp,
        0x1100..=0x115F
            | 0x2E80..=0x303E
            | 0x3041..=0x33FF
            | 0x3400..=0x4DBF
            | 0x4E00..=0x9FFF
            | 0xA000..=0xA4CF
            | 0xAC00..=0xD7A3
            | 0xF900..=0xFAFF
            | 0xFE30..=0xFE4F
            | 0xFF00..=0xFF60
            | 0xFFE0..=0xFFE6
            | 0x20000..=0x3FFFD
    );
    if wide {
        2
    } else {
        1
    }
}

/// Greedy word wrap of one sentence into lines no wider than `max_width`.
///
/// Words are never split: a word wider than `max_width` gets a line of its
/// own. Whitespace runs collapse to single spaces.
pub fn wrap_text<M: TextMeasure + ?Sized>(sentence: &str, measure: &M, max_width: i32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in sentence.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate = format!("{} {}", current, word);
        if measure.text_width(&candidate) <= max_width {
            current = candidate;
        } else {
            lines.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Fixed portrait layout: top bar, scrollable content, bottom bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub width: i32,
    pub height: i32,
    pub top_height: i32,
    pub bottom_height: i32,
}

impl Default for ScreenLayout {
    fn default() -> Self {
        Self {
            width: 720,
            height: 1280,
            top_height: 100,
            bottom_height: 150,
        }
    }
}

const KEYWORD_BUTTON_TOP: i32 = 250;
const KEYWORD_BUTTON_STRIDE: i32 = 80;
const WIDE_BUTTON_WIDTH: i32 = 300;

impl ScreenLayout {
    /// Timer and home button bar
    pub fn top_rect(&self) -> Rect {
        Rect::new(0, 0, self.width, self.top_height)
    }

    /// Submit button bar
    pub fn bottom_rect(&self) -> Rect {
        Rect::new(
            0,
            self.height - self.bottom_height,
            self.width,
            self.bottom_height,
        )
    }

    /// Scrollable sentence area between the bars
    pub fn content_rect(&self) -> Rect {
        Rect::new(
            0,
            self.top_height,
            self.width,
            self.height - self.top_height - self.bottom_height,
        )
    }

    /// Main menu button of the `index`-th keyword
    pub fn keyword_button(&self, index: usize) -> Rect {
        Rect::new(
            self.width / 2 - WIDE_BUTTON_WIDTH / 2,
            KEYWORD_BUTTON_TOP + KEYWORD_BUTTON_STRIDE * index as i32,
            WIDE_BUTTON_WIDTH,
            60,
        )
    }

    /// "Back" button in the top bar while playing
    pub fn home_button(&self) -> Rect {
        Rect::new(self.width - 120, 20, 100, 40)
    }

    pub fn submit_button(&self) -> Rect {
        Rect::new(
            self.width / 2 - WIDE_BUTTON_WIDTH / 2,
            self.height - self.bottom_height + 20,
            WIDE_BUTTON_WIDTH,
            80,
        )
    }

    /// Result screen "try again" button
    pub fn retry_button(&self) -> Rect {
        Rect::new(self.width / 2 - WIDE_BUTTON_WIDTH / 2, 550, WIDE_BUTTON_WIDTH, 80)
    }

    /// Result screen "main menu" button
    pub fn result_home_button(&self) -> Rect {
        Rect::new(self.width / 2 - WIDE_BUTTON_WIDTH / 2, 700, WIDE_BUTTON_WIDTH, 80)
    }
}
