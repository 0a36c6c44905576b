//! Clickable sentence blocks laid out in the content area

use super::geometry::{Point, Rect};
use super::layout::{wrap_text, TextMeasure};

const SIDE_MARGIN: i32 = 60;
const TOP_PADDING: i32 = 20;
const BLOCK_SPACING: i32 = 10;

/// One quiz sentence, wrapped and positioned in unscrolled screen space
#[derive(Debug, Clone, PartialEq)]
pub struct SentenceBlock {
    pub index: usize,
    pub text: String,
    pub lines: Vec<String>,
    pub rect: Rect,
    pub selected: bool,
}

impl SentenceBlock {
    /// Rect as drawn with the content scrolled down by `offset` pixels
    pub fn visible_rect(&self, offset: i32) -> Rect {
        self.rect.translated(0, -offset)
    }

    pub fn hit(&self, point: Point, offset: i32) -> bool {
        self.visible_rect(offset).contains(point)
    }
}

/// Stack the sentences top to bottom inside `content`.
pub fn create_sentence_blocks<M: TextMeasure + ?Sized>(
    sentences: &[String],
    measure: &M,
    content: Rect,
) -> Vec<SentenceBlock> {
    let x = content.left() + SIDE_MARGIN;
    let width = content.width - SIDE_MARGIN * 2;
    let mut y = content.top() + TOP_PADDING;

    sentences
        .iter()
        .enumerate()
        .map(|(index, text)| {
            let lines = wrap_text(text, measure, width);
            let height = lines.len() as i32 * measure.line_height();
            let rect = Rect::new(x, y, width, height);
            y = rect.bottom() + BLOCK_SPACING;

            SentenceBlock {
                index,
                text: text.clone(),
                lines,
                rect,
                selected: false,
            }
        })
        .collect()
}

pub fn total_content_height(blocks: &[SentenceBlock], content_top: i32) -> i32 {
    blocks
        .last()
        .map(|b| (b.rect.bottom() - content_top).max(0))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::layout::CellMeasure;

    fn sentences(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_blocks_stack_with_spacing() {
        let measure = CellMeasure::new(10, 30);
        let content = Rect::new(0, 100, 720, 1030);
        // width 600px => 60 cells per line
        let long = "word ".repeat(20);
        let blocks = create_sentence_blocks(&sentences(&["short one", &long]), &measure, content);

        assert_eq!(blocks.len(), 2);
        assert_eq!(blocks[0].rect, Rect::new(60, 120, 600, 30));
        assert_eq!(blocks[1].rect.top(), 160);
        assert_eq!(blocks[1].lines.len(), 2);
        assert_eq!(blocks[1].rect.height, 60);
        assert!(blocks.iter().all(|b| !b.selected));
        assert_eq!(total_content_height(&blocks, content.top()), 120);
    }

    #[test]
    fn test_hit_accounts_for_scroll() {
        let measure = CellMeasure::new(10, 30);
        let content = Rect::new(0, 100, 720, 1030);
        let blocks = create_sentence_blocks(&sentences(&["a", "b"]), &measure, content);

        let point = Point::new(100, 125);
        assert!(blocks[0].hit(point, 0));
        assert!(!blocks[1].hit(point, 0));
        // Scrolled by 40px the second block (y=160) is drawn at y=120
        assert!(blocks[1].hit(point, 40));
        assert!(!blocks[0].hit(point, 40));
    }

    #[test]
    fn test_no_blocks_no_height() {
        assert_eq!(total_content_height(&[], 100), 0);
    }
}
