//! Vertical scroll state of the content area

/// Pixels moved per mouse-wheel notch
pub const SCROLL_STEP: i32 = 30;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollView {
    offset: i32,
    max: i32,
}

impl ScrollView {
    pub fn new(content_height: i32, viewport_height: i32) -> Self {
        Self {
            offset: 0,
            max: content_height.saturating_sub(viewport_height).max(0),
        }
    }

    pub fn offset(&self) -> i32 {
        self.offset
    }

    pub fn max(&self) -> i32 {
        self.max
    }

    pub fn can_scroll(&self) -> bool {
        self.max > 0
    }

    /// Positive notches (wheel up) move toward the top
    pub fn wheel(&mut self, notches: i32) {
        self.scroll_by(notches.saturating_mul(SCROLL_STEP).saturating_neg());
    }

    /// Move by `delta` pixels, positive toward the bottom
    pub fn scroll_by(&mut self, delta: i32) {
        self.offset = self.offset.saturating_add(delta).clamp(0, self.max);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_clamps_to_range() {
        let mut view = ScrollView::new(1000, 900);
        assert_eq!(view.max(), 100);

        view.wheel(1);
        assert_eq!(view.offset(), 0);

        view.wheel(-3);
        assert_eq!(view.offset(), 90);
        view.wheel(-1);
        assert_eq!(view.offset(), 100);

        view.wheel(2);
        assert_eq!(view.offset(), 40);
    }

    #[test]
    fn test_extreme_input_saturates() {
        let mut view = ScrollView::new(1000, 900);

        view.wheel(i32::MIN);
        assert_eq!(view.offset(), 100);
        view.wheel(i32::MAX);
        assert_eq!(view.offset(), 0);

        view.scroll_by(i32::MAX);
        view.scroll_by(i32::MAX);
        assert_eq!(view.offset(), 100);
        view.scroll_by(i32::MIN);
        assert_eq!(view.offset(), 0);
    }

    #[test]
    fn test_short_content_never_scrolls() {
        let mut view = ScrollView::new(300, 900);
        assert!(!view.can_scroll());
        view.scroll_by(500);
        assert_eq!(view.offset(), 0);
    }
}
