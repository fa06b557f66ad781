use crate::ui::Rect;

/// A fixed group of buttons with per-button hover/press flags.
///
/// Indices are positions in the group; every setter ignores out-of-range indices.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ButtonSet {
    rects: Vec<Rect>,
    hovered: Vec<bool>,
    pressed: Vec<bool>,
}

impl ButtonSet {
    pub fn new(rects: Vec<Rect>) -> Self {
        let n = rects.len();
        Self {
            rects,
            hovered: vec![false; n],
            pressed: vec![false; n],
        }
    }

    pub fn rect(&self, index: usize) -> Option<Rect> {
        self.rects.get(index).copied()
    }

    /// Replaces the button rects after a layout change. Flags survive only if the button count
    /// is unchanged.
    pub fn relayout(&mut self, rects: Vec<Rect>) {
        if rects.len() != self.rects.len() {
            *self = Self::new(rects);
        } else {
            self.rects = rects;
        }
    }

    pub fn hit_test(&self, x: u32, y: u32) -> Option<usize> {
        self.rects.iter().position(|r| r.contains(x, y))
    }

    pub fn is_hovered(&self, index: usize) -> bool {
        self.hovered.get(index).copied().unwrap_or(false)
    }

    pub fn is_pressed(&self, index: usize) -> bool {
        self.pressed.get(index).copied().unwrap_or(false)
    }

    pub fn hovered(&self) -> Option<usize> {
        self.hovered.iter().position(|&h| h)
    }

    pub fn set_pressed(&mut self, index: usize, pressed: bool) {
        if let Some(flag) = self.pressed.get_mut(index) {
            *flag = pressed;
        }
    }

    /// Hovers exactly the button under `(x, y)` and returns it.
    pub fn update_hover(&mut self, x: u32, y: u32) -> Option<usize> {
        let hit = self.hit_test(x, y);
        for (i, flag) in self.hovered.iter_mut().enumerate() {
            *flag = Some(i) == hit;
        }
        hit
    }

    /// Marks the button under `(x, y)` as pressed and returns it.
    pub fn press_at(&mut self, x: u32, y: u32) -> Option<usize> {
        let hit = self.hit_test(x, y)?;
        self.set_pressed(hit, true);
        Some(hit)
    }

    pub fn clear_hover(&mut self) {
        self.hovered.iter_mut().for_each(|h| *h = false);
    }

    pub fn clear_pressed(&mut self) {
        self.pressed.iter_mut().for_each(|p| *p = false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn three() -> ButtonSet {
        ButtonSet::new(vec![
            Rect::new(0, 0, 10, 10),
            Rect::new(20, 0, 10, 10),
            Rect::new(40, 0, 10, 10),
        ])
    }

    #[test]
    fn hit_test_returns_index_or_none() {
        let set = three();
        assert_eq!(set.hit_test(25, 5), Some(1));
        assert_eq!(set.hit_test(15, 5), None);
    }

    #[test]
    fn update_hover_is_exclusive() {
        let mut set = three();
        set.update_hover(5, 5);
        assert!(set.is_hovered(0));
        set.update_hover(45, 5);
        assert!(!set.is_hovered(0));
        assert_eq!(set.hovered(), Some(2));
        set.update_hover(100, 100);
        assert_eq!(set.hovered(), None);
    }

    #[test]
    fn out_of_range_indices_are_ignored() {
        let mut set = three();
        set.set_pressed(usize::MAX, true);
        assert!(!set.is_hovered(7));
        assert!(!set.is_pressed(usize::MAX));
        assert_eq!(set.hovered(), None);
    }

    #[test]
    fn press_and_clear() {
        let mut set = three();
        assert_eq!(set.press_at(21, 1), Some(1));
        assert!(set.is_pressed(1));
        set.clear_pressed();
        assert!(!set.is_pressed(1));
    }

    #[test]
    fn relayout_keeps_flags_when_count_matches() {
        let mut set = three();
        set.update_hover(25, 5);
        set.relayout(vec![
            Rect::new(0, 50, 10, 10),
            Rect::new(20, 50, 10, 10),
            Rect::new(40, 50, 10, 10),
        ]);
        assert!(set.is_hovered(1));
        assert_eq!(set.hit_test(25, 55), Some(1));
    }
}
