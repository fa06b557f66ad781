//! Layout primitives shared by every screen.
//!
//! Screens are laid out in window pixels: a `Rect` per button, recomputed from the current
//! window size whenever it changes.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    pub const fn from_size(w: u32, h: u32) -> Self {
        Self { x: 0, y: 0, w, h }
    }

    pub fn size(&self) -> Size {
        Size {
            w: self.w,
            h: self.h,
        }
    }

    pub fn right(&self) -> u32 {
        self.x.saturating_add(self.w)
    }

    pub fn bottom(&self) -> u32 {
        self.y.saturating_add(self.h)
    }

    /// Half-open containment: the right and bottom edges are outside.
    pub fn contains(&self, px: u32, py: u32) -> bool {
        px >= self.x && px < self.right() && py >= self.y && py < self.bottom()
    }

    /// Places a child of `size` inside this rect using the requested `anchor`.
    ///
    /// If `size` exceeds this rect, it is clamped to fit.
    pub fn place(&self, size: Size, anchor: Anchor) -> Self {
        let w = size.w.min(self.w);
        let h = size.h.min(self.h);

        let x = match anchor {
            Anchor::TopLeft | Anchor::CenterLeft => self.x,
            Anchor::TopCenter | Anchor::Center => {
                self.x.saturating_add(self.w.saturating_sub(w) / 2)
            }
            Anchor::TopRight | Anchor::CenterRight => {
                self.x.saturating_add(self.w.saturating_sub(w))
            }
        };

        let y = match anchor {
            Anchor::TopLeft | Anchor::TopCenter | Anchor::TopRight => self.y,
            Anchor::CenterLeft | Anchor::Center | Anchor::CenterRight => {
                self.y.saturating_add(self.h.saturating_sub(h) / 2)
            }
        };

        Self { x, y, w, h }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub w: u32,
    pub h: u32,
}

impl Size {
    pub const fn new(w: u32, h: u32) -> Self {
        Self { w, h }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    CenterLeft,
    Center,
    CenterRight,
}

/// Lays out `count` equally sized items left to right, `gap` pixels apart, starting at `x`.
pub fn row(x: u32, y: u32, item: Size, gap: u32, count: usize) -> Vec<Rect> {
    let step = item.w.saturating_add(gap);
    (0..count as u32)
        .map(|i| Rect::new(x.saturating_add(step.saturating_mul(i)), y, item.w, item.h))
        .collect()
}

/// Lays out `count` equally sized items top to bottom, `gap` pixels apart, starting at `y`.
pub fn column(x: u32, y: u32, item: Size, gap: u32, count: usize) -> Vec<Rect> {
    let step = item.h.saturating_add(gap);
    (0..count as u32)
        .map(|i| Rect::new(x, y.saturating_add(step.saturating_mul(i)), item.w, item.h))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_excludes_far_edges() {
        let r = Rect::new(10, 10, 5, 5);
        assert!(r.contains(10, 10));
        assert!(r.contains(14, 14));
        assert!(!r.contains(15, 10));
        assert!(!r.contains(10, 15));
        assert!(!r.contains(9, 12));
    }

    #[test]
    fn place_center_positions_child_in_parent() {
        let parent = Rect::from_size(100, 100);
        let child = parent.place(Size::new(20, 10), Anchor::Center);
        assert_eq!(child, Rect::new(40, 45, 20, 10));
    }

    #[test]
    fn place_top_center_keeps_parent_top() {
        let parent = Rect::from_size(1530, 890);
        let child = parent.place(Size::new(700, 350), Anchor::TopCenter);
        assert_eq!(child, Rect::new(415, 0, 700, 350));
    }

    #[test]
    fn place_clamps_size_to_parent() {
        let parent = Rect::from_size(50, 40);
        let child = parent.place(Size::new(999, 999), Anchor::TopLeft);
        assert_eq!(child, Rect::new(0, 0, 50, 40));
    }

    #[test]
    fn row_and_column_step_by_size_plus_gap() {
        let items = row(100, 20, Size::new(80, 80), 10, 3);
        assert_eq!(
            items,
            vec![
                Rect::new(100, 20, 80, 80),
                Rect::new(190, 20, 80, 80),
                Rect::new(280, 20, 80, 80),
            ]
        );

        let items = column(615, 250, Size::new(300, 160), 5, 2);
        assert_eq!(items[1], Rect::new(615, 415, 300, 160));
    }
}
