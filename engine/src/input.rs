use winit::event::VirtualKeyCode;

/// Pointer distance (per axis) a press may travel and still count as a click on release.
pub const CLICK_SLOP: u32 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    PointerMoved { x: u32, y: u32 },
    PointerPressed { x: u32, y: u32 },
    PointerReleased { x: u32, y: u32 },
    /// A press and release at (roughly) the same spot.
    PointerClicked { x: u32, y: u32 },
    /// The pointer left the window.
    PointerExited,
    KeyPressed(VirtualKeyCode),
}

/// Turns raw cursor/button callbacks into `InputEvent`s.
///
/// The window only reports positions on motion, so the tracker remembers the last one and
/// attaches it to press/release events.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointerTracker {
    position: Option<(u32, u32)>,
    pressed_at: Option<(u32, u32)>,
}

impl PointerTracker {
    pub fn moved(&mut self, x: u32, y: u32) -> InputEvent {
        self.position = Some((x, y));
        InputEvent::PointerMoved { x, y }
    }

    pub fn pressed(&mut self) -> Option<InputEvent> {
        let (x, y) = self.position?;
        self.pressed_at = Some((x, y));
        Some(InputEvent::PointerPressed { x, y })
    }

    /// Returns the release and, when it lands near the matching press, a click.
    pub fn released(&mut self) -> Vec<InputEvent> {
        let Some((x, y)) = self.position else {
            self.pressed_at = None;
            return Vec::new();
        };
        let mut events = vec![InputEvent::PointerReleased { x, y }];
        if let Some((px, py)) = self.pressed_at.take() {
            if px.abs_diff(x) <= CLICK_SLOP && py.abs_diff(y) <= CLICK_SLOP {
                events.push(InputEvent::PointerClicked { x, y });
            }
        }
        events
    }

    pub fn left(&mut self) -> InputEvent {
        self.position = None;
        self.pressed_at = None;
        InputEvent::PointerExited
    }
}
