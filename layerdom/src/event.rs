/// Pointer events routed through a [`Document`](crate::Document).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Event {
    pub kind: EventKind,
    pub x: u16,
    pub y: u16,
    pub button: MouseButton,
    /// Deepest element under the pointer. Filled in by dispatch.
    pub target: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// Button pressed.
    PointerDown,
    /// Button released over the document; follows a `PointerDown`.
    Click,
}

/// Mouse button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MouseButton {
    #[default]
    Left,
    Right,
    Middle,
}

impl Event {
    pub fn new(kind: EventKind, x: u16, y: u16) -> Self {
        Self {
            kind,
            x,
            y,
            button: MouseButton::Left,
            target: None,
        }
    }

    pub fn pointer_down(x: u16, y: u16) -> Self {
        Self::new(EventKind::PointerDown, x, y)
    }

    pub fn click(x: u16, y: u16) -> Self {
        Self::new(EventKind::Click, x, y)
    }

    pub fn with_button(mut self, button: MouseButton) -> Self {
        self.button = button;
        self
    }

    /// Translate a terminal mouse event. Only presses and releases map to
    /// pointer events; moves, drags and scrolls return `None`.
    pub fn from_mouse(event: crossterm::event::MouseEvent) -> Option<Self> {
        use crossterm::event::MouseEventKind;

        let (kind, button) = match event.kind {
            MouseEventKind::Down(button) => (EventKind::PointerDown, button),
            MouseEventKind::Up(button) => (EventKind::Click, button),
            _ => return None,
        };
        Some(Self::new(kind, event.column, event.row).with_button(button.into()))
    }
}

impl From<crossterm::event::MouseButton> for MouseButton {
    fn from(btn: crossterm::event::MouseButton) -> Self {
        use crossterm::event::MouseButton as CtBtn;
        match btn {
            CtBtn::Left => MouseButton::Left,
            CtBtn::Right => MouseButton::Right,
            CtBtn::Middle => MouseButton::Middle,
        }
    }
}
