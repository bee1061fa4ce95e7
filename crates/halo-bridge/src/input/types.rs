/// Touch phase forwarded to the input module.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum TouchKind {
    Down,
    Move,
    Up,
}

/// One touch sample in surface pixels.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct TouchEvent {
    pub kind: TouchKind,
    /// Small, reusable pointer slot id (see [`super::TouchSlots`]).
    pub pointer_id: u32,
    pub x: i32,
    pub y: i32,
}

impl TouchEvent {
    pub fn new(kind: TouchKind, pointer_id: u32, x: i32, y: i32) -> Self {
        Self {
            kind,
            pointer_id,
            x,
            y,
        }
    }
}
