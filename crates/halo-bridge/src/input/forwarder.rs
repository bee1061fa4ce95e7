use std::sync::{Arc, Weak};

use parking_lot::RwLock;

use super::{InputModule, TouchEvent, TouchKind};

/// Thread-safe, cloneable route from UI-thread touches to the input module.
///
/// Holds a non-owning handle: the module belongs to the script context and
/// disappears with it. Forwarding without a live module is a no-op.
pub struct InputForwarder<I> {
    target: Arc<RwLock<Weak<I>>>,
}

impl<I> Clone for InputForwarder<I> {
    fn clone(&self) -> Self {
        Self {
            target: self.target.clone(),
        }
    }
}

impl<I> Default for InputForwarder<I> {
    fn default() -> Self {
        Self {
            target: Arc::new(RwLock::new(Weak::new())),
        }
    }
}

impl<I: InputModule> InputForwarder<I> {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn attach(&self, input: Weak<I>) {
        *self.target.write() = input;
    }

    pub(crate) fn detach(&self) {
        *self.target.write() = Weak::new();
    }

    pub fn is_attached(&self) -> bool {
        self.target.read().strong_count() > 0
    }

    /// Delivers `event`; returns whether a live module received it.
    pub fn forward(&self, event: TouchEvent) -> bool {
        let Some(input) = self.target.read().upgrade() else {
            log::trace!("touch {:?} dropped: no input module", event.kind);
            return false;
        };

        let TouchEvent {
            kind,
            pointer_id,
            x,
            y,
        } = event;
        match kind {
            TouchKind::Down => input.pointer_down(pointer_id, x, y),
            TouchKind::Move => input.pointer_move(pointer_id, x, y),
            TouchKind::Up => input.pointer_up(pointer_id, x, y),
        }
        true
    }
}
