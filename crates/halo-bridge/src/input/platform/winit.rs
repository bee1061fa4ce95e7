use winit::dpi::PhysicalPosition;
use winit::event::{Touch, TouchPhase, WindowEvent};

use crate::input::{TouchEvent, TouchKind, TouchSlots};

/// Translates a winit touch into a slot-addressed [`TouchEvent`].
///
/// `scale_factor` converts physical touch positions into the logical
/// coordinates scripts work in. Returns `None` for non-touch events, for
/// touches that could not claim a slot, and for moves/ends of unknown touches.
pub fn translate_touch(
    slots: &mut TouchSlots<u64>,
    event: &WindowEvent,
    scale_factor: f64,
) -> Option<TouchEvent> {
    let WindowEvent::Touch(Touch {
        phase,
        id,
        location,
        ..
    }) = event
    else {
        return None;
    };

    let (kind, pointer_id) = match phase {
        TouchPhase::Started => (TouchKind::Down, slots.begin(*id)?),
        TouchPhase::Moved => (TouchKind::Move, slots.find(id)?),
        TouchPhase::Ended | TouchPhase::Cancelled => (TouchKind::Up, slots.end(id)?),
    };

    let (x, y) = to_logical_i32(*location, scale_factor);
    Some(TouchEvent::new(kind, pointer_id, x, y))
}

fn to_logical_i32(pos: PhysicalPosition<f64>, scale_factor: f64) -> (i32, i32) {
    let logical = pos.to_logical::<f64>(scale_factor);
    (logical.x as i32, logical.y as i32)
}
