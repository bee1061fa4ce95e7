/// Number of simultaneous touches tracked.
pub const TOUCH_SLOT_COUNT: usize = 10;

/// Maps platform touch identities onto small pointer ids.
///
/// A new touch takes the lowest free slot and keeps it until it ends, so
/// pointer ids are stable for the duration of a gesture and get reused
/// afterwards. Touches beyond [`TOUCH_SLOT_COUNT`] are ignored.
#[derive(Debug, Clone)]
pub struct TouchSlots<K> {
    slots: [Option<K>; TOUCH_SLOT_COUNT],
}

impl<K: PartialEq> TouchSlots<K> {
    pub fn new() -> Self {
        Self {
            slots: std::array::from_fn(|_| None),
        }
    }

    /// Claims a slot for a new touch.
    pub fn begin(&mut self, key: K) -> Option<u32> {
        let index = self.slots.iter().position(Option::is_none)?;
        self.slots[index] = Some(key);
        Some(index as u32)
    }

    /// Slot of an ongoing touch.
    pub fn find(&self, key: &K) -> Option<u32> {
        self.slots
            .iter()
            .position(|slot| slot.as_ref() == Some(key))
            .map(|index| index as u32)
    }

    /// Resolves and frees the slot of an ending touch.
    pub fn end(&mut self, key: &K) -> Option<u32> {
        let index = self.find(key)?;
        self.slots[index as usize] = None;
        Some(index)
    }

    pub fn active(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}

impl<K: PartialEq> Default for TouchSlots<K> {
    fn default() -> Self {
        Self::new()
    }
}
