use serde::{Deserialize, Serialize};

/// A local variable's debug record: the name and descriptor a slot carries
/// over a half-open range of instruction offsets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scope {
    start_offset: u16,
    length: u16,
    name: String,
    descriptor: String,
    slot: u16,
}

impl Scope {
    pub fn new(
        start_offset: u16,
        length: u16,
        name: impl Into<String>,
        descriptor: impl Into<String>,
        slot: u16,
    ) -> Self {
        Self {
            start_offset,
            length,
            name: name.into(),
            descriptor: descriptor.into(),
            slot,
        }
    }

    pub fn start_offset(&self) -> u16 {
        self.start_offset
    }

    pub fn length(&self) -> u16 {
        self.length
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn descriptor(&self) -> &str {
        &self.descriptor
    }

    pub fn slot(&self) -> u16 {
        self.slot
    }

    /// Exclusive end of the range. Widened so `start + length` never wraps.
    pub fn end_offset(&self) -> u32 {
        u32::from(self.start_offset) + u32::from(self.length)
    }

    pub fn is_active_at(&self, offset: u16) -> bool {
        offset >= self.start_offset && u32::from(offset) < self.end_offset()
    }

    /// Scopes opening at offset 0 describe the method's parameters.
    pub fn is_parameter(&self) -> bool {
        self.start_offset == 0
    }
}
