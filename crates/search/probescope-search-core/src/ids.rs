//! Identifiers and a simple allocator for playback sessions.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u32);

/// Monotonic allocator for SessionId.
/// IDs are never reused within an engine lifetime; they are opaque externally.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_session: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_session(&mut self) -> SessionId {
        let id = SessionId(self.next_session);
        self.next_session = self.next_session.wrapping_add(1);
        id
    }

    #[inline]
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
