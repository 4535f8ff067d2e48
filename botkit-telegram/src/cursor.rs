//! Poll cursor: the next `update_id` to ask for.

/// Owned by the runner. Only ever moves forward.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cursor {
    next_offset: i64,
}

impl Cursor {
    pub fn new(next_offset: i64) -> Self {
        Self { next_offset }
    }

    pub fn next_offset(&self) -> i64 {
        self.next_offset
    }

    /// Moves past `update_id`. Returns false (and leaves the cursor alone) if that would regress it.
    pub fn advance_past(&mut self, update_id: i64) -> bool {
        let candidate = update_id.saturating_add(1);
        if candidate > self.next_offset {
            self.next_offset = candidate;
            true
        } else {
            false
        }
    }
}
