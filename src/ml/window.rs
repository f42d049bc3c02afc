// ============================================================
// Layer 5 — Context Window
// ============================================================
// Fixed-width id buffer fed to the predictor on every step.
//
//   capacity 6, input [1, 3, 8]
//   start:        [1, 3, 8, 0, 0, 0]   real = 3
//   push 5:       [1, 3, 8, 5, 0, 0]   real = 4   (fills padding)
//   ... full:     [1, 3, 8, 5, 6, 4]   real = 6
//   push 2:       [3, 8, 5, 6, 4, 2]   real = 6   (oldest evicted)
//
// Real tokens always occupy a prefix of the buffer, in FIFO
// order. An input longer than the capacity keeps its first
// `capacity` ids.

use crate::data::vocabulary::PAD_ID;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContextWindow {
    slots: Vec<u32>,
    /// Number of real (non-padding) ids at the front of `slots`
    real:  usize,
}

impl ContextWindow {
    pub fn new(initial_ids: &[u32], capacity: usize) -> Self {
        let real = initial_ids.len().min(capacity);
        let mut slots = Vec::with_capacity(capacity);
        slots.extend_from_slice(&initial_ids[..real]);
        slots.resize(capacity, PAD_ID);
        Self { slots, real }
    }

    /// Append a predicted id, rolling the window left once it is full.
    pub fn push(&mut self, id: u32) {
        if self.real < self.slots.len() {
            self.slots[self.real] = id;
            self.real += 1;
        } else if let Some(last) = self.slots.len().checked_sub(1) {
            self.slots.rotate_left(1);
            self.slots[last] = id;
        }
    }

    /// The full padded buffer, as sent to the predictor.
    pub fn as_slice(&self) -> &[u32] {
        &self.slots
    }

    pub fn real_len(&self) -> usize {
        self.real
    }
}
