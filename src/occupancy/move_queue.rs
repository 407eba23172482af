use crate::core::ObjectId;

/// Pending relative move, resolved at the next tick
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Move {
    pub object: ObjectId,
    pub dx: f64,
    pub dy: f64,
}

impl Default for Move {
    fn default() -> Self {
        Self { object: ObjectId(0), dx: 0.0, dy: 0.0 }
    }
}

/// FIFO of pending moves. Slots are allocated up front and reused across
/// ticks; a full queue doubles instead of dropping input.
pub struct MoveQueue {
    data: Vec<Move>,
    count: usize,
    capacity: usize,
    grow_count: usize,
}

impl MoveQueue {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: vec![Move::default(); capacity],
            count: 0,
            capacity,
            grow_count: 0,
        }
    }

    fn try_grow(&mut self) -> bool {
        let old_capacity = self.capacity;
        let new_capacity = old_capacity.saturating_mul(2).max(old_capacity.saturating_add(1));
        if new_capacity == old_capacity {
            return false;
        }
        self.data.resize(new_capacity, Move::default());
        self.capacity = new_capacity;
        self.grow_count += 1;
        true
    }

    pub fn push(&mut self, m: Move) -> bool {
        if self.count >= self.capacity && !self.try_grow() {
            return false;
        }
        debug_assert_eq!(self.data.len(), self.capacity);
        match self.data.get_mut(self.count) {
            Some(slot) => {
                *slot = m;
                self.count += 1;
                true
            }
            None => false,
        }
    }

    /// Reset counter - memory stays allocated
    pub fn clear(&mut self) {
        self.count = 0;
    }

    pub fn as_slice(&self) -> &[Move] {
        &self.data[..self.count]
    }

    pub fn get(&self, index: usize) -> Option<Move> {
        self.as_slice().get(index).copied()
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// How many times the queue had to grow since creation
    pub fn grow_count(&self) -> usize {
        self.grow_count
    }
}
