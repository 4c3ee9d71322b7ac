/// Fixed-capacity FIFO that hands back the evicted value on each push once full.
///
/// Storage grows with the values actually pushed, so a window longer than
/// the series never allocates its full capacity.
#[derive(Clone, Debug)]
pub(crate) struct RingBuffer<T> {
    buffer: Vec<T>,
    head: usize,
    capacity: usize,
}

impl<T: Copy> RingBuffer<T> {
    #[must_use]
    pub(crate) fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "ring buffer capacity must be positive");

        Self {
            buffer: Vec::new(),
            head: 0,
            capacity,
        }
    }

    #[inline]
    pub(crate) fn is_ready(&self) -> bool {
        self.buffer.len() == self.capacity
    }

    #[inline]
    pub(crate) fn push(&mut self, value: T) -> Option<T> {
        if !self.is_ready() {
            self.buffer.push(value);
            return None;
        }

        let old = std::mem::replace(&mut self.buffer[self.head], value);

        self.head += 1;
        if self.head == self.capacity {
            self.head = 0;
        }

        Some(old)
    }
}
