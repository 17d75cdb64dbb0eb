//! Fixed-capacity byte chunk with independent read and write cursors.
//!
//! A block owns `capacity` bytes and tracks the valid region `[first, last)`:
//!
//! ```text
//!  0            first          last          capacity
//!  ├─ headroom ──┼──── valid ───┼── tailroom ──┤
//! ```
//!
//! Appends grow `last` forward, prepends grow `first` backward. A block meant
//! for prepending is first moved to the end with [`MemoryBlock::seek_back`].
//! All operations clamp to the space available and report how many bytes
//! they actually moved; callers check the count and allocate another block.

/// A fixed-capacity byte buffer used as the storage unit of queues and stacks.
#[derive(Debug)]
pub struct MemoryBlock {
    data: Box<[u8]>,
    first: usize,
    last: usize,
}

impl MemoryBlock {
    /// Create an empty block of `capacity` bytes.
    pub fn new(capacity: usize) -> Self {
        Self {
            data: vec![0u8; capacity].into_boxed_slice(),
            first: 0,
            last: 0,
        }
    }

    /// Total capacity of the block.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.data.len()
    }

    /// Number of valid bytes.
    #[inline]
    pub fn size(&self) -> usize {
        self.last - self.first
    }

    /// Check if the block holds no valid data.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.first == self.last
    }

    /// Space left after the valid data, available to [`MemoryBlock::append`].
    #[inline]
    pub fn remaining(&self) -> usize {
        self.capacity() - self.last
    }

    /// Space left before the valid data, available to [`MemoryBlock::prepend`].
    #[inline]
    pub fn headroom(&self) -> usize {
        self.first
    }

    /// The valid bytes.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data[self.first..self.last]
    }

    /// Move both cursors to the end of the block, ready for prepending.
    ///
    /// Any valid data is discarded.
    pub fn seek_back(&mut self) {
        self.first = self.capacity();
        self.last = self.first;
    }

    /// Move both cursors to the start of the block, ready for appending.
    ///
    /// Any valid data is discarded.
    pub fn reset(&mut self) {
        self.first = 0;
        self.last = 0;
    }

    /// Append as much of `data` as fits after the valid region.
    ///
    /// Returns the number of bytes written.
    pub fn append(&mut self, data: &[u8]) -> usize {
        let n = data.len().min(self.remaining());
        self.data[self.last..self.last + n].copy_from_slice(&data[..n]);
        self.last += n;
        n
    }

    /// Prepend as much of `data` as fits before the valid region.
    ///
    /// The tail of `data` is taken first, so repeated prepends of the
    /// remaining head build the correct forward order.
    ///
    /// Returns the number of bytes written.
    pub fn prepend(&mut self, data: &[u8]) -> usize {
        let n = data.len().min(self.headroom());
        let start = self.first - n;
        self.data[start..self.first].copy_from_slice(&data[data.len() - n..]);
        self.first = start;
        n
    }

    /// Drop up to `n` bytes from the front of the valid region.
    ///
    /// A drained block is reset so its whole capacity is reusable.
    /// Returns the number of bytes removed.
    pub fn pop_front(&mut self, n: usize) -> usize {
        let n = n.min(self.size());
        self.first += n;
        if self.first == self.last {
            self.reset();
        }
        n
    }

    /// Copy up to `out.len()` valid bytes into `out` without consuming them.
    ///
    /// Returns the number of bytes copied.
    pub fn copy(&self, out: &mut [u8]) -> usize {
        let n = out.len().min(self.size());
        out[..n].copy_from_slice(&self.data[self.first..self.first + n]);
        n
    }
}
