//! FIFO byte queue backed by pooled memory blocks.
//!
//! Writes go to the back, reads and pops come from the front. The queue can
//! be exported as a list of [`IoSlice`]s for a single vectored write.
//!
//! # Example
//!
//! ```
//! use acn_pdu::io::IoQueue;
//!
//! let mut queue = IoQueue::with_block_size(4);
//! queue.write(&[1, 2, 3, 4, 5, 6]);
//! assert_eq!(queue.size(), 6);
//! assert_eq!(queue.as_io_slices().len(), 2);
//!
//! let mut out = [0u8; 3];
//! assert_eq!(queue.read(&mut out), 3);
//! assert_eq!(out, [1, 2, 3]);
//! assert_eq!(queue.size(), 3);
//! ```

use std::fmt;
use std::io::IoSlice;

use super::block_chain::BlockChain;
use super::{MemoryBlock, MemoryBlockPool, OutputBuffer, SharedBlockPool};
use crate::config::DEFAULT_BLOCK_SIZE;

/// First-in first-out byte queue.
#[derive(Debug)]
pub struct IoQueue {
    chain: BlockChain,
}

impl IoQueue {
    /// Create a queue with its own pool of default-sized blocks.
    pub fn new() -> Self {
        Self::with_block_size(DEFAULT_BLOCK_SIZE)
    }

    /// Create a queue with its own pool of `block_size` byte blocks.
    pub fn with_block_size(block_size: usize) -> Self {
        Self::with_pool(MemoryBlockPool::shared(block_size))
    }

    /// Create a queue drawing blocks from a shared pool.
    pub fn with_pool(pool: SharedBlockPool) -> Self {
        Self {
            chain: BlockChain::new(pool),
        }
    }

    /// The pool this queue allocates from.
    #[inline]
    pub fn pool(&self) -> &SharedBlockPool {
        self.chain.pool()
    }

    /// Total number of bytes queued.
    pub fn size(&self) -> usize {
        self.chain.size()
    }

    /// Check if the queue holds no data.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Append `data` at the back, allocating blocks as needed.
    pub fn write(&mut self, data: &[u8]) {
        let mut written = match self.chain.back_mut() {
            Some(tail) => tail.append(data),
            None => 0,
        };
        while written < data.len() {
            let mut block = self.chain.allocate();
            block.reset();
            written += block.append(&data[written..]);
            self.chain.push_back(block);
        }
    }

    /// Copy up to `out.len()` bytes from the front without consuming them.
    ///
    /// Returns the number of bytes copied.
    pub fn peek(&self, out: &mut [u8]) -> usize {
        self.chain.peek(out)
    }

    /// Remove up to `n` bytes from the front.
    ///
    /// Popping more than [`IoQueue::size`] logs a warning and empties the
    /// queue. Returns the number of bytes removed.
    pub fn pop(&mut self, n: usize) -> usize {
        self.chain.pop(n)
    }

    /// Copy and remove up to `out.len()` bytes from the front.
    pub fn read(&mut self, out: &mut [u8]) -> usize {
        self.chain.read(out)
    }

    /// Move up to `n` bytes from the front onto the end of `out`.
    pub fn read_to_vec(&mut self, out: &mut Vec<u8>, n: usize) -> usize {
        self.chain.read_to_vec(out, n)
    }

    /// Copy the whole queue into a contiguous buffer.
    pub fn to_vec(&self) -> Vec<u8> {
        self.chain.to_vec()
    }

    /// One slice per block, in queue order, for a vectored write.
    ///
    /// The slices borrow the queue, so it can't be modified while they live.
    pub fn as_io_slices(&self) -> Vec<IoSlice<'_>> {
        self.chain.as_io_slices()
    }

    /// Append the contents of `slices` in order. The data is copied.
    pub fn append_io_slices(&mut self, slices: &[IoSlice<'_>]) {
        for slice in slices {
            self.write(slice);
        }
    }

    /// Append a block without copying. Empty blocks go back to the pool.
    pub(crate) fn append_block(&mut self, block: MemoryBlock) {
        self.chain.push_back(block);
    }

    /// Release every block back to the pool.
    pub fn clear(&mut self) {
        self.chain.clear();
    }

    /// Destroy the pool's free blocks.
    pub fn purge(&mut self) {
        self.chain.purge();
    }

    /// Write the queue contents as hex + ASCII, 8 bytes per line.
    pub fn dump<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        self.chain.dump(out)
    }
}

impl Default for IoQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputBuffer for IoQueue {
    fn write(&mut self, data: &[u8]) {
        IoQueue::write(self, data);
    }

    fn size(&self) -> usize {
        IoQueue::size(self)
    }
}
