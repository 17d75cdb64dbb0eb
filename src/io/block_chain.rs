//! Ordered list of pooled blocks, shared by [`IoQueue`](super::IoQueue) and
//! [`IoStack`](super::IoStack).
//!
//! The logical byte sequence runs from the front block to the back block.
//! A chain never holds an empty block: a block is released to the pool as
//! soon as it is drained. Both containers read and pop from the front; they
//! differ only in which end they write to.

use std::collections::VecDeque;
use std::fmt;
use std::io::IoSlice;

use super::dump::{format_data, DEFAULT_BYTES_PER_LINE};
use super::{MemoryBlock, SharedBlockPool};

#[derive(Debug)]
pub(crate) struct BlockChain {
    pool: SharedBlockPool,
    blocks: VecDeque<MemoryBlock>,
}

impl BlockChain {
    pub(crate) fn new(pool: SharedBlockPool) -> Self {
        Self {
            pool,
            blocks: VecDeque::new(),
        }
    }

    #[inline]
    pub(crate) fn pool(&self) -> &SharedBlockPool {
        &self.pool
    }

    pub(crate) fn size(&self) -> usize {
        self.blocks.iter().map(MemoryBlock::size).sum()
    }

    #[inline]
    pub(crate) fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub(crate) fn front_mut(&mut self) -> Option<&mut MemoryBlock> {
        self.blocks.front_mut()
    }

    pub(crate) fn back_mut(&mut self) -> Option<&mut MemoryBlock> {
        self.blocks.back_mut()
    }

    pub(crate) fn allocate(&self) -> MemoryBlock {
        self.pool.borrow_mut().allocate()
    }

    pub(crate) fn release(&self, block: MemoryBlock) {
        self.pool.borrow_mut().release(block);
    }

    pub(crate) fn push_front(&mut self, block: MemoryBlock) {
        if block.is_empty() {
            self.release(block);
        } else {
            self.blocks.push_front(block);
        }
    }

    pub(crate) fn push_back(&mut self, block: MemoryBlock) {
        if block.is_empty() {
            self.release(block);
        } else {
            self.blocks.push_back(block);
        }
    }

    pub(crate) fn pop_block(&mut self) -> Option<MemoryBlock> {
        self.blocks.pop_front()
    }

    /// Remove up to `n` bytes from the front. Returns the number removed.
    pub(crate) fn pop(&mut self, n: usize) -> usize {
        let size = self.size();
        let n = if n > size {
            tracing::warn!("attempt to pop {} bytes but only {} available", n, size);
            size
        } else {
            n
        };

        let mut popped = 0;
        while popped < n {
            let Some(front) = self.blocks.front_mut() else {
                break;
            };
            popped += front.pop_front(n - popped);
            if front.is_empty() {
                if let Some(block) = self.blocks.pop_front() {
                    self.release(block);
                }
            }
        }
        popped
    }

    /// Copy up to `out.len()` bytes from the front. Returns the number copied.
    pub(crate) fn peek(&self, out: &mut [u8]) -> usize {
        let mut copied = 0;
        for block in &self.blocks {
            if copied == out.len() {
                break;
            }
            copied += block.copy(&mut out[copied..]);
        }
        copied
    }

    pub(crate) fn read(&mut self, out: &mut [u8]) -> usize {
        let n = self.peek(out);
        self.pop(n)
    }

    pub(crate) fn read_to_vec(&mut self, out: &mut Vec<u8>, n: usize) -> usize {
        let mut copied = 0;
        for block in &self.blocks {
            if copied == n {
                break;
            }
            let take = (n - copied).min(block.size());
            out.extend_from_slice(&block.data()[..take]);
            copied += take;
        }
        self.pop(copied)
    }

    pub(crate) fn as_io_slices(&self) -> Vec<IoSlice<'_>> {
        self.blocks
            .iter()
            .map(|block| IoSlice::new(block.data()))
            .collect()
    }

    pub(crate) fn to_vec(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(self.size());
        for block in &self.blocks {
            data.extend_from_slice(block.data());
        }
        data
    }

    pub(crate) fn dump<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        format_data(out, &self.to_vec(), 0, DEFAULT_BYTES_PER_LINE)
    }

    /// Destroy the pool's free blocks. Held data is untouched.
    pub(crate) fn purge(&self) {
        self.pool.borrow_mut().purge();
    }

    pub(crate) fn clear(&mut self) {
        let mut pool = self.pool.borrow_mut();
        for block in self.blocks.drain(..) {
            pool.release(block);
        }
    }
}

impl Drop for BlockChain {
    fn drop(&mut self) {
        // a pool already borrowed means we are unwinding through it
        if let Ok(mut pool) = self.pool.try_borrow_mut() {
            for block in self.blocks.drain(..) {
                pool.release(block);
            }
        }
    }
}
