//! Free-list allocator for fixed-size memory blocks.
//!
//! Every block handed out by a pool has the pool's block size. The pool
//! counts blocks it has created and not yet destroyed, whether they sit in
//! the free list or are held by a queue or stack:
//!
//! ```text
//! blocks_allocated() == free_blocks() + blocks held by clients
//! ```
//!
//! The pool is not thread safe. Queues and stacks running on the same thread
//! may share one pool through a [`SharedBlockPool`] handle.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use super::MemoryBlock;
use crate::config::{TransportConfig, DEFAULT_BLOCK_SIZE};

/// A pool shared by queues and stacks on one thread.
pub type SharedBlockPool = Rc<RefCell<MemoryBlockPool>>;

/// Recycles [`MemoryBlock`]s of one fixed capacity.
#[derive(Debug)]
pub struct MemoryBlockPool {
    free_blocks: VecDeque<MemoryBlock>,
    block_size: usize,
    blocks_allocated: usize,
}

impl MemoryBlockPool {
    /// Create a pool of blocks of `block_size` bytes (at least one byte).
    pub fn new(block_size: usize) -> Self {
        Self {
            free_blocks: VecDeque::new(),
            block_size: block_size.max(1),
            blocks_allocated: 0,
        }
    }

    /// Create a pool using the configured block size.
    pub fn from_config(config: &TransportConfig) -> Self {
        Self::new(config.block_size)
    }

    /// Create a pool wrapped in a shareable handle.
    pub fn shared(block_size: usize) -> SharedBlockPool {
        Rc::new(RefCell::new(Self::new(block_size)))
    }

    /// Capacity of every block this pool hands out.
    #[inline]
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Number of blocks currently alive, free or in use.
    #[inline]
    pub fn blocks_allocated(&self) -> usize {
        self.blocks_allocated
    }

    /// Number of blocks waiting in the free list.
    #[inline]
    pub fn free_blocks(&self) -> usize {
        self.free_blocks.len()
    }

    /// Take a block from the free list, or create a new one.
    ///
    /// Recycled blocks are returned exactly as they were released.
    pub fn allocate(&mut self) -> MemoryBlock {
        if let Some(block) = self.free_blocks.pop_front() {
            return block;
        }
        self.blocks_allocated += 1;
        tracing::debug!(
            "new block of {} bytes allocated, {} blocks alive",
            self.block_size,
            self.blocks_allocated
        );
        MemoryBlock::new(self.block_size)
    }

    /// Return a block to the free list. Its cursors are left untouched.
    pub fn release(&mut self, block: MemoryBlock) {
        if block.capacity() != self.block_size {
            tracing::warn!(
                "dropping foreign block of {} bytes, pool block size is {}",
                block.capacity(),
                self.block_size
            );
            return;
        }
        self.free_blocks.push_back(block);
    }

    /// Destroy all free blocks.
    pub fn purge(&mut self) {
        self.purge_to(0);
    }

    /// Destroy free blocks until at most `remaining` are left.
    ///
    /// Blocks held by queues and stacks are never touched.
    pub fn purge_to(&mut self, remaining: usize) {
        while self.free_blocks.len() > remaining {
            self.free_blocks.pop_front();
            self.blocks_allocated -= 1;
        }
    }
}

impl Default for MemoryBlockPool {
    fn default() -> Self {
        Self::new(DEFAULT_BLOCK_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allocate_and_release() {
        let mut pool = MemoryBlockPool::new(16);
        assert_eq!(pool.blocks_allocated(), 0);

        let block = pool.allocate();
        assert_eq!(block.capacity(), 16);
        assert_eq!(pool.blocks_allocated(), 1);
        assert_eq!(pool.free_blocks(), 0);

        pool.release(block);
        assert_eq!(pool.blocks_allocated(), 1);
        assert_eq!(pool.free_blocks(), 1);

        // recycled, not re-created
        let _block = pool.allocate();
        assert_eq!(pool.blocks_allocated(), 1);
        assert_eq!(pool.free_blocks(), 0);
    }

    #[test]
    fn test_release_keeps_cursors() {
        let mut pool = MemoryBlockPool::new(8);
        let mut block = pool.allocate();
        block.append(&[1, 2, 3]);
        pool.release(block);

        let block = pool.allocate();
        assert_eq!(block.data(), &[1, 2, 3]);
    }

    #[test]
    fn test_purge() {
        let mut pool = MemoryBlockPool::new(8);
        let blocks: Vec<_> = (0..4).map(|_| pool.allocate()).collect();
        assert_eq!(pool.blocks_allocated(), 4);

        for block in blocks {
            pool.release(block);
        }
        pool.purge_to(1);
        assert_eq!(pool.free_blocks(), 1);
        assert_eq!(pool.blocks_allocated(), 1);

        pool.purge();
        assert_eq!(pool.free_blocks(), 0);
        assert_eq!(pool.blocks_allocated(), 0);
    }

    #[test]
    fn test_purge_skips_blocks_in_use() {
        let mut pool = MemoryBlockPool::new(8);
        let held = pool.allocate();
        let freed = pool.allocate();
        pool.release(freed);

        pool.purge();
        assert_eq!(pool.blocks_allocated(), 1);
        drop(held);
    }

    #[test]
    fn test_release_foreign_block_is_dropped() {
        let mut pool = MemoryBlockPool::new(8);
        pool.release(MemoryBlock::new(4));
        assert_eq!(pool.free_blocks(), 0);
        assert_eq!(pool.blocks_allocated(), 0);
    }

    #[test]
    fn test_zero_block_size_is_clamped() {
        let pool = MemoryBlockPool::new(0);
        assert_eq!(pool.block_size(), 1);
    }

    #[test]
    fn test_from_config() {
        let config = TransportConfig::default().block_size(64);
        let pool = MemoryBlockPool::from_config(&config);
        assert_eq!(pool.block_size(), 64);
        assert_eq!(MemoryBlockPool::default().block_size(), DEFAULT_BLOCK_SIZE);
    }
}
