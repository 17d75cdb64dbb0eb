//! Byte stack that grows at the front, for building packets inside out.
//!
//! Encoding a nested PDU starts with the innermost payload and prepends
//! each enclosing header in turn, so no layer needs to know the size of
//! the layers around it. The finished packet reads front to back like a
//! queue and can be handed to an [`IoQueue`] without copying.
//!
//! # Example
//!
//! ```
//! use acn_pdu::io::IoStack;
//!
//! let mut stack = IoStack::with_block_size(4);
//! stack.write(&[4, 5]);
//! stack.write(&[1, 2, 3]);
//!
//! let mut out = [0u8; 5];
//! assert_eq!(stack.read(&mut out), 5);
//! assert_eq!(out, [1, 2, 3, 4, 5]);
//! ```

use std::fmt;
use std::io::IoSlice;
use std::rc::Rc;

use super::block_chain::BlockChain;
use super::{IoQueue, MemoryBlockPool, OutputBuffer, SharedBlockPool};
use crate::config::DEFAULT_BLOCK_SIZE;

/// Last-in first-out byte stack.
#[derive(Debug)]
pub struct IoStack {
    chain: BlockChain,
}

impl IoStack {
    /// Create a stack with its own pool of default-sized blocks.
    pub fn new() -> Self {
        Self::with_block_size(DEFAULT_BLOCK_SIZE)
    }

    /// Create a stack with its own pool of `block_size` byte blocks.
    pub fn with_block_size(block_size: usize) -> Self {
        Self::with_pool(MemoryBlockPool::shared(block_size))
    }

    /// Create a stack drawing blocks from a shared pool.
    pub fn with_pool(pool: SharedBlockPool) -> Self {
        Self {
            chain: BlockChain::new(pool),
        }
    }

    /// The pool this stack allocates from.
    #[inline]
    pub fn pool(&self) -> &SharedBlockPool {
        self.chain.pool()
    }

    /// Total number of bytes on the stack.
    pub fn size(&self) -> usize {
        self.chain.size()
    }

    /// Check if the stack holds no data.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    /// Place `data` in front of the current contents.
    ///
    /// `data` keeps its own byte order.
    pub fn write(&mut self, data: &[u8]) {
        let mut remaining = data.len();
        if let Some(head) = self.chain.front_mut() {
            remaining -= head.prepend(data);
        }
        while remaining > 0 {
            let mut block = self.chain.allocate();
            block.seek_back();
            remaining -= block.prepend(&data[..remaining]);
            self.chain.push_front(block);
        }
    }

    /// Copy up to `out.len()` bytes from the front without consuming them.
    pub fn peek(&self, out: &mut [u8]) -> usize {
        self.chain.peek(out)
    }

    /// Copy and remove up to `out.len()` bytes from the front.
    ///
    /// The most recently written data comes out first.
    pub fn read(&mut self, out: &mut [u8]) -> usize {
        self.chain.read(out)
    }

    /// Move up to `n` bytes from the front onto the end of `out`.
    pub fn read_to_vec(&mut self, out: &mut Vec<u8>, n: usize) -> usize {
        self.chain.read_to_vec(out, n)
    }

    /// Remove up to `n` bytes from the front.
    pub fn pop(&mut self, n: usize) -> usize {
        self.chain.pop(n)
    }

    /// Copy the whole stack, front to back, into a contiguous buffer.
    pub fn to_vec(&self) -> Vec<u8> {
        self.chain.to_vec()
    }

    /// One slice per block, front to back, for a vectored write.
    pub fn as_io_slices(&self) -> Vec<IoSlice<'_>> {
        self.chain.as_io_slices()
    }

    /// Move the whole contents onto the end of `queue`, leaving the stack
    /// empty.
    ///
    /// Blocks are spliced across when both use the same pool. Otherwise the
    /// bytes are copied and the blocks go back to this stack's pool.
    pub fn move_to_io_queue(&mut self, queue: &mut IoQueue) {
        if Rc::ptr_eq(self.chain.pool(), queue.pool()) {
            while let Some(block) = self.chain.pop_block() {
                queue.append_block(block);
            }
        } else {
            while let Some(block) = self.chain.pop_block() {
                queue.write(block.data());
                self.chain.release(block);
            }
        }
    }

    /// Release every block back to the pool.
    pub fn clear(&mut self) {
        self.chain.clear();
    }

    /// Destroy the pool's free blocks.
    pub fn purge(&mut self) {
        self.chain.purge();
    }

    /// Write the stack contents as hex + ASCII, 8 bytes per line.
    pub fn dump<W: fmt::Write>(&self, out: &mut W) -> fmt::Result {
        self.chain.dump(out)
    }
}

impl Default for IoStack {
    fn default() -> Self {
        Self::new()
    }
}

impl OutputBuffer for IoStack {
    fn write(&mut self, data: &[u8]) {
        IoStack::write(self, data);
    }

    fn size(&self) -> usize {
        IoStack::size(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_write() {
        let mut stack = IoStack::with_block_size(4);
        assert_eq!(stack.size(), 0);
        assert!(stack.is_empty());

        stack.write(&[1, 2]);
        assert_eq!(stack.size(), 2);
        stack.write(&[3, 4, 5, 6, 7]);
        assert_eq!(stack.size(), 7);
        assert_eq!(stack.to_vec(), vec![3, 4, 5, 6, 7, 1, 2]);
        assert_eq!(stack.pool().borrow().blocks_allocated(), 2);
    }

    #[test]
    fn test_large_write_spans_blocks() {
        let mut stack = IoStack::with_block_size(4);
        let data: Vec<u8> = (0..11).collect();
        stack.write(&data);
        assert_eq!(stack.to_vec(), data);
        assert_eq!(stack.as_io_slices().len(), 3);
    }

    #[test]
    fn test_read_is_lifo_by_write() {
        let mut stack = IoStack::with_block_size(4);
        stack.write(&[0xaa]);
        stack.write(&[0xbb, 0xcc]);

        let mut out = [0u8; 2];
        assert_eq!(stack.read(&mut out), 2);
        assert_eq!(out, [0xbb, 0xcc]);
        assert_eq!(stack.size(), 1);

        let mut rest = Vec::new();
        assert_eq!(stack.read_to_vec(&mut rest, 10), 1);
        assert_eq!(rest, vec![0xaa]);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_writes_read_back_newest_first() {
        let mut stack = IoStack::with_block_size(4);
        stack.write(&[0, 1]);
        stack.write(&[2]);
        stack.write(&[3, 4]);
        assert_eq!(stack.size(), 5);

        let mut out = [0u8; 5];
        assert_eq!(stack.read(&mut out), 5);
        assert_eq!(out, [3, 4, 2, 0, 1]);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_sequential_stacks_reuse_pool() {
        let pool = MemoryBlockPool::shared(4);
        let data: Vec<u8> = (0..10).collect();

        let mut stack = IoStack::with_pool(pool.clone());
        stack.write(&data);
        let first = pool.borrow().blocks_allocated();
        assert_eq!(first, 3);
        drop(stack);
        assert_eq!(pool.borrow().free_blocks(), first);

        let mut stack = IoStack::with_pool(pool.clone());
        stack.write(&data);
        assert_eq!(stack.to_vec(), data);
        assert_eq!(pool.borrow().blocks_allocated(), first);
        assert_eq!(pool.borrow().free_blocks(), 0);

        stack.clear();
        stack.purge();
        assert_eq!(pool.borrow().blocks_allocated(), 0);
    }

    #[test]
    fn test_pop_and_peek() {
        let mut stack = IoStack::with_block_size(4);
        stack.write(&[1, 2, 3, 4, 5, 6]);
        assert_eq!(stack.pop(2), 2);

        let mut out = [0u8; 8];
        assert_eq!(stack.peek(&mut out), 4);
        assert_eq!(&out[..4], &[3, 4, 5, 6]);
        assert_eq!(stack.pop(100), 4);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_recycled_block_is_seeked_back() {
        let mut stack = IoStack::with_block_size(4);
        stack.write(&[1, 2, 3, 4]);
        stack.pop(4);
        assert_eq!(stack.pool().borrow().free_blocks(), 1);

        stack.write(&[5, 6]);
        assert_eq!(stack.to_vec(), vec![5, 6]);
        assert_eq!(stack.pool().borrow().blocks_allocated(), 1);
    }

    #[test]
    fn test_move_to_queue_same_pool() {
        let pool = MemoryBlockPool::shared(4);
        let mut stack = IoStack::with_pool(pool.clone());
        let mut queue = IoQueue::with_pool(pool.clone());

        queue.write(&[0xff]);
        stack.write(&[3, 4, 5]);
        stack.write(&[1, 2]);
        let allocated = pool.borrow().blocks_allocated();

        stack.move_to_io_queue(&mut queue);
        assert!(stack.is_empty());
        assert_eq!(queue.to_vec(), vec![0xff, 1, 2, 3, 4, 5]);
        assert_eq!(pool.borrow().blocks_allocated(), allocated);

        // the spliced tail block has no tailroom, so this lands in a new block
        queue.write(&[6]);
        assert_eq!(queue.to_vec(), vec![0xff, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_move_to_queue_other_pool() {
        let mut stack = IoStack::with_block_size(4);
        let mut queue = IoQueue::with_block_size(8);

        stack.write(&[1, 2, 3, 4, 5, 6]);
        stack.move_to_io_queue(&mut queue);

        assert!(stack.is_empty());
        assert_eq!(queue.to_vec(), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(stack.pool().borrow().free_blocks(), 2);
        assert_eq!(queue.pool().borrow().blocks_allocated(), 1);
    }

    #[test]
    fn test_dump() {
        let mut stack = IoStack::with_block_size(4);
        stack.write(b"AB");
        let mut out = String::new();
        stack.dump(&mut out).unwrap();
        assert_eq!(out, "41 42                    AB\n");
    }
}
