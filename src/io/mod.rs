//! Block-pool backed byte containers.
//!
//! - [`MemoryBlock`] - fixed-capacity chunk with front and back cursors
//! - [`MemoryBlockPool`] - free list of equally sized blocks
//! - [`IoQueue`] - FIFO over blocks, exports vectored-IO slices
//! - [`IoStack`] - prepend-only builder that moves into a queue
//! - [`OutputStream`] - big-endian writes over either container
//!
//! Nothing in this module is thread safe. Containers sharing a pool must
//! live on the same thread.

mod block_chain;
mod block_pool;
mod dump;
mod io_queue;
mod io_stack;
mod memory_block;
mod output_stream;

pub use block_pool::{MemoryBlockPool, SharedBlockPool};
pub use dump::{format_data, DEFAULT_BYTES_PER_LINE};
pub use io_queue::IoQueue;
pub use io_stack::IoStack;
pub use memory_block::MemoryBlock;
pub use output_stream::{OutputBuffer, OutputStream};
