//! Incoming stream transport for accumulating partial reads.
//!
//! Uses `bytes::BytesMut` for the accumulated data and a state machine for
//! fragmented PDU blocks:
//! - `WaitingForPreamble`: Need at least 16 bytes
//! - `WaitingForPduBlock`: Preamble parsed, need N more bytes
//!
//! # Example
//!
//! ```ignore
//! let root: InflatorHandle = Rc::new(RefCell::new(RootInflator::new()));
//! let mut transport = IncomingStreamTransport::new(root, peer_addr);
//!
//! // Data arrives in chunks from the socket
//! let blocks = transport.push(&chunk)?;
//! ```

use std::net::SocketAddr;

use bytes::{Buf, BytesMut};

use super::preamble::{decode_tcp_preamble, TCP_PREAMBLE_SIZE};
use crate::config::{TransportConfig, DEFAULT_MAX_PDU_BLOCK_SIZE, DEFAULT_READ_BUFFER_SIZE};
use crate::error::{AcnError, Result};
use crate::headers::{HeaderSet, TransportHeader, TransportType};
use crate::inflator::InflatorHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Waiting for the 16 byte preamble.
    WaitingForPreamble,
    /// Preamble parsed, waiting for the PDU block.
    WaitingForPduBlock { remaining: usize },
}

/// Frames PDU blocks on a byte stream and inflates each one.
pub struct IncomingStreamTransport {
    inflator: InflatorHandle,
    source: SocketAddr,
    buffer: BytesMut,
    state: State,
    max_pdu_block_size: u32,
}

impl IncomingStreamTransport {
    /// Create a transport with default settings.
    pub fn new(inflator: InflatorHandle, source: SocketAddr) -> Self {
        Self {
            inflator,
            source,
            buffer: BytesMut::with_capacity(DEFAULT_READ_BUFFER_SIZE),
            state: State::WaitingForPreamble,
            max_pdu_block_size: DEFAULT_MAX_PDU_BLOCK_SIZE,
        }
    }

    /// Create a transport with the capacity and block limit from `config`.
    pub fn with_config(
        inflator: InflatorHandle,
        source: SocketAddr,
        config: &TransportConfig,
    ) -> Self {
        Self {
            inflator,
            source,
            buffer: BytesMut::with_capacity(config.read_buffer_size),
            state: State::WaitingForPreamble,
            max_pdu_block_size: config.max_pdu_block_size,
        }
    }

    #[inline]
    pub fn source(&self) -> SocketAddr {
        self.source
    }

    /// Push data into the buffer and inflate all complete PDU blocks.
    ///
    /// Partial data is buffered for the next push. Returns the number of
    /// blocks inflated.
    ///
    /// # Errors
    ///
    /// Returns error if the packet identifier is wrong or a block exceeds
    /// `max_pdu_block_size`. The buffer is cleared and the connection
    /// should be closed.
    pub fn push(&mut self, data: &[u8]) -> Result<usize> {
        self.buffer.extend_from_slice(data);

        let mut blocks = 0;
        loop {
            match self.try_inflate_one() {
                Ok(true) => blocks += 1,
                Ok(false) => return Ok(blocks),
                Err(e) => {
                    self.clear();
                    return Err(e);
                }
            }
        }
    }

    /// Try to inflate a single PDU block.
    ///
    /// Empty blocks are stepped over without counting. Returns `Ok(false)`
    /// if more data is needed.
    fn try_inflate_one(&mut self) -> Result<bool> {
        loop {
            match self.state {
                State::WaitingForPreamble => {
                    if self.buffer.len() < TCP_PREAMBLE_SIZE {
                        return Ok(false);
                    }

                    let Some(block_size) = decode_tcp_preamble(&self.buffer) else {
                        tracing::warn!("bad ACN packet identifier from {}", self.source);
                        return Err(AcnError::Protocol("bad ACN packet identifier".to_string()));
                    };

                    if block_size > self.max_pdu_block_size {
                        return Err(AcnError::Protocol(format!(
                            "PDU block size {} exceeds maximum {}",
                            block_size, self.max_pdu_block_size
                        )));
                    }

                    self.buffer.advance(TCP_PREAMBLE_SIZE);

                    if block_size == 0 {
                        tracing::debug!("empty PDU block from {}", self.source);
                        continue;
                    }

                    self.state = State::WaitingForPduBlock {
                        remaining: block_size as usize,
                    };
                }

                State::WaitingForPduBlock { remaining } => {
                    if self.buffer.len() < remaining {
                        return Ok(false);
                    }

                    let block = self.buffer.split_to(remaining).freeze();
                    self.state = State::WaitingForPreamble;
                    self.inflate_block(&block)?;
                    return Ok(true);
                }
            }
        }
    }

    fn inflate_block(&self, block: &[u8]) -> Result<()> {
        let mut headers = HeaderSet::new();
        headers.set_transport_header(TransportHeader::new(self.source, TransportType::Tcp));

        let mut inflator = self
            .inflator
            .try_borrow_mut()
            .map_err(|_| AcnError::Protocol("root inflator is already in use".to_string()))?;
        let used = inflator.inflate_pdu_block(&mut headers, block);
        if used != block.len() {
            tracing::warn!(
                "inflated {} of {} bytes in PDU block from {}",
                used,
                block.len(),
                self.source
            );
        }
        Ok(())
    }

    /// Get the number of buffered bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Clear the buffer and reset state.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.state = State::WaitingForPreamble;
    }

    #[cfg(test)]
    fn state_name(&self) -> &'static str {
        match self.state {
            State::WaitingForPreamble => "WaitingForPreamble",
            State::WaitingForPduBlock { .. } => "WaitingForPduBlock",
        }
    }
}
