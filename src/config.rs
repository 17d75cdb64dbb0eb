//! Transport and buffer configuration.
//!
//! # Example
//!
//! ```
//! use acn_pdu::config::TransportConfig;
//!
//! let config = TransportConfig::from_json_str(r#"{ "block_size": 256 }"#).unwrap();
//! assert_eq!(config.block_size, 256);
//! assert_eq!(config.read_buffer_size, 64 * 1024);
//! ```

use serde::Deserialize;

use crate::error::Result;

/// Default size of a memory block, in bytes.
pub const DEFAULT_BLOCK_SIZE: usize = 1024;

/// Default size of the socket read buffer.
pub const DEFAULT_READ_BUFFER_SIZE: usize = 64 * 1024;

/// Default upper bound for a single PDU block on a stream transport (1 MB).
pub const DEFAULT_MAX_PDU_BLOCK_SIZE: u32 = 1024 * 1024;

/// Configuration for block pools and incoming transports.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Capacity of each pooled memory block.
    pub block_size: usize,
    /// Size of the buffer used for each socket read.
    pub read_buffer_size: usize,
    /// Largest PDU block length accepted from a stream preamble.
    pub max_pdu_block_size: u32,
}

impl TransportConfig {
    /// Create a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from JSON. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the memory block size.
    pub fn block_size(mut self, size: usize) -> Self {
        self.block_size = size;
        self
    }

    /// Set the read buffer size.
    pub fn read_buffer_size(mut self, size: usize) -> Self {
        self.read_buffer_size = size;
        self
    }

    /// Set the maximum PDU block size.
    pub fn max_pdu_block_size(mut self, size: u32) -> Self {
        self.max_pdu_block_size = size;
        self
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
            max_pdu_block_size: DEFAULT_MAX_PDU_BLOCK_SIZE,
        }
    }
}
