//! E1.33 framing layer header.
//!
//! ```text
//! ┌─────────────┬───────────┬──────────┬──────────┐
//! │ Source name │ Sequence  │ Endpoint │ Reserved │
//! │ 64 bytes    │ uint32 BE │ uint16 BE│ 1 byte   │
//! └─────────────┴───────────┴──────────┴──────────┘
//! ```

use super::{decode_source_name, encode_source_name};

/// E1.33 framing layer header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct E133Header {
    pub source: String,
    pub sequence: u32,
    pub endpoint: u16,
}

impl E133Header {
    /// Header size on the wire.
    pub const SIZE: usize = 71;

    const SOURCE_NAME_LEN: usize = 64;

    pub fn new(source: impl Into<String>, sequence: u32, endpoint: u16) -> Self {
        Self {
            source: source.into(),
            sequence,
            endpoint,
        }
    }

    /// Encode to 71 bytes (Big Endian).
    pub fn encode(&self) -> [u8; Self::SIZE] {
        let name = Self::SOURCE_NAME_LEN;
        let mut buf = [0u8; Self::SIZE];
        encode_source_name(&self.source, &mut buf[..name]);
        buf[name..name + 4].copy_from_slice(&self.sequence.to_be_bytes());
        buf[name + 4..name + 6].copy_from_slice(&self.endpoint.to_be_bytes());
        buf
    }

    /// Decode from the start of `buf`. Returns `None` if buffer is too short.
    pub fn decode(buf: &[u8]) -> Option<Self> {
        if buf.len() < Self::SIZE {
            return None;
        }
        let name = Self::SOURCE_NAME_LEN;
        Some(Self {
            source: decode_source_name(&buf[..name]),
            sequence: u32::from_be_bytes([buf[name], buf[name + 1], buf[name + 2], buf[name + 3]]),
            endpoint: u16::from_be_bytes([buf[name + 4], buf[name + 5]]),
        })
    }
}
