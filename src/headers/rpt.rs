//! RPT (RDM Packet Transport) header.
//!
//! ```text
//! ┌─────────┬──────────┬─────────┬──────────┬───────────┬──────────┐
//! │ Src UID │ Src endpt│ Dst UID │ Dst endpt│ Sequence  │ Reserved │
//! │ 6 bytes │ uint16 BE│ 6 bytes │ uint16 BE│ uint32 BE │ 1 byte   │
//! └─────────┴──────────┴─────────┴──────────┴───────────┴──────────┘
//! ```

use crate::types::{Uid, UID_LENGTH};

/// RPT layer header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RptHeader {
    pub source_uid: Uid,
    pub source_endpoint: u16,
    pub destination_uid: Uid,
    pub destination_endpoint: u16,
    pub sequence: u32,
}

impl RptHeader {
    /// Header size on the wire.
    pub const SIZE: usize = 21;

    pub fn new(
        source_uid: Uid,
        source_endpoint: u16,
        destination_uid: Uid,
        destination_endpoint: u16,
        sequence: u32,
    ) -> Self {
        Self {
            source_uid,
            source_endpoint,
            destination_uid,
            destination_endpoint,
            sequence,
        }
    }

    /// Encode to 21 bytes (Big Endian). The reserved byte is zero.
    pub fn encode(&self) -> [u8; Self::SIZE] {
        let mut buf = [0u8; Self::SIZE];
        buf[0..6].copy_from_slice(&self.source_uid.encode());
        buf[6..8].copy_from_slice(&self.source_endpoint.to_be_bytes());
        buf[8..14].copy_from_slice(&self.destination_uid.encode());
        buf[14..16].copy_from_slice(&self.destination_endpoint.to_be_bytes());
        buf[16..20].copy_from_slice(&self.sequence.to_be_bytes());
        buf
    }

    /// Decode from the start of `buf`. Returns `None` if buffer is too short.
    pub fn decode(buf: &[u8]) -> Option<Self> {
        if buf.len() < Self::SIZE {
            return None;
        }
        Some(Self {
            source_uid: Uid::decode(&buf[0..UID_LENGTH])?,
            source_endpoint: u16::from_be_bytes([buf[6], buf[7]]),
            destination_uid: Uid::decode(&buf[8..8 + UID_LENGTH])?,
            destination_endpoint: u16::from_be_bytes([buf[14], buf[15]]),
            sequence: u32::from_be_bytes([buf[16], buf[17], buf[18], buf[19]]),
        })
    }
}
