//! LLRP (Low Level Recovery Protocol) header: destination CID + transaction number.

use crate::types::{Cid, CID_LENGTH};

/// LLRP layer header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LlrpHeader {
    pub destination_cid: Cid,
    pub transaction_number: u32,
}

impl LlrpHeader {
    /// Header size on the wire.
    pub const SIZE: usize = CID_LENGTH + 4;

    pub fn new(destination_cid: Cid, transaction_number: u32) -> Self {
        Self {
            destination_cid,
            transaction_number,
        }
    }

    /// Encode to 20 bytes (Big Endian).
    pub fn encode(&self) -> [u8; Self::SIZE] {
        let mut buf = [0u8; Self::SIZE];
        buf[..CID_LENGTH].copy_from_slice(self.destination_cid.as_bytes());
        buf[CID_LENGTH..].copy_from_slice(&self.transaction_number.to_be_bytes());
        buf
    }

    /// Decode from the start of `buf`. Returns `None` if buffer is too short.
    pub fn decode(buf: &[u8]) -> Option<Self> {
        if buf.len() < Self::SIZE {
            return None;
        }
        let t = &buf[CID_LENGTH..Self::SIZE];
        Some(Self {
            destination_cid: Cid::from_slice(buf)?,
            transaction_number: u32::from_be_bytes([t[0], t[1], t[2], t[3]]),
        })
    }
}
