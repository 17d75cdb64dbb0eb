//! Broker client entry header: the client's CID.

use crate::types::{Cid, CID_LENGTH};

/// Broker client entry header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct BrokerClientEntryHeader {
    pub cid: Cid,
}

impl BrokerClientEntryHeader {
    /// Header size on the wire.
    pub const SIZE: usize = CID_LENGTH;

    pub fn new(cid: Cid) -> Self {
        Self { cid }
    }

    pub fn encode(&self) -> [u8; Self::SIZE] {
        *self.cid.as_bytes()
    }

    pub fn decode(buf: &[u8]) -> Option<Self> {
        Cid::from_slice(buf).map(Self::new)
    }
}
