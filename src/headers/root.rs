//! Root layer and transport headers.

use std::net::{Ipv4Addr, SocketAddr, SocketAddrV4};

use crate::types::{Cid, CID_LENGTH};

/// Root layer header: the sender's CID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RootHeader {
    pub cid: Cid,
}

impl RootHeader {
    /// Header size on the wire.
    pub const SIZE: usize = CID_LENGTH;

    pub fn new(cid: Cid) -> Self {
        Self { cid }
    }

    /// Encode to 16 bytes.
    pub fn encode(&self) -> [u8; Self::SIZE] {
        *self.cid.as_bytes()
    }

    /// Decode from the start of `buf`. Returns `None` if buffer is too short.
    pub fn decode(buf: &[u8]) -> Option<Self> {
        Cid::from_slice(buf).map(Self::new)
    }
}

/// How a PDU block reached us.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TransportType {
    Tcp,
    Udp,
    #[default]
    Undefined,
}

/// Origin of a PDU block, set by the incoming transport before inflation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransportHeader {
    pub source: SocketAddr,
    pub transport: TransportType,
}

impl TransportHeader {
    pub fn new(source: SocketAddr, transport: TransportType) -> Self {
        Self { source, transport }
    }
}

impl Default for TransportHeader {
    fn default() -> Self {
        Self {
            source: SocketAddr::V4(SocketAddrV4::new(Ipv4Addr::UNSPECIFIED, 0)),
            transport: TransportType::Undefined,
        }
    }
}
