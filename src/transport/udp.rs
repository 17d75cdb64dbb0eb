//! Incoming UDP transport.

use std::net::SocketAddr;

use super::preamble::{UDP_PREAMBLE, UDP_PREAMBLE_SIZE};
use crate::error::{AcnError, Result};
use crate::headers::{HeaderSet, TransportHeader, TransportType};
use crate::inflator::InflatorHandle;

/// Checks the preamble of each datagram and inflates the PDU block behind it.
pub struct IncomingUdpTransport {
    inflator: InflatorHandle,
}

impl IncomingUdpTransport {
    pub fn new(inflator: InflatorHandle) -> Self {
        Self { inflator }
    }

    /// Inflate one datagram received from `source`.
    ///
    /// Returns the number of PDU block bytes inflated.
    pub fn handle_datagram(&mut self, source: SocketAddr, data: &[u8]) -> Result<usize> {
        if data.len() < UDP_PREAMBLE_SIZE {
            tracing::info!("Packet from {} too small, was {} bytes", source, data.len());
            return Err(AcnError::Protocol(format!(
                "datagram of {} bytes is smaller than the preamble",
                data.len()
            )));
        }

        let (preamble, block) = data.split_at(UDP_PREAMBLE_SIZE);
        if preamble != UDP_PREAMBLE {
            tracing::info!("ACN header is bad from {}", source);
            return Err(AcnError::Protocol("bad UDP preamble".to_string()));
        }

        let mut headers = HeaderSet::new();
        headers.set_transport_header(TransportHeader::new(source, TransportType::Udp));

        let mut inflator = self
            .inflator
            .try_borrow_mut()
            .map_err(|_| AcnError::Protocol("root inflator is already in use".to_string()))?;
        let used = inflator.inflate_pdu_block(&mut headers, block);
        if used != block.len() {
            tracing::warn!(
                "inflated {} of {} bytes in datagram from {}",
                used,
                block.len(),
                source
            );
        }
        Ok(used)
    }
}
