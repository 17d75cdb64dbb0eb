//! Broker protocol inflators.

use super::base::{decode_fixed_header, BaseInflator, Inflator, PduHandler};
use crate::error::{AcnError, Result};
use crate::headers::{BrokerClientEntryHeader, HeaderSet};
use crate::pdu::VectorSize;
use crate::vectors::VECTOR_ROOT_BROKER;

/// Inflates broker PDUs: 2 byte vector, no header.
///
/// Vectors with a registered child (client entry lists) are inflated
/// further; everything else goes to the handler.
pub struct BrokerInflator {
    base: BaseInflator,
    handler: Option<PduHandler>,
}

impl BrokerInflator {
    pub fn new() -> Self {
        Self {
            base: BaseInflator::new(VectorSize::TwoBytes),
            handler: None,
        }
    }

    pub fn set_handler(&mut self, handler: impl FnMut(u32, &HeaderSet, &[u8]) + 'static) {
        self.handler = Some(Box::new(handler));
    }
}

impl Default for BrokerInflator {
    fn default() -> Self {
        Self::new()
    }
}

impl Inflator for BrokerInflator {
    fn id(&self) -> u32 {
        VECTOR_ROOT_BROKER
    }

    fn base(&self) -> &BaseInflator {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseInflator {
        &mut self.base
    }

    fn decode_header(&mut self, _headers: &mut HeaderSet, _data: Option<&[u8]>) -> Result<usize> {
        Ok(0)
    }

    fn handle_pdu_data(&mut self, vector: u32, headers: &HeaderSet, data: &[u8]) -> Result<()> {
        match self.handler.as_mut() {
            Some(handler) => {
                handler(vector, headers, data);
                Ok(())
            }
            None => {
                tracing::warn!("no handler for broker vector {:#x}", vector);
                Err(AcnError::UnhandledVector(vector))
            }
        }
    }
}

/// Inflates broker client entry PDUs: 4 byte vector (the client protocol),
/// 16 byte CID header.
pub struct BrokerClientEntryInflator {
    base: BaseInflator,
    id: u32,
    last_header: Option<BrokerClientEntryHeader>,
    handler: Option<PduHandler>,
}

impl BrokerClientEntryInflator {
    /// Inflator registered under `id` in the broker layer.
    pub fn new(id: u32) -> Self {
        Self {
            base: BaseInflator::new(VectorSize::FourBytes),
            id,
            last_header: None,
            handler: None,
        }
    }

    pub fn set_handler(&mut self, handler: impl FnMut(u32, &HeaderSet, &[u8]) + 'static) {
        self.handler = Some(Box::new(handler));
    }
}

impl Default for BrokerClientEntryInflator {
    fn default() -> Self {
        Self::new(0)
    }
}

impl Inflator for BrokerClientEntryInflator {
    fn id(&self) -> u32 {
        self.id
    }

    fn base(&self) -> &BaseInflator {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseInflator {
        &mut self.base
    }

    fn decode_header(&mut self, headers: &mut HeaderSet, data: Option<&[u8]>) -> Result<usize> {
        let (header, used) = decode_fixed_header(
            data,
            &mut self.last_header,
            "broker client entry",
            BrokerClientEntryHeader::SIZE,
            BrokerClientEntryHeader::decode,
        )?;
        headers.set_broker_client_entry_header(header);
        Ok(used)
    }

    fn reset_header_field(&mut self) {
        self.last_header = None;
    }

    fn handle_pdu_data(&mut self, vector: u32, headers: &HeaderSet, data: &[u8]) -> Result<()> {
        if let Some(handler) = self.handler.as_mut() {
            handler(vector, headers, data);
        }
        Ok(())
    }
}
