//! RDM command inflator.

use super::base::{BaseInflator, Inflator, PduHandler};
use crate::error::{AcnError, Result};
use crate::headers::HeaderSet;
use crate::pdu::VectorSize;
use crate::vectors::{VECTOR_FRAMING_RDMNET, VECTOR_RDMNET_DATA};

/// Inflates RDM command PDUs: 1 byte vector (the RDM start code), no header.
///
/// The id is the vector this inflator sits under in its parent, which
/// differs between RDMnet framing, RPT and LLRP.
pub struct RdmInflator {
    base: BaseInflator,
    id: u32,
    handler: Option<PduHandler>,
}

impl RdmInflator {
    pub fn new() -> Self {
        Self::with_id(VECTOR_FRAMING_RDMNET)
    }

    pub fn with_id(id: u32) -> Self {
        Self {
            base: BaseInflator::new(VectorSize::OneByte),
            id,
            handler: None,
        }
    }

    pub fn set_handler(&mut self, handler: impl FnMut(u32, &HeaderSet, &[u8]) + 'static) {
        self.handler = Some(Box::new(handler));
    }
}

impl Default for RdmInflator {
    fn default() -> Self {
        Self::new()
    }
}

impl Inflator for RdmInflator {
    fn id(&self) -> u32 {
        self.id
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
        if vector != VECTOR_RDMNET_DATA {
            tracing::warn!("Not a RDM command, vector was {:#x}", vector);
            return Err(AcnError::UnhandledVector(vector));
        }
        if let Some(handler) = self.handler.as_mut() {
            handler(vector, headers, data);
        }
        Ok(())
    }
}
