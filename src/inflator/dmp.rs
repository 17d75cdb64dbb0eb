//! DMP layer inflator.

use super::base::{decode_fixed_header, BaseInflator, Inflator, PduHandler};
use crate::error::Result;
use crate::headers::{DmpHeader, HeaderSet};
use crate::pdu::VectorSize;
use crate::vectors::VECTOR_E131_DATA;

/// Inflates DMP PDUs: 1 byte vector, 1 byte [`DmpHeader`].
///
/// DMP is a leaf layer: the address/value data is passed to the handler
/// together with the full [`HeaderSet`].
pub struct DmpInflator {
    base: BaseInflator,
    id: u32,
    last_header: Option<DmpHeader>,
    handler: Option<PduHandler>,
}

impl DmpInflator {
    /// Inflator registered under the E1.31 data vector.
    pub fn new() -> Self {
        Self::with_id(VECTOR_E131_DATA)
    }

    /// Inflator registered under `id` in its parent layer.
    pub fn with_id(id: u32) -> Self {
        Self {
            base: BaseInflator::new(VectorSize::OneByte),
            id,
            last_header: None,
            handler: None,
        }
    }

    pub fn set_handler(&mut self, handler: impl FnMut(u32, &HeaderSet, &[u8]) + 'static) {
        self.handler = Some(Box::new(handler));
    }
}

impl Default for DmpInflator {
    fn default() -> Self {
        Self::new()
    }
}

impl Inflator for DmpInflator {
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
            "DMP",
            DmpHeader::SIZE,
            DmpHeader::decode,
        )?;
        headers.set_dmp_header(header);
        Ok(used)
    }

    fn reset_header_field(&mut self) {
        self.last_header = None;
    }

    fn handle_pdu_data(&mut self, vector: u32, headers: &HeaderSet, data: &[u8]) -> Result<()> {
        match self.handler.as_mut() {
            Some(handler) => {
                handler(vector, headers, data);
                Ok(())
            }
            None => {
                tracing::debug!("no DMP handler, dropping {} bytes", data.len());
                Ok(())
            }
        }
    }
}
