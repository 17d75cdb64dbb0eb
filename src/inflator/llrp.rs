//! LLRP layer inflator.

use super::base::{decode_fixed_header, BaseInflator, Inflator};
use crate::error::Result;
use crate::headers::{HeaderSet, LlrpHeader};
use crate::pdu::VectorSize;
use crate::vectors::VECTOR_ROOT_LLRP;

/// Inflates LLRP PDUs: 4 byte vector, [`LlrpHeader`].
pub struct LlrpInflator {
    base: BaseInflator,
    last_header: Option<LlrpHeader>,
}

impl LlrpInflator {
    pub fn new() -> Self {
        Self {
            base: BaseInflator::new(VectorSize::FourBytes),
            last_header: None,
        }
    }
}

impl Default for LlrpInflator {
    fn default() -> Self {
        Self::new()
    }
}

impl Inflator for LlrpInflator {
    fn id(&self) -> u32 {
        VECTOR_ROOT_LLRP
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
            "LLRP",
            LlrpHeader::SIZE,
            LlrpHeader::decode,
        )?;
        headers.set_llrp_header(header);
        Ok(used)
    }

    fn reset_header_field(&mut self) {
        self.last_header = None;
    }
}
