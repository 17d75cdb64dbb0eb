//! RPT layer inflator.

use super::base::{decode_fixed_header, BaseInflator, Inflator};
use crate::error::Result;
use crate::headers::{HeaderSet, RptHeader};
use crate::pdu::VectorSize;
use crate::vectors::VECTOR_ROOT_RPT;

/// Inflates RPT PDUs: 4 byte vector, [`RptHeader`].
pub struct RptInflator {
    base: BaseInflator,
    last_header: Option<RptHeader>,
}

impl RptInflator {
    pub fn new() -> Self {
        Self {
            base: BaseInflator::new(VectorSize::FourBytes),
            last_header: None,
        }
    }
}

impl Default for RptInflator {
    fn default() -> Self {
        Self::new()
    }
}

impl Inflator for RptInflator {
    fn id(&self) -> u32 {
        VECTOR_ROOT_RPT
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
            "RPT",
            RptHeader::SIZE,
            RptHeader::decode,
        )?;
        headers.set_rpt_header(header);
        Ok(used)
    }

    fn reset_header_field(&mut self) {
        self.last_header = None;
    }
}
