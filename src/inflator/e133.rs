//! E1.33 framing layer inflator.

use super::base::{decode_fixed_header, BaseInflator, Inflator};
use crate::error::Result;
use crate::headers::{E133Header, HeaderSet};
use crate::pdu::VectorSize;
use crate::vectors::VECTOR_ROOT_E133;

/// Inflates E1.33 framing PDUs: 4 byte vector, [`E133Header`].
pub struct E133Inflator {
    base: BaseInflator,
    last_header: Option<E133Header>,
}

impl E133Inflator {
    pub fn new() -> Self {
        Self {
            base: BaseInflator::new(VectorSize::FourBytes),
            last_header: None,
        }
    }
}

impl Default for E133Inflator {
    fn default() -> Self {
        Self::new()
    }
}

impl Inflator for E133Inflator {
    fn id(&self) -> u32 {
        VECTOR_ROOT_E133
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
            "E1.33",
            E133Header::SIZE,
            E133Header::decode,
        )?;
        headers.set_e133_header(header);
        Ok(used)
    }

    fn reset_header_field(&mut self) {
        self.last_header = None;
    }
}
