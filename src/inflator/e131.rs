//! E1.31 framing layer inflator.

use super::base::{decode_fixed_header, BaseInflator, Inflator};
use crate::error::Result;
use crate::headers::{E131Header, HeaderSet};
use crate::pdu::VectorSize;
use crate::vectors::{VECTOR_ROOT_E131, VECTOR_ROOT_E131_REV2};

/// Inflates E1.31 framing PDUs, standard or revision 2 layout.
pub struct E131Inflator {
    base: BaseInflator,
    last_header: Option<E131Header>,
    rev2: bool,
}

impl E131Inflator {
    /// Inflator for the standard layout, registered under
    /// [`VECTOR_ROOT_E131`].
    pub fn new() -> Self {
        Self {
            base: BaseInflator::new(VectorSize::FourBytes),
            last_header: None,
            rev2: false,
        }
    }

    /// Inflator for the revision 2 layout, registered under
    /// [`VECTOR_ROOT_E131_REV2`].
    pub fn rev2() -> Self {
        Self {
            rev2: true,
            ..Self::new()
        }
    }
}

impl Default for E131Inflator {
    fn default() -> Self {
        Self::new()
    }
}

impl Inflator for E131Inflator {
    fn id(&self) -> u32 {
        if self.rev2 {
            VECTOR_ROOT_E131_REV2
        } else {
            VECTOR_ROOT_E131
        }
    }

    fn base(&self) -> &BaseInflator {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseInflator {
        &mut self.base
    }

    fn decode_header(&mut self, headers: &mut HeaderSet, data: Option<&[u8]>) -> Result<usize> {
        let (header, used) = if self.rev2 {
            decode_fixed_header(
                data,
                &mut self.last_header,
                "E1.31 rev2",
                E131Header::REV2_SIZE,
                E131Header::decode_rev2,
            )?
        } else {
            decode_fixed_header(
                data,
                &mut self.last_header,
                "E1.31",
                E131Header::SIZE,
                E131Header::decode,
            )?
        };
        headers.set_e131_header(header);
        Ok(used)
    }

    fn reset_header_field(&mut self) {
        self.last_header = None;
    }
}
