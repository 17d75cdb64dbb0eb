//! E1.31 framing layer PDU.

use super::wire_format::VectorSize;
use super::{nested_size, pack_nested, write_nested, Pdu};
use crate::error::{AcnError, Result};
use crate::headers::E131Header;
use crate::io::OutputStream;

/// E1.31 framing PDU: 4 byte vector, [`E131Header`], usually a DMP PDU.
pub struct E131Pdu {
    vector: u32,
    header: E131Header,
    pdu: Option<Box<dyn Pdu>>,
}

impl E131Pdu {
    pub fn new(vector: u32, header: E131Header, pdu: Option<Box<dyn Pdu>>) -> Self {
        Self {
            vector,
            header,
            pdu,
        }
    }

    #[inline]
    pub fn header(&self) -> &E131Header {
        &self.header
    }
}

impl Pdu for E131Pdu {
    fn vector(&self) -> u32 {
        self.vector
    }

    fn vector_size(&self) -> VectorSize {
        VectorSize::FourBytes
    }

    fn header_size(&self) -> usize {
        self.header.size()
    }

    fn data_size(&self) -> usize {
        nested_size(&self.pdu)
    }

    fn pack_header(&self, buf: &mut [u8]) -> Result<usize> {
        let size = self.header.size();
        if buf.len() < size {
            return Err(AcnError::BufferTooSmall {
                required: size,
                available: buf.len(),
            });
        }
        Ok(self.header.encode_into(buf))
    }

    fn pack_data(&self, buf: &mut [u8]) -> Result<usize> {
        pack_nested(&self.pdu, buf)
    }

    fn write_header(&self, stream: &mut OutputStream<'_>) {
        stream.write_bytes(&self.header.encode());
    }

    fn write_data(&self, stream: &mut OutputStream<'_>) {
        write_nested(&self.pdu, stream);
    }
}
