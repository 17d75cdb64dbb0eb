//! LLRP (Low Level Recovery Protocol) PDU.

use super::base::{pack_bytes, prepend_flags_and_length, prepend_vector};
use super::wire_format::{VectorSize, ALL_FLAGS};
use super::{nested_size, pack_nested, write_nested, Pdu};
use crate::error::Result;
use crate::headers::LlrpHeader;
use crate::io::{IoStack, OutputStream};

/// LLRP PDU: 4 byte vector, [`LlrpHeader`], nested PDU. Always uses the
/// 3 byte length form.
pub struct LlrpPdu {
    vector: u32,
    header: LlrpHeader,
    pdu: Option<Box<dyn Pdu>>,
}

impl LlrpPdu {
    pub fn new(vector: u32, header: LlrpHeader, pdu: Option<Box<dyn Pdu>>) -> Self {
        Self {
            vector,
            header,
            pdu,
        }
    }

    #[inline]
    pub fn header(&self) -> &LlrpHeader {
        &self.header
    }

    /// Prepend header, vector and flags + length around the data on `stack`.
    pub fn prepend_pdu(stack: &mut IoStack, vector: u32, header: &LlrpHeader) {
        stack.write(&header.encode());
        prepend_vector(stack, vector, VectorSize::FourBytes);
        prepend_flags_and_length(stack, ALL_FLAGS, true);
    }
}

impl Pdu for LlrpPdu {
    fn vector(&self) -> u32 {
        self.vector
    }

    fn vector_size(&self) -> VectorSize {
        VectorSize::FourBytes
    }

    fn force_length_flag(&self) -> bool {
        true
    }

    fn header_size(&self) -> usize {
        LlrpHeader::SIZE
    }

    fn data_size(&self) -> usize {
        nested_size(&self.pdu)
    }

    fn pack_header(&self, buf: &mut [u8]) -> Result<usize> {
        pack_bytes(&self.header.encode(), buf)
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
