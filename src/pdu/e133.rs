//! E1.33 framing layer PDU.

use super::base::{pack_bytes, prepend_flags_and_length, prepend_vector};
use super::wire_format::{VectorSize, ALL_FLAGS};
use super::{nested_size, pack_nested, write_nested, Pdu};
use crate::error::Result;
use crate::headers::E133Header;
use crate::io::{IoStack, OutputStream};

/// E1.33 framing PDU: 4 byte vector, [`E133Header`], nested PDU.
pub struct E133Pdu {
    vector: u32,
    header: E133Header,
    pdu: Option<Box<dyn Pdu>>,
}

impl E133Pdu {
    pub fn new(vector: u32, header: E133Header, pdu: Option<Box<dyn Pdu>>) -> Self {
        Self {
            vector,
            header,
            pdu,
        }
    }

    #[inline]
    pub fn header(&self) -> &E133Header {
        &self.header
    }

    /// Prepend header, vector and flags + length around the data on `stack`.
    pub fn prepend_pdu(stack: &mut IoStack, vector: u32, header: &E133Header) {
        stack.write(&header.encode());
        prepend_vector(stack, vector, VectorSize::FourBytes);
        prepend_flags_and_length(stack, ALL_FLAGS, false);
    }
}

impl Pdu for E133Pdu {
    fn vector(&self) -> u32 {
        self.vector
    }

    fn vector_size(&self) -> VectorSize {
        VectorSize::FourBytes
    }

    fn header_size(&self) -> usize {
        E133Header::SIZE
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
