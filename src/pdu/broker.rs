//! Broker protocol PDUs.

use bytes::Bytes;

use super::base::{pack_bytes, prepend_flags_and_length, prepend_vector};
use super::wire_format::{VectorSize, ALL_FLAGS};
use super::{nested_size, pack_nested, write_nested, Pdu};
use crate::error::Result;
use crate::headers::BrokerClientEntryHeader;
use crate::io::{IoStack, OutputStream};

/// Broker PDU: 2 byte vector, no header, nested PDU. Always uses the
/// 3 byte length form.
pub struct BrokerPdu {
    vector: u32,
    pdu: Option<Box<dyn Pdu>>,
}

impl BrokerPdu {
    pub fn new(vector: u32, pdu: Option<Box<dyn Pdu>>) -> Self {
        Self { vector, pdu }
    }

    /// Prepend vector and flags + length around the data on `stack`.
    pub fn prepend_pdu(stack: &mut IoStack, vector: u32) {
        prepend_vector(stack, vector, VectorSize::TwoBytes);
        prepend_flags_and_length(stack, ALL_FLAGS, true);
    }
}

impl Pdu for BrokerPdu {
    fn vector(&self) -> u32 {
        self.vector
    }

    fn vector_size(&self) -> VectorSize {
        VectorSize::TwoBytes
    }

    fn force_length_flag(&self) -> bool {
        true
    }

    fn header_size(&self) -> usize {
        0
    }

    fn data_size(&self) -> usize {
        nested_size(&self.pdu)
    }

    fn pack_header(&self, _buf: &mut [u8]) -> Result<usize> {
        Ok(0)
    }

    fn pack_data(&self, buf: &mut [u8]) -> Result<usize> {
        pack_nested(&self.pdu, buf)
    }

    fn write_header(&self, _stream: &mut OutputStream<'_>) {}

    fn write_data(&self, stream: &mut OutputStream<'_>) {
        write_nested(&self.pdu, stream);
    }
}

/// Broker client entry PDU: 4 byte vector (the client protocol), CID
/// header, opaque client entry data. Always uses the 3 byte length form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrokerClientEntryPdu {
    vector: u32,
    header: BrokerClientEntryHeader,
    data: Bytes,
}

impl BrokerClientEntryPdu {
    pub fn new(vector: u32, header: BrokerClientEntryHeader, data: impl Into<Bytes>) -> Self {
        Self {
            vector,
            header,
            data: data.into(),
        }
    }

    #[inline]
    pub fn header(&self) -> &BrokerClientEntryHeader {
        &self.header
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Prepend header, vector and flags + length around the data on `stack`.
    pub fn prepend_pdu(stack: &mut IoStack, vector: u32, header: &BrokerClientEntryHeader) {
        stack.write(&header.encode());
        prepend_vector(stack, vector, VectorSize::FourBytes);
        prepend_flags_and_length(stack, ALL_FLAGS, true);
    }
}

impl Pdu for BrokerClientEntryPdu {
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
        BrokerClientEntryHeader::SIZE
    }

    fn data_size(&self) -> usize {
        self.data.len()
    }

    fn pack_header(&self, buf: &mut [u8]) -> Result<usize> {
        pack_bytes(&self.header.encode(), buf)
    }

    fn pack_data(&self, buf: &mut [u8]) -> Result<usize> {
        pack_bytes(&self.data, buf)
    }

    fn write_header(&self, stream: &mut OutputStream<'_>) {
        stream.write_bytes(&self.header.encode());
    }

    fn write_data(&self, stream: &mut OutputStream<'_>) {
        stream.write_bytes(&self.data);
    }
}
