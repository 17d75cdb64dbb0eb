//! DMP (Device Management Protocol) PDU.
//!
//! The data is a run of addresses, optionally followed by property values,
//! laid out as described by the [`DmpHeader`]. This type carries it as an
//! opaque byte string.

use bytes::Bytes;

use super::base::pack_bytes;
use super::wire_format::VectorSize;
use super::Pdu;
use crate::error::Result;
use crate::headers::DmpHeader;
use crate::io::OutputStream;
use crate::vectors::{DMP_GET_PROPERTY_VECTOR, DMP_SET_PROPERTY_VECTOR};

/// DMP PDU: 1 byte vector, 1 byte [`DmpHeader`], address/value data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DmpPdu {
    vector: u32,
    header: DmpHeader,
    data: Bytes,
}

impl DmpPdu {
    pub fn new(vector: u32, header: DmpHeader, data: impl Into<Bytes>) -> Self {
        Self {
            vector,
            header,
            data: data.into(),
        }
    }

    /// Get property request for the encoded `addresses`.
    pub fn get_property(header: DmpHeader, addresses: impl Into<Bytes>) -> Self {
        Self::new(DMP_GET_PROPERTY_VECTOR, header, addresses)
    }

    /// Set property request for the encoded address/value pairs.
    pub fn set_property(header: DmpHeader, data: impl Into<Bytes>) -> Self {
        Self::new(DMP_SET_PROPERTY_VECTOR, header, data)
    }

    #[inline]
    pub fn header(&self) -> DmpHeader {
        self.header
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }
}

impl Pdu for DmpPdu {
    fn vector(&self) -> u32 {
        self.vector
    }

    fn vector_size(&self) -> VectorSize {
        VectorSize::OneByte
    }

    fn header_size(&self) -> usize {
        DmpHeader::SIZE
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
        stream.write_u8(self.header.header());
    }

    fn write_data(&self, stream: &mut OutputStream<'_>) {
        stream.write_bytes(&self.data);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::headers::{DmpAddressSize, DmpAddressType};

    #[test]
    fn test_get_property() {
        let header = DmpHeader::new(
            false,
            false,
            DmpAddressType::NonRange,
            DmpAddressSize::OneByte,
        );
        let pdu = DmpPdu::get_property(header, vec![1, 2]);
        assert_eq!(pdu.vector(), DMP_GET_PROPERTY_VECTOR);
        assert_eq!(pdu.size(), 6);

        let mut buf = [0u8; 6];
        pdu.pack(&mut buf).unwrap();
        assert_eq!(buf, [0x70, 0x06, 0x01, 0x00, 0x01, 0x02]);
    }

    #[test]
    fn test_set_property() {
        let header = DmpHeader::from_byte(0xa1);
        let pdu = DmpPdu::set_property(header, vec![0, 1, 0, 1, 0, 1, 42]);
        assert_eq!(pdu.header(), header);
        assert_eq!(pdu.data(), &[0, 1, 0, 1, 0, 1, 42]);

        let mut buf = vec![0u8; pdu.size()];
        pdu.pack(&mut buf).unwrap();
        assert_eq!(&buf[..4], &[0x70, 0x0b, 0x02, 0xa1]);
    }
}
