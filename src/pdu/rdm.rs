//! RDM command PDU: an opaque RDM message behind the RDM start code.

use bytes::Bytes;

use super::base::{pack_bytes, prepend_flags_and_length, prepend_vector};
use super::wire_format::{VectorSize, ALL_FLAGS};
use super::Pdu;
use crate::error::Result;
use crate::io::{IoStack, OutputStream};
use crate::vectors::VECTOR_RDMNET_DATA;

/// RDM command PDU. The vector is always the RDM start code `0xcc`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RdmPdu {
    command: Bytes,
}

impl RdmPdu {
    pub fn new(command: impl Into<Bytes>) -> Self {
        Self {
            command: command.into(),
        }
    }

    /// The encoded RDM command, without start code.
    #[inline]
    pub fn command(&self) -> &[u8] {
        &self.command
    }

    /// Prepend the start code and flags + length around the command on `stack`.
    pub fn prepend_pdu(stack: &mut IoStack) {
        prepend_vector(stack, VECTOR_RDMNET_DATA, VectorSize::OneByte);
        prepend_flags_and_length(stack, ALL_FLAGS, false);
    }
}

impl Pdu for RdmPdu {
    fn vector(&self) -> u32 {
        VECTOR_RDMNET_DATA
    }

    fn vector_size(&self) -> VectorSize {
        VectorSize::OneByte
    }

    fn header_size(&self) -> usize {
        0
    }

    fn data_size(&self) -> usize {
        self.command.len()
    }

    fn pack_header(&self, _buf: &mut [u8]) -> Result<usize> {
        Ok(0)
    }

    fn pack_data(&self, buf: &mut [u8]) -> Result<usize> {
        pack_bytes(&self.command, buf)
    }

    fn write_header(&self, _stream: &mut OutputStream<'_>) {}

    fn write_data(&self, stream: &mut OutputStream<'_>) {
        stream.write_bytes(&self.command);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_rdm_pdu() {
        let pdu = RdmPdu::default();
        assert_eq!(pdu.size(), 3);

        let mut buf = [0u8; 3];
        assert_eq!(pdu.pack(&mut buf).unwrap(), 3);
        assert_eq!(buf, [0x70, 0x03, 0xcc]);
    }

    #[test]
    fn test_prepend_empty_rdm_pdu() {
        let mut stack = IoStack::with_block_size(4);
        RdmPdu::prepend_pdu(&mut stack);
        assert_eq!(stack.to_vec(), vec![0x70, 0x03, 0xcc]);
    }

    #[test]
    fn test_rdm_pdu_with_command() {
        let command = vec![0x01, 0x18, 0x7a, 0x70];
        let pdu = RdmPdu::new(command.clone());
        assert_eq!(pdu.command(), &command[..]);

        let mut packed = vec![0u8; pdu.size()];
        pdu.pack(&mut packed).unwrap();

        let mut stack = IoStack::with_block_size(4);
        stack.write(&command);
        RdmPdu::prepend_pdu(&mut stack);
        assert_eq!(stack.to_vec(), packed);
        assert_eq!(packed, vec![0x70, 0x07, 0xcc, 0x01, 0x18, 0x7a, 0x70]);
    }
}
