//! Root layer PDU: the outermost PDU of every ACN packet.

use super::base::{pack_bytes, prepend_flags_and_length, prepend_vector};
use super::wire_format::{VectorSize, ALL_FLAGS};
use super::{Pdu, PduBlock};
use crate::error::Result;
use crate::headers::RootHeader;
use crate::io::{IoStack, OutputStream};
use crate::types::Cid;

/// Root layer PDU: 4 byte vector, CID header, a block of child PDUs.
#[derive(Debug)]
pub struct RootPdu {
    vector: u32,
    cid: Cid,
    block: Option<PduBlock>,
    force_length_flag: bool,
}

impl RootPdu {
    pub fn new(vector: u32, cid: Cid) -> Self {
        Self {
            vector,
            cid,
            block: None,
            force_length_flag: false,
        }
    }

    /// Set the child PDUs.
    pub fn with_block(mut self, block: PduBlock) -> Self {
        self.block = Some(block);
        self
    }

    /// Always encode the 3 byte length form.
    pub fn force_length(mut self, force: bool) -> Self {
        self.force_length_flag = force;
        self
    }

    #[inline]
    pub fn cid(&self) -> Cid {
        self.cid
    }

    pub fn set_cid(&mut self, cid: Cid) {
        self.cid = cid;
    }

    pub fn set_block(&mut self, block: PduBlock) {
        self.block = Some(block);
    }

    /// Prepend CID, vector and flags + length around the data on `stack`.
    pub fn prepend_pdu(stack: &mut IoStack, vector: u32, cid: &Cid, force_length_flag: bool) {
        stack.write(cid.as_bytes());
        prepend_vector(stack, vector, VectorSize::FourBytes);
        prepend_flags_and_length(stack, ALL_FLAGS, force_length_flag);
    }
}

impl Pdu for RootPdu {
    fn vector(&self) -> u32 {
        self.vector
    }

    fn vector_size(&self) -> VectorSize {
        VectorSize::FourBytes
    }

    fn force_length_flag(&self) -> bool {
        self.force_length_flag
    }

    fn header_size(&self) -> usize {
        RootHeader::SIZE
    }

    fn data_size(&self) -> usize {
        self.block.as_ref().map_or(0, PduBlock::size)
    }

    fn pack_header(&self, buf: &mut [u8]) -> Result<usize> {
        pack_bytes(self.cid.as_bytes(), buf)
    }

    fn pack_data(&self, buf: &mut [u8]) -> Result<usize> {
        match &self.block {
            Some(block) => block.pack(buf),
            None => Ok(0),
        }
    }

    fn write_header(&self, stream: &mut OutputStream<'_>) {
        stream.write_bytes(self.cid.as_bytes());
    }

    fn write_data(&self, stream: &mut OutputStream<'_>) {
        if let Some(block) = &self.block {
            block.write(stream);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::IoQueue;
    use crate::pdu::RdmPdu;
    use crate::vectors::VECTOR_ROOT_E131;

    #[test]
    fn test_simple_root_pdu() {
        let cid = Cid::generate();
        let pdu = RootPdu::new(VECTOR_ROOT_E131, cid);
        assert_eq!(pdu.size(), 22);

        let mut buf = [0u8; 22];
        assert_eq!(pdu.pack(&mut buf).unwrap(), 22);
        assert_eq!(&buf[..6], &[0x70, 0x16, 0, 0, 0, 4]);
        assert_eq!(&buf[6..], cid.as_bytes());
    }

    #[test]
    fn test_root_pdu_with_block() {
        let cid = Cid::generate();
        let mut block = PduBlock::new();
        block.add_pdu(Box::new(RdmPdu::new(vec![1, 2])));
        block.add_pdu(Box::new(RdmPdu::new(vec![3])));
        assert_eq!(block.size(), 9);
        assert_eq!(block.len(), 2);

        let pdu = RootPdu::new(7, cid).with_block(block);
        assert_eq!(pdu.size(), 31);

        let mut buf = vec![0u8; pdu.size()];
        pdu.pack(&mut buf).unwrap();
        assert_eq!(
            &buf[22..],
            &[0x70, 0x05, 0xcc, 1, 2, 0x70, 0x04, 0xcc, 3]
        );

        let mut queue = IoQueue::with_block_size(8);
        pdu.write(&mut OutputStream::new(&mut queue));
        assert_eq!(queue.to_vec(), buf);
    }

    #[test]
    fn test_prepend_root_pdu() {
        let cid = Cid::generate();
        let mut stack = IoStack::with_block_size(16);
        stack.write(&[0xaa, 0xbb]);
        RootPdu::prepend_pdu(&mut stack, VECTOR_ROOT_E131, &cid, false);

        let expected = {
            let mut v = vec![0x70, 0x18, 0, 0, 0, 4];
            v.extend_from_slice(cid.as_bytes());
            v.extend_from_slice(&[0xaa, 0xbb]);
            v
        };
        assert_eq!(stack.to_vec(), expected);

        let mut stack = IoStack::with_block_size(16);
        RootPdu::prepend_pdu(&mut stack, VECTOR_ROOT_E131, &cid, true);
        assert_eq!(&stack.to_vec()[..3], &[0xf0, 0x00, 0x17]);
    }
}
