//! An ordered block of sibling PDUs.

use super::Pdu;
use crate::error::Result;
use crate::io::OutputStream;

/// Sibling PDUs encoded back to back, e.g. the data of a root PDU.
#[derive(Default)]
pub struct PduBlock {
    pdus: Vec<Box<dyn Pdu>>,
    size: usize,
}

impl PduBlock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a PDU to the end of the block.
    pub fn add_pdu(&mut self, pdu: Box<dyn Pdu>) {
        self.size += pdu.size();
        self.pdus.push(pdu);
    }

    /// Remove all PDUs.
    pub fn clear(&mut self) {
        self.pdus.clear();
        self.size = 0;
    }

    /// Encoded size of all PDUs.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of PDUs in the block.
    #[inline]
    pub fn len(&self) -> usize {
        self.pdus.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pdus.is_empty()
    }

    /// Pack every PDU into `buf` in order. Returns the bytes written.
    pub fn pack(&self, buf: &mut [u8]) -> Result<usize> {
        let mut offset = 0;
        for pdu in &self.pdus {
            offset += pdu.pack(&mut buf[offset..])?;
        }
        Ok(offset)
    }

    /// Write every PDU onto `stream` in order.
    pub fn write(&self, stream: &mut OutputStream<'_>) {
        for pdu in &self.pdus {
            pdu.write(stream);
        }
    }
}

impl std::fmt::Debug for PduBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PduBlock")
            .field("pdus", &self.pdus.len())
            .field("size", &self.size)
            .finish()
    }
}
