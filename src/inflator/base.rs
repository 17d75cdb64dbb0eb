//! The [`Inflator`] trait and the shared [`BaseInflator`] state.
//!
//! An inflator decodes one protocol layer. For each PDU in a block it reads
//! the flags + length field, the vector and the layer's header, then hands
//! the data either to the child inflator registered for that vector or to
//! its own leaf handler.
//!
//! # Inheritance
//!
//! A PDU may omit its vector or header (flag bit clear) to reuse the values
//! of the previous sibling. The last seen values are kept per inflator and
//! cleared at the start of every PDU block.
//!
//! # Error policy
//!
//! - A bad length field stops the block: there is no way to find the next
//!   PDU.
//! - A bad vector, header or payload only fails that PDU; the block moves on
//!   using the declared length.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use crate::error::{AcnError, Result};
use crate::headers::HeaderSet;
use crate::pdu::wire_format::{HFLAG_MASK, LENGTH_MASK, LFLAG_MASK, VFLAG_MASK};
use crate::pdu::VectorSize;

/// Shared handle to an inflator registered as a child.
pub type InflatorHandle = Rc<RefCell<dyn Inflator>>;

/// Leaf payload callback: `(vector, headers, data)`.
pub type PduHandler = Box<dyn FnMut(u32, &HeaderSet, &[u8])>;

/// Child registry and vector inheritance state.
pub struct BaseInflator {
    vector_size: VectorSize,
    last_vector: Option<u32>,
    children: HashMap<u32, Weak<RefCell<dyn Inflator>>>,
}

impl BaseInflator {
    pub fn new(vector_size: VectorSize) -> Self {
        Self {
            vector_size,
            last_vector: None,
            children: HashMap::new(),
        }
    }

    #[inline]
    pub fn vector_size(&self) -> VectorSize {
        self.vector_size
    }

    /// Register `inflator` as the child for vector `inflator.id()`.
    ///
    /// Only a weak handle is kept; the caller owns the inflator. Returns
    /// `false` if a live child is already registered for that vector.
    pub fn add_inflator<I: Inflator + 'static>(&mut self, inflator: &Rc<RefCell<I>>) -> bool {
        let id = inflator.borrow().id();
        if self.inflator(id).is_some() {
            return false;
        }
        let handle: InflatorHandle = inflator.clone();
        self.children.insert(id, Rc::downgrade(&handle));
        true
    }

    /// The live child registered for `vector`, if any.
    pub fn inflator(&self, vector: u32) -> Option<InflatorHandle> {
        let child = self.children.get(&vector)?;
        let handle = child.upgrade();
        if handle.is_none() {
            tracing::debug!("child inflator for vector {:#x} has been dropped", vector);
        }
        handle
    }

    /// Decode a flags + length field.
    ///
    /// Returns `(pdu_length, bytes_used)`. Fails if `data` is too short for
    /// the field or the declared length is smaller than the field itself.
    pub fn decode_length(data: &[u8]) -> Result<(usize, usize)> {
        let Some(&first) = data.first() else {
            return Err(AcnError::MalformedLength(
                "PDU length field is empty".to_string(),
            ));
        };

        let (length, bytes_used) = if first & LFLAG_MASK != 0 {
            if data.len() < 3 {
                return Err(AcnError::MalformedLength(format!(
                    "expected 3 byte length field, got {} bytes",
                    data.len()
                )));
            }
            let length = ((first & LENGTH_MASK) as usize) << 16
                | (data[1] as usize) << 8
                | data[2] as usize;
            (length, 3)
        } else {
            if data.len() < 2 {
                return Err(AcnError::MalformedLength(format!(
                    "expected 2 byte length field, got {} bytes",
                    data.len()
                )));
            }
            let length = ((first & LENGTH_MASK) as usize) << 8 | data[1] as usize;
            (length, 2)
        };

        if length < bytes_used {
            return Err(AcnError::MalformedLength(format!(
                "PDU length {} is less than the {} byte length field",
                length, bytes_used
            )));
        }
        Ok((length, bytes_used))
    }

    /// Decode the vector field, or inherit the last one if `VFLAG` is clear.
    ///
    /// Returns `(vector, bytes_used)`.
    pub fn decode_vector(&mut self, flags: u8, data: &[u8]) -> Result<(u32, usize)> {
        if flags & VFLAG_MASK != 0 {
            let required = self.vector_size.bytes();
            match self.vector_size.decode(data) {
                Some(vector) => {
                    self.last_vector = Some(vector);
                    Ok((vector, required))
                }
                None => Err(AcnError::TruncatedVector {
                    required,
                    available: data.len(),
                }),
            }
        } else {
            match self.last_vector {
                Some(vector) => Ok((vector, 0)),
                None => {
                    tracing::warn!("Vector not set and no field to inherit from");
                    Err(AcnError::MissingVector)
                }
            }
        }
    }

    /// Forget the inherited vector.
    pub fn reset_vector(&mut self) {
        self.last_vector = None;
    }
}

impl std::fmt::Debug for BaseInflator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut children: Vec<_> = self.children.keys().copied().collect();
        children.sort_unstable();
        f.debug_struct("BaseInflator")
            .field("vector_size", &self.vector_size)
            .field("last_vector", &self.last_vector)
            .field("children", &children)
            .finish()
    }
}

/// Decoder for one protocol layer.
///
/// Implementors provide the id, access to their [`BaseInflator`] and the
/// header decoding. The block and PDU loops are provided.
pub trait Inflator {
    /// The vector this inflator handles in its parent layer.
    fn id(&self) -> u32;

    fn base(&self) -> &BaseInflator;

    fn base_mut(&mut self) -> &mut BaseInflator;

    /// Decode this layer's header into `headers`.
    ///
    /// `data` is `None` when the header flag is clear, in which case the
    /// last header should be reused. Returns the bytes consumed.
    fn decode_header(&mut self, headers: &mut HeaderSet, data: Option<&[u8]>) -> Result<usize>;

    /// Forget the inherited header.
    fn reset_header_field(&mut self) {}

    /// Called after the header is decoded. Return `false` to skip the data
    /// of this PDU without failing.
    fn post_header(&mut self, _vector: u32, _headers: &HeaderSet) -> bool {
        true
    }

    /// Handle the data of a PDU whose vector has no registered child.
    fn handle_pdu_data(&mut self, vector: u32, _headers: &HeaderSet, _data: &[u8]) -> Result<()> {
        tracing::warn!(
            "inflator {:#x} has no handler for vector {:#x}",
            self.id(),
            vector
        );
        Err(AcnError::UnhandledVector(vector))
    }

    /// Clear the inherited vector and header.
    fn reset_pdu_fields(&mut self) {
        self.base_mut().reset_vector();
        self.reset_header_field();
    }

    /// Register a child inflator. See [`BaseInflator::add_inflator`].
    fn add_inflator<I: Inflator + 'static>(&mut self, inflator: &Rc<RefCell<I>>) -> bool
    where
        Self: Sized,
    {
        self.base_mut().add_inflator(inflator)
    }

    /// Inflate a block of sibling PDUs.
    ///
    /// Returns the number of bytes consumed, never more than `data.len()`.
    /// A PDU whose declared length runs past the end of `data` is skipped.
    fn inflate_pdu_block(&mut self, headers: &mut HeaderSet, data: &[u8]) -> usize {
        self.reset_pdu_fields();
        if data.is_empty() {
            return 0;
        }

        let mut offset = 0;
        while offset < data.len() {
            let (pdu_length, bytes_used) = match BaseInflator::decode_length(&data[offset..]) {
                Ok(decoded) => decoded,
                Err(e) => {
                    tracing::warn!("{}", e);
                    return offset;
                }
            };

            if offset + pdu_length <= data.len() {
                let flags = data[offset];
                let pdu = &data[offset + bytes_used..offset + pdu_length];
                if let Err(e) = self.inflate_pdu(headers, flags, pdu) {
                    tracing::debug!("failed to inflate PDU at offset {}: {}", offset, e);
                }
            }
            offset += pdu_length;
        }
        offset.min(data.len())
    }

    /// Inflate a single PDU. `data` starts after the flags + length field.
    fn inflate_pdu(&mut self, headers: &mut HeaderSet, flags: u8, data: &[u8]) -> Result<()> {
        let (vector, vector_bytes) = self.base_mut().decode_vector(flags, data)?;
        let data = &data[vector_bytes..];

        let header = if flags & HFLAG_MASK != 0 {
            Some(data)
        } else {
            None
        };
        let header_bytes = self.decode_header(headers, header)?;
        let data = data.get(header_bytes..).unwrap_or_default();

        if !self.post_header(vector, headers) {
            return Ok(());
        }

        let child = self.base().inflator(vector);
        match child {
            Some(child) => {
                let Ok(mut child) = child.try_borrow_mut() else {
                    tracing::warn!("inflator for vector {:#x} is already in use", vector);
                    return Err(AcnError::Protocol(format!(
                        "inflator for vector {:#x} re-entered",
                        vector
                    )));
                };
                if child.inflate_pdu_block(headers, data) == 0 {
                    return Err(AcnError::Protocol(format!(
                        "inflator for vector {:#x} consumed no data",
                        vector
                    )));
                }
                Ok(())
            }
            None => self.handle_pdu_data(vector, headers, data),
        }
    }
}

/// Decode a fixed size header, or reuse `last` when `data` is `None`.
///
/// Returns the header and the bytes consumed.
pub(crate) fn decode_fixed_header<H: Clone>(
    data: Option<&[u8]>,
    last: &mut Option<H>,
    layer: &'static str,
    size: usize,
    decode: impl FnOnce(&[u8]) -> Option<H>,
) -> Result<(H, usize)> {
    match data {
        Some(data) => match decode(data) {
            Some(header) => {
                *last = Some(header.clone());
                Ok((header, size))
            }
            None => Err(AcnError::TruncatedHeader {
                layer,
                required: size,
                available: data.len(),
            }),
        },
        None => match last {
            Some(header) => Ok((header.clone(), 0)),
            None => {
                tracing::warn!("{} header not set and no field to inherit from", layer);
                Err(AcnError::MissingHeader(layer))
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PDU_DATA: &[u8] = b"this is some test data\0";

    /// Two byte vectors, no header, counts the leaf PDUs it handles.
    struct TestInflator {
        base: BaseInflator,
        id: u32,
        blocks_handled: usize,
    }

    /// Records the vector of every leaf PDU.
    struct VectorLog {
        base: BaseInflator,
        vectors: Vec<u32>,
    }

    impl Inflator for VectorLog {
        fn id(&self) -> u32 {
            0
        }
        fn base(&self) -> &BaseInflator {
            &self.base
        }
        fn base_mut(&mut self) -> &mut BaseInflator {
            &mut self.base
        }
        fn decode_header(&mut self, _: &mut HeaderSet, _: Option<&[u8]>) -> Result<usize> {
            Ok(0)
        }
        fn handle_pdu_data(&mut self, vector: u32, _: &HeaderSet, _: &[u8]) -> Result<()> {
            self.vectors.push(vector);
            Ok(())
        }
    }

    impl TestInflator {
        fn new(id: u32, vector_size: VectorSize) -> Self {
            Self {
                base: BaseInflator::new(vector_size),
                id,
                blocks_handled: 0,
            }
        }
    }

    impl Inflator for TestInflator {
        fn id(&self) -> u32 {
            self.id
        }
        fn base(&self) -> &BaseInflator {
            &self.base
        }
        fn base_mut(&mut self) -> &mut BaseInflator {
            &mut self.base
        }
        fn decode_header(&mut self, _: &mut HeaderSet, _: Option<&[u8]>) -> Result<usize> {
            Ok(0)
        }
        fn handle_pdu_data(&mut self, vector: u32, _: &HeaderSet, data: &[u8]) -> Result<()> {
            assert_eq!(vector, 289);
            assert_eq!(data, PDU_DATA);
            self.blocks_handled += 1;
            Ok(())
        }
    }

    fn single_pdu() -> Vec<u8> {
        let size = 2 + 2 + PDU_DATA.len();
        let mut data = vec![VFLAG_MASK, size as u8, 0x01, 0x21];
        data.extend_from_slice(PDU_DATA);
        data
    }

    #[test]
    fn test_child_inflators() {
        let mut inflator = TestInflator::new(0, VectorSize::TwoBytes);
        let inflator1 = Rc::new(RefCell::new(TestInflator::new(1, VectorSize::TwoBytes)));
        let inflator2 = Rc::new(RefCell::new(TestInflator::new(2, VectorSize::TwoBytes)));

        assert!(inflator.add_inflator(&inflator1));
        assert!(inflator.add_inflator(&inflator2));

        assert_eq!(inflator.base().inflator(1).unwrap().borrow().id(), 1);
        assert_eq!(inflator.base().inflator(2).unwrap().borrow().id(), 2);
        assert!(inflator.base().inflator(3).is_none());

        // once set, a child can't be replaced
        assert!(!inflator.add_inflator(&inflator1));
        assert!(!inflator.add_inflator(&inflator2));
    }

    #[test]
    fn test_dropped_child_is_ignored() {
        let mut inflator = TestInflator::new(0, VectorSize::TwoBytes);
        let child = Rc::new(RefCell::new(TestInflator::new(7, VectorSize::TwoBytes)));
        assert!(inflator.add_inflator(&child));
        drop(child);
        assert!(inflator.base().inflator(7).is_none());

        let replacement = Rc::new(RefCell::new(TestInflator::new(7, VectorSize::TwoBytes)));
        assert!(inflator.add_inflator(&replacement));
    }

    #[test]
    fn test_decode_length() {
        let mut data = [0u8; 4];

        // zero length always fails
        for i in 0..=data.len() {
            assert!(BaseInflator::decode_length(&data[..i]).is_err());
        }

        // length 1 is shorter than the field itself
        data[1] = 1;
        for i in 0..=data.len() {
            assert!(BaseInflator::decode_length(&data[..i]).is_err());
        }

        data[1] = 2;
        for i in 0..=1 {
            assert!(BaseInflator::decode_length(&data[..i]).is_err());
        }
        for i in 2..=data.len() {
            assert_eq!(BaseInflator::decode_length(&data[..i]).unwrap(), (2, 2));
        }

        // both bytes used
        data[0] = 1;
        assert_eq!(BaseInflator::decode_length(&data).unwrap(), (258, 2));

        // extended length
        data[0] = LFLAG_MASK;
        data[1] = 0;
        for i in 0..=data.len() {
            assert!(BaseInflator::decode_length(&data[..i]).is_err());
        }

        data[2] = 1;
        for i in 0..=data.len() {
            assert!(BaseInflator::decode_length(&data[..i]).is_err());
        }

        data[2] = 3;
        for i in 0..=2 {
            assert!(BaseInflator::decode_length(&data[..i]).is_err());
        }
        for i in 3..=data.len() {
            assert_eq!(BaseInflator::decode_length(&data[..i]).unwrap(), (3, 3));
        }

        // all 3 bytes used
        data[0] = LFLAG_MASK + 1;
        data[1] = 0x01;
        assert_eq!(BaseInflator::decode_length(&data).unwrap(), (65795, 3));
    }

    #[test]
    fn test_decode_vector() {
        let mut data = [1u8, 2, 3, 4, 5, 6];

        let mut base = BaseInflator::new(VectorSize::OneByte);
        assert!(matches!(
            base.decode_vector(VFLAG_MASK, &data[..0]),
            Err(AcnError::TruncatedVector { .. })
        ));

        data[0] = 42;
        for i in 1..data.len() {
            assert_eq!(base.decode_vector(VFLAG_MASK, &data[..i]).unwrap(), (42, 1));
        }

        // reuse the vector
        for i in 0..data.len() {
            assert_eq!(base.decode_vector(0, &data[..i]).unwrap(), (42, 0));
        }

        // resetting stops the reuse
        base.reset_vector();
        for i in 0..data.len() {
            assert!(matches!(
                base.decode_vector(0, &data[..i]),
                Err(AcnError::MissingVector)
            ));
        }

        let mut base = BaseInflator::new(VectorSize::TwoBytes);
        for i in 0..2 {
            assert!(base.decode_vector(VFLAG_MASK, &data[..i]).is_err());
        }
        data[0] = 0x80;
        data[1] = 0x21;
        for i in 2..data.len() {
            assert_eq!(base.decode_vector(VFLAG_MASK, &data[..i]).unwrap(), (32801, 2));
        }
        for i in 0..data.len() {
            assert_eq!(base.decode_vector(0, &data[..i]).unwrap(), (32801, 0));
        }
        base.reset_vector();
        assert!(base.decode_vector(0, &data).is_err());

        let mut base = BaseInflator::new(VectorSize::FourBytes);
        for i in 0..4 {
            assert!(base.decode_vector(VFLAG_MASK, &data[..i]).is_err());
        }
        data[..4].copy_from_slice(&[0x01, 0x21, 0x32, 0x45]);
        for i in 4..data.len() {
            assert_eq!(
                base.decode_vector(VFLAG_MASK, &data[..i]).unwrap(),
                (18_952_773, 4)
            );
        }
    }

    #[test]
    fn test_inflate_pdu() {
        let mut inflator = TestInflator::new(0, VectorSize::TwoBytes);
        let mut headers = HeaderSet::new();
        let mut data = vec![0x01, 0x21];
        data.extend_from_slice(PDU_DATA);

        inflator.inflate_pdu(&mut headers, VFLAG_MASK, &data).unwrap();
        assert_eq!(inflator.blocks_handled, 1);
    }

    #[test]
    fn test_inflate_pdu_block() {
        let mut inflator = TestInflator::new(0, VectorSize::TwoBytes);
        let mut headers = HeaderSet::new();

        let data = single_pdu();
        assert_eq!(inflator.inflate_pdu_block(&mut headers, &data), data.len());
        assert_eq!(inflator.blocks_handled, 1);

        // two sibling PDUs
        let mut block = single_pdu();
        block.extend_from_slice(&single_pdu());
        assert_eq!(inflator.inflate_pdu_block(&mut headers, &block), block.len());
        assert_eq!(inflator.blocks_handled, 3);

        // the second PDU inherits the vector
        let mut block = single_pdu();
        let mut inherited = single_pdu();
        inherited.drain(2..4);
        inherited[0] = 0;
        inherited[1] = (2 + PDU_DATA.len()) as u8;
        block.extend_from_slice(&inherited);
        assert_eq!(inflator.inflate_pdu_block(&mut headers, &block), block.len());
        assert_eq!(inflator.blocks_handled, 5);
    }

    #[test]
    fn test_inflate_nested_block() {
        let mut inflator = TestInflator::new(0, VectorSize::TwoBytes);
        let child = Rc::new(RefCell::new(TestInflator::new(289, VectorSize::TwoBytes)));
        assert!(inflator.add_inflator(&child));

        let inner = single_pdu();
        let size = 2 + 2 + inner.len();
        let mut data = vec![VFLAG_MASK, size as u8, 0x01, 0x21];
        data.extend_from_slice(&inner);

        let mut headers = HeaderSet::new();
        assert_eq!(inflator.inflate_pdu_block(&mut headers, &data), size);
        assert_eq!(inflator.blocks_handled, 0);
        assert_eq!(child.borrow().blocks_handled, 1);
    }

    #[test]
    fn test_inflate_empty_block() {
        let mut inflator = TestInflator::new(0, VectorSize::TwoBytes);
        let mut headers = HeaderSet::new();
        assert_eq!(inflator.inflate_pdu_block(&mut headers, &[]), 0);
    }

    #[test]
    fn test_first_pdu_without_vector_fails() {
        let mut inflator = TestInflator::new(0, VectorSize::TwoBytes);
        let mut headers = HeaderSet::new();
        let mut data = vec![0x00, (2 + PDU_DATA.len()) as u8];
        data.extend_from_slice(PDU_DATA);

        assert!(matches!(
            inflator.inflate_pdu(&mut headers, 0, &data[2..]),
            Err(AcnError::MissingVector)
        ));
        // the block still steps over it
        assert_eq!(inflator.inflate_pdu_block(&mut headers, &data), data.len());
        assert_eq!(inflator.blocks_handled, 0);
    }

    #[test]
    fn test_truncated_vector_keeps_inherited_vector() {
        let mut base = BaseInflator::new(VectorSize::TwoBytes);
        assert_eq!(base.decode_vector(VFLAG_MASK, &[0, 5]).unwrap(), (5, 2));
        assert!(base.decode_vector(VFLAG_MASK, &[0]).is_err());
        assert_eq!(base.decode_vector(0, &[]).unwrap(), (5, 0));

        let mut inflator = VectorLog {
            base: BaseInflator::new(VectorSize::TwoBytes),
            vectors: Vec::new(),
        };
        let mut headers = HeaderSet::new();
        let data = [
            0x40, 0x04, 0x00, 0x05, // vector 5
            0x40, 0x03, 0x00, // vector cut short
            0x00, 0x03, 0xaa, // inherits vector 5
        ];
        assert_eq!(inflator.inflate_pdu_block(&mut headers, &data), data.len());
        assert_eq!(inflator.vectors, vec![5, 5]);
    }

    #[test]
    fn test_truncated_header_keeps_inherited_header() {
        let mut last = None;
        let decode = |d: &[u8]| d.get(..2).map(|h| h.to_vec());

        let full: &[u8] = &[1, 2];
        let (header, used) = decode_fixed_header(Some(full), &mut last, "test", 2, decode).unwrap();
        assert_eq!((header, used), (vec![1, 2], 2));

        let short: &[u8] = &[3];
        assert!(matches!(
            decode_fixed_header(Some(short), &mut last, "test", 2, decode),
            Err(AcnError::TruncatedHeader {
                required: 2,
                available: 1,
                ..
            })
        ));

        let (header, used) = decode_fixed_header(None, &mut last, "test", 2, decode).unwrap();
        assert_eq!((header, used), (vec![1, 2], 0));
    }

    #[test]
    fn test_bad_length_stops_block() {
        let mut inflator = TestInflator::new(0, VectorSize::TwoBytes);
        let mut headers = HeaderSet::new();
        let mut data = single_pdu();
        data.extend_from_slice(&[0x40, 0x01, 0xff]);
        let first = data.len() - 3;
        assert_eq!(inflator.inflate_pdu_block(&mut headers, &data), first);
        assert_eq!(inflator.blocks_handled, 1);
    }

    #[test]
    fn test_overrunning_pdu_is_skipped() {
        let mut inflator = TestInflator::new(0, VectorSize::TwoBytes);
        let mut headers = HeaderSet::new();
        let mut data = single_pdu();
        data[1] += 10;
        assert_eq!(inflator.inflate_pdu_block(&mut headers, &data), data.len());
        assert_eq!(inflator.blocks_handled, 0);
    }

    #[test]
    fn test_unhandled_vector() {
        struct Plain(BaseInflator);
        impl Inflator for Plain {
            fn id(&self) -> u32 {
                0
            }
            fn base(&self) -> &BaseInflator {
                &self.0
            }
            fn base_mut(&mut self) -> &mut BaseInflator {
                &mut self.0
            }
            fn decode_header(&mut self, _: &mut HeaderSet, _: Option<&[u8]>) -> Result<usize> {
                Ok(0)
            }
        }

        let mut inflator = Plain(BaseInflator::new(VectorSize::OneByte));
        let mut headers = HeaderSet::new();
        assert!(matches!(
            inflator.inflate_pdu(&mut headers, VFLAG_MASK, &[9, 1, 2]),
            Err(AcnError::UnhandledVector(9))
        ));
    }
}
