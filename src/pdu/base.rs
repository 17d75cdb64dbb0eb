//! The [`Pdu`] trait and the prepend helpers used to build packets on an
//! [`IoStack`].
//!
//! There are two ways to encode:
//!
//! - Build a tree of PDU values and call [`Pdu::pack`] into a buffer of at
//!   least [`Pdu::size`] bytes, or [`Pdu::write`] onto an appending stream.
//! - Build inside out on an [`IoStack`]: write the innermost data, then call
//!   each layer's `prepend_pdu` which adds header, vector and finally the
//!   flags + length computed from what is already on the stack.

use super::wire_format::{encode_flags_and_length, VectorSize, ALL_FLAGS, TWOB_LENGTH_LIMIT};
use crate::error::{AcnError, Result};
use crate::io::{IoStack, OutputStream};

/// A single PDU: vector, optional header and data.
///
/// Implementors supply the layer specific parts. Sizing, the flags + length
/// field and the vector are handled by the provided methods.
pub trait Pdu {
    fn vector(&self) -> u32;

    fn vector_size(&self) -> VectorSize;

    /// Always use the 3 byte length form.
    fn force_length_flag(&self) -> bool {
        false
    }

    fn header_size(&self) -> usize;

    fn data_size(&self) -> usize;

    /// Encode the header into `buf`. Returns the bytes written.
    fn pack_header(&self, buf: &mut [u8]) -> Result<usize>;

    /// Encode the data into `buf`. Returns the bytes written.
    fn pack_data(&self, buf: &mut [u8]) -> Result<usize>;

    fn write_header(&self, stream: &mut OutputStream<'_>);

    fn write_data(&self, stream: &mut OutputStream<'_>);

    /// Total encoded size, including the flags + length field.
    fn size(&self) -> usize {
        let mut length = self.vector_size().bytes() + self.header_size() + self.data_size();
        if length > TWOB_LENGTH_LIMIT - 2 || self.force_length_flag() {
            length += 1;
        }
        length + 2
    }

    /// Encode the whole PDU into the start of `buf`.
    ///
    /// Returns the number of bytes written, which is always [`Pdu::size`].
    /// Fails without writing if `buf` is smaller than that. If the header or
    /// data fail to encode, the contents of `buf` are unspecified.
    fn pack(&self, buf: &mut [u8]) -> Result<usize> {
        let size = self.size();
        if buf.len() < size {
            return Err(AcnError::BufferTooSmall {
                required: size,
                available: buf.len(),
            });
        }

        let long = long_form(size, self.force_length_flag());
        let (field, mut offset) = encode_flags_and_length(size, ALL_FLAGS, long);
        buf[..offset].copy_from_slice(&field[..offset]);
        offset += self.vector_size().encode_into(self.vector(), &mut buf[offset..]);
        offset += self.pack_header(&mut buf[offset..size])?;
        offset += self.pack_data(&mut buf[offset..size])?;
        Ok(offset)
    }

    /// Encode the whole PDU onto `stream`, front to back.
    ///
    /// The stream must append (an [`IoQueue`](crate::io::IoQueue)). To build
    /// on an [`IoStack`], use the layer's `prepend_pdu` instead.
    fn write(&self, stream: &mut OutputStream<'_>) {
        let size = self.size();
        let long = long_form(size, self.force_length_flag());
        let (field, n) = encode_flags_and_length(size, ALL_FLAGS, long);
        stream.write_bytes(&field[..n]);

        let mut vector = [0u8; 4];
        let n = self.vector_size().encode_into(self.vector(), &mut vector);
        stream.write_bytes(&vector[..n]);

        self.write_header(stream);
        self.write_data(stream);
    }
}

#[inline]
fn long_form(size: usize, force_length_flag: bool) -> bool {
    size > TWOB_LENGTH_LIMIT || force_length_flag
}

/// Prepend the flags + length field for everything currently on `stack`.
///
/// The length covers the stack contents plus the field itself.
pub fn prepend_flags_and_length(stack: &mut IoStack, flags: u8, force_length_flag: bool) {
    let size = stack.size();
    let (field, n) = if size + 2 <= TWOB_LENGTH_LIMIT && !force_length_flag {
        encode_flags_and_length(size + 2, flags, false)
    } else {
        encode_flags_and_length(size + 3, flags, true)
    };
    stack.write(&field[..n]);
}

/// Prepend `vector` (Big Endian, `size` wide) to `stack`.
pub fn prepend_vector(stack: &mut IoStack, vector: u32, size: VectorSize) {
    let mut buf = [0u8; 4];
    let n = size.encode_into(vector, &mut buf);
    stack.write(&buf[..n]);
}

/// Copy `src` into the start of `buf`, failing if it doesn't fit.
pub(crate) fn pack_bytes(src: &[u8], buf: &mut [u8]) -> Result<usize> {
    let available = buf.len();
    let dst = buf
        .get_mut(..src.len())
        .ok_or(AcnError::BufferTooSmall {
            required: src.len(),
            available,
        })?;
    dst.copy_from_slice(src);
    Ok(src.len())
}
