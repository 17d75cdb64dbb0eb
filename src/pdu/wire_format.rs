//! PDU flags and length field.
//!
//! Every PDU starts with a flags + length field of 2 or 3 bytes:
//! ```text
//!   byte 0                  byte 1      [byte 2]
//! ┌───┬───┬───┬───┬───────┬───────────┬───────────┐
//! │ L │ V │ H │ D │ len   │ len       │ len       │
//! │   │   │   │   │ 4 bits│ 8 bits    │ 8 bits    │
//! └───┴───┴───┴───┴───────┴───────────┴───────────┘
//! ```
//!
//! - `L`: length is 20 bits spread over 3 bytes, otherwise 12 bits over 2
//! - `V`: vector field present, otherwise inherited
//! - `H`: header field present, otherwise inherited
//! - `D`: data field present
//!
//! The length counts the whole PDU, including the flags + length field.
//! All multi-byte integers are Big Endian.

/// Length field uses the 3 byte form.
pub const LFLAG_MASK: u8 = 0x80;
/// Vector field present.
pub const VFLAG_MASK: u8 = 0x40;
/// Header field present.
pub const HFLAG_MASK: u8 = 0x20;
/// Data field present.
pub const DFLAG_MASK: u8 = 0x10;
/// Length bits in byte 0.
pub const LENGTH_MASK: u8 = 0x0f;

/// Largest PDU length that fits in the 2 byte form.
pub const TWOB_LENGTH_LIMIT: usize = 0x0fff;

/// Flags set when a fully populated PDU is encoded.
pub const ALL_FLAGS: u8 = VFLAG_MASK | HFLAG_MASK | DFLAG_MASK;

/// Width of a vector field, fixed per protocol layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VectorSize {
    OneByte = 1,
    TwoBytes = 2,
    FourBytes = 4,
}

impl VectorSize {
    /// Width in bytes.
    #[inline]
    pub fn bytes(self) -> usize {
        self as usize
    }

    /// Encode the low bytes of `vector` (Big Endian) into the start of `buf`.
    ///
    /// # Panics
    ///
    /// Panics if `buf` is shorter than [`VectorSize::bytes`].
    pub fn encode_into(self, vector: u32, buf: &mut [u8]) -> usize {
        let bytes = vector.to_be_bytes();
        let n = self.bytes();
        buf[..n].copy_from_slice(&bytes[4 - n..]);
        n
    }

    /// Read a vector of this width from the start of `buf`.
    ///
    /// Returns `None` if buffer is too short.
    pub fn decode(self, buf: &[u8]) -> Option<u32> {
        let n = self.bytes();
        let field = buf.get(..n)?;
        Some(field.iter().fold(0u32, |acc, &b| (acc << 8) | u32::from(b)))
    }
}

/// Encode a flags + length field for a PDU of `length` bytes.
///
/// Returns the field bytes and how many of them are used.
pub fn encode_flags_and_length(length: usize, flags: u8, long_form: bool) -> ([u8; 3], usize) {
    if long_form {
        (
            [
                ((length >> 16) as u8 & LENGTH_MASK) | LFLAG_MASK | flags,
                (length >> 8) as u8,
                length as u8,
            ],
            3,
        )
    } else {
        (
            [((length >> 8) as u8 & LENGTH_MASK) | flags, length as u8, 0],
            2,
        )
    }
}
