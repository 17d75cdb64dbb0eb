//! E1.31 (streaming DMX) framing layer header.
//!
//! Standard layout (71 bytes):
//! ```text
//! ┌─────────────┬──────────┬───────────┬──────────┬─────────┬──────────┐
//! │ Source name │ Priority │ Sync addr │ Sequence │ Options │ Universe │
//! │ 64 bytes    │ 1 byte   │ 2 bytes   │ 1 byte   │ 1 byte  │ 2 bytes  │
//! └─────────────┴──────────┴───────────┴──────────┴─────────┴──────────┘
//! ```
//!
//! The draft revision 2 layout (36 bytes) carries a 32 byte source name,
//! priority, sequence and universe only.

use super::{decode_source_name, encode_source_name};

/// Options bit: data is for visualisation only.
pub const PREVIEW_DATA_MASK: u8 = 0x80;

/// Options bit: the source is terminating the stream.
pub const STREAM_TERMINATED_MASK: u8 = 0x40;

/// E1.31 framing layer header.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct E131Header {
    pub source: String,
    pub priority: u8,
    pub sequence: u8,
    pub universe: u16,
    pub synchronization_address: u16,
    pub preview_data: bool,
    pub stream_terminated: bool,
    /// Use the draft revision 2 layout.
    pub rev2: bool,
}

impl E131Header {
    /// Standard header size.
    pub const SIZE: usize = 71;
    /// Revision 2 header size.
    pub const REV2_SIZE: usize = 36;

    const SOURCE_NAME_LEN: usize = 64;
    const REV2_SOURCE_NAME_LEN: usize = 32;

    pub fn new(source: impl Into<String>, priority: u8, sequence: u8, universe: u16) -> Self {
        Self {
            source: source.into(),
            priority,
            sequence,
            universe,
            ..Self::default()
        }
    }

    /// Same fields, revision 2 layout.
    pub fn new_rev2(source: impl Into<String>, priority: u8, sequence: u8, universe: u16) -> Self {
        Self {
            rev2: true,
            ..Self::new(source, priority, sequence, universe)
        }
    }

    /// Set the preview and stream terminated options.
    pub fn with_options(mut self, preview_data: bool, stream_terminated: bool) -> Self {
        self.preview_data = preview_data;
        self.stream_terminated = stream_terminated;
        self
    }

    /// Encoded size for this header's layout.
    #[inline]
    pub fn size(&self) -> usize {
        if self.rev2 {
            Self::REV2_SIZE
        } else {
            Self::SIZE
        }
    }

    /// Encode into the start of `buf`. Returns the bytes written.
    ///
    /// # Panics
    ///
    /// Panics if `buf` is smaller than [`E131Header::size`].
    pub fn encode_into(&self, buf: &mut [u8]) -> usize {
        if self.rev2 {
            let name = Self::REV2_SOURCE_NAME_LEN;
            encode_source_name(&self.source, &mut buf[..name]);
            buf[name] = self.priority;
            buf[name + 1] = self.sequence;
            buf[name + 2..name + 4].copy_from_slice(&self.universe.to_be_bytes());
            return Self::REV2_SIZE;
        }

        let name = Self::SOURCE_NAME_LEN;
        encode_source_name(&self.source, &mut buf[..name]);
        buf[name] = self.priority;
        buf[name + 1..name + 3].copy_from_slice(&self.synchronization_address.to_be_bytes());
        buf[name + 3] = self.sequence;
        buf[name + 4] = self.options();
        buf[name + 5..name + 7].copy_from_slice(&self.universe.to_be_bytes());
        Self::SIZE
    }

    /// Encode to a new buffer.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = vec![0u8; self.size()];
        self.encode_into(&mut buf);
        buf
    }

    /// Decode a standard header. Returns `None` if buffer is too short.
    pub fn decode(buf: &[u8]) -> Option<Self> {
        if buf.len() < Self::SIZE {
            return None;
        }
        let name = Self::SOURCE_NAME_LEN;
        let options = buf[name + 4];
        Some(Self {
            source: decode_source_name(&buf[..name]),
            priority: buf[name],
            synchronization_address: u16::from_be_bytes([buf[name + 1], buf[name + 2]]),
            sequence: buf[name + 3],
            preview_data: options & PREVIEW_DATA_MASK != 0,
            stream_terminated: options & STREAM_TERMINATED_MASK != 0,
            universe: u16::from_be_bytes([buf[name + 5], buf[name + 6]]),
            rev2: false,
        })
    }

    /// Decode a revision 2 header. Returns `None` if buffer is too short.
    pub fn decode_rev2(buf: &[u8]) -> Option<Self> {
        if buf.len() < Self::REV2_SIZE {
            return None;
        }
        let name = Self::REV2_SOURCE_NAME_LEN;
        Some(Self::new_rev2(
            decode_source_name(&buf[..name]),
            buf[name],
            buf[name + 1],
            u16::from_be_bytes([buf[name + 2], buf[name + 3]]),
        ))
    }

    fn options(&self) -> u8 {
        let mut options = 0;
        if self.preview_data {
            options |= PREVIEW_DATA_MASK;
        }
        if self.stream_terminated {
            options |= STREAM_TERMINATED_MASK;
        }
        options
    }
}
