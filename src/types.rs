//! Small value types carried inside PDU headers.
//!
//! - [`Cid`] - 16 byte ACN component identifier
//! - [`Uid`] - 48 bit RDM unique identifier

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Length of a CID on the wire.
pub const CID_LENGTH: usize = 16;

/// Length of a UID on the wire.
pub const UID_LENGTH: usize = 6;

/// ACN component identifier (a UUID, kept as raw bytes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cid([u8; CID_LENGTH]);

impl Cid {
    /// Create a CID from raw bytes.
    pub const fn from_bytes(bytes: [u8; CID_LENGTH]) -> Self {
        Self(bytes)
    }

    /// Read a CID from the start of `data`.
    ///
    /// Returns `None` if `data` is shorter than 16 bytes.
    pub fn from_slice(data: &[u8]) -> Option<Self> {
        let bytes: [u8; CID_LENGTH] = data.get(..CID_LENGTH)?.try_into().ok()?;
        Some(Self(bytes))
    }

    /// Generate a new version 4 style CID.
    ///
    /// Mixes the system clock, process id and a process-wide counter, which
    /// is unique enough for component ids on one host.
    pub fn generate() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);

        let hi = mix(COUNTER.fetch_add(1, Ordering::Relaxed));
        let lo = mix(hi ^ 0x9e37_79b9_7f4a_7c15);

        let mut bytes = [0u8; CID_LENGTH];
        bytes[..8].copy_from_slice(&hi.to_be_bytes());
        bytes[8..].copy_from_slice(&lo.to_be_bytes());
        // version 4, RFC 4122 variant
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        Self(bytes)
    }

    /// Raw bytes of this CID.
    #[inline]
    pub fn as_bytes(&self) -> &[u8; CID_LENGTH] {
        &self.0
    }

    /// Check if this is the all-zero CID.
    #[inline]
    pub fn is_nil(&self) -> bool {
        self.0.iter().all(|&b| b == 0)
    }
}

fn mix(seed: u64) -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);
    let pid = std::process::id() as u64;

    let mut x = nanos ^ pid.rotate_left(32) ^ seed.wrapping_mul(0x517c_c1b7_2722_0a95);
    x ^= x >> 33;
    x = x.wrapping_mul(0xff51_afd7_ed55_8ccd);
    x ^= x >> 33;
    x
}

impl fmt::Display for Cid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, b) in self.0.iter().enumerate() {
            if matches!(i, 4 | 6 | 8 | 10) {
                write!(f, "-")?;
            }
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

/// RDM unique identifier: 16 bit manufacturer id + 32 bit device id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
pub struct Uid {
    manufacturer_id: u16,
    device_id: u32,
}

impl Uid {
    /// Create a new UID.
    pub const fn new(manufacturer_id: u16, device_id: u32) -> Self {
        Self {
            manufacturer_id,
            device_id,
        }
    }

    /// Manufacturer id (ESTA code).
    #[inline]
    pub fn manufacturer_id(&self) -> u16 {
        self.manufacturer_id
    }

    /// Device id.
    #[inline]
    pub fn device_id(&self) -> u32 {
        self.device_id
    }

    /// Encode to 6 bytes (Big Endian).
    pub fn encode(&self) -> [u8; UID_LENGTH] {
        let mut buf = [0u8; UID_LENGTH];
        buf[..2].copy_from_slice(&self.manufacturer_id.to_be_bytes());
        buf[2..].copy_from_slice(&self.device_id.to_be_bytes());
        buf
    }

    /// Decode from the first 6 bytes of `data`.
    ///
    /// Returns `None` if buffer is too short.
    pub fn decode(data: &[u8]) -> Option<Self> {
        if data.len() < UID_LENGTH {
            return None;
        }
        Some(Self {
            manufacturer_id: u16::from_be_bytes([data[0], data[1]]),
            device_id: u32::from_be_bytes([data[2], data[3], data[4], data[5]]),
        })
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04x}:{:08x}", self.manufacturer_id, self.device_id)
    }
}
