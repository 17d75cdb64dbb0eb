//! DMP (Device Management Protocol) header.
//!
//! A single byte describing the address format of the DMP data:
//!
//! ```text
//!   7   6   5 4   3 2   1 0
//! ┌───┬───┬─────┬─────┬─────┐
//! │ V │ R │ type│  0  │ size│
//! └───┴───┴─────┴─────┴─────┘
//! ```
//!
//! `V` = virtual address, `R` = relative address.

/// Layout of a DMP address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DmpAddressType {
    NonRange = 0,
    RangeSingle = 1,
    RangeEqual = 2,
    RangeMixed = 3,
}

/// Width of each DMP address field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum DmpAddressSize {
    OneByte = 0,
    TwoBytes = 1,
    FourBytes = 2,
    Reserved = 3,
}

impl DmpAddressSize {
    /// Address width in bytes, 0 for the reserved value.
    pub fn bytes(self) -> usize {
        match self {
            Self::OneByte => 1,
            Self::TwoBytes => 2,
            Self::FourBytes => 4,
            Self::Reserved => 0,
        }
    }
}

const VIRTUAL_MASK: u8 = 0x80;
const RELATIVE_MASK: u8 = 0x40;
const TYPE_MASK: u8 = 0x30;
const SIZE_MASK: u8 = 0x03;

/// DMP layer header, stored as its wire byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DmpHeader(u8);

impl DmpHeader {
    /// Header size on the wire.
    pub const SIZE: usize = 1;

    pub fn new(
        is_virtual: bool,
        is_relative: bool,
        address_type: DmpAddressType,
        address_size: DmpAddressSize,
    ) -> Self {
        let mut header = (address_type as u8) << 4 | address_size as u8;
        if is_virtual {
            header |= VIRTUAL_MASK;
        }
        if is_relative {
            header |= RELATIVE_MASK;
        }
        Self(header)
    }

    /// Wrap a raw header byte.
    #[inline]
    pub const fn from_byte(header: u8) -> Self {
        Self(header)
    }

    /// The wire byte.
    #[inline]
    pub fn header(&self) -> u8 {
        self.0
    }

    #[inline]
    pub fn is_virtual(&self) -> bool {
        self.0 & VIRTUAL_MASK != 0
    }

    #[inline]
    pub fn is_relative(&self) -> bool {
        self.0 & RELATIVE_MASK != 0
    }

    pub fn address_type(&self) -> DmpAddressType {
        match (self.0 & TYPE_MASK) >> 4 {
            0 => DmpAddressType::NonRange,
            1 => DmpAddressType::RangeSingle,
            2 => DmpAddressType::RangeEqual,
            _ => DmpAddressType::RangeMixed,
        }
    }

    pub fn address_size(&self) -> DmpAddressSize {
        match self.0 & SIZE_MASK {
            0 => DmpAddressSize::OneByte,
            1 => DmpAddressSize::TwoBytes,
            2 => DmpAddressSize::FourBytes,
            _ => DmpAddressSize::Reserved,
        }
    }

    pub fn encode(&self) -> [u8; Self::SIZE] {
        [self.0]
    }

    pub fn decode(buf: &[u8]) -> Option<Self> {
        buf.first().copied().map(Self)
    }
}
