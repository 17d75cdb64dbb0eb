//! Root layer inflator.

use super::base::{decode_fixed_header, BaseInflator, Inflator};
use crate::error::Result;
use crate::headers::{HeaderSet, RootHeader, TransportHeader};
use crate::pdu::VectorSize;

/// Callback fired for every root PDU that arrived with a transport header.
pub type OnDataCallback = Box<dyn FnMut(&TransportHeader)>;

/// Inflates root layer PDUs: 4 byte vector, 16 byte CID header.
///
/// The optional on-data callback lets a connection track that its peer is
/// still alive without caring about the payload.
pub struct RootInflator {
    base: BaseInflator,
    last_header: Option<RootHeader>,
    on_data: Option<OnDataCallback>,
}

impl RootInflator {
    pub fn new() -> Self {
        Self {
            base: BaseInflator::new(VectorSize::FourBytes),
            last_header: None,
            on_data: None,
        }
    }

    /// Set the callback run after each root header is decoded.
    pub fn with_on_data(mut self, on_data: impl FnMut(&TransportHeader) + 'static) -> Self {
        self.on_data = Some(Box::new(on_data));
        self
    }
}

impl Default for RootInflator {
    fn default() -> Self {
        Self::new()
    }
}

impl Inflator for RootInflator {
    fn id(&self) -> u32 {
        0
    }

    fn base(&self) -> &BaseInflator {
        &self.base
    }

    fn base_mut(&mut self) -> &mut BaseInflator {
        &mut self.base
    }

    fn decode_header(&mut self, headers: &mut HeaderSet, data: Option<&[u8]>) -> Result<usize> {
        let (header, used) = decode_fixed_header(
            data,
            &mut self.last_header,
            "root",
            RootHeader::SIZE,
            RootHeader::decode,
        )?;
        headers.set_root_header(header);
        Ok(used)
    }

    fn reset_header_field(&mut self) {
        self.last_header = None;
    }

    fn post_header(&mut self, _vector: u32, headers: &HeaderSet) -> bool {
        let transport = headers.transport_header();
        if let (Some(on_data), Some(transport)) = (self.on_data.as_mut(), transport) {
            on_data(transport);
        }
        true
    }
}
