//! Per-layer header values and the [`HeaderSet`] accumulated during inflation.
//!
//! Each header type is a plain value with `encode` / `decode` for its fixed
//! wire layout. As an inflator chain descends through nested PDUs, every
//! layer stores the header it decoded (or inherited) into the shared
//! [`HeaderSet`], so a leaf handler sees the full path that led to it.

mod broker;
mod dmp;
mod e131;
mod e133;
mod llrp;
mod root;
mod rpt;

pub use broker::BrokerClientEntryHeader;
pub use dmp::{DmpAddressSize, DmpAddressType, DmpHeader};
pub use e131::{E131Header, PREVIEW_DATA_MASK, STREAM_TERMINATED_MASK};
pub use e133::E133Header;
pub use llrp::LlrpHeader;
pub use root::{RootHeader, TransportHeader, TransportType};
pub use rpt::RptHeader;

/// One decoded header per protocol layer.
///
/// Layers that were not traversed are `None`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HeaderSet {
    transport: Option<TransportHeader>,
    root: Option<RootHeader>,
    e131: Option<E131Header>,
    e133: Option<E133Header>,
    dmp: Option<DmpHeader>,
    llrp: Option<LlrpHeader>,
    rpt: Option<RptHeader>,
    broker_client_entry: Option<BrokerClientEntryHeader>,
}

impl HeaderSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_transport_header(&mut self, header: TransportHeader) {
        self.transport = Some(header);
    }

    pub fn transport_header(&self) -> Option<&TransportHeader> {
        self.transport.as_ref()
    }

    pub fn set_root_header(&mut self, header: RootHeader) {
        self.root = Some(header);
    }

    pub fn root_header(&self) -> Option<&RootHeader> {
        self.root.as_ref()
    }

    pub fn set_e131_header(&mut self, header: E131Header) {
        self.e131 = Some(header);
    }

    pub fn e131_header(&self) -> Option<&E131Header> {
        self.e131.as_ref()
    }

    pub fn set_e133_header(&mut self, header: E133Header) {
        self.e133 = Some(header);
    }

    pub fn e133_header(&self) -> Option<&E133Header> {
        self.e133.as_ref()
    }

    pub fn set_dmp_header(&mut self, header: DmpHeader) {
        self.dmp = Some(header);
    }

    pub fn dmp_header(&self) -> Option<&DmpHeader> {
        self.dmp.as_ref()
    }

    pub fn set_llrp_header(&mut self, header: LlrpHeader) {
        self.llrp = Some(header);
    }

    pub fn llrp_header(&self) -> Option<&LlrpHeader> {
        self.llrp.as_ref()
    }

    pub fn set_rpt_header(&mut self, header: RptHeader) {
        self.rpt = Some(header);
    }

    pub fn rpt_header(&self) -> Option<&RptHeader> {
        self.rpt.as_ref()
    }

    pub fn set_broker_client_entry_header(&mut self, header: BrokerClientEntryHeader) {
        self.broker_client_entry = Some(header);
    }

    pub fn broker_client_entry_header(&self) -> Option<&BrokerClientEntryHeader> {
        self.broker_client_entry.as_ref()
    }
}

/// Copy `name` into a fixed-width, NUL padded field, truncating if needed.
pub(crate) fn encode_source_name(name: &str, field: &mut [u8]) {
    let bytes = name.as_bytes();
    let n = bytes.len().min(field.len());
    field[..n].copy_from_slice(&bytes[..n]);
    field[n..].fill(0);
}

/// Read a NUL terminated (or field-width) name.
pub(crate) fn decode_source_name(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}
