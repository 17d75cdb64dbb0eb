//! PDU encoding.
//!
//! This module contains:
//! - Flags + length field and vector widths ([`wire_format`])
//! - The [`Pdu`] trait with size / pack / write
//! - [`PduBlock`] for sibling PDUs
//! - Concrete PDUs for each protocol layer, with `prepend_pdu` builders
//!   for inside-out construction on an [`IoStack`](crate::io::IoStack)

mod base;
mod block;
mod broker;
mod dmp;
mod e131;
mod e133;
mod llrp;
mod rdm;
mod root;
mod rpt;
pub mod wire_format;

pub use base::{prepend_flags_and_length, prepend_vector, Pdu};
pub use block::PduBlock;
pub use broker::{BrokerClientEntryPdu, BrokerPdu};
pub use dmp::DmpPdu;
pub use e131::E131Pdu;
pub use e133::E133Pdu;
pub use llrp::LlrpPdu;
pub use rdm::RdmPdu;
pub use root::RootPdu;
pub use rpt::RptPdu;
pub use wire_format::VectorSize;

use crate::error::Result;
use crate::io::OutputStream;

fn nested_size(pdu: &Option<Box<dyn Pdu>>) -> usize {
    pdu.as_ref().map_or(0, |pdu| pdu.size())
}

fn pack_nested(pdu: &Option<Box<dyn Pdu>>, buf: &mut [u8]) -> Result<usize> {
    match pdu {
        Some(pdu) => pdu.pack(buf),
        None => Ok(0),
    }
}

fn write_nested(pdu: &Option<Box<dyn Pdu>>, stream: &mut OutputStream<'_>) {
    if let Some(pdu) = pdu {
        pdu.write(stream);
    }
}
