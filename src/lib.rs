//! # acn-pdu
//!
//! ACN (ANSI E1.17) PDU framing and inflation for E1.31 (sACN) and
//! E1.33 (RDMnet), with block-pool backed buffers for building packets.
//!
//! ## Architecture
//!
//! - **Encode**: build a tree of [`pdu::Pdu`] values and `pack` / `write`
//!   it, or prepend layer by layer onto an [`IoStack`] from the innermost
//!   PDU outwards
//! - **Decode**: a tree of [`inflator::Inflator`]s walks nested PDU
//!   blocks, collecting one header per layer into a [`HeaderSet`]
//! - **Transport**: ACN preambles and stream/datagram framing that feed a
//!   root inflator
//!
//! ## Example
//!
//! ```ignore
//! use acn_pdu::pdu::{E133Pdu, RdmPdu, RootPdu, RptPdu};
//! use acn_pdu::IoStack;
//!
//! let mut stack = IoStack::new();
//! stack.write(&rdm_command);
//! RdmPdu::prepend_pdu(&mut stack);
//! RptPdu::prepend_pdu(&mut stack, VECTOR_RPT_REQUEST, &rpt_header);
//! RootPdu::prepend_pdu(&mut stack, VECTOR_ROOT_RPT, &cid, true);
//! ```

pub mod config;
pub mod error;
pub mod headers;
pub mod inflator;
pub mod io;
pub mod pdu;
pub mod transport;
pub mod types;
pub mod vectors;

pub use config::TransportConfig;
pub use error::{AcnError, Result};
pub use headers::HeaderSet;
pub use io::{IoQueue, IoStack, MemoryBlockPool};
pub use types::{Cid, Uid};
