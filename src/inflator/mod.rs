//! PDU inflation (decoding).
//!
//! Inflators form a tree that mirrors the nesting of the protocol layers:
//!
//! ```text
//! RootInflator ──┬── E131Inflator ── DmpInflator
//!                ├── E133Inflator ── RdmInflator
//!                ├── RptInflator ─── RdmInflator
//!                ├── LlrpInflator ── RdmInflator
//!                └── BrokerInflator ── BrokerClientEntryInflator
//! ```
//!
//! Parents hold weak handles to their children, so the caller that builds
//! the tree keeps every inflator alive.
//!
//! # Example
//!
//! ```ignore
//! let root = Rc::new(RefCell::new(RootInflator::new()));
//! let e133 = Rc::new(RefCell::new(E133Inflator::new()));
//! let rdm = Rc::new(RefCell::new(RdmInflator::new()));
//! rdm.borrow_mut().set_handler(|_, headers, command| { /* ... */ });
//!
//! e133.borrow_mut().add_inflator(&rdm);
//! root.borrow_mut().add_inflator(&e133);
//!
//! let mut headers = HeaderSet::new();
//! root.borrow_mut().inflate_pdu_block(&mut headers, &data);
//! ```

mod base;
mod broker;
mod dmp;
mod e131;
mod e133;
mod llrp;
mod rdm;
mod root;
mod rpt;

pub use base::{BaseInflator, Inflator, InflatorHandle, PduHandler};
pub use broker::{BrokerClientEntryInflator, BrokerInflator};
pub use dmp::DmpInflator;
pub use e131::E131Inflator;
pub use e133::E133Inflator;
pub use llrp::LlrpInflator;
pub use rdm::RdmInflator;
pub use root::{OnDataCallback, RootInflator};
pub use rpt::RptInflator;
