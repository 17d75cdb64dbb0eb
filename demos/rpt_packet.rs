//! RPT packet - build an RDMnet RPT request and decode it again.
//!
//! This example demonstrates:
//! - Building a packet inside out on an `IoStack`
//! - Framing it with the TCP preamble and sending it through an `IoQueue`
//! - Decoding it with an inflator tree on an incoming stream transport
//!
//! # Running
//!
//! ```text
//! cargo run --example rpt_packet
//! ```

use std::cell::RefCell;
use std::io::Cursor;
use std::net::SocketAddr;
use std::rc::Rc;

use acn_pdu::headers::RptHeader;
use acn_pdu::inflator::{Inflator, RdmInflator, RootInflator, RptInflator};
use acn_pdu::pdu::{RdmPdu, RootPdu, RptPdu};
use acn_pdu::transport::{read_stream, send_stack, IncomingStreamTransport};
use acn_pdu::vectors::{VECTOR_ROOT_RPT, VECTOR_RPT_REQUEST};
use acn_pdu::{Cid, IoQueue, IoStack, TransportConfig, Uid};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = TransportConfig::from_json_str(r#"{ "block_size": 64 }"#)?;

    let cid = Cid::generate();
    let header = RptHeader::new(Uid::new(0x7a70, 1), 0, Uid::new(0x7a70, 0x1234), 1, 1);
    // GET DEVICE_INFO
    let rdm_command = [0x01, 0x18, 0x7a, 0x70, 0x00, 0x00, 0x12, 0x34, 0x20, 0x00, 0x60, 0x00];

    let mut queue = IoQueue::with_block_size(config.block_size);
    let mut stack = IoStack::with_pool(queue.pool().clone());
    stack.write(&rdm_command);
    RdmPdu::prepend_pdu(&mut stack);
    RptPdu::prepend_pdu(&mut stack, VECTOR_RPT_REQUEST, &header);
    RootPdu::prepend_pdu(&mut stack, VECTOR_ROOT_RPT, &cid, true);

    let mut dump = String::new();
    stack.dump(&mut dump)?;
    println!("Outgoing PDU block:\n{}", dump);

    let mut wire = Cursor::new(Vec::new());
    let written = send_stack(&mut wire, &mut stack, &mut queue).await?;
    println!("Sent {} bytes", written);

    let root = Rc::new(RefCell::new(RootInflator::new()));
    let rpt = Rc::new(RefCell::new(RptInflator::new()));
    let rdm = Rc::new(RefCell::new(RdmInflator::with_id(VECTOR_RPT_REQUEST)));
    rdm.borrow_mut().set_handler(|_, headers, command| {
        if let Some(rpt) = headers.rpt_header() {
            println!(
                "RDM command from {} to {}: {:02x?}",
                rpt.source_uid, rpt.destination_uid, command
            );
        }
    });
    rpt.borrow_mut().add_inflator(&rdm);
    root.borrow_mut().add_inflator(&rpt);

    let source: SocketAddr = "127.0.0.1:5569".parse()?;
    let mut transport = IncomingStreamTransport::with_config(root.clone(), source, &config);
    let mut reader = Cursor::new(wire.into_inner());
    let blocks = read_stream(&mut reader, &mut transport, config.read_buffer_size).await?;
    println!("Inflated {} PDU block(s)", blocks);

    Ok(())
}
