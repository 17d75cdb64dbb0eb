//! Integration tests for acn-pdu.
//!
//! These tests build packets with the pdu module and feed them back through
//! full inflator trees.

use std::cell::RefCell;
use std::io::Cursor;
use std::rc::Rc;

use acn_pdu::headers::{
    BrokerClientEntryHeader, DmpAddressSize, DmpAddressType, DmpHeader, E131Header, E133Header,
    RptHeader, TransportType,
};
use acn_pdu::inflator::{
    BrokerClientEntryInflator, DmpInflator, E131Inflator, E133Inflator, Inflator, RdmInflator,
    RootInflator, RptInflator,
};
use acn_pdu::pdu::{
    BrokerClientEntryPdu, DmpPdu, E131Pdu, E133Pdu, Pdu, PduBlock, RdmPdu, RootPdu, RptPdu,
};
use acn_pdu::transport::{read_stream, send_stack, IncomingStreamTransport};
use acn_pdu::vectors::{
    VECTOR_E131_DATA, VECTOR_FRAMING_RDMNET, VECTOR_ROOT_E131, VECTOR_ROOT_E133, VECTOR_ROOT_RPT,
    VECTOR_RPT_REQUEST,
};
use acn_pdu::{Cid, HeaderSet, IoQueue, IoStack, Uid};

const RDM_COMMAND: &[u8] = &[0x01, 0x18, 0x7a, 0x70, 0x12, 0x34, 0x56, 0x78];

type Seen = Rc<RefCell<Vec<(HeaderSet, Vec<u8>)>>>;

fn recording_rdm_inflator(id: u32) -> (Rc<RefCell<RdmInflator>>, Seen) {
    let seen: Seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let mut rdm = RdmInflator::with_id(id);
    rdm.set_handler(move |_, headers, data| {
        sink.borrow_mut().push((headers.clone(), data.to_vec()));
    });
    (Rc::new(RefCell::new(rdm)), seen)
}

/// Broker client entry: exact bytes, then back through the inflator.
#[test]
fn test_broker_client_entry_round_trip() {
    let cid = Cid::generate();
    let pdu = BrokerClientEntryPdu::new(39, BrokerClientEntryHeader::new(cid), Vec::new());

    let mut buf = [0u8; 23];
    assert_eq!(pdu.pack(&mut buf).unwrap(), 23);
    assert_eq!(&buf[..7], &[0xf0, 0x00, 0x17, 0x00, 0x00, 0x00, 0x27]);
    assert_eq!(&buf[7..], cid.as_bytes());

    let mut inflator = BrokerClientEntryInflator::new(0);
    let mut headers = HeaderSet::new();
    assert_eq!(inflator.inflate_pdu_block(&mut headers, &buf), 23);
    assert_eq!(
        headers.broker_client_entry_header(),
        Some(&BrokerClientEntryHeader::new(cid))
    );
}

/// Root -> RPT -> RDM built inside out on an IoStack.
#[test]
fn test_rpt_stack_through_inflators() {
    let cid = Cid::generate();
    let rpt_header = RptHeader::new(Uid::new(0x7a70, 1), 0, Uid::new(0x7a70, 2), 1, 42);

    let mut stack = IoStack::with_block_size(16);
    stack.write(RDM_COMMAND);
    RdmPdu::prepend_pdu(&mut stack);
    RptPdu::prepend_pdu(&mut stack, VECTOR_RPT_REQUEST, &rpt_header);
    RootPdu::prepend_pdu(&mut stack, VECTOR_ROOT_RPT, &cid, true);
    let packet = stack.to_vec();

    let root = Rc::new(RefCell::new(RootInflator::new()));
    let rpt = Rc::new(RefCell::new(RptInflator::new()));
    let (rdm, seen) = recording_rdm_inflator(VECTOR_RPT_REQUEST);
    assert!(rpt.borrow_mut().add_inflator(&rdm));
    assert!(root.borrow_mut().add_inflator(&rpt));

    let mut headers = HeaderSet::new();
    let used = root.borrow_mut().inflate_pdu_block(&mut headers, &packet);
    assert_eq!(used, packet.len());

    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    let (headers, data) = &seen[0];
    assert_eq!(data, RDM_COMMAND);
    assert_eq!(headers.root_header().map(|h| h.cid), Some(cid));
    assert_eq!(headers.rpt_header(), Some(&rpt_header));
}

/// Root -> E1.33 -> RDM, checking that the packed and prepended forms agree.
#[test]
fn test_e133_pack_matches_stack() {
    let cid = Cid::generate();
    let e133_header = E133Header::new("controller", 101, 0);

    let rdm = RdmPdu::new(RDM_COMMAND.to_vec());
    let e133 = E133Pdu::new(VECTOR_FRAMING_RDMNET, e133_header.clone(), Some(Box::new(rdm)));
    let mut block = PduBlock::new();
    block.add_pdu(Box::new(e133));
    let root_pdu = RootPdu::new(VECTOR_ROOT_E133, cid).with_block(block);
    let mut packed = vec![0u8; root_pdu.size()];
    root_pdu.pack(&mut packed).unwrap();

    let mut stack = IoStack::new();
    stack.write(RDM_COMMAND);
    RdmPdu::prepend_pdu(&mut stack);
    E133Pdu::prepend_pdu(&mut stack, VECTOR_FRAMING_RDMNET, &e133_header);
    RootPdu::prepend_pdu(&mut stack, VECTOR_ROOT_E133, &cid, false);
    assert_eq!(stack.to_vec(), packed);

    let root = Rc::new(RefCell::new(RootInflator::new()));
    let e133_inflator = Rc::new(RefCell::new(E133Inflator::new()));
    let (rdm_inflator, seen) = recording_rdm_inflator(VECTOR_FRAMING_RDMNET);
    e133_inflator.borrow_mut().add_inflator(&rdm_inflator);
    root.borrow_mut().add_inflator(&e133_inflator);

    let mut headers = HeaderSet::new();
    assert_eq!(
        root.borrow_mut().inflate_pdu_block(&mut headers, &packed),
        packed.len()
    );
    let seen = seen.borrow();
    assert_eq!(seen.len(), 1);
    assert_eq!(seen[0].0.e133_header(), Some(&e133_header));
    assert_eq!(seen[0].1, RDM_COMMAND);
}

/// Root -> E1.31 -> DMP, the sACN data path.
#[test]
fn test_e131_dmp_tree() {
    let cid = Cid::generate();
    let header = E131Header::new("console", 100, 7, 1);
    let dmp_header = DmpHeader::new(
        false,
        false,
        DmpAddressType::RangeEqual,
        DmpAddressSize::TwoBytes,
    );
    let dmx = [0u8, 0, 0, 1, 0, 4, 0, 255, 128, 64];
    let dmp = DmpPdu::set_property(dmp_header, dmx.to_vec());
    let e131 = E131Pdu::new(VECTOR_E131_DATA, header.clone(), Some(Box::new(dmp)));
    let mut block = PduBlock::new();
    block.add_pdu(Box::new(e131));
    let root_pdu = RootPdu::new(VECTOR_ROOT_E131, cid).with_block(block);
    let mut packet = vec![0u8; root_pdu.size()];
    root_pdu.pack(&mut packet).unwrap();

    let root = Rc::new(RefCell::new(RootInflator::new()));
    let e131_inflator = Rc::new(RefCell::new(E131Inflator::new()));
    let dmp_inflator = Rc::new(RefCell::new(DmpInflator::new()));
    let universes = Rc::new(RefCell::new(Vec::new()));
    let sink = universes.clone();
    dmp_inflator
        .borrow_mut()
        .set_handler(move |_, headers, data| {
            let universe = headers.e131_header().map(|h| h.universe);
            sink.borrow_mut().push((universe, data.to_vec()));
        });
    e131_inflator.borrow_mut().add_inflator(&dmp_inflator);
    root.borrow_mut().add_inflator(&e131_inflator);

    let mut headers = HeaderSet::new();
    root.borrow_mut().inflate_pdu_block(&mut headers, &packet);
    assert_eq!(*universes.borrow(), vec![(Some(1), dmx.to_vec())]);
}

/// Stack -> queue -> stream -> stream transport -> inflators.
#[tokio::test]
async fn test_send_and_receive_over_stream() {
    let cid = Cid::generate();
    let rpt_header = RptHeader::new(Uid::new(1, 1), 0, Uid::new(2, 2), 0, 1);

    let mut queue = IoQueue::with_block_size(32);
    let mut out = Cursor::new(Vec::new());
    for _ in 0..2 {
        let mut stack = IoStack::with_pool(queue.pool().clone());
        stack.write(RDM_COMMAND);
        RdmPdu::prepend_pdu(&mut stack);
        RptPdu::prepend_pdu(&mut stack, VECTOR_RPT_REQUEST, &rpt_header);
        RootPdu::prepend_pdu(&mut stack, VECTOR_ROOT_RPT, &cid, true);
        send_stack(&mut out, &mut stack, &mut queue).await.unwrap();
    }
    assert!(queue.is_empty());

    let heartbeats = Rc::new(RefCell::new(0));
    let counter = heartbeats.clone();
    let root = Rc::new(RefCell::new(RootInflator::new().with_on_data(move |transport| {
        assert_eq!(transport.transport, TransportType::Tcp);
        *counter.borrow_mut() += 1;
    })));
    let rpt = Rc::new(RefCell::new(RptInflator::new()));
    let (rdm, seen) = recording_rdm_inflator(VECTOR_RPT_REQUEST);
    rpt.borrow_mut().add_inflator(&rdm);
    root.borrow_mut().add_inflator(&rpt);

    let source = "10.0.0.2:5569".parse().unwrap();
    let mut transport = IncomingStreamTransport::new(root.clone(), source);
    let mut reader = Cursor::new(out.into_inner());
    let blocks = read_stream(&mut reader, &mut transport, 7).await.unwrap();

    assert_eq!(blocks, 2);
    assert_eq!(*heartbeats.borrow(), 2);
    assert_eq!(seen.borrow().len(), 2);
    for (headers, data) in seen.borrow().iter() {
        assert_eq!(data, RDM_COMMAND);
        assert_eq!(
            headers.transport_header().map(|t| t.source),
            Some(source)
        );
    }
}
