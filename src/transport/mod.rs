//! Transport module - ACN preambles and stream/datagram framing.
//!
//! Provides:
//! - TCP and UDP preamble packing
//! - Incoming stream and datagram transports feeding a root inflator
//! - Async read and send loops over tokio streams

mod io;
mod preamble;
mod stream;
mod udp;

pub use io::{read_stream, send_stack, write_queue};
pub use preamble::{
    add_tcp_preamble, add_udp_preamble, decode_tcp_preamble, ACN_PACKET_IDENTIFIER,
    TCP_PREAMBLE_SIZE, UDP_PREAMBLE, UDP_PREAMBLE_SIZE,
};
pub use stream::IncomingStreamTransport;
pub use udp::IncomingUdpTransport;
