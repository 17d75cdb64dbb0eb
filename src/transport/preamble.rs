//! ACN packet preambles.
//!
//! ```text
//! TCP:  ┌──────────────────────────┬─────────────────┐
//!       │ "ASC-E1.17\0\0\0"        │ Block length    │
//!       │ 12 bytes                 │ uint32 BE       │
//!       └──────────────────────────┴─────────────────┘
//!
//! UDP:  ┌──────────┬───────────┬──────────────────────────┐
//!       │ Preamble │ Postamble │ "ASC-E1.17\0\0\0"        │
//!       │ 0x0010   │ 0x0000    │ 12 bytes                 │
//!       └──────────┴───────────┴──────────────────────────┘
//! ```

use crate::io::IoStack;

/// ACN packet identifier.
pub const ACN_PACKET_IDENTIFIER: [u8; 12] = *b"ASC-E1.17\0\0\0";

/// Size of the TCP preamble: identifier + block length.
pub const TCP_PREAMBLE_SIZE: usize = ACN_PACKET_IDENTIFIER.len() + 4;

/// Size of the UDP preamble.
pub const UDP_PREAMBLE_SIZE: usize = 16;

/// Full UDP preamble.
pub const UDP_PREAMBLE: [u8; UDP_PREAMBLE_SIZE] = [
    0x00, 0x10, 0x00, 0x00, 0x41, 0x53, 0x43, 0x2d, 0x45, 0x31, 0x2e, 0x31, 0x37, 0x00, 0x00, 0x00,
];

/// Prepend the TCP preamble to the PDU block on `stack`.
pub fn add_tcp_preamble(stack: &mut IoStack) {
    let length = stack.size() as u32;
    stack.write(&length.to_be_bytes());
    stack.write(&ACN_PACKET_IDENTIFIER);
}

/// Prepend the UDP preamble to the PDU block on `stack`.
pub fn add_udp_preamble(stack: &mut IoStack) {
    stack.write(&UDP_PREAMBLE);
}

/// Read the block length from a TCP preamble.
///
/// Returns `None` if `data` is short or the identifier doesn't match.
pub fn decode_tcp_preamble(data: &[u8]) -> Option<u32> {
    let preamble = data.get(..TCP_PREAMBLE_SIZE)?;
    let (identifier, length) = preamble.split_at(ACN_PACKET_IDENTIFIER.len());
    if identifier != ACN_PACKET_IDENTIFIER {
        return None;
    }
    Some(u32::from_be_bytes([length[0], length[1], length[2], length[3]]))
}
