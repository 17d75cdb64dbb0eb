//! Hex + ASCII formatting of raw bytes.
//!
//! ```text
//! 00 01 02 03 04 05 06 07  ........
//! 08                       .
//! ```

use std::fmt::{self, Write};

/// Bytes per line used by queue and stack dumps.
pub const DEFAULT_BYTES_PER_LINE: usize = 8;

/// Write `data` as hex + ASCII lines of `bytes_per_line` bytes each.
///
/// Each line is indented by `indent` spaces. A short last line is padded so
/// the ASCII column stays aligned. Non-printable bytes show as `.`.
pub fn format_data<W: Write>(
    out: &mut W,
    data: &[u8],
    indent: usize,
    bytes_per_line: usize,
) -> fmt::Result {
    let bytes_per_line = bytes_per_line.max(1);
    for line in data.chunks(bytes_per_line) {
        write!(out, "{:indent$}", "", indent = indent)?;
        for byte in line {
            write!(out, "{:02x} ", byte)?;
        }
        for _ in line.len()..bytes_per_line {
            out.write_str("   ")?;
        }
        out.write_char(' ')?;
        for &byte in line {
            let c = if byte == b' ' || byte.is_ascii_graphic() {
                byte as char
            } else {
                '.'
            };
            out.write_char(c)?;
        }
        out.write_char('\n')?;
    }
    Ok(())
}
