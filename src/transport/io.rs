//! Async read and write loops over tokio streams.
//!
//! # Architecture
//!
//! ```text
//! AsyncRead ─► read_stream ─► IncomingStreamTransport ─► RootInflator
//!
//! IoStack ─► send_stack ─► IoQueue ─► write_vectored ─► AsyncWrite
//! ```

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};

use super::preamble::add_tcp_preamble;
use super::stream::IncomingStreamTransport;
use crate::error::{AcnError, Result};
use crate::io::{IoQueue, IoStack};

/// Read from `reader` until EOF, pushing everything into `transport`.
///
/// Returns the number of PDU blocks inflated.
pub async fn read_stream<R>(
    reader: &mut R,
    transport: &mut IncomingStreamTransport,
    read_buffer_size: usize,
) -> Result<usize>
where
    R: AsyncRead + Unpin,
{
    let mut buf = vec![0u8; read_buffer_size.max(1)];
    let mut blocks = 0;

    loop {
        let n = match reader.read(&mut buf).await {
            Ok(n) => n,
            Err(e) => {
                tracing::error!("read from {} failed: {}", transport.source(), e);
                return Err(e.into());
            }
        };
        if n == 0 {
            if !transport.is_empty() {
                tracing::debug!(
                    "stream from {} closed with {} bytes of a partial block",
                    transport.source(),
                    transport.len()
                );
            }
            return Ok(blocks);
        }
        blocks += transport.push(&buf[..n])?;
    }
}

/// Frame the PDU block on `stack` with the TCP preamble and write it.
///
/// The stack is moved onto `queue` first, so anything already queued goes
/// out ahead of it. Returns the number of bytes written.
pub async fn send_stack<W>(
    writer: &mut W,
    stack: &mut IoStack,
    queue: &mut IoQueue,
) -> Result<usize>
where
    W: AsyncWrite + Unpin,
{
    add_tcp_preamble(stack);
    stack.move_to_io_queue(queue);
    write_queue(writer, queue).await
}

/// Write the whole of `queue`, popping the bytes as they are accepted.
///
/// Returns the number of bytes written.
pub async fn write_queue<W>(writer: &mut W, queue: &mut IoQueue) -> Result<usize>
where
    W: AsyncWrite + Unpin,
{
    let mut total_written = 0;

    while !queue.is_empty() {
        let written = {
            let slices = queue.as_io_slices();
            writer.write_vectored(&slices).await?
        };

        if written == 0 {
            return Err(AcnError::Io(std::io::Error::new(
                std::io::ErrorKind::WriteZero,
                "write_vectored returned 0",
            )));
        }

        queue.pop(written);
        total_written += written;
    }

    writer.flush().await?;
    Ok(total_written)
}
