//! Big-endian typed writes over any [`OutputBuffer`].

/// Sink for encoded bytes.
///
/// Implemented by [`IoQueue`](super::IoQueue), which appends, and by
/// [`IoStack`](super::IoStack), which prepends.
pub trait OutputBuffer {
    /// Add `data` to the buffer.
    fn write(&mut self, data: &[u8]);

    /// Number of bytes held.
    fn size(&self) -> usize;
}

/// Writes integers in network byte order to an [`OutputBuffer`].
pub struct OutputStream<'a> {
    buffer: &'a mut dyn OutputBuffer,
}

impl<'a> OutputStream<'a> {
    /// Wrap a buffer.
    pub fn new(buffer: &'a mut dyn OutputBuffer) -> Self {
        Self { buffer }
    }

    #[inline]
    pub fn write_u8(&mut self, value: u8) {
        self.buffer.write(&[value]);
    }

    #[inline]
    pub fn write_u16(&mut self, value: u16) {
        self.buffer.write(&value.to_be_bytes());
    }

    #[inline]
    pub fn write_u32(&mut self, value: u32) {
        self.buffer.write(&value.to_be_bytes());
    }

    #[inline]
    pub fn write_bytes(&mut self, data: &[u8]) {
        self.buffer.write(data);
    }

    /// Number of bytes held by the underlying buffer.
    pub fn size(&self) -> usize {
        self.buffer.size()
    }
}
