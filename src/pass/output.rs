//! Buffered password output that scrubs its own buffer.

use std::io::{self, Write};

use zeroize::Zeroize;

const BUF_SIZE: usize = 8 * 1024;

/// Buffered writer that zeroizes its internal buffer on every flush and
/// on drop, so password bytes do not linger in freed heap memory.
pub struct SecureBufWriter<W: Write> {
    inner: W,
    buf: Vec<u8>,
}

impl<W: Write> SecureBufWriter<W> {
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            buf: Vec::with_capacity(BUF_SIZE),
        }
    }

    fn flush_buf(&mut self) -> io::Result<()> {
        if !self.buf.is_empty() {
            let result = self.inner.write_all(&self.buf);
            // Zeroize empties the buffer as well as scrubbing it.
            self.buf.zeroize();
            result?;
        }
        Ok(())
    }
}

impl<W: Write> Write for SecureBufWriter<W> {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        if self.buf.len() + data.len() > BUF_SIZE {
            self.flush_buf()?;
        }
        if data.len() >= BUF_SIZE {
            // Oversized writes bypass the buffer; the caller owns that memory.
            self.inner.write_all(data)?;
        } else {
            self.buf.extend_from_slice(data);
        }
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.flush_buf()?;
        self.inner.flush()
    }
}

impl<W: Write> Drop for SecureBufWriter<W> {
    fn drop(&mut self) {
        let _ = self.flush_buf();
        let _ = self.inner.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_arrive_after_flush() {
        let mut sink = Vec::new();
        {
            let mut out = SecureBufWriter::new(&mut sink);
            out.write_all(b"correct horse").unwrap();
            out.write_all(b" battery staple\n").unwrap();
        }
        assert_eq!(sink, b"correct horse battery staple\n");
    }

    #[test]
    fn buffer_is_scrubbed_on_flush() {
        let mut sink = Vec::new();
        let mut out = SecureBufWriter::new(&mut sink);
        out.write_all(b"hunter2").unwrap();
        out.flush().unwrap();
        assert!(out.buf.is_empty());
        assert!(out.buf.capacity() >= BUF_SIZE);
        drop(out);
        assert_eq!(sink, b"hunter2");
    }

    #[test]
    fn oversized_writes_pass_straight_through() {
        let big = vec![b'x'; BUF_SIZE * 2];
        let mut sink = Vec::new();
        {
            let mut out = SecureBufWriter::new(&mut sink);
            out.write_all(b"head").unwrap();
            out.write_all(&big).unwrap();
        }
        let mut expected = b"head".to_vec();
        expected.extend_from_slice(&big);
        assert_eq!(sink, expected);
    }
}
