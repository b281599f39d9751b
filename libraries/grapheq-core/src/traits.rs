/// Core traits for the equalizer
use std::io::{self, Read};

/// Blocking, pull-based byte stream the equalizer filters
///
/// This is the upstream side of the pipeline: anything that can hand out raw
/// PCM bytes, skip over them and be closed.
///
/// `read` follows the `std::io::Read` convention: `Ok(0)` for a non-empty
/// buffer means the source is exhausted, and short reads are allowed at any time.
pub trait ByteSource {
    /// Read up to `buf.len()` bytes
    ///
    /// # Errors
    /// Returns the source's own I/O error
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize>;

    /// Skip over and discard up to `n` bytes
    ///
    /// Returns the number of bytes actually skipped, which is less than `n`
    /// only at end of stream. The default implementation reads and discards.
    ///
    /// # Errors
    /// Returns the source's own I/O error
    fn skip(&mut self, n: u64) -> io::Result<u64> {
        let mut scratch = [0u8; 4096];
        let mut remaining = n;

        while remaining > 0 {
            let chunk = remaining.min(scratch.len() as u64) as usize;
            match self.read(&mut scratch[..chunk]) {
                Ok(0) => break,
                Ok(read) => remaining -= read as u64,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => return Err(e),
            }
        }

        Ok(n - remaining)
    }

    /// Bytes readable right now without blocking (a lower bound)
    fn available(&self) -> usize {
        0
    }

    /// Release the source
    ///
    /// # Errors
    /// Returns the source's own I/O error
    fn close(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<T: ByteSource + ?Sized> ByteSource for Box<T> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        (**self).read(buf)
    }

    fn skip(&mut self, n: u64) -> io::Result<u64> {
        (**self).skip(n)
    }

    fn available(&self) -> usize {
        (**self).available()
    }

    fn close(&mut self) -> io::Result<()> {
        (**self).close()
    }
}

/// `ByteSource` over any `std::io::Read`
///
/// Closing drops nothing; the reader is released when the source is dropped
/// or taken back with `into_inner`.
#[derive(Debug)]
pub struct ReaderSource<R> {
    inner: R,
    closed: bool,
}

impl<R: Read> ReaderSource<R> {
    /// Wrap a reader
    pub fn new(inner: R) -> Self {
        Self {
            inner,
            closed: false,
        }
    }

    /// Get a reference to the wrapped reader
    pub fn get_ref(&self) -> &R {
        &self.inner
    }

    /// Check whether `close` has been called
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Unwrap the reader
    pub fn into_inner(self) -> R {
        self.inner
    }

    fn ensure_open(&self) -> io::Result<()> {
        if self.closed {
            Err(io::Error::new(io::ErrorKind::NotConnected, "source closed"))
        } else {
            Ok(())
        }
    }
}

impl<R: Read> ByteSource for ReaderSource<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.ensure_open()?;
        self.inner.read(buf)
    }

    fn skip(&mut self, n: u64) -> io::Result<u64> {
        self.ensure_open()?;
        io::copy(&mut self.inner.by_ref().take(n), &mut io::sink())
    }

    fn close(&mut self) -> io::Result<()> {
        self.closed = true;
        Ok(())
    }
}
