//! Bounded buffered readers over partition files.
//!
//! Readers never hold more than one buffer's worth of raw bytes plus the row
//! being parsed (the structured variant is the exception: its document is
//! parsed whole).

use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};

/// A thin wrapper over `BufReader` with a fixed capacity to bound in-flight bytes.
pub struct BoundedBufReader<R: Read> {
    inner: BufReader<R>,
}

impl<R: Read> BoundedBufReader<R> {
    /// Create a new bounded reader with a maximum internal buffer size.
    pub fn with_capacity(capacity: usize, reader: R) -> Self {
        Self {
            inner: BufReader::with_capacity(capacity, reader),
        }
    }

    /// Bytes currently buffered.
    pub fn buffer_len(&self) -> usize {
        self.inner.buffer().len()
    }

    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }
}

impl<R: Read> Read for BoundedBufReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<R: Read> BufRead for BoundedBufReader<R> {
    fn fill_buf(&mut self) -> io::Result<&[u8]> {
        self.inner.fill_buf()
    }
    fn consume(&mut self, amt: usize) {
        self.inner.consume(amt)
    }
}

/// Open a partition file. A missing file is reported as missing data, not as
/// a bare I/O error, so callers get the acquisition instructions.
pub fn open_partition<P: AsRef<Path>>(path: P, cap: usize) -> Result<BoundedBufReader<File>> {
    let path = path.as_ref();
    match File::open(path) {
        Ok(file) => Ok(BoundedBufReader::with_capacity(cap, file)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Err(Error::missing(path)),
        Err(e) => Err(Error::Io(e)),
    }
}
