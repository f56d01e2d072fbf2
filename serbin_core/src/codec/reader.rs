use crate::codec::DEFAULT_BUF_CAPACITY;
use crate::rules::Deser;
use anyhow::{Context, Result};
use derive_more::Deref;
use std::any;
use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Read};
use std::path::Path;
use tracing::{debug, trace};

/// Cumulative count of bytes consumed from the source.
#[derive(Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct ReadLen(usize);

/// The read direction: deserializes values from a sequential byte source.
///
/// A short read fails with an [`std::io::Error`] of kind
/// [`std::io::ErrorKind::UnexpectedEof`] as the root cause.
pub struct BinReader<R> {
    r: BufReader<R>,
    r_len: usize,
}

impl BinReader<File> {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .open(path)
            .with_context(|| format!("open {path:?} for reading"))?;
        debug!(?path, "opened byte source");
        Ok(Self::from(file))
    }
}

impl<R: Read> From<R> for BinReader<R> {
    fn from(r: R) -> Self {
        Self::with_capacity(DEFAULT_BUF_CAPACITY, r)
    }
}

impl<R: Read> BinReader<R> {
    pub fn with_capacity(capacity: usize, r: R) -> Self {
        Self {
            r: BufReader::with_capacity(capacity, r),
            r_len: 0,
        }
    }

    /// Fills all of `buf`, or fails.
    pub fn read_bytes(&mut self, buf: &mut [u8]) -> Result<()> {
        self.r
            .read_exact(buf)
            .with_context(|| format!("read {} bytes at offset {}", buf.len(), self.r_len))?;
        self.r_len += buf.len();
        Ok(())
    }

    pub fn get<T: Deser>(&mut self) -> Result<T> {
        let r_len_before = self.r_len;
        let t = T::deser(self)?;
        trace!(
            ty = any::type_name::<T>(),
            delta_r_len = self.r_len - r_len_before,
            "deser"
        );
        Ok(t)
    }

    /// Deserializes into `out`. Returns `self` so that calls can be chained.
    ///
    /// `out` is left untouched if deserialization fails.
    pub fn take<T: Deser>(&mut self, out: &mut T) -> Result<&mut Self> {
        *out = self.get()?;
        Ok(self)
    }

    pub fn r_len(&self) -> ReadLen {
        ReadLen(self.r_len)
    }

    /// Whether the source has no more bytes.
    pub fn is_eof(&mut self) -> Result<bool> {
        let buf = self
            .r
            .fill_buf()
            .with_context(|| format!("peek at offset {}", self.r_len))?;
        Ok(buf.is_empty())
    }

    pub fn into_inner(self) -> R {
        self.r.into_inner()
    }
}
