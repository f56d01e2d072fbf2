use crate::codec::DEFAULT_BUF_CAPACITY;
use crate::rules::Ser;
use anyhow::{Context, Result};
use derive_more::Deref;
use std::any;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::{debug, trace};

/// Cumulative count of bytes handed to the sink.
#[derive(Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct WriteLen(usize);

/// The write direction: serializes values onto an append-only byte sink.
///
/// The sink is buffered. Buffered bytes are flushed by [`Self::flush`],
/// [`Self::into_inner`], or (with errors ignored) on drop.
pub struct BinWriter<W: Write> {
    w: BufWriter<W>,
    w_len: usize,
}

impl BinWriter<File> {
    /// Opens `path` for writing, truncating any prior content.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("open {path:?} for writing"))?;
        debug!(?path, "opened byte sink");
        Ok(Self::from(file))
    }
}

impl<W: Write> From<W> for BinWriter<W> {
    fn from(w: W) -> Self {
        Self::with_capacity(DEFAULT_BUF_CAPACITY, w)
    }
}

impl<W: Write> BinWriter<W> {
    pub fn with_capacity(capacity: usize, w: W) -> Self {
        Self {
            w: BufWriter::with_capacity(capacity, w),
            w_len: 0,
        }
    }

    /// Appends all of `buf`, or fails.
    pub fn write_bytes(&mut self, buf: &[u8]) -> Result<()> {
        self.w
            .write_all(buf)
            .with_context(|| format!("write {} bytes at offset {}", buf.len(), self.w_len))?;
        self.w_len += buf.len();
        Ok(())
    }

    /// Serializes `v`. Returns `self` so that calls can be chained.
    pub fn put<T: Ser + ?Sized>(&mut self, v: &T) -> Result<&mut Self> {
        let w_len_before = self.w_len;
        v.ser(self)?;
        trace!(
            ty = any::type_name::<T>(),
            delta_w_len = self.w_len - w_len_before,
            "ser"
        );
        Ok(self)
    }

    pub fn w_len(&self) -> WriteLen {
        WriteLen(self.w_len)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.w.flush().context("flush byte sink")?;
        Ok(())
    }

    /// Flushes the buffer and releases the sink.
    pub fn into_inner(self) -> Result<W> {
        let w_len = self.w_len;
        let w = self
            .w
            .into_inner()
            .map_err(|e| e.into_error())
            .context("flush byte sink")?;
        debug!(w_len, "closed byte sink");
        Ok(w)
    }
}
