use crate::codec::{BinReader, BinWriter, WriteLen};
use crate::rules::{Deser, Ser};
use anyhow::{Context, Result};
use std::path::Path;

pub fn ser_solo<T: Ser + ?Sized>(v: &T) -> Result<Vec<u8>> {
    let mut w = BinWriter::from(vec![]);
    w.put(v)?;
    w.into_inner()
}

pub fn deser_solo<T: Deser>(buf: &[u8]) -> Result<T> {
    let mut r = BinReader::from(buf);
    r.get()
}

/// Replaces the content of the file at `path` with the serialized `v`.
pub fn ser_file<P: AsRef<Path>, T: Ser + ?Sized>(path: P, v: &T) -> Result<WriteLen> {
    let path = path.as_ref();
    let mut w = BinWriter::create(path)?;
    w.put(v)?;
    let w_len = w.w_len();
    let file = w.into_inner()?;
    file.sync_all()
        .with_context(|| format!("sync_all {path:?}"))?;
    Ok(w_len)
}

pub fn deser_file<P: AsRef<Path>, T: Deser>(path: P) -> Result<T> {
    let mut r = BinReader::open(path)?;
    r.get()
}
