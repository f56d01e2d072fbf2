//! The sample values that the `serbin_demo` binary writes to a file and reads back.

use anyhow::Result;
use serbin_core::{impl_record, BinReader, BinWriter, WriteLen};
use std::collections::{BTreeMap, HashSet};
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

pub const ENV_VAR_DEMO_PATH: &str = "SERBIN_DEMO_PATH";

pub fn default_demo_path() -> PathBuf {
    env::temp_dir().join("serbin").join("demo.bin")
}

/// A record that owns its payload through a nullable pointer.
#[derive(PartialEq, Debug)]
pub struct Custom {
    data: Option<Box<(f32, f64, i64)>>,
}
impl_record!(Custom { data });

impl Default for Custom {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0)
    }
}

impl Custom {
    pub fn new(a: f32, b: f64, c: i64) -> Self {
        Self {
            data: Some(Box::new((a, b, c))),
        }
    }

    pub fn empty() -> Self {
        Self { data: None }
    }

    pub fn data(&self) -> Option<&(f32, f64, i64)> {
        self.data.as_deref()
    }
}

#[derive(PartialEq, Debug, Default)]
pub struct Sample {
    pub ints: Vec<Option<i32>>,
    pub flags: BTreeMap<String, bool>,
    /// Strings of 4-byte chars.
    pub wide_names: HashSet<Vec<char>>,
    pub custom: Custom,
}

impl Sample {
    pub fn new() -> Self {
        let flags = [("Aurora", true), ("Borealis", false), ("Club", true)]
            .into_iter()
            .map(|(k, v)| (String::from(k), v))
            .collect();
        let wide_names = ["Dread", "Elemental", "Fang"]
            .into_iter()
            .map(|s| s.chars().collect())
            .collect();

        Self {
            ints: vec![None, Some(456), Some(7890)],
            flags,
            wide_names,
            custom: Custom::new(67.0, 0.125678, 800009),
        }
    }
}

/// Writes each member of `sample` in turn, replacing the file's prior content.
pub fn write_sample<P: AsRef<Path>>(path: P, sample: &Sample) -> Result<WriteLen> {
    let mut w = BinWriter::create(path)?;
    w.put(&sample.ints)?
        .put(&sample.flags)?
        .put(&sample.wide_names)?
        .put(&sample.custom)?;
    let w_len = w.w_len();
    w.into_inner()?;
    Ok(w_len)
}

pub fn read_sample<P: AsRef<Path>>(path: P) -> Result<Sample> {
    let mut sample = Sample::default();

    let mut r = BinReader::open(path)?;
    r.take(&mut sample.ints)?
        .take(&mut sample.flags)?
        .take(&mut sample.wide_names)?
        .take(&mut sample.custom)?;
    if !r.is_eof()? {
        debug!(r_len = *r.r_len(), "trailing bytes after sample");
    }

    Ok(sample)
}
