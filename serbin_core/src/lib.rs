//! Binary de/serialization driven by the static type of the value.
//!
//! Every supported shape implements [`Ser`] and [`Deser`]. Containers, tuples,
//! pointers and optionals serialize their members through the same traits, so
//! any composition of supported shapes is itself serializable.
//!
//! ```
//! use serbin_core::{BinReader, BinWriter};
//! use std::collections::BTreeMap;
//!
//! let ints: Vec<Option<i32>> = vec![None, Some(456), Some(7890)];
//! let flags = BTreeMap::from([(String::from("Aurora"), true)]);
//!
//! let mut w = BinWriter::from(vec![]);
//! w.put(&ints)?.put(&flags)?;
//! let buf = w.into_inner()?;
//!
//! let mut r = BinReader::from(&buf[..]);
//! let ints_out: Vec<Option<i32>> = r.get()?;
//! let flags_out: BTreeMap<String, bool> = r.get()?;
//! assert_eq!(ints, ints_out);
//! assert_eq!(flags, flags_out);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod codec;
pub mod rules;

pub use anyhow::{Error, Result};
pub use codec::*;
pub use rules::{Deser, Ser, Serializable};
