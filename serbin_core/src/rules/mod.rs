//! Per-shape de/serialization rules.
//!
//! The rule for a value is chosen by trait resolution on its static type.
//! Composite shapes call [`Ser::ser`] and [`Deser::deser`] on their members.

mod option;
mod pointer;
mod primitive;
mod record;
mod seq;
mod set_map;
mod string;
mod tuple;


pub use primitive::*;

use crate::codec::{BinReader, BinWriter};
use anyhow::{Context, Result};
use std::any;
use std::io::{Read, Write};

pub trait Ser {
    fn ser<W: Write>(&self, w: &mut BinWriter<W>) -> Result<()>;

    /// Serializes `items` back to back, without a length prefix.
    ///
    /// Trivially copyable types override this with one bulk copy.
    fn ser_slice<W: Write>(items: &[Self], w: &mut BinWriter<W>) -> Result<()>
    where
        Self: Sized,
    {
        for item in items {
            item.ser(w)?;
        }
        Ok(())
    }
}

pub trait Deser: Sized {
    fn deser<R: Read>(r: &mut BinReader<R>) -> Result<Self>;

    /// Deserializes `count` items and appends them to `dst`.
    ///
    /// Trivially copyable types override this with one bulk copy.
    fn deser_into_vec<R: Read>(
        count: usize,
        dst: &mut Vec<Self>,
        r: &mut BinReader<R>,
    ) -> Result<()> {
        reserve(dst, count)?;
        for _ in 0..count {
            dst.push(Self::deser(r)?);
        }
        Ok(())
    }
}

pub trait Serializable: Ser + Deser {}
impl<T: Ser + Deser> Serializable for T {}

/// Reserves room for `count` more items, surfacing allocation failure as an error.
fn reserve<T>(dst: &mut Vec<T>, count: usize) -> Result<()> {
    dst.try_reserve_exact(count)
        .with_context(|| format!("reserve {count} {}", any::type_name::<T>()))
}
