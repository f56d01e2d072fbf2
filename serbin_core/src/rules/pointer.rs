//! Owning and shared pointers serialize their pointee by value.
//!
//! Whether the pointer was shared is not recorded, so deserialization always
//! yields a fresh allocation per pointer. Nullability is expressed by wrapping
//! the pointer in `Option`.

use crate::codec::{BinReader, BinWriter};
use crate::rules::{Deser, Ser};
use anyhow::Result;
use std::io::{Read, Write};
use std::rc::Rc;
use std::sync::Arc;

impl<T: Ser + ?Sized> Ser for Box<T> {
    fn ser<W: Write>(&self, w: &mut BinWriter<W>) -> Result<()> {
        (**self).ser(w)
    }
}
impl<T: Deser> Deser for Box<T> {
    fn deser<R: Read>(r: &mut BinReader<R>) -> Result<Self> {
        let t = T::deser(r)?;
        Ok(Box::new(t))
    }
}

impl<T: Ser + ?Sized> Ser for Rc<T> {
    fn ser<W: Write>(&self, w: &mut BinWriter<W>) -> Result<()> {
        (**self).ser(w)
    }
}
impl<T: Deser> Deser for Rc<T> {
    fn deser<R: Read>(r: &mut BinReader<R>) -> Result<Self> {
        let t = T::deser(r)?;
        Ok(Rc::new(t))
    }
}

impl<T: Ser + ?Sized> Ser for Arc<T> {
    fn ser<W: Write>(&self, w: &mut BinWriter<W>) -> Result<()> {
        (**self).ser(w)
    }
}
impl<T: Deser> Deser for Arc<T> {
    fn deser<R: Read>(r: &mut BinReader<R>) -> Result<Self> {
        let t = T::deser(r)?;
        Ok(Arc::new(t))
    }
}
