use crate::codec::{BinReader, BinWriter, Flag};
use crate::rules::{Deser, Ser};
use anyhow::Result;
use std::io::{Read, Write};

impl<T: Ser> Ser for Option<T> {
    fn ser<W: Write>(&self, w: &mut BinWriter<W>) -> Result<()> {
        match self {
            None => Flag::Absent.ser(w),
            Some(t) => {
                Flag::Present.ser(w)?;
                t.ser(w)
            }
        }
    }
}
impl<T: Deser> Deser for Option<T> {
    fn deser<R: Read>(r: &mut BinReader<R>) -> Result<Self> {
        match Flag::deser(r)? {
            Flag::Absent => Ok(None),
            Flag::Present => {
                let t = T::deser(r)?;
                Ok(Some(t))
            }
        }
    }
}
