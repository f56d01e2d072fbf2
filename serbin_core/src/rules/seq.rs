use crate::codec::{BinReader, BinWriter, LenPrefix};
use crate::rules::{Deser, Ser};
use anyhow::{anyhow, Result};
use std::any;
use std::collections::{LinkedList, VecDeque};
use std::io::{Read, Write};

/* Variable length: a length prefix, then the members in order. */

impl<T: Ser> Ser for [T] {
    fn ser<W: Write>(&self, w: &mut BinWriter<W>) -> Result<()> {
        LenPrefix::from(self.len()).ser(w)?;
        T::ser_slice(self, w)
    }
}

impl<T: Ser> Ser for Vec<T> {
    fn ser<W: Write>(&self, w: &mut BinWriter<W>) -> Result<()> {
        self.as_slice().ser(w)
    }
}
impl<T: Deser> Deser for Vec<T> {
    fn deser<R: Read>(r: &mut BinReader<R>) -> Result<Self> {
        let len = LenPrefix::deser(r)?;
        let mut v = vec![];
        T::deser_into_vec(*len, &mut v, r)?;
        Ok(v)
    }
}

impl<T: Ser> Ser for VecDeque<T> {
    fn ser<W: Write>(&self, w: &mut BinWriter<W>) -> Result<()> {
        LenPrefix::from(self.len()).ser(w)?;
        let (front, back) = self.as_slices();
        T::ser_slice(front, w)?;
        T::ser_slice(back, w)
    }
}
impl<T: Deser> Deser for VecDeque<T> {
    fn deser<R: Read>(r: &mut BinReader<R>) -> Result<Self> {
        let v = Vec::<T>::deser(r)?;
        Ok(VecDeque::from(v))
    }
}

impl<T: Ser> Ser for LinkedList<T> {
    fn ser<W: Write>(&self, w: &mut BinWriter<W>) -> Result<()> {
        LenPrefix::from(self.len()).ser(w)?;
        for item in self {
            item.ser(w)?;
        }
        Ok(())
    }
}
impl<T: Deser> Deser for LinkedList<T> {
    fn deser<R: Read>(r: &mut BinReader<R>) -> Result<Self> {
        let len = LenPrefix::deser(r)?;
        let mut list = LinkedList::new();
        for _ in 0..*len {
            list.push_back(T::deser(r)?);
        }
        Ok(list)
    }
}

/* Fixed length: the length is part of the type, so it is not written. */

impl<T: Ser, const N: usize> Ser for [T; N] {
    fn ser<W: Write>(&self, w: &mut BinWriter<W>) -> Result<()> {
        T::ser_slice(self, w)
    }
}
impl<T: Deser, const N: usize> Deser for [T; N] {
    fn deser<R: Read>(r: &mut BinReader<R>) -> Result<Self> {
        let mut v = vec![];
        T::deser_into_vec(N, &mut v, r)?;
        <[T; N]>::try_from(v).map_err(|v| {
            anyhow!(
                "Expected {} {} but got {}",
                N,
                any::type_name::<T>(),
                v.len()
            )
        })
    }
}
