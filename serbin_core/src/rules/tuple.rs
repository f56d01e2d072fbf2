use crate::codec::{BinReader, BinWriter};
use crate::rules::{Deser, Ser};
use anyhow::Result;
use std::io::{Read, Write};

/// Slots are de/serialized in ascending index order, with no framing.
macro_rules! impl_tuple {
    ($($name:ident : $idx:tt),+) => {
        impl<$($name: Ser),+> Ser for ($($name,)+) {
            fn ser<W: Write>(&self, w: &mut BinWriter<W>) -> Result<()> {
                $(self.$idx.ser(w)?;)+
                Ok(())
            }
        }
        impl<$($name: Deser),+> Deser for ($($name,)+) {
            fn deser<R: Read>(r: &mut BinReader<R>) -> Result<Self> {
                // Tuple expressions evaluate left to right.
                Ok(($($name::deser(r)?,)+))
            }
        }
    };
}

impl_tuple!(A: 0);
impl_tuple!(A: 0, B: 1);
impl_tuple!(A: 0, B: 1, C: 2);
impl_tuple!(A: 0, B: 1, C: 2, D: 3);
impl_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4);
impl_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5);
impl_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6);
impl_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7);
impl_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8);
impl_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8, J: 9);
impl_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8, J: 9, K: 10);
impl_tuple!(A: 0, B: 1, C: 2, D: 3, E: 4, F: 5, G: 6, H: 7, I: 8, J: 9, K: 10, L: 11);
