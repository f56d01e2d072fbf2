use crate::codec::{BinReader, BinWriter};
use anyhow::{anyhow, Result};
use derive_more::{Deref, From};
use num_derive::FromPrimitive;
use num_traits::FromPrimitive;
use std::any;
use std::io::{Read, Write};
use std::mem;

/// The element count preceding every variable-length container.
///
/// It is a native `usize`, so its width follows the host platform.
#[derive(From, Deref, PartialEq, Eq, Clone, Copy, Debug)]
pub struct LenPrefix(usize);
impl LenPrefix {
    pub const WIDTH: usize = mem::size_of::<usize>();

    pub fn ser<W: Write>(&self, w: &mut BinWriter<W>) -> Result<()> {
        w.write_bytes(&self.0.to_ne_bytes())
    }
    pub fn deser<R: Read>(r: &mut BinReader<R>) -> Result<Self> {
        let mut buf = [0u8; mem::size_of::<usize>()];
        r.read_bytes(&mut buf)?;
        let int = usize::from_ne_bytes(buf);
        Ok(Self(int))
    }
}

/// The one-byte flag preceding an optional payload. `bool` is encoded the same way.
#[repr(u8)]
#[derive(PartialEq, Eq, Clone, Copy, FromPrimitive, Debug)]
pub enum Flag {
    Absent = 0,
    Present = 1,
}
impl Flag {
    pub const WIDTH: usize = mem::size_of::<u8>();

    pub fn ser<W: Write>(&self, w: &mut BinWriter<W>) -> Result<()> {
        w.write_bytes(&[*self as u8])
    }
    pub fn deser<R: Read>(r: &mut BinReader<R>) -> Result<Self> {
        let mut buf = [0u8; mem::size_of::<u8>()];
        r.read_bytes(&mut buf)?;
        Self::try_from(buf[0])
    }
}
impl TryFrom<u8> for Flag {
    type Error = anyhow::Error;
    fn try_from(int: u8) -> Result<Self> {
        Flag::from_u8(int).ok_or_else(|| anyhow!("Unknown {} {}", any::type_name::<Flag>(), int))
    }
}
impl From<bool> for Flag {
    fn from(b: bool) -> Self {
        if b {
            Flag::Present
        } else {
            Flag::Absent
        }
    }
}
impl From<Flag> for bool {
    fn from(flag: Flag) -> Self {
        flag == Flag::Present
    }
}
