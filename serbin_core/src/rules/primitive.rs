use crate::codec::{BinReader, BinWriter, Flag};
use crate::rules::{reserve, Deser, Ser};
use anyhow::{anyhow, Result};
use bytemuck::Pod;
use std::any;
use std::io::{Read, Write};
use std::mem;

/* Raw host-layout copies, for types that are plain old data. */

pub fn ser_pod<T: Pod, W: Write>(v: &T, w: &mut BinWriter<W>) -> Result<()> {
    w.write_bytes(bytemuck::bytes_of(v))
}

pub fn ser_pod_slice<T: Pod, W: Write>(items: &[T], w: &mut BinWriter<W>) -> Result<()> {
    if mem::size_of::<T>() == 0 {
        return Ok(());
    }
    w.write_bytes(bytemuck::cast_slice(items))
}

pub fn deser_pod<T: Pod, R: Read>(r: &mut BinReader<R>) -> Result<T> {
    let mut v = T::zeroed();
    r.read_bytes(bytemuck::bytes_of_mut(&mut v))?;
    Ok(v)
}

pub fn deser_pod_into_vec<T: Pod, R: Read>(
    count: usize,
    dst: &mut Vec<T>,
    r: &mut BinReader<R>,
) -> Result<()> {
    reserve(dst, count)?;
    let start = dst.len();
    dst.resize(start + count, T::zeroed());
    if mem::size_of::<T>() == 0 {
        return Ok(());
    }
    r.read_bytes(bytemuck::cast_slice_mut(&mut dst[start..]))
}

/// Marks types as trivially copyable: they are de/serialized as their raw bytes,
/// and containers of them are copied in one contiguous block.
///
/// The type must implement [`bytemuck::Pod`], i.e. have no indirection, no
/// padding, and accept every bit pattern.
///
/// ```
/// use bytemuck::{Pod, Zeroable};
///
/// #[repr(C)]
/// #[derive(Pod, Zeroable, Clone, Copy, PartialEq, Debug)]
/// struct Point {
///     x: f32,
///     y: f32,
/// }
/// serbin_core::impl_trivial!(Point);
///
/// let pts = vec![Point { x: 1.0, y: 2.0 }; 3];
/// let buf = serbin_core::ser_solo(&pts)?;
/// assert_eq!(buf.len(), std::mem::size_of::<usize>() + 3 * 8);
/// assert_eq!(pts, serbin_core::deser_solo::<Vec<Point>>(&buf)?);
/// # Ok::<(), anyhow::Error>(())
/// ```
#[macro_export]
macro_rules! impl_trivial {
    ($($t:ty),* $(,)?) => {$(
        impl $crate::rules::Ser for $t {
            fn ser<W: ::std::io::Write>(
                &self,
                w: &mut $crate::codec::BinWriter<W>,
            ) -> $crate::Result<()> {
                $crate::rules::ser_pod(self, w)
            }
            fn ser_slice<W: ::std::io::Write>(
                items: &[Self],
                w: &mut $crate::codec::BinWriter<W>,
            ) -> $crate::Result<()> {
                $crate::rules::ser_pod_slice(items, w)
            }
        }
        impl $crate::rules::Deser for $t {
            fn deser<R: ::std::io::Read>(
                r: &mut $crate::codec::BinReader<R>,
            ) -> $crate::Result<Self> {
                $crate::rules::deser_pod(r)
            }
            fn deser_into_vec<R: ::std::io::Read>(
                count: usize,
                dst: &mut ::std::vec::Vec<Self>,
                r: &mut $crate::codec::BinReader<R>,
            ) -> $crate::Result<()> {
                $crate::rules::deser_pod_into_vec(count, dst, r)
            }
        }
    )*};
}

impl_trivial!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

/* Fixed width, but not every bit pattern is a valid value. Never bulk-copied. */

impl Ser for bool {
    fn ser<W: Write>(&self, w: &mut BinWriter<W>) -> Result<()> {
        Flag::from(*self).ser(w)
    }
}
impl Deser for bool {
    fn deser<R: Read>(r: &mut BinReader<R>) -> Result<Self> {
        let flag = Flag::deser(r)?;
        Ok(flag.into())
    }
}

impl Ser for char {
    fn ser<W: Write>(&self, w: &mut BinWriter<W>) -> Result<()> {
        u32::from(*self).ser(w)
    }
}
impl Deser for char {
    fn deser<R: Read>(r: &mut BinReader<R>) -> Result<Self> {
        let int = u32::deser(r)?;
        char::from_u32(int).ok_or_else(|| anyhow!("Invalid {} {:#x}", any::type_name::<char>(), int))
    }
}

impl Ser for () {
    fn ser<W: Write>(&self, _w: &mut BinWriter<W>) -> Result<()> {
        Ok(())
    }
}
impl Deser for () {
    fn deser<R: Read>(_r: &mut BinReader<R>) -> Result<Self> {
        Ok(())
    }
}

/* References serialize their referent. */

impl<T: Ser + ?Sized> Ser for &T {
    fn ser<W: Write>(&self, w: &mut BinWriter<W>) -> Result<()> {
        (**self).ser(w)
    }
}
