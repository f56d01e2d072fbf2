//! Sets and maps are written in their own iteration order, and rebuilt by
//! inserting each deserialized member in wire order.
//!
//! Should the wire contain duplicates, the first occurrence wins:
//! `HashSet::insert` and `BTreeSet::insert` keep the value already present,
//! and maps insert through `entry(k).or_insert(v)`.

use crate::codec::{BinReader, BinWriter, LenPrefix};
use crate::rules::{Deser, Ser};
use anyhow::{Context, Result};
use std::any;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::{BuildHasher, Hash};
use std::io::{Read, Write};

impl<T: Ser, S> Ser for HashSet<T, S> {
    fn ser<W: Write>(&self, w: &mut BinWriter<W>) -> Result<()> {
        LenPrefix::from(self.len()).ser(w)?;
        for item in self {
            item.ser(w)?;
        }
        Ok(())
    }
}
impl<T, S> Deser for HashSet<T, S>
where
    T: Deser + Eq + Hash,
    S: BuildHasher + Default,
{
    fn deser<R: Read>(r: &mut BinReader<R>) -> Result<Self> {
        let len = LenPrefix::deser(r)?;
        let mut set = HashSet::with_hasher(S::default());
        set.try_reserve(*len)
            .with_context(|| format!("reserve {} {}", *len, any::type_name::<T>()))?;
        for _ in 0..*len {
            set.insert(T::deser(r)?);
        }
        Ok(set)
    }
}

impl<T: Ser> Ser for BTreeSet<T> {
    fn ser<W: Write>(&self, w: &mut BinWriter<W>) -> Result<()> {
        LenPrefix::from(self.len()).ser(w)?;
        for item in self {
            item.ser(w)?;
        }
        Ok(())
    }
}
impl<T: Deser + Ord> Deser for BTreeSet<T> {
    fn deser<R: Read>(r: &mut BinReader<R>) -> Result<Self> {
        let len = LenPrefix::deser(r)?;
        let mut set = BTreeSet::new();
        for _ in 0..*len {
            set.insert(T::deser(r)?);
        }
        Ok(set)
    }
}

impl<K: Ser, V: Ser, S> Ser for HashMap<K, V, S> {
    fn ser<W: Write>(&self, w: &mut BinWriter<W>) -> Result<()> {
        LenPrefix::from(self.len()).ser(w)?;
        for (k, v) in self {
            k.ser(w)?;
            v.ser(w)?;
        }
        Ok(())
    }
}
impl<K, V, S> Deser for HashMap<K, V, S>
where
    K: Deser + Eq + Hash,
    V: Deser,
    S: BuildHasher + Default,
{
    fn deser<R: Read>(r: &mut BinReader<R>) -> Result<Self> {
        let len = LenPrefix::deser(r)?;
        let mut map = HashMap::with_hasher(S::default());
        map.try_reserve(*len).with_context(|| {
            format!("reserve {} {}", *len, any::type_name::<(K, V)>())
        })?;
        for _ in 0..*len {
            let (k, v) = <(K, V)>::deser(r)?;
            map.entry(k).or_insert(v);
        }
        Ok(map)
    }
}

impl<K: Ser, V: Ser> Ser for BTreeMap<K, V> {
    fn ser<W: Write>(&self, w: &mut BinWriter<W>) -> Result<()> {
        LenPrefix::from(self.len()).ser(w)?;
        for (k, v) in self {
            k.ser(w)?;
            v.ser(w)?;
        }
        Ok(())
    }
}
impl<K: Deser + Ord, V: Deser> Deser for BTreeMap<K, V> {
    fn deser<R: Read>(r: &mut BinReader<R>) -> Result<Self> {
        let len = LenPrefix::deser(r)?;
        let mut map = BTreeMap::new();
        for _ in 0..*len {
            let (k, v) = <(K, V)>::deser(r)?;
            map.entry(k).or_insert(v);
        }
        Ok(map)
    }
}
