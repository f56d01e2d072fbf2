use crate::codec::{BinReader, BinWriter, LenPrefix};
use crate::rules::{Deser, Ser};
use anyhow::{Context, Result};
use std::any;
use std::io::{Read, Write};

/// The length prefix counts bytes, not chars.
impl Ser for str {
    fn ser<W: Write>(&self, w: &mut BinWriter<W>) -> Result<()> {
        LenPrefix::from(self.len()).ser(w)?;
        w.write_bytes(self.as_bytes())
    }
}

impl Ser for String {
    fn ser<W: Write>(&self, w: &mut BinWriter<W>) -> Result<()> {
        self.as_str().ser(w)
    }
}
impl Deser for String {
    fn deser<R: Read>(r: &mut BinReader<R>) -> Result<Self> {
        let len = LenPrefix::deser(r)?;
        let mut body = vec![];
        u8::deser_into_vec(*len, &mut body, r)?;
        String::from_utf8(body).with_context(|| format!("body of {}", any::type_name::<Self>()))
    }
}
