use anyhow::Result;
use serbin_core::{deser_file, BinReader};
use serbin_demo::{write_sample, Sample};
use std::fs::{self, OpenOptions};
use std::io;
use std::mem;
use std::path::Path;

fn io_kind(err: &anyhow::Error) -> Option<io::ErrorKind> {
    err.downcast_ref::<io::Error>().map(|e| e.kind())
}

pub fn truncated_file(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let w_len = write_sample(path, &Sample::new())?;

    // Cut inside the first member, between the flag and the body of `Some(456)`.
    let cut = mem::size_of::<usize>() + 3;
    assert!(*w_len > cut);
    let file = OpenOptions::new().write(true).open(path)?;
    file.set_len(cut as u64)?;
    drop(file);

    let mut r = BinReader::open(path)?;
    let err = r.get::<Vec<Option<i32>>>().unwrap_err();
    assert_eq!(io_kind(&err), Some(io::ErrorKind::UnexpectedEof), "{err:?}");
    Ok(())
}

pub fn missing_file(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    if path.exists() {
        fs::remove_file(path)?;
    }

    let err = deser_file::<_, Vec<u8>>(path).unwrap_err();
    assert_eq!(io_kind(&err), Some(io::ErrorKind::NotFound), "{err:?}");
    Ok(())
}
