use anyhow::Result;
use serbin_core::{deser_file, ser_file};
use serbin_demo::Custom;
use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

pub fn optional_ints(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let ints = vec![None, Some(456), Some(7890)];

    let w_len = ser_file(path, &ints)?;
    assert_eq!(fs::metadata(path)?.len(), *w_len as u64);

    let read_back: Vec<Option<i32>> = deser_file(path)?;
    assert_eq!(read_back, ints);
    Ok(())
}

pub fn flags_map(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let flags = HashMap::from([
        (String::from("Aurora"), true),
        (String::from("Borealis"), false),
        (String::from("Club"), true),
    ]);

    ser_file(path, &flags)?;

    let read_back: HashMap<String, bool> = deser_file(path)?;
    assert_eq!(read_back, flags);

    let read_back: BTreeMap<String, bool> = deser_file(path)?;
    assert_eq!(
        read_back.into_iter().collect::<Vec<_>>(),
        [
            (String::from("Aurora"), true),
            (String::from("Borealis"), false),
            (String::from("Club"), true),
        ]
    );
    Ok(())
}

pub fn custom_record(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    let custom = Custom::new(67.0, 0.125678, 800009);
    ser_file(path, &custom)?;
    let read_back: Custom = deser_file(path)?;
    assert_eq!(read_back.data(), Some(&(67.0, 0.125678, 800009)));

    let empty = Custom::empty();
    ser_file(path, &empty)?;
    assert_eq!(fs::metadata(path)?.len(), 1);
    let read_back: Custom = deser_file(path)?;
    assert_eq!(read_back.data(), None);
    Ok(())
}
