use anyhow::Result;
use rand::Rng;
use serbin_core::{BinReader, BinWriter};
use serbin_demo::{read_sample, write_sample, Sample};
use std::collections::{BTreeSet, LinkedList};
use std::fs;
use std::path::Path;

pub fn whole_sample(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let sample = Sample::new();

    let w_len = write_sample(path, &sample)?;
    assert_eq!(fs::metadata(path)?.len(), *w_len as u64);

    let read_back = read_sample(path)?;
    assert_eq!(read_back, sample);

    // Rewriting truncates.
    write_sample(path, &Sample::default())?;
    assert_eq!(read_sample(path)?, Sample::default());
    Ok(())
}

pub fn appended_values(path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut rng = rand::thread_rng();

    let batches = (0..20)
        .map(|_| {
            let len = rng.gen_range(0..100);
            (0..len).map(|_| rng.gen::<u32>()).collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    let words = ["Dread", "Elemental", "Fang"]
        .map(String::from)
        .into_iter()
        .collect::<LinkedList<_>>();

    let mut w = BinWriter::create(path)?;
    for batch in batches.iter() {
        w.put(batch)?;
        w.put(&batch.iter().copied().collect::<BTreeSet<_>>())?;
    }
    w.put(&words)?;
    w.into_inner()?;

    let mut r = BinReader::open(path)?;
    for batch in batches.iter() {
        let read_batch: Vec<u32> = r.get()?;
        assert_eq!(&read_batch, batch);
        let read_set: BTreeSet<u32> = r.get()?;
        assert_eq!(read_set, batch.iter().copied().collect::<BTreeSet<_>>());
    }
    let read_words: LinkedList<String> = r.get()?;
    assert_eq!(read_words, words);
    assert!(r.is_eof()?);
    Ok(())
}
