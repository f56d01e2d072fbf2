use anyhow::Result;
use std::env;
use std::fs;
use std::path::PathBuf;

/// A path under the temp dir that no previous run has left a file at.
pub fn test_file_path(name: &str) -> Result<PathBuf> {
    let dir = env::temp_dir().join("serbin_tests");
    fs::create_dir_all(&dir)?;

    let path = dir.join(format!("{name}.bin"));
    if path.exists() {
        fs::remove_file(&path)?;
    }
    Ok(path)
}
