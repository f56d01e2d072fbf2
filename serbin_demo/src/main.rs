use anyhow::{anyhow, Context, Result};
use serbin_demo::{read_sample, write_sample, Sample, ENV_VAR_DEMO_PATH};
use std::env;
use std::fs;
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("serbin_demo=info".parse()?),
        )
        .init();

    let path = env::var(ENV_VAR_DEMO_PATH)
        .map_or_else(|_| serbin_demo::default_demo_path(), PathBuf::from);
    if let Some(parent_dir) = path.parent() {
        fs::create_dir_all(parent_dir)
            .with_context(|| format!("create_dir_all {parent_dir:?}"))?;
    }

    let sample = Sample::new();
    let w_len = write_sample(&path, &sample)?;
    info!(?path, w_len = *w_len, "wrote sample");

    let read_back = read_sample(&path)?;
    info!(ints = ?read_back.ints, flags = ?read_back.flags, "read ordered members");
    info!(wide_names = read_back.wide_names.len(), custom = ?read_back.custom.data(), "read unordered and custom members");

    if read_back != sample {
        return Err(anyhow!("Read back {read_back:?}, expected {sample:?}"));
    }
    info!("sample round-tripped");

    Ok(())
}
