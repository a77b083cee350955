use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub const INPUT_FILENAME: &str = "booklet.html";
pub const OUTPUT_FILENAME: &str = "booklet.pdf";

/// The one input/output pair a run operates on. Both paths are fixed
/// siblings of the executable; nothing about the job is user-configurable.
#[derive(Debug, Clone)]
pub struct ConversionJob {
    pub input: PathBuf,
    pub output: PathBuf,
}

impl ConversionJob {
    pub fn locate() -> Result<Self> {
        let exe = std::env::current_exe().with_context(|| "resolving current executable")?;
        let dir = exe
            .parent()
            .with_context(|| "executable has no parent directory")?;
        Ok(Self::in_dir(dir))
    }

    pub fn in_dir(dir: &Path) -> Self {
        Self {
            input: dir.join(INPUT_FILENAME),
            output: dir.join(OUTPUT_FILENAME),
        }
    }
}
