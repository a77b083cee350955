use crate::{job::ConversionJob, layout::Layout};
use anyhow::{bail, Context, Result};
use std::path::Path;
use std::process::Command;
use tracing::debug;

pub const TOOL: &str = "wkhtmltopdf";

pub fn convert(job: &ConversionJob, layout: &Layout, staged: &Path) -> Result<()> {
    let mut cmd = Command::new(TOOL);
    cmd.args(layout.wkhtmltopdf_args());
    cmd.arg(&job.input).arg(staged);
    debug!("running {cmd:?}");

    let output = cmd.output().with_context(|| "spawning wkhtmltopdf")?;
    if !output.status.success() {
        bail!(
            "wkhtmltopdf exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(())
}
