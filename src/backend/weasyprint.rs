use crate::{job::ConversionJob, layout::Layout};
use anyhow::{bail, Context, Result};
use std::io::Write;
use std::path::Path;
use std::process::Command;
use tracing::debug;

pub const TOOL: &str = "weasyprint";

/// WeasyPrint has no margin flags; the page setup travels as a generated
/// `@page` stylesheet instead.
pub fn convert(job: &ConversionJob, layout: &Layout, staged: &Path) -> Result<()> {
    let mut stylesheet = tempfile::Builder::new()
        .prefix(".bookpress-")
        .suffix(".css")
        .tempfile()
        .with_context(|| "creating page stylesheet")?;
    stylesheet
        .write_all(layout.page_css().as_bytes())
        .with_context(|| "writing page stylesheet")?;
    stylesheet.flush().with_context(|| "flushing page stylesheet")?;

    let mut cmd = Command::new(TOOL);
    cmd.arg("--encoding")
        .arg(&layout.encoding)
        .arg("--stylesheet")
        .arg(stylesheet.path())
        .arg(&job.input)
        .arg(staged);
    debug!("running {cmd:?}");

    let output = cmd.output().with_context(|| "spawning weasyprint")?;
    if !output.status.success() {
        bail!(
            "weasyprint exited with {}: {}",
            output.status,
            String::from_utf8_lossy(&output.stderr).trim()
        );
    }

    Ok(())
}
