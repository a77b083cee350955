pub mod chromium;
pub mod weasyprint;
pub mod wkhtmltopdf;

use crate::{job::ConversionJob, layout::Layout};
use anyhow::{anyhow, bail, Context, Result};
use serde::Serialize;
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Backend {
    Chromium,
    Weasyprint,
    Wkhtmltopdf,
}

impl Backend {
    /// Probe order; the first available backend wins.
    pub const PRIORITY: [Backend; 3] = [Backend::Chromium, Backend::Weasyprint, Backend::Wkhtmltopdf];

    pub fn name(self) -> &'static str {
        match self {
            Backend::Chromium => "chromium",
            Backend::Weasyprint => "weasyprint",
            Backend::Wkhtmltopdf => "wkhtmltopdf",
        }
    }

    /// Install suggestion shown when no backend is available.
    pub fn remediation(self) -> &'static str {
        match self {
            Backend::Chromium => "a Chromium-based browser (Chrome, Chromium, or Edge)",
            Backend::Weasyprint => "WeasyPrint (pip install weasyprint)",
            Backend::Wkhtmltopdf => "wkhtmltopdf (https://wkhtmltopdf.org/downloads.html)",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Run the selected backend against the job. Every strategy renders into a
/// staging file next to the output path; the output path is only touched by
/// the rename on success, so a failed run never leaves a partial PDF there.
pub fn convert(backend: Backend, job: &ConversionJob, layout: &Layout) -> Result<()> {
    if !job.input.exists() {
        bail!("input does not exist: {}", job.input.display());
    }

    let out_dir = job.output.parent().unwrap_or_else(|| Path::new("."));
    let staged = tempfile::Builder::new()
        .prefix(".bookpress-")
        .suffix(".pdf")
        .tempfile_in(out_dir)
        .with_context(|| format!("staging output in {}", out_dir.display()))?;

    match backend {
        Backend::Chromium => chromium::convert(job, layout, staged.path())?,
        Backend::Weasyprint => weasyprint::convert(job, layout, staged.path())?,
        Backend::Wkhtmltopdf => wkhtmltopdf::convert(job, layout, staged.path())?,
    }

    staged
        .persist(&job.output)
        .map_err(|e| anyhow!("publishing output {}: {e}", job.output.display()))?;

    Ok(())
}
