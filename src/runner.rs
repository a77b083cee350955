use crate::{
    backend::{self, Backend},
    job::ConversionJob,
    layout::Layout,
    probe,
    util::now_rfc3339,
};
use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt::Write;
use tracing::{debug, info};

#[derive(Debug, Serialize)]
struct RunReport {
    backend: &'static str,
    input: String,
    output: String,
    started: String,
    finished: String,
}

/// One pass through probing, converting, done. No state is re-entered;
/// conversion failures propagate to the single catch point in `main`.
pub fn run() -> Result<()> {
    let job = ConversionJob::locate()?;
    let layout = Layout::default();
    let started = now_rfc3339();

    println!("bookpress PDF generator");
    println!("{}", "=".repeat(50));

    info!("probing for an HTML-to-PDF backend");
    let Some(selected) = probe::select_backend() else {
        use std::io::Write as _;
        println!();
        print!("{}", no_backend_notice());
        let _ = std::io::stdout().flush();
        std::process::exit(1);
    };

    info!("selected backend: {selected}");
    println!("Generating PDF with {selected}...");
    backend::convert(selected, &job, &layout)
        .with_context(|| format!("converting {}", job.input.display()))?;

    let report = RunReport {
        backend: selected.name(),
        input: job.input.display().to_string(),
        output: job.output.display().to_string(),
        started,
        finished: now_rfc3339(),
    };
    debug!(
        "run report: {}",
        serde_json::to_string(&report).unwrap_or_default()
    );

    println!("PDF generated successfully: {}", job.output.display());
    Ok(())
}

/// Instructional text for the no-backend case: one install route per
/// backend, in probe order.
pub fn no_backend_notice() -> String {
    let mut notice = String::from("No HTML-to-PDF backend found!\nPlease install one of the following:\n");
    for (i, backend) in Backend::PRIORITY.iter().enumerate() {
        let _ = writeln!(notice, "  {}. {}", i + 1, backend.remediation());
    }
    notice
}
