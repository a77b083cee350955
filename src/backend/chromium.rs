use crate::{job::ConversionJob, layout::Layout};
use anyhow::{anyhow, Context, Result};
use headless_chrome::{Browser, LaunchOptions};
use std::ffi::OsStr;
use std::path::Path;
use std::time::Duration;
use tracing::debug;

// Images may still be decoding after navigation settles.
const SETTLE_DELAY: Duration = Duration::from_secs(2);

/// True when the library can locate a browser executable. Path lookup only;
/// nothing is launched.
pub fn detect() -> bool {
    headless_chrome::browser::default_executable().is_ok()
}

pub fn convert(job: &ConversionJob, layout: &Layout, staged: &Path) -> Result<()> {
    let url = url::Url::from_file_path(&job.input)
        .map_err(|_| anyhow!("building file URL for {}", job.input.display()))?;

    let mut browser_args: Vec<&OsStr> = Vec::new();
    if layout.local_file_access {
        browser_args.push(OsStr::new("--allow-file-access-from-files"));
    }

    let options = LaunchOptions::default_builder()
        .headless(true)
        .sandbox(false)
        .args(browser_args)
        .build()
        .map_err(|e| anyhow!("assembling browser launch options: {e}"))?;
    let browser = Browser::new(options).with_context(|| "launching headless browser")?;

    let tab = browser.new_tab().with_context(|| "opening tab")?;
    debug!("chromium loading {url}");
    tab.navigate_to(url.as_str())
        .with_context(|| format!("navigating to {url}"))?;
    tab.wait_until_navigated()
        .with_context(|| "waiting for document load")?;
    std::thread::sleep(SETTLE_DELAY);

    let pdf = tab
        .print_to_pdf(Some(layout.print_to_pdf_options()))
        .with_context(|| "printing page to PDF")?;
    std::fs::write(staged, pdf)
        .with_context(|| format!("writing PDF bytes to {}", staged.display()))?;

    Ok(())
}
