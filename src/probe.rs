use crate::backend::{chromium, weasyprint, wkhtmltopdf, Backend};
use std::process::{Command, Stdio};
use tracing::debug;

/// Walk the priority list and return the first backend whose capability
/// check passes, or `None` when the machine has none of them. Probing only
/// detects; it never installs or initializes anything.
pub fn select_backend() -> Option<Backend> {
    first_available(is_available)
}

/// Priority walk over [`Backend::PRIORITY`]; the first hit short-circuits
/// the remaining probes.
pub fn first_available<F: FnMut(Backend) -> bool>(mut probe: F) -> Option<Backend> {
    Backend::PRIORITY.into_iter().find(|b| probe(*b))
}

pub fn is_available(backend: Backend) -> bool {
    let available = match backend {
        Backend::Chromium => chromium::detect(),
        Backend::Weasyprint => version_probe(weasyprint::TOOL),
        Backend::Wkhtmltopdf => version_probe(wkhtmltopdf::TOOL),
    };
    debug!("probe {backend}: available={available}");
    available
}

/// A clean `--version` exit means the tool is usable. Every failure mode,
/// including the tool not existing at all, reads as unavailable.
pub fn version_probe(tool: &str) -> bool {
    Command::new(tool)
        .arg("--version")
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}
