use bookpress::backend::Backend;
use bookpress::probe::{first_available, version_probe};

#[test]
fn chromium_wins_when_everything_is_installed() {
    assert_eq!(first_available(|_| true), Some(Backend::Chromium));
}

#[test]
fn priority_falls_through_in_order() {
    let picked = first_available(|b| b != Backend::Chromium);
    assert_eq!(picked, Some(Backend::Weasyprint));

    let picked = first_available(|b| b == Backend::Wkhtmltopdf);
    assert_eq!(picked, Some(Backend::Wkhtmltopdf));
}

#[test]
fn none_when_nothing_is_installed() {
    assert_eq!(first_available(|_| false), None);
}

#[test]
fn first_hit_short_circuits_remaining_probes() {
    let mut probed = Vec::new();
    let picked = first_available(|b| {
        probed.push(b);
        true
    });
    assert_eq!(picked, Some(Backend::Chromium));
    assert_eq!(probed, vec![Backend::Chromium]);
}

#[test]
fn probe_failure_reads_as_unavailable() {
    // Tool does not exist; the spawn error must become "unavailable",
    // not a panic or a propagated error.
    assert!(!version_probe("bookpress-no-such-tool"));
}
