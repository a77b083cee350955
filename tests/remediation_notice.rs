use bookpress::backend::Backend;
use bookpress::runner::no_backend_notice;

#[test]
fn notice_lists_every_install_route() {
    let notice = no_backend_notice();
    assert!(notice.contains("Chromium"));
    assert!(notice.contains("WeasyPrint"));
    assert!(notice.contains("wkhtmltopdf"));
}

#[test]
fn notice_numbers_the_options_in_probe_order() {
    let notice = no_backend_notice();
    for (i, backend) in Backend::PRIORITY.iter().enumerate() {
        let line = format!("  {}. {}", i + 1, backend.remediation());
        assert!(notice.contains(&line), "missing line: {line}");
    }
}
