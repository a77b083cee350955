use bookpress::job::{ConversionJob, INPUT_FILENAME, OUTPUT_FILENAME};
use std::path::Path;

#[test]
fn job_paths_are_fixed_siblings() {
    let dir = Path::new("/opt/bookpress");
    let job = ConversionJob::in_dir(dir);
    assert_eq!(job.input, dir.join(INPUT_FILENAME));
    assert_eq!(job.output, dir.join(OUTPUT_FILENAME));
}

#[test]
fn input_is_html_and_output_is_pdf() {
    let job = ConversionJob::in_dir(Path::new("."));
    assert_eq!(job.input.extension().unwrap(), "html");
    assert_eq!(job.output.extension().unwrap(), "pdf");
}
