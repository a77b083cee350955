use bookpress::layout::{mm_to_inches, Layout, PageSize};

#[test]
fn defaults_match_the_booklet_page_setup() {
    let layout = Layout::default();
    assert_eq!(layout.page_size, PageSize::A4);
    assert_eq!(layout.margin_top_mm, 20.0);
    assert_eq!(layout.margin_right_mm, 20.0);
    assert_eq!(layout.margin_bottom_mm, 20.0);
    assert_eq!(layout.margin_left_mm, 20.0);
    assert_eq!(layout.encoding, "UTF-8");
    assert!(layout.local_file_access);
}

#[test]
fn wkhtmltopdf_args_carry_the_full_page_setup() {
    let args = Layout::default().wkhtmltopdf_args();
    for flag in [
        "--page-size",
        "A4",
        "--margin-top",
        "--margin-right",
        "--margin-bottom",
        "--margin-left",
        "--encoding",
        "UTF-8",
        "--enable-local-file-access",
    ] {
        assert!(args.iter().any(|a| a == flag), "missing {flag}");
    }
    assert_eq!(args.iter().filter(|a| *a == "20mm").count(), 4);
}

#[test]
fn local_file_access_flag_is_droppable() {
    let layout = Layout {
        local_file_access: false,
        ..Layout::default()
    };
    assert!(!layout
        .wkhtmltopdf_args()
        .iter()
        .any(|a| a == "--enable-local-file-access"));
}

#[test]
fn page_css_declares_size_and_margins() {
    let css = Layout::default().page_css();
    assert!(css.contains("@page"));
    assert!(css.contains("size: A4"));
    assert!(css.contains("margin: 20mm 20mm 20mm 20mm"));
}

#[test]
fn print_options_convert_millimeters_to_inches() {
    let opts = Layout::default().print_to_pdf_options();
    let close = |got: Option<f64>, want: f64| (got.unwrap() - want).abs() < 1e-3;

    assert!(close(opts.paper_width, 8.2677));
    assert!(close(opts.paper_height, 11.6929));
    assert!(close(opts.margin_top, 0.7874));
    assert!(close(opts.margin_right, 0.7874));
    assert!(close(opts.margin_bottom, 0.7874));
    assert!(close(opts.margin_left, 0.7874));
    assert_eq!(opts.print_background, Some(true));
}

#[test]
fn millimeter_conversion_round_trips_an_inch() {
    assert!((mm_to_inches(25.4) - 1.0).abs() < 1e-9);
}
