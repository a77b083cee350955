use headless_chrome::types::PrintToPdfOptions;
use serde::{Deserialize, Serialize};

const MM_PER_INCH: f64 = 25.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageSize {
    A4,
}

impl PageSize {
    pub fn css_name(self) -> &'static str {
        match self {
            PageSize::A4 => "A4",
        }
    }

    /// Portrait dimensions in millimeters.
    pub fn dimensions_mm(self) -> (f64, f64) {
        match self {
            PageSize::A4 => (210.0, 297.0),
        }
    }
}

/// Page setup shared by every backend. The values never vary at runtime;
/// each backend expresses them in its own option format.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    pub page_size: PageSize,
    pub margin_top_mm: f64,
    pub margin_right_mm: f64,
    pub margin_bottom_mm: f64,
    pub margin_left_mm: f64,
    pub encoding: String,
    pub local_file_access: bool,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            margin_top_mm: 20.0,
            margin_right_mm: 20.0,
            margin_bottom_mm: 20.0,
            margin_left_mm: 20.0,
            encoding: "UTF-8".into(),
            local_file_access: true,
        }
    }
}

impl Layout {
    /// Chromium's print options take lengths in inches.
    pub fn print_to_pdf_options(&self) -> PrintToPdfOptions {
        let (width_mm, height_mm) = self.page_size.dimensions_mm();
        PrintToPdfOptions {
            print_background: Some(true),
            prefer_css_page_size: Some(true),
            paper_width: Some(mm_to_inches(width_mm)),
            paper_height: Some(mm_to_inches(height_mm)),
            margin_top: Some(mm_to_inches(self.margin_top_mm)),
            margin_right: Some(mm_to_inches(self.margin_right_mm)),
            margin_bottom: Some(mm_to_inches(self.margin_bottom_mm)),
            margin_left: Some(mm_to_inches(self.margin_left_mm)),
            display_header_footer: Some(false),
            ..Default::default()
        }
    }

    /// `@page` stylesheet handed to WeasyPrint (margins in top/right/bottom/left order).
    pub fn page_css(&self) -> String {
        format!(
            "@page {{ size: {}; margin: {}mm {}mm {}mm {}mm; }}\n",
            self.page_size.css_name(),
            self.margin_top_mm,
            self.margin_right_mm,
            self.margin_bottom_mm,
            self.margin_left_mm,
        )
    }

    /// Flag vector for the wkhtmltopdf command line, without the positional paths.
    pub fn wkhtmltopdf_args(&self) -> Vec<String> {
        let mut args = vec![
            "--page-size".to_string(),
            self.page_size.css_name().to_string(),
            "--margin-top".to_string(),
            format!("{}mm", self.margin_top_mm),
            "--margin-right".to_string(),
            format!("{}mm", self.margin_right_mm),
            "--margin-bottom".to_string(),
            format!("{}mm", self.margin_bottom_mm),
            "--margin-left".to_string(),
            format!("{}mm", self.margin_left_mm),
            "--encoding".to_string(),
            self.encoding.clone(),
        ];
        if self.local_file_access {
            args.push("--enable-local-file-access".to_string());
        }
        args
    }
}

pub fn mm_to_inches(mm: f64) -> f64 {
    mm / MM_PER_INCH
}
