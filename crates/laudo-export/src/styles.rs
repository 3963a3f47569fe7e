use serde::{Deserialize, Serialize};

/// Document styling configuration for DOCX export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentStyles {
    /// Font for body text (e.g. "Times New Roman", "Calibri").
    pub body_font: String,

    /// Font for headings (e.g. "Arial", "Calibri").
    pub heading_font: String,

    /// Body text font size in points.
    pub body_size: usize,

    /// Title ("LAUDO DE ULTRASSOM") font size in points.
    pub title_size: usize,

    /// Section heading font size in points.
    pub heading_size: usize,

    /// Page margin in inches (applied uniformly).
    pub margin_inches: f64,
}

impl Default for DocumentStyles {
    fn default() -> Self {
        Self {
            body_font: "Times New Roman".to_string(),
            heading_font: "Arial".to_string(),
            body_size: 11,
            title_size: 16,
            heading_size: 12,
            margin_inches: 0.8,
        }
    }
}

/// Page geometry used to paginate plain text.
///
/// A4 portrait with 20 mm margins at 10 pt monospace fits roughly 90
/// characters and 60 lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageLayout {
    pub chars_per_line: usize,
    pub lines_per_page: usize,
}

impl Default for PageLayout {
    fn default() -> Self {
        Self {
            chars_per_line: 90,
            lines_per_page: 60,
        }
    }
}
