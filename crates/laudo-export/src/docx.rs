use std::io::Cursor;

use docx_rs::{AlignmentType, Docx, PageMargin, Paragraph, Run, RunFonts, Style, StyleType};

use crate::error::ExportError;
use crate::styles::DocumentStyles;

const TWIPS_PER_INCH: f64 = 1440.0;

/// How one line of report text is laid out in the document.
#[derive(Debug, PartialEq, Eq)]
enum Line<'a> {
    Blank,
    /// Upper-case line without a colon, e.g. "LAUDO DE ULTRASSOM".
    Title(&'a str),
    /// Upper-case line ending in ':', e.g. "CONCLUSÃO:".
    Heading(&'a str),
    Bullet(&'a str),
    /// `Label: value` header field.
    Field(&'a str, &'a str),
    Body(&'a str),
}

fn classify(line: &str) -> Line<'_> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Line::Blank;
    }
    if let Some(text) = trimmed.strip_prefix("- ") {
        return Line::Bullet(text);
    }
    if is_upper(trimmed) {
        return match trimmed.strip_suffix(':') {
            Some(text) => Line::Heading(text),
            None => Line::Title(trimmed),
        };
    }
    if let Some((label, value)) = trimmed.split_once(": ")
        && is_field_label(label)
    {
        return Line::Field(label, value);
    }
    Line::Body(trimmed)
}

fn is_upper(text: &str) -> bool {
    text.chars().any(char::is_alphabetic) && !text.chars().any(char::is_lowercase)
}

/// Short, sentence-free prefix such as "Data de Nascimento".
fn is_field_label(label: &str) -> bool {
    label.chars().count() <= 24 && !label.contains(['.', ',', '('])
}

/// Generate a DOCX document from plain report text.
///
/// - upper-case line ending in `:` → section heading
/// - other upper-case line → title
/// - `- item` → bullet paragraph
/// - `Label: value` → bold label followed by the value
/// - everything else → body paragraph
pub fn generate_docx(text: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let margin = (styles.margin_inches * TWIPS_PER_INCH).round() as i32;
    let mut docx = Docx::new()
        .page_margin(
            PageMargin::new()
                .top(margin)
                .bottom(margin)
                .left(margin)
                .right(margin),
        )
        .add_style(heading_style("Title", "Title", styles.title_size))
        .add_style(heading_style("Heading1", "heading 1", styles.heading_size));

    let mut paragraphs = 0usize;
    for line in text.lines() {
        let paragraph = match classify(line) {
            Line::Blank => Paragraph::new(),
            Line::Title(text) => heading_paragraph(text, "Title", styles).align(AlignmentType::Center),
            Line::Heading(text) => heading_paragraph(text, "Heading1", styles),
            Line::Bullet(text) => bullet_paragraph(text, styles),
            Line::Field(label, value) => Paragraph::new()
                .add_run(body_run(&format!("{label}: "), styles).bold())
                .add_run(body_run(value, styles)),
            Line::Body(text) => Paragraph::new()
                .align(AlignmentType::Left)
                .add_run(body_run(text, styles)),
        };
        docx = docx.add_paragraph(paragraph);
        paragraphs += 1;
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    let bytes = buf.into_inner();
    tracing::debug!(paragraphs, bytes = bytes.len(), "DOCX generated");
    Ok(bytes)
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // OOXML uses half-points
}

fn heading_paragraph(text: &str, style_id: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().style(style_id).add_run(
        Run::new()
            .add_text(text)
            .bold()
            .fonts(RunFonts::new().ascii(&styles.heading_font)),
    )
}

fn bullet_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(body_run("\u{2022} ", styles))
        .add_run(body_run(text, styles))
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}
