//! PDF report writer using printpdf builtin fonts.
//!
//! A4 portrait, 10 mm margins, bold title and regular body text.

use crate::domain::{DomainError, LineStyle, ReportLayout};
use crate::ports::ReportWriterPort;
use printpdf::{BuiltinFont, Mm, PdfDocument};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 10.0;
const LINE_HEIGHT_MM: f32 = 7.0;
const TITLE_FONT_SIZE: f32 = 16.0;
const BODY_FONT_SIZE: f32 = 12.0;

/// Renders reports as PDF.
#[derive(Debug, Default, Clone, Copy)]
pub struct PdfReportWriter;

impl PdfReportWriter {
    pub fn new() -> Self {
        Self
    }

    /// Builtin fonts only cover a Latin subset. Map common typography to ASCII
    /// and replace anything else with `?`.
    fn to_builtin_charset(text: &str) -> String {
        text.chars()
            .map(|c| match c {
                '\u{2018}' | '\u{2019}' => '\'',
                '\u{201C}' | '\u{201D}' => '"',
                '\u{2013}' | '\u{2014}' => '-',
                '\u{2022}' | '\u{25CF}' => '*',
                '\t' => ' ',
                c if c.is_ascii() && !c.is_ascii_control() => c,
                _ => '?',
            })
            .collect()
    }
}

fn pdf_error(e: printpdf::Error) -> DomainError {
    DomainError::Write(format!("PDF render: {}", e))
}

impl ReportWriterPort for PdfReportWriter {
    fn extension(&self) -> &'static str {
        "pdf"
    }

    fn render(&self, layout: &ReportLayout) -> Result<Vec<u8>, DomainError> {
        let (doc, first_page, first_layer) = PdfDocument::new(
            crate::domain::report::REPORT_TITLE,
            Mm(PAGE_WIDTH_MM),
            Mm(PAGE_HEIGHT_MM),
            "Layer 1",
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(pdf_error)?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(pdf_error)?;

        for (i, lines) in layout.pages.iter().enumerate() {
            let (page, layer) = if i == 0 {
                (first_page, first_layer)
            } else {
                doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "Layer 1")
            };
            let canvas = doc.get_page(page).get_layer(layer);

            let mut y = PAGE_HEIGHT_MM - MARGIN_MM - LINE_HEIGHT_MM;
            for line in lines {
                match line.style {
                    LineStyle::Title => canvas.use_text(
                        Self::to_builtin_charset(&line.text),
                        TITLE_FONT_SIZE,
                        Mm(MARGIN_MM),
                        Mm(y),
                        &bold,
                    ),
                    LineStyle::Body => canvas.use_text(
                        Self::to_builtin_charset(&line.text),
                        BODY_FONT_SIZE,
                        Mm(MARGIN_MM),
                        Mm(y),
                        &regular,
                    ),
                    LineStyle::Spacer => {}
                }
                y -= LINE_HEIGHT_MM;
            }
        }

        doc.save_to_bytes().map_err(pdf_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ReportDocument;

    #[test]
    fn test_render_produces_pdf() {
        let layout = ReportDocument::new("Shoes", 0.0, 100.0, "Pros: good").layout();
        let bytes = PdfReportWriter::new().render(&layout).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_render_multi_page() {
        let summary = vec!["line"; 100].join("\n");
        let layout = ReportDocument::new("Shoes", 0.0, 100.0, summary).layout();
        assert!(layout.pages.len() > 1);
        let bytes = PdfReportWriter::new().render(&layout).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_charset_mapping() {
        assert_eq!(
            PdfReportWriter::to_builtin_charset("\u{201C}ok\u{201D} \u{2014} \u{2022} 🧠"),
            "\"ok\" - * ?"
        );
    }
}
