//! Plain-text report writer. Pages are separated by a form feed.

use crate::domain::{DomainError, ReportLayout};
use crate::ports::ReportWriterPort;

const PAGE_BREAK: &str = "\u{000C}\n";

#[derive(Debug, Default, Clone, Copy)]
pub struct TextReportWriter;

impl TextReportWriter {
    pub fn new() -> Self {
        Self
    }
}

impl ReportWriterPort for TextReportWriter {
    fn extension(&self) -> &'static str {
        "txt"
    }

    fn render(&self, layout: &ReportLayout) -> Result<Vec<u8>, DomainError> {
        let pages: Vec<String> = layout
            .pages
            .iter()
            .map(|lines| {
                lines
                    .iter()
                    .map(|l| format!("{}\n", l.text))
                    .collect::<String>()
            })
            .collect();
        Ok(pages.join(PAGE_BREAK).into_bytes())
    }
}
