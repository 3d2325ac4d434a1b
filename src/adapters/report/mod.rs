//! Report writer adapters. Implement ReportWriterPort.

pub mod pdf_writer;
pub mod text_writer;

pub use pdf_writer::PdfReportWriter;
pub use text_writer::TextReportWriter;
