//! Cross-cutting pieces: configuration and the application context.

pub mod config;
pub mod context;

pub use config::{AppConfig, ReportFormat};
pub use context::AppContext;
