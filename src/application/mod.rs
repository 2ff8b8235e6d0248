//! Application layer - Use cases and orchestration

pub mod export;

pub use export::{ExportOptions, ExportReport, ExportService, ExportedPage};
