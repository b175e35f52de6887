//! Batch censoring: per-file processing, batch driving and reporting

pub mod driver;
pub mod processor;
pub mod report;

pub use driver::{BatchDriver, BatchSummary, FileFailure};
pub use processor::FileProcessor;
pub use report::StatsSink;
