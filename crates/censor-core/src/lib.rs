//! Core domain models for censor
//!
//! This crate contains:
//! - Redaction categories and the flag set selecting them
//! - Per-document detection results and batch-wide statistics
//! - The shared error type

pub mod category;
pub mod detection;
pub mod document;
pub mod error;
pub mod stats;

pub use category::{Category, CategorySet};
pub use detection::{DetectionResult, Finding};
pub use document::CensoredDocument;
pub use error::{CensorError, Result};
pub use stats::AggregateStats;

/// Character used to build redaction runs
pub const BLOCK_CHAR: char = '█';

/// Suffix appended to the source file name of every censored output
pub const CENSORED_SUFFIX: &str = ".censored";
