//! Batch-wide statistics

use std::fmt::Write as _;

use serde::Serialize;

use crate::{Category, DetectionResult};

/// Header line of the statistics report
pub const REPORT_HEADER: &str = "Sensitive Information Statistics:";

/// Running per-category totals across a batch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct AggregateStats {
    names: usize,
    dates: usize,
    addresses: usize,
    phones: usize,
    files: usize,
}

impl AggregateStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one document's findings
    pub fn merge(&mut self, result: &DetectionResult) {
        for (category, findings) in result.iter() {
            *self.slot_mut(category) += findings.len();
        }
        self.files += 1;
    }

    pub fn count(&self, category: Category) -> usize {
        match category {
            Category::Names => self.names,
            Category::Dates => self.dates,
            Category::Addresses => self.addresses,
            Category::Phones => self.phones,
        }
    }

    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|c| self.count(*c)).sum()
    }

    /// Number of documents merged so far
    pub fn files(&self) -> usize {
        self.files
    }

    /// Render the fixed-format text report
    pub fn report(&self) -> String {
        let mut out = String::new();
        out.push_str(REPORT_HEADER);
        out.push('\n');
        for category in Category::ALL {
            // Writing into a String cannot fail
            let _ = writeln!(out, "{}: {}", category.label(), self.count(category));
        }
        out
    }

    fn slot_mut(&mut self, category: Category) -> &mut usize {
        match category {
            Category::Names => &mut self.names,
            Category::Dates => &mut self.dates,
            Category::Addresses => &mut self.addresses,
            Category::Phones => &mut self.phones,
        }
    }
}
