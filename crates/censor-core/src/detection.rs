//! Per-document detection results

use serde::{Deserialize, Serialize};

use crate::Category;

/// A literal substring flagged as sensitive
///
/// Findings carry no position: censoring matches them by text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub category: Category,
    pub text: String,
}

/// Findings for one document, grouped by category
///
/// All four categories are always present; inactive ones stay empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectionResult {
    names: Vec<Finding>,
    dates: Vec<Finding>,
    addresses: Vec<Finding>,
    phones: Vec<Finding>,
}

impl DetectionResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, category: Category, text: impl Into<String>) {
        self.slot_mut(category).push(Finding {
            category,
            text: text.into(),
        });
    }

    pub fn findings(&self, category: Category) -> &[Finding] {
        match category {
            Category::Names => &self.names,
            Category::Dates => &self.dates,
            Category::Addresses => &self.addresses,
            Category::Phones => &self.phones,
        }
    }

    pub fn count(&self, category: Category) -> usize {
        self.findings(category).len()
    }

    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|c| self.count(*c)).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }

    /// Iterate `(category, findings)` in report order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[Finding])> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.findings(c)))
    }

    fn slot_mut(&mut self, category: Category) -> &mut Vec<Finding> {
        match category {
            Category::Names => &mut self.names,
            Category::Dates => &mut self.dates,
            Category::Addresses => &mut self.addresses,
            Category::Phones => &mut self.phones,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_result_has_every_category_empty() {
        let result = DetectionResult::new();

        let categories: Vec<_> = result.iter().map(|(c, _)| c).collect();
        assert_eq!(categories, Category::ALL.to_vec());
        assert!(result.iter().all(|(_, findings)| findings.is_empty()));
        assert!(result.is_empty());
    }

    #[test]
    fn test_push_keeps_order_and_duplicates() {
        let mut result = DetectionResult::new();
        result.push(Category::Names, "Alice");
        result.push(Category::Names, "Bob");
        result.push(Category::Names, "Alice");
        result.push(Category::Phones, "555-123-4567");

        let names: Vec<_> = result
            .findings(Category::Names)
            .iter()
            .map(|f| f.text.as_str())
            .collect();
        assert_eq!(names, vec!["Alice", "Bob", "Alice"]);
        assert_eq!(result.count(Category::Phones), 1);
        assert_eq!(result.count(Category::Dates), 0);
        assert_eq!(result.total(), 4);
    }

    #[test]
    fn test_findings_are_tagged() {
        let mut result = DetectionResult::new();
        result.push(Category::Addresses, "Chicago");

        assert_eq!(
            result.findings(Category::Addresses)[0],
            Finding {
                category: Category::Addresses,
                text: "Chicago".to_string(),
            }
        );
    }
}
