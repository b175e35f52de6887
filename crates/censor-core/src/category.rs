//! Redaction categories

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the four redaction classes
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Names,
    Dates,
    Addresses,
    Phones,
}

impl Category {
    /// All categories, in report order
    pub const ALL: [Category; 4] = [
        Category::Names,
        Category::Dates,
        Category::Addresses,
        Category::Phones,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Names => "names",
            Category::Dates => "dates",
            Category::Addresses => "addresses",
            Category::Phones => "phones",
        }
    }

    /// Capitalized label used in the statistics report
    pub fn label(&self) -> &'static str {
        match self {
            Category::Names => "Names",
            Category::Dates => "Dates",
            Category::Addresses => "Addresses",
            Category::Phones => "Phones",
        }
    }

    fn bit(self) -> u8 {
        match self {
            Category::Names => 0b0001,
            Category::Dates => 0b0010,
            Category::Addresses => 0b0100,
            Category::Phones => 0b1000,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "names" => Ok(Category::Names),
            "dates" => Ok(Category::Dates),
            "addresses" => Ok(Category::Addresses),
            "phones" => Ok(Category::Phones),
            other => Err(format!("Unknown category: {}", other)),
        }
    }
}

/// Set of active categories (the command-line flags)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CategorySet(u8);

impl CategorySet {
    pub fn empty() -> Self {
        Self(0)
    }

    pub fn all() -> Self {
        Category::ALL.into_iter().collect()
    }

    pub fn insert(&mut self, category: Category) {
        self.0 |= category.bit();
    }

    pub fn with(mut self, category: Category) -> Self {
        self.insert(category);
        self
    }

    pub fn contains(&self, category: Category) -> bool {
        self.0 & category.bit() != 0
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate active categories in report order
    pub fn iter(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|c| self.contains(*c))
    }
}

impl FromIterator<Category> for CategorySet {
    fn from_iter<I: IntoIterator<Item = Category>>(iter: I) -> Self {
        let mut set = Self::empty();
        for category in iter {
            set.insert(category);
        }
        set
    }
}
