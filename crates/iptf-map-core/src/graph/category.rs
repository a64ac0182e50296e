//! Content categories and their directory conventions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the six document kinds partitioning the corpus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Pattern,
    UseCase,
    Approach,
    Domain,
    Jurisdiction,
    Vendor,
}

impl Category {
    /// Identifier used in node ids and in the artifact.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Pattern => "pattern",
            Category::UseCase => "use-case",
            Category::Approach => "approach",
            Category::Domain => "domain",
            Category::Jurisdiction => "jurisdiction",
            Category::Vendor => "vendor",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a category lives on disk and how its filenames are prefixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryConfig {
    /// Directory name under the content root.
    pub dir: &'static str,
    /// Category of every document in `dir`.
    pub category: Category,
    /// Filename prefix stripped when deriving the slug (may be empty).
    pub prefix: &'static str,
}

/// Category directories in declared order.
///
/// The order is significant: link resolution without a directory hint picks
/// the first category whose candidate id exists.
pub const CONTENT_DIRS: &[CategoryConfig] = &[
    CategoryConfig {
        dir: "patterns",
        category: Category::Pattern,
        prefix: "pattern-",
    },
    CategoryConfig {
        dir: "use-cases",
        category: Category::UseCase,
        prefix: "",
    },
    CategoryConfig {
        dir: "approaches",
        category: Category::Approach,
        prefix: "approach-",
    },
    CategoryConfig {
        dir: "domains",
        category: Category::Domain,
        prefix: "",
    },
    CategoryConfig {
        dir: "jurisdictions",
        category: Category::Jurisdiction,
        prefix: "",
    },
    CategoryConfig {
        dir: "vendors",
        category: Category::Vendor,
        prefix: "",
    },
];
