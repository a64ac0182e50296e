//! Edge relationship classification.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::category::Category;

/// Semantic relationship carried by an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeType {
    SeeAlso,
    UsesPattern,
    Implements,
    Recommends,
    InDomain,
    RegulatedBy,
}

impl EdgeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EdgeType::SeeAlso => "see-also",
            EdgeType::UsesPattern => "uses-pattern",
            EdgeType::Implements => "implements",
            EdgeType::Recommends => "recommends",
            EdgeType::InDomain => "in-domain",
            EdgeType::RegulatedBy => "regulated-by",
        }
    }
}

impl fmt::Display for EdgeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Section keywords checked before any category default, in order.
const SECTION_RULES: &[(&str, EdgeType)] = &[
    ("see also", EdgeType::SeeAlso),
    ("fits with patterns", EdgeType::Implements),
    ("recommended approach", EdgeType::Recommends),
    ("shortest-path", EdgeType::InDomain),
    ("primary use case", EdgeType::InDomain),
    ("adjacent vendor", EdgeType::InDomain),
];

/// Classify a link from `source` to `target` found under `section`.
///
/// Section keywords (case-insensitive substring) take precedence over the
/// source category default, which takes precedence over the target rule.
pub fn classify_edge(source: Category, target: Category, section: &str) -> EdgeType {
    let section = section.to_lowercase();

    if let Some((_, edge_type)) = SECTION_RULES
        .iter()
        .find(|(keyword, _)| section.contains(keyword))
    {
        return *edge_type;
    }

    match source {
        Category::Approach => return EdgeType::UsesPattern,
        Category::Domain => return EdgeType::InDomain,
        Category::Vendor => return EdgeType::Implements,
        _ => {}
    }

    if target == Category::Jurisdiction {
        return EdgeType::RegulatedBy;
    }

    EdgeType::SeeAlso
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_case_insensitive() {
        assert_eq!(
            classify_edge(Category::Pattern, Category::Pattern, "SEE ALSO"),
            EdgeType::SeeAlso
        );
    }

    #[test]
    fn test_source_default_beats_jurisdiction_target() {
        assert_eq!(
            classify_edge(Category::Vendor, Category::Jurisdiction, "Compliance"),
            EdgeType::Implements
        );
    }

    #[test]
    fn test_fallback_is_see_also() {
        assert_eq!(
            classify_edge(Category::Pattern, Category::Vendor, ""),
            EdgeType::SeeAlso
        );
    }

    #[test]
    fn test_edge_type_serializes_kebab_case() {
        let json = serde_json::to_string(&EdgeType::RegulatedBy).unwrap();
        assert_eq!(json, "\"regulated-by\"");
    }
}
