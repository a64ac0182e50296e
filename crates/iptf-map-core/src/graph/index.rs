//! Node membership index built in the first pass.

use std::collections::{BTreeMap, HashMap};

use super::category::Category;

/// Every node id of a build, with its category.
///
/// Fully populated before any link is resolved.
#[derive(Debug, Clone, Default)]
pub struct MembershipIndex {
    categories: HashMap<String, Category>,
}

impl MembershipIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a node id. Returns `false` if it was already present.
    pub fn insert(&mut self, id: impl Into<String>, category: Category) -> bool {
        self.categories.insert(id.into(), category).is_none()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.categories.contains_key(id)
    }

    pub fn category_of(&self, id: &str) -> Option<Category> {
        self.categories.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Slugs registered under more than one category, with those categories.
    ///
    /// An unqualified link to such a slug resolves to the first declared
    /// category only.
    pub fn ambiguous_slugs(&self) -> BTreeMap<String, Vec<Category>> {
        let mut by_slug: BTreeMap<String, Vec<Category>> = BTreeMap::new();
        for (id, category) in &self.categories {
            let slug = id.split_once('/').map_or(id.as_str(), |(_, slug)| slug);
            by_slug.entry(slug.to_string()).or_default().push(*category);
        }

        by_slug.retain(|_, categories| categories.len() > 1);
        for categories in by_slug.values_mut() {
            categories.sort();
        }
        by_slug
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_lookup() {
        let mut index = MembershipIndex::new();
        assert!(index.insert("pattern/shielding", Category::Pattern));
        assert!(!index.insert("pattern/shielding", Category::Pattern));
        assert!(index.contains("pattern/shielding"));
        assert_eq!(index.category_of("pattern/shielding"), Some(Category::Pattern));
        assert_eq!(index.category_of("vendor/aztec"), None);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_ambiguous_slugs() {
        let mut index = MembershipIndex::new();
        index.insert("vendor/aztec", Category::Vendor);
        index.insert("pattern/aztec", Category::Pattern);
        index.insert("domain/payments", Category::Domain);

        let ambiguous = index.ambiguous_slugs();
        assert_eq!(ambiguous.len(), 1);
        assert_eq!(ambiguous["aztec"], vec![Category::Pattern, Category::Vendor]);
    }
}
