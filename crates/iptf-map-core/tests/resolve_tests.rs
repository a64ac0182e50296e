use iptf_map_core::graph::{
    file_to_node_id, file_to_slug, resolve_link, Category, MembershipIndex, CONTENT_DIRS,
};

fn index_of(ids: &[(&str, Category)]) -> MembershipIndex {
    let mut index = MembershipIndex::new();
    for (id, category) in ids {
        index.insert(*id, *category);
    }
    index
}

#[test]
fn test_file_to_slug() {
    assert_eq!(
        file_to_slug("pattern-zk-shielded-balances.md", "pattern-"),
        "zk-shielded-balances"
    );
    assert_eq!(file_to_slug("approach-private-bonds.md", "approach-"), "private-bonds");
    assert_eq!(file_to_slug("private-bonds.md", ""), "private-bonds");
}

#[test]
fn test_file_to_node_id() {
    assert_eq!(
        file_to_node_id(Category::Pattern, "pattern-shielding.md", "pattern-"),
        "pattern/shielding"
    );
    assert_eq!(file_to_node_id(Category::Vendor, "aztec.md", ""), "vendor/aztec");
    assert_eq!(
        file_to_node_id(Category::UseCase, "private-bonds.md", ""),
        "use-case/private-bonds"
    );
}

#[test]
fn test_node_id_is_stable() {
    for cfg in CONTENT_DIRS {
        let file = format!("{}example.md", cfg.prefix);
        let first = file_to_node_id(cfg.category, &file, cfg.prefix);
        let second = file_to_node_id(cfg.category, &file, cfg.prefix);
        assert_eq!(first, second);
        assert_eq!(first, format!("{}/example", cfg.category));
    }
}

#[test]
fn test_resolves_relative_paths() {
    let index = index_of(&[
        ("pattern/shielding", Category::Pattern),
        ("vendor/aztec", Category::Vendor),
        ("approach/private-bonds", Category::Approach),
    ]);

    assert_eq!(
        resolve_link("../patterns/pattern-shielding.md", &index).as_deref(),
        Some("pattern/shielding")
    );
    assert_eq!(
        resolve_link("pattern-shielding.md", &index).as_deref(),
        Some("pattern/shielding")
    );
    assert_eq!(
        resolve_link("./../vendors/aztec.md", &index).as_deref(),
        Some("vendor/aztec")
    );
    assert_eq!(
        resolve_link("../../content/approaches/approach-private-bonds.md", &index).as_deref(),
        Some("approach/private-bonds")
    );
}

#[test]
fn test_unresolved_links() {
    let index = index_of(&[("pattern/shielding", Category::Pattern)]);
    assert_eq!(resolve_link("../patterns/pattern-missing.md", &index), None);
    assert_eq!(resolve_link("../vendors/pattern-shielding.md", &index), None);
}

#[test]
fn test_directory_hint_disambiguates() {
    let index = index_of(&[
        ("use-case/aztec", Category::UseCase),
        ("vendor/aztec", Category::Vendor),
    ]);
    assert_eq!(
        resolve_link("../vendors/aztec.md", &index).as_deref(),
        Some("vendor/aztec")
    );
}

#[test]
fn test_unqualified_filename_resolves_to_first_declared_category() {
    let index = index_of(&[
        ("vendor/aztec", Category::Vendor),
        ("use-case/aztec", Category::UseCase),
    ]);
    assert_eq!(resolve_link("aztec.md", &index).as_deref(), Some("use-case/aztec"));
}
