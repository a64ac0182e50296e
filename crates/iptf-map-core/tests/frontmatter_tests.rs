use iptf_map_core::graph::{parse_frontmatter, FrontmatterValue};

#[test]
fn test_parses_key_value_pairs() {
    let fm = parse_frontmatter(
        r#"---
title: "Pattern: ZK Shielded Balances"
status: draft
maturity: PoC
layer: L2
---

## Intent

Some content here."#,
    );

    assert_eq!(fm.get_str("title"), Some("Pattern: ZK Shielded Balances"));
    assert_eq!(fm.get_str("status"), Some("draft"));
    assert_eq!(fm.get_str("maturity"), Some("PoC"));
    assert_eq!(fm.get_str("layer"), Some("L2"));
    assert!(fm.body.starts_with("## Intent"));
}

#[test]
fn test_parses_list_fields() {
    let fm = parse_frontmatter(
        "---\ntitle: Test\ndependencies:\n  - ERC-6123\n  - ERC-7573\n---\n\nBody",
    );

    assert_eq!(
        fm.data.get("dependencies"),
        Some(&FrontmatterValue::List(vec![
            "ERC-6123".to_string(),
            "ERC-7573".to_string()
        ]))
    );
    assert_eq!(fm.get_str("dependencies"), None);
    assert_eq!(fm.body, "Body");
}

#[test]
fn test_missing_frontmatter() {
    let text = "# Just a heading\n\nSome text.";
    let fm = parse_frontmatter(text);
    assert!(fm.data.is_empty());
    assert_eq!(fm.body, text);
}

#[test]
fn test_header_must_open_at_start() {
    let text = "\n---\ntitle: X\n---\nBody";
    let fm = parse_frontmatter(text);
    assert!(fm.data.is_empty());
    assert_eq!(fm.body, text);
}

#[test]
fn test_strips_quotes_from_values() {
    let fm = parse_frontmatter("---\ntitle: \"Vendor: Aztec\"\nregion: 'EU'\n---\n");
    assert_eq!(fm.get_str("title"), Some("Vendor: Aztec"));
    assert_eq!(fm.get_str("region"), Some("EU"));
    assert_eq!(fm.body, "");
}

#[test]
fn test_values_are_not_coerced() {
    let fm = parse_frontmatter("---\nversion: 1.0\nenabled: true\n---\n");
    assert_eq!(fm.get_str("version"), Some("1.0"));
    assert_eq!(fm.get_str("enabled"), Some("true"));
}

#[test]
fn test_comments_and_unknown_lines_are_ignored() {
    let fm = parse_frontmatter(
        "---\n# a comment\ntitle: X\nnot a pair\n  nested thing\ncustom_key: kept\n---\nBody",
    );
    assert_eq!(fm.data.len(), 2);
    assert_eq!(fm.get_str("custom_key"), Some("kept"));
}
