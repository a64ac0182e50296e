//! Node identifiers and relative link resolution.

use crate::config::DOCUMENT_EXTENSION;

use super::category::{Category, CONTENT_DIRS};
use super::index::MembershipIndex;

/// Filename without the document extension and the category prefix.
pub fn file_to_slug(filename: &str, prefix: &str) -> String {
    let stem = filename.strip_suffix(DOCUMENT_EXTENSION).unwrap_or(filename);
    stem.strip_prefix(prefix).unwrap_or(stem).to_string()
}

/// Canonical node id: `{category}/{slug}`.
pub fn file_to_node_id(category: Category, filename: &str, prefix: &str) -> String {
    format!("{}/{}", category, file_to_slug(filename, prefix))
}

/// Resolve a relative link target to a node id present in `index`.
///
/// `.` and `..` segments are discarded. The last remaining component is the
/// filename and the one before it, if any, restricts the search to the
/// category with that directory name. Without a directory hint the first
/// declared category with a matching id wins.
pub fn resolve_link(href: &str, index: &MembershipIndex) -> Option<String> {
    let parts: Vec<&str> = href
        .split('/')
        .filter(|p| !p.is_empty() && *p != "." && *p != "..")
        .collect();

    let (&filename, dirs) = parts.split_last()?;
    let dir_hint = dirs.last().copied();

    CONTENT_DIRS
        .iter()
        .filter(|cfg| dir_hint.map_or(true, |dir| dir == cfg.dir))
        .map(|cfg| file_to_node_id(cfg.category, filename, cfg.prefix))
        .find(|candidate| index.contains(candidate))
}
