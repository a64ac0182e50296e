//! Internal markdown link extraction.

use std::sync::LazyLock;

use regex::Regex;

use crate::config::DOCUMENT_EXTENSION;

/// Markdown inline link: `[text](href)`.
const LINK_PATTERN: &str = r"\[([^\]]*)\]\(([^)]+)\)";

/// Level-2 heading: `## Title`.
const SECTION_PATTERN: &str = r"^##\s+(.+)";

static LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(LINK_PATTERN).expect("link pattern is a valid regex"));

static SECTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SECTION_PATTERN).expect("section pattern is a valid regex"));

/// An internal link and the section heading it appears under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub text: String,
    pub href: String,
    /// Trimmed text of the enclosing `##` heading, empty before the first one.
    pub section: String,
}

/// Extract internal document links in document order.
///
/// External URLs and links to non-document assets are dropped.
pub fn extract_links(body: &str) -> Vec<Link> {
    let mut links = Vec::new();
    let mut current_section = String::new();

    for line in body.lines() {
        if let Some(cap) = SECTION_RE.captures(line) {
            current_section = cap[1].trim().to_string();
            continue;
        }

        for cap in LINK_RE.captures_iter(line) {
            let href = &cap[2];
            if is_internal_document(href) {
                links.push(Link {
                    text: cap[1].to_string(),
                    href: href.to_string(),
                    section: current_section.clone(),
                });
            }
        }
    }

    links
}

fn is_internal_document(href: &str) -> bool {
    href.ends_with(DOCUMENT_EXTENSION) && !has_url_scheme(href)
}

/// Whether `href` starts with `scheme:` (e.g. `https:`, `mailto:`).
fn has_url_scheme(href: &str) -> bool {
    let Some(colon) = href.find(':') else {
        return false;
    };
    let scheme = &href[..colon];
    scheme.starts_with(|c: char| c.is_ascii_alphabetic())
        && scheme
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
