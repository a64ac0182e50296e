//! Leading `---` metadata block parsing.
//!
//! The grammar is a small YAML-like subset: `key: value` scalars and
//! `key:` followed by `- item` lists. Nothing is type-coerced and parsing
//! never fails; anything unrecognized is skipped.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Fence line opening and closing the block.
const FENCE: &str = "---";

/// Value indicating a block scalar; treated as the start of a list.
const BLOCK_SCALAR: &str = "|";

/// A frontmatter value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FrontmatterValue {
    Scalar(String),
    List(Vec<String>),
}

impl FrontmatterValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FrontmatterValue::Scalar(s) => Some(s),
            FrontmatterValue::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            FrontmatterValue::Scalar(_) => None,
            FrontmatterValue::List(items) => Some(items),
        }
    }
}

/// Parsed document: metadata plus the remaining body.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontmatter {
    pub data: BTreeMap<String, FrontmatterValue>,
    pub body: String,
}

impl Frontmatter {
    /// Scalar value for `key`, if declared as a scalar.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.data.get(key).and_then(FrontmatterValue::as_str)
    }

    /// List value for `key`, if declared as a list.
    pub fn get_list(&self, key: &str) -> Option<&[String]> {
        self.data.get(key).and_then(FrontmatterValue::as_list)
    }

    fn without_header(text: &str) -> Self {
        Self {
            data: BTreeMap::new(),
            body: text.to_string(),
        }
    }
}

/// Split raw document text into metadata and body.
///
/// Without a header block the metadata is empty and the body is the
/// original text, untouched.
pub fn parse_frontmatter(text: &str) -> Frontmatter {
    let Some(rest) = text
        .strip_prefix("---\n")
        .or_else(|| text.strip_prefix("---\r\n"))
    else {
        return Frontmatter::without_header(text);
    };

    // (block length, body start) within `rest`
    let mut offset = 0;
    let mut bounds = None;
    for line in rest.split_inclusive('\n') {
        if line.trim_end_matches(['\r', '\n']) == FENCE {
            bounds = Some((offset, offset + line.len()));
            break;
        }
        offset += line.len();
    }

    let Some((block_len, body_start)) = bounds else {
        return Frontmatter::without_header(text);
    };

    Frontmatter {
        data: parse_block(&rest[..block_len]),
        body: rest[body_start..].trim().to_string(),
    }
}

fn parse_block(block: &str) -> BTreeMap<String, FrontmatterValue> {
    let mut data = BTreeMap::new();
    let mut current_key: Option<String> = None;
    let mut in_list = false;

    for line in block.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let (Some(item), true, Some(key)) =
            (trimmed.strip_prefix("- "), in_list, current_key.as_ref())
        {
            let entry = data
                .entry(key.clone())
                .or_insert_with(|| FrontmatterValue::List(Vec::new()));
            match entry {
                FrontmatterValue::List(items) => items.push(item.trim().to_string()),
                scalar => *scalar = FrontmatterValue::List(vec![item.trim().to_string()]),
            }
            continue;
        }

        let Some((key, value)) = split_key_value(trimmed) else {
            continue;
        };

        if value.is_empty() || value == BLOCK_SCALAR {
            in_list = true;
            data.insert(key.to_string(), FrontmatterValue::List(Vec::new()));
        } else {
            in_list = false;
            data.insert(
                key.to_string(),
                FrontmatterValue::Scalar(strip_quotes(value).to_string()),
            );
        }
        current_key = Some(key.to_string());
    }

    data
}

/// Split `key: value`, where the key is letters, `_` or `-`.
fn split_key_value(line: &str) -> Option<(&str, &str)> {
    let colon = line.find(':')?;
    let key = line[..colon].trim_end();
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c == '_' || c == '-');
    if !valid {
        return None;
    }
    Some((key, line[colon + 1..].trim()))
}

/// Strip one leading and one trailing quote character.
fn strip_quotes(value: &str) -> &str {
    let value = value
        .strip_prefix(['"', '\''])
        .unwrap_or(value);
    value.strip_suffix(['"', '\'']).unwrap_or(value)
}
