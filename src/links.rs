use std::collections::BTreeMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;

// The API sometimes hands back templated hrefs like `/events{?page,size,sort}`.
static TEMPLATE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\{[^{}]*\}").expect("valid uri template regex"));

/// A resolved URL, or the sub-structure of an entry that had no `href`.
///
/// Serialized as a bare string or as `{"raw": ...}`, so a raw string entry
/// reads back as `Raw`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Link {
    Href(String),
    Raw { raw: Value },
}

impl Link {
    pub fn href(&self) -> Option<&str> {
        match self {
            Link::Href(url) => Some(url),
            Link::Raw { .. } => None,
        }
    }
}

pub type Links = BTreeMap<String, Link>;

pub fn strip_template(href: &str) -> String {
    TEMPLATE_RE.replace_all(href, "").into_owned()
}

/// Builds the relation → URL map from a payload's `_links` block.
///
/// Entries shaped like `{"href": ...}` become URLs (template placeholders
/// removed, `base_url` prepended when non-empty); anything else is kept as
/// the raw sub-structure. A missing block yields an empty map.
pub fn extract_links(block: Option<&Value>, base_url: Option<&str>) -> Links {
    let Some(Value::Object(entries)) = block else {
        return Links::new();
    };

    let base = base_url.unwrap_or_default();
    entries
        .iter()
        .map(|(relation, entry)| {
            let link = match entry.get("href").and_then(Value::as_str) {
                Some(href) => Link::Href(format!("{base}{}", strip_template(href))),
                None => Link::Raw { raw: entry.clone() },
            };
            (relation.clone(), link)
        })
        .collect()
}
