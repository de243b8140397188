//! `Link` header parsing (RFC 8288).
//!
//! The Automatic API advertises pagination through the `Link` header:
//!
//! ```text
//! Link: <https://api.automatic.com/trip/?page=2>; rel="next",
//!       <https://api.automatic.com/trip/?page=1>; rel="previous"
//! ```
//!
//! [`LinkSet::parse`] turns such a value into a set of [`Link`]s queried by
//! relation name. Malformed entries are skipped one at a time; they never
//! abort the parse.
//!
//! # Example
//!
//! ```rust
//! use automatic_api::rest::LinkSet;
//!
//! let links = LinkSet::parse(Some(r#"<http://x/y?page=2>; rel="next""#));
//! assert!(links.has("next"));
//! assert_eq!(links.uri("next"), Some("http://x/y?page=2"));
//!
//! assert!(!LinkSet::parse(None).has("next"));
//! assert!(!LinkSet::parse(Some("")).has("next"));
//! ```

use std::collections::HashMap;
use std::convert::Infallible;
use std::str::FromStr;

/// A single link: a URI and the relation it was advertised under.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Link {
    /// The relation name, lowercased (e.g., `"next"`).
    pub rel: String,
    /// The target URI, exactly as it appeared between the angle brackets.
    pub uri: String,
    /// Any other parameters on the entry (e.g., `title`), lowercased keys.
    pub params: HashMap<String, String>,
}

/// The links parsed from one response's `Link` header.
///
/// When the same relation appears more than once, the first occurrence wins
/// for [`LinkSet::uri`]; [`LinkSet::iter`] still yields every link.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LinkSet {
    links: Vec<Link>,
}

impl LinkSet {
    /// Parses a `Link` header value.
    ///
    /// Absent, empty, or whitespace-only input yields an empty set.
    #[must_use]
    pub fn parse(header: Option<&str>) -> Self {
        let Some(header) = header else {
            return Self::default();
        };

        let links = split_entries(header)
            .into_iter()
            .filter_map(parse_entry)
            .flatten()
            .collect();

        Self { links }
    }

    /// Returns `true` if a link with the given relation exists.
    #[must_use]
    pub fn has(&self, rel: &str) -> bool {
        self.get(rel).is_some()
    }

    /// Returns the URI of the first link with the given relation.
    #[must_use]
    pub fn uri(&self, rel: &str) -> Option<&str> {
        self.get(rel).map(|link| link.uri.as_str())
    }

    /// Returns the first link with the given relation.
    #[must_use]
    pub fn get(&self, rel: &str) -> Option<&Link> {
        self.links
            .iter()
            .find(|link| link.rel.eq_ignore_ascii_case(rel))
    }

    /// Returns the URI of the `next` page, if any.
    #[must_use]
    pub fn next(&self) -> Option<&str> {
        self.uri("next")
    }

    /// Returns the URI of the previous page, accepting both `prev` and
    /// `previous`.
    #[must_use]
    pub fn prev(&self) -> Option<&str> {
        self.uri("prev").or_else(|| self.uri("previous"))
    }

    /// Returns the number of links in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.links.len()
    }

    /// Returns `true` if the set has no links.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.links.is_empty()
    }

    /// Iterates over all links in header order.
    pub fn iter(&self) -> std::slice::Iter<'_, Link> {
        self.links.iter()
    }
}

impl FromStr for LinkSet {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(Some(s)))
    }
}

impl<'a> IntoIterator for &'a LinkSet {
    type Item = &'a Link;
    type IntoIter = std::slice::Iter<'a, Link>;

    fn into_iter(self) -> Self::IntoIter {
        self.links.iter()
    }
}

/// Splits a header on the commas that separate entries, ignoring commas
/// inside `<...>` and inside quoted parameter values.
///
/// A comma followed by `<` always starts a new entry, so an unclosed `<` or
/// a stray quote only spoils the entry it appears in.
fn split_entries(header: &str) -> Vec<&str> {
    let mut entries = Vec::new();
    let mut in_uri = false;
    let mut in_quotes = false;
    let mut start = 0;

    for (i, c) in header.char_indices() {
        match c {
            '<' if !in_quotes => in_uri = true,
            '>' if !in_quotes => in_uri = false,
            '"' if !in_uri => in_quotes = !in_quotes,
            ',' if (!in_uri && !in_quotes)
                || header[i + 1..].trim_start().starts_with('<') =>
            {
                entries.push(&header[start..i]);
                start = i + 1;
                in_uri = false;
                in_quotes = false;
            }
            _ => {}
        }
    }
    entries.push(&header[start..]);

    entries
        .into_iter()
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .collect()
}

/// Parses one `<uri>; rel="name"; ...` entry.
///
/// Returns one link per relation type listed in `rel`, or `None` when the
/// entry has no angle-bracketed URI or no `rel` parameter.
fn parse_entry(entry: &str) -> Option<Vec<Link>> {
    let rest = entry.strip_prefix('<')?;
    let uri_end = rest.find('>')?;
    let uri = rest[..uri_end].trim();
    if uri.is_empty() {
        return None;
    }

    let mut params = HashMap::new();
    let mut rel = None;

    for param in rest[uri_end + 1..].split(';') {
        let param = param.trim();
        let Some((key, value)) = param.split_once('=') else {
            continue;
        };
        let key = key.trim().to_ascii_lowercase();
        let value = value.trim().trim_matches('"').trim_matches('\'').to_string();

        if key == "rel" {
            rel.get_or_insert(value);
        } else {
            params.entry(key).or_insert(value);
        }
    }

    let rel = rel?;
    let links: Vec<Link> = rel
        .split_whitespace()
        .map(|rel| Link {
            rel: rel.to_ascii_lowercase(),
            uri: uri.to_string(),
            params: params.clone(),
        })
        .collect();

    if links.is_empty() {
        None
    } else {
        Some(links)
    }
}
