//! Search query rewriting.
//!
//! Users type `alias:value` fragments; the search index expects canonical
//! field paths. A query is split into alternating field and value segments,
//! aliases are swapped for their index paths, and the pairs are rendered back
//! as `"field":value ` terms.

use crate::types::FieldAlias;
use regex::Regex;
use std::borrow::Cow;
use std::collections::HashMap;
use std::sync::LazyLock;

static FIELD_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([^\W\d]\w*):").expect("field pattern is a valid regex"));

/// A `field:value` fragment of a search query
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryToken {
    pub field: String,
    pub value: String,
}

impl QueryToken {
    pub fn new(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum AliasTarget {
    Path(String),
    /// More than one hinted field claims the alias
    Ambiguous,
}

/// Lookup from user-facing alias to index path.
///
/// Only fields flagged `display_search_hint` are indexed. An alias claimed by
/// several fields never resolves.
#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    targets: HashMap<String, AliasTarget>,
}

impl AliasTable {
    pub fn new(fields: &[FieldAlias]) -> Self {
        let mut targets = HashMap::new();
        for field in fields.iter().filter(|f| f.display_search_hint) {
            targets
                .entry(field.alias.clone())
                .and_modify(|target| *target = AliasTarget::Ambiguous)
                .or_insert_with(|| AliasTarget::Path(field.elasticsearch_path.clone()));
        }
        Self { targets }
    }

    /// The index path for `alias`, if exactly one hinted field declares it.
    pub fn resolve(&self, alias: &str) -> Option<&str> {
        match self.targets.get(alias)? {
            AliasTarget::Path(path) => Some(path),
            AliasTarget::Ambiguous => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Replace every resolvable field name in place.
    pub fn remap(&self, tokens: &mut [QueryToken]) {
        for token in tokens {
            let field = token.field.trim();
            match self.resolve(field) {
                Some(path) => token.field = path.to_string(),
                None => tracing::trace!(field, "no unique alias match, field left as typed"),
            }
        }
    }
}

/// Split `query` into field/value pairs.
///
/// Returns `None` when the query does not alternate cleanly between fields
/// and values: plain text with no `field:` fragment, or free text in front of
/// the first field. An empty query yields no tokens. `None` means "not a
/// field query, use the text as typed", while `Some(vec![])` means there was
/// nothing to tokenize. Field names start with a letter, so `12:30` inside a
/// value is not taken for a field.
pub fn tokenize(query: &str) -> Option<Vec<QueryToken>> {
    let mut segments = Vec::new();
    let mut last = 0;
    for caps in FIELD_PATTERN.captures_iter(query) {
        let (Some(whole), Some(name)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        segments.push(&query[last..whole.start()]);
        segments.push(name.as_str());
        last = whole.end();
    }
    segments.push(&query[last..]);

    if segments.first().is_some_and(|prefix| prefix.trim().is_empty()) {
        segments.remove(0);
    }

    if segments.len() % 2 != 0 {
        return None;
    }

    Some(
        segments
            .chunks_exact(2)
            .map(|pair| QueryToken::new(pair[0], pair[1]))
            .collect(),
    )
}

/// Render tokens as `"field":value ` terms, in order. Values keep their
/// original whitespace.
pub fn rebuild(tokens: &[QueryToken]) -> String {
    let mut query = String::new();
    for token in tokens {
        // JSON string literal escaping matches the index's quoted-field syntax
        query.push_str(&serde_json::Value::from(token.field.as_str()).to_string());
        query.push(':');
        query.push_str(&token.value);
        query.push(' ');
    }
    query
}

/// Rewrite a user-typed query into the index's query syntax.
///
/// Queries that do not tokenize are passed through untouched.
pub fn rewrite(query: &str, aliases: &AliasTable) -> String {
    match tokenize(query) {
        Some(mut tokens) => {
            aliases.remap(&mut tokens);
            rebuild(&tokens)
        }
        None => query.to_string(),
    }
}

// ─── Filter Fragments ───────────────────────────────────────────────────────

fn strip_double_quotes(value: &str) -> String {
    value.replace('"', "")
}

/// Quote `value` if it contains a space.
pub fn maybe_quoted(value: &str) -> Cow<'_, str> {
    if value.contains(' ') {
        Cow::Owned(format!("\"{}\"", value))
    } else {
        Cow::Borrowed(value)
    }
}

/// A `field:value` fragment, quoting the value when needed.
pub fn field_filter(field: &str, value: &str) -> String {
    let clean = strip_double_quotes(value);
    format!("{}:{}", field, maybe_quoted(&clean))
}

/// A `#label` fragment, quoting the label when needed.
pub fn label_filter(value: &str) -> String {
    let clean = strip_double_quotes(value);
    format!("#{}", maybe_quoted(&clean))
}
