//! Remote entity normalization

use super::rules::{FieldRule, first_match};
use crate::term::RemoteTerm;
use serde_json::Value;

/// Keys that may hold the entity list, checked in this order.
///
/// The first key present in the document wins, even when its list is empty.
pub const ENTITY_LIST_KEYS: &[&str] = &["destinationEntities", "entities", "searchResults", "results"];

const SYNONYM_LIST_KEYS: &[&str] = &["synonym", "synonyms"];

const TITLE_RULES: &[FieldRule] = &[
    FieldRule::Localized("title"),
    FieldRule::Text("title"),
    FieldRule::Text("name"),
];

const DEFINITION_RULES: &[FieldRule] = &[
    FieldRule::Localized("definition"),
    FieldRule::Text("definition"),
];

const ID_RULES: &[FieldRule] = &[FieldRule::Text("id"), FieldRule::Text("@id")];

const URI_RULES: &[FieldRule] = &[
    FieldRule::Text("uri"),
    FieldRule::Text("id"),
    FieldRule::Text("@id"),
];

const CODE_RULES: &[FieldRule] = &[FieldRule::Text("theCode"), FieldRule::Text("code")];

const SYNONYM_LABEL_RULES: &[FieldRule] = &[FieldRule::Path(&["label", "@value"])];

/// Name of the entity-list key present in `doc`, if any.
pub fn entity_list_key(doc: &Value) -> Option<&'static str> {
    ENTITY_LIST_KEYS
        .iter()
        .copied()
        .find(|key| doc.get(*key).is_some_and(|v| !v.is_null()))
}

/// Normalize a whole response document into remote terms.
///
/// Records without a resolvable title are dropped; remote order is kept.
pub fn parse_remote_entities(doc: &Value) -> Vec<RemoteTerm> {
    let Some(key) = entity_list_key(doc) else {
        return Vec::new();
    };
    match doc.get(key).and_then(Value::as_array) {
        Some(entities) => entities.iter().filter_map(normalize_entity).collect(),
        None => Vec::new(),
    }
}

/// Normalize one entity record. Returns `None` when no title can be resolved.
pub fn normalize_entity(record: &Value) -> Option<RemoteTerm> {
    let title = first_match(TITLE_RULES, record).filter(|t| !t.is_empty())?;

    Some(RemoteTerm {
        id: first_match(ID_RULES, record).unwrap_or_default(),
        uri: first_match(URI_RULES, record).unwrap_or_default(),
        code: first_match(CODE_RULES, record).unwrap_or_default(),
        title,
        definition: first_match(DEFINITION_RULES, record).unwrap_or_default(),
        parent: parent_ref(record.get("parent")),
        children: string_list(record.get("children")),
        synonyms: synonyms(record),
    })
}

fn synonyms(record: &Value) -> Vec<String> {
    let entries = SYNONYM_LIST_KEYS
        .iter()
        .find_map(|key| {
            record
                .get(*key)
                .and_then(Value::as_array)
                .filter(|list| !list.is_empty())
        });

    entries
        .map(|entries| entries.iter().map(synonym_label).collect())
        .unwrap_or_default()
}

/// Structured entries yield `label.@value`, strings are kept as is, anything
/// else is rendered as JSON text.
fn synonym_label(entry: &Value) -> String {
    match entry {
        Value::String(s) => s.clone(),
        Value::Object(_) => {
            first_match(SYNONYM_LABEL_RULES, entry).unwrap_or_else(|| entry.to_string())
        }
        other => other.to_string(),
    }
}

fn parent_ref(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Null => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect(),
        Some(Value::String(s)) if !s.is_empty() => vec![s.clone()],
        _ => Vec::new(),
    }
}
