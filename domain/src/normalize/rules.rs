//! Field extraction rules

use serde_json::Value;

/// One way of reading a string field out of a JSON record.
///
/// Rules are grouped into ordered tables; the first rule producing a value
/// wins (see [`first_match`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// `key` holds a non-empty string (numbers are rendered as text)
    Text(&'static str),
    /// `key` holds a language-tagged object `{"@value": "..."}`.
    ///
    /// Terminal when `key` is an object: a missing or unusable `@value`
    /// yields an empty string instead of letting later rules run.
    Localized(&'static str),
    /// A nested path of object keys ending in a non-empty string
    Path(&'static [&'static str]),
}

impl FieldRule {
    /// Apply the rule to a record, returning the extracted value if it matched.
    pub fn apply(&self, record: &Value) -> Option<String> {
        match self {
            FieldRule::Text(key) => scalar_text(record.get(*key)?),
            FieldRule::Localized(key) => {
                let field = record.get(*key)?;
                if !field.is_object() {
                    return None;
                }
                Some(field.get("@value").and_then(scalar_text).unwrap_or_default())
            }
            FieldRule::Path(path) => {
                let mut current = record;
                for key in path.iter() {
                    current = current.get(*key)?;
                }
                scalar_text(current)
            }
        }
    }
}

/// Evaluate `rules` in order and return the first extracted value.
pub fn first_match(rules: &[FieldRule], record: &Value) -> Option<String> {
    rules.iter().find_map(|rule| rule.apply(record))
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_text_rule() {
        let record = json!({"code": "MG26", "empty": "", "n": 42});
        assert_eq!(FieldRule::Text("code").apply(&record).as_deref(), Some("MG26"));
        assert_eq!(FieldRule::Text("empty").apply(&record), None);
        assert_eq!(FieldRule::Text("missing").apply(&record), None);
        assert_eq!(FieldRule::Text("n").apply(&record).as_deref(), Some("42"));
    }

    #[test]
    fn test_localized_rule_requires_object() {
        let record = json!({"title": {"@language": "en", "@value": "Fever"}, "plain": "Fever"});
        assert_eq!(
            FieldRule::Localized("title").apply(&record).as_deref(),
            Some("Fever")
        );
        assert_eq!(FieldRule::Localized("plain").apply(&record), None);
    }

    #[test]
    fn test_localized_rule_is_terminal_for_objects() {
        let record = json!({"title": {"@language": "en"}, "name": "Other"});
        let rules = [FieldRule::Localized("title"), FieldRule::Text("name")];
        assert_eq!(first_match(&rules, &record).as_deref(), Some(""));
    }

    #[test]
    fn test_path_rule() {
        let record = json!({"label": {"@value": "Pyrexia"}});
        assert_eq!(
            FieldRule::Path(&["label", "@value"]).apply(&record).as_deref(),
            Some("Pyrexia")
        );
        assert_eq!(FieldRule::Path(&["label", "missing"]).apply(&record), None);
    }

    #[test]
    fn test_first_match_respects_order() {
        let rules = [FieldRule::Text("theCode"), FieldRule::Text("code")];
        let both = json!({"theCode": "A", "code": "B"});
        let only_code = json!({"code": "B"});
        assert_eq!(first_match(&rules, &both).as_deref(), Some("A"));
        assert_eq!(first_match(&rules, &only_code).as_deref(), Some("B"));
        assert_eq!(first_match(&rules, &json!({})), None);
    }
}
