//! YAML document generation from a form snapshot
//!
//! Takes the full nested snapshot of one form (boss or item), lifts the
//! internal name out as the document's single top-level key, prunes the
//! rest, and serializes. Every failure mode is a [`GenerateError`] whose
//! display text goes straight to the output panel; nothing here prints,
//! logs, or panics.

use super::prune::prune;
use serde_yaml_ng::{Mapping, Value};
use thiserror::Error;

/// Mapping key that holds the entity's internal name in a form snapshot.
pub const INTERNAL_NAME_KEY: &str = "internalName";

/// Which of the two entity shapes is being generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Boss,
    Item,
}

impl Kind {
    pub fn parse(s: &str) -> Result<Self, GenerateError> {
        match s {
            "boss" => Ok(Kind::Boss),
            "item" => Ok(Kind::Item),
            other => Err(GenerateError::InvalidKind(other.to_string())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Boss => "boss",
            Kind::Item => "item",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Kind::Boss => "Boss",
            Kind::Item => "Item",
        }
    }
}

/// Failure modes of a generation attempt.
///
/// All are recoverable: the display text replaces the generated output
/// and the user corrects input and re-triggers generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("Error: unknown generator kind `{0}` (expected `boss` or `item`)")]
    InvalidKind(String),
    #[error("Error: Internal Name is required, it becomes the top-level YAML key")]
    MissingInternalName,
    #[error("Error: YAML generation failed.\n{0}")]
    Serialization(String),
}

/// Generate YAML text for one form snapshot.
///
/// The snapshot must be a mapping containing an `internalName` string;
/// that check happens before any pruning, so an entity with a name and
/// nothing else is still valid (it serializes as `Name: null`).
pub fn generate(kind: &str, form: &Value) -> Result<String, GenerateError> {
    Kind::parse(kind)?;

    let map = form.as_mapping().ok_or(GenerateError::MissingInternalName)?;
    let internal_name = map
        .get(INTERNAL_NAME_KEY)
        .and_then(Value::as_str)
        .filter(|name| !name.is_empty())
        .ok_or(GenerateError::MissingInternalName)?
        .to_string();

    let mut sections = map.clone();
    sections.remove(INTERNAL_NAME_KEY);

    let body = prune(Value::Mapping(sections)).unwrap_or(Value::Null);

    let mut document = Mapping::new();
    document.insert(Value::String(internal_name), body);

    serde_yaml_ng::to_string(&Value::Mapping(document))
        .map_err(|e| GenerateError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn yaml(s: &str) -> Value {
        serde_yaml_ng::from_str(s).expect("test yaml parses")
    }

    #[test]
    fn test_kind_parse() {
        assert_eq!(Kind::parse("boss").unwrap(), Kind::Boss);
        assert_eq!(Kind::parse("item").unwrap(), Kind::Item);
        assert!(matches!(
            Kind::parse("none"),
            Err(GenerateError::InvalidKind(_))
        ));
    }

    #[test]
    fn test_invalid_kind_aborts_generation() {
        let form = yaml(r#"{internalName: "Zed", Options: {Health: 100}}"#);
        let err = generate("spawner", &form).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error: unknown generator kind `spawner` (expected `boss` or `item`)"
        );
    }

    #[test]
    fn test_missing_internal_name_rejected_before_pruning() {
        // Populated fields do not rescue a missing name.
        let form = yaml(r#"{internalName: "", Options: {Health: 100}}"#);
        let err = generate("boss", &form).unwrap_err();
        assert!(matches!(err, GenerateError::MissingInternalName));
        assert_eq!(
            err.to_string(),
            "Error: Internal Name is required, it becomes the top-level YAML key"
        );
    }

    #[test]
    fn test_absent_internal_name_rejected() {
        let form = yaml("{Options: {Health: 100}}");
        assert!(matches!(
            generate("boss", &form),
            Err(GenerateError::MissingInternalName)
        ));
    }

    #[test]
    fn test_non_mapping_snapshot_rejected() {
        assert!(matches!(
            generate("item", &yaml("[1, 2, 3]")),
            Err(GenerateError::MissingInternalName)
        ));
    }

    #[test]
    fn test_minimal_valid_boss_document() {
        let form = yaml(
            r#"
            internalName: "Zed"
            Options:
              Type: ZOMBIE
              Health: 100
            Equipment: []
            AIGoalSelectors: []
            "#,
        );
        let text = generate("boss", &form).unwrap();
        assert_eq!(text, "Zed:\n  Options:\n    Type: ZOMBIE\n    Health: 100\n");
    }

    #[test]
    fn test_all_empty_sections_yield_null_entity() {
        // The key is retained with an empty value, not omitted.
        let form = yaml(r#"{internalName: "Foo", Options: {Id: ""}}"#);
        let text = generate("item", &form).unwrap();
        assert_eq!(text, "Foo: null\n");
    }

    #[test]
    fn test_sequences_render_under_their_key() {
        let form = yaml(
            r#"
            internalName: "Brute"
            Equipment:
              - "diamond_sword HAND"
              - ""
              - "iron_helmet HEAD"
            "#,
        );
        let text = generate("boss", &form).unwrap();
        assert_eq!(
            text,
            "Brute:\n  Equipment:\n  - diamond_sword HAND\n  - iron_helmet HEAD\n"
        );
    }

    #[test]
    fn test_snapshot_is_not_mutated() {
        let form = yaml(r#"{internalName: "Zed", Options: {Type: ZOMBIE}, Equipment: []}"#);
        let before = form.clone();
        generate("boss", &form).unwrap();
        assert_eq!(form, before);
    }

    #[test]
    fn test_repeated_generation_is_deterministic() {
        let form = yaml(
            r#"
            internalName: "Zed"
            Options: {Type: ZOMBIE, Health: 100, Damage: 0, NoAI: false}
            KillMessages: ["<target> was slain"]
            "#,
        );
        let first = generate("boss", &form).unwrap();
        let second = generate("boss", &form).unwrap();
        assert_eq!(first, second);
    }
}
