// src/core/status_parser.rs

//! Parses the JSON printed by `swapenv info --format json`.
//!
//! Field names have drifted between tool releases, so each field is looked up
//! through an ordered list of candidate keys and the first usable value wins.

use crate::{
    constants::{ENVIRONMENT_KEYS, ENVIRONMENT_LIST_KEYS, PROJECT_KEYS},
    models::{ProjectIdentity, StateSnapshot},
};
use serde_json::{Map, Value};

/// Turns the raw status payload into a snapshot.
///
/// Returns `None` when the payload is unusable: invalid JSON, anything other
/// than an object, or an object with no fields at all. Callers treat that the
/// same as the tool failing.
pub fn parse_status_payload(raw: &str) -> Option<StateSnapshot> {
    let value: Value = match serde_json::from_str(raw) {
        Ok(v) => v,
        Err(e) => {
            log::debug!("Status payload is not valid JSON: {}", e);
            return None;
        }
    };

    let Value::Object(fields) = value else {
        log::debug!("Status payload is not a JSON object");
        return None;
    };
    if fields.is_empty() {
        log::debug!("Status payload is an empty object");
        return None;
    }

    let project = first_string(&fields, PROJECT_KEYS)
        .map(ProjectIdentity::Named)
        .unwrap_or(ProjectIdentity::Present);

    Some(StateSnapshot {
        project: Some(project),
        active_environment: first_string(&fields, ENVIRONMENT_KEYS),
        known_environments: first_list(&fields, ENVIRONMENT_LIST_KEYS).unwrap_or_default(),
    })
}

/// First candidate key holding a non-empty string.
fn first_string(fields: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|key| fields.get(*key))
        .filter_map(Value::as_str)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

/// First candidate key holding an array. Non-string and empty entries are
/// dropped; order is preserved.
fn first_list(fields: &Map<String, Value>, keys: &[&str]) -> Option<Vec<String>> {
    let items = keys
        .iter()
        .filter_map(|key| fields.get(*key))
        .find_map(Value::as_array)?;

    Some(
        items
            .iter()
            .filter_map(Value::as_str)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_payload() {
        let snapshot =
            parse_status_payload(r#"{"project":"demo","environment":"dev","envs":["dev","prod"]}"#)
                .unwrap();
        assert_eq!(snapshot.project, Some(ProjectIdentity::Named("demo".to_string())));
        assert_eq!(snapshot.active_environment.as_deref(), Some("dev"));
        assert_eq!(snapshot.known_environments, vec!["dev", "prod"]);
    }

    #[test]
    fn test_alternate_field_names() {
        let snapshot = parse_status_payload(r#"{"name": "X", "env": "Y"}"#).unwrap();
        assert_eq!(snapshot.project, Some(ProjectIdentity::Named("X".to_string())));
        assert_eq!(snapshot.active_environment.as_deref(), Some("Y"));
        assert!(snapshot.known_environments.is_empty());
    }

    #[test]
    fn test_primary_names_win_over_alternates() {
        let snapshot = parse_status_payload(
            r#"{"name":"alt","project":"main","env":"alt-env","environment":"main-env"}"#,
        )
        .unwrap();
        assert_eq!(snapshot.project, Some(ProjectIdentity::Named("main".to_string())));
        assert_eq!(snapshot.active_environment.as_deref(), Some("main-env"));
    }

    #[test]
    fn test_empty_strings_fall_through() {
        let snapshot =
            parse_status_payload(r#"{"project":"","name":"fallback","environment":""}"#).unwrap();
        assert_eq!(
            snapshot.project,
            Some(ProjectIdentity::Named("fallback".to_string()))
        );
        assert_eq!(snapshot.active_environment, None);
    }

    #[test]
    fn test_missing_identity_marks_project_present() {
        let snapshot = parse_status_payload(r#"{"envs":["a"]}"#).unwrap();
        assert_eq!(snapshot.project, Some(ProjectIdentity::Present));
        assert_eq!(snapshot.active_environment, None);
        assert_eq!(snapshot.known_environments, vec!["a"]);
    }

    #[test]
    fn test_environment_list_drops_non_strings() {
        let snapshot =
            parse_status_payload(r#"{"project":"p","environments":["a",1,null,"","b"]}"#).unwrap();
        assert_eq!(snapshot.known_environments, vec!["a", "b"]);
    }

    #[test]
    fn test_malformed_payloads() {
        assert_eq!(parse_status_payload("not json"), None);
        assert_eq!(parse_status_payload(r#"{"project": "demo""#), None);
        assert_eq!(parse_status_payload("{}"), None);
        assert_eq!(parse_status_payload("[]"), None);
        assert_eq!(parse_status_payload("null"), None);
        assert_eq!(parse_status_payload(r#""demo""#), None);
    }
}
