use serde_json::Value;

/// Resolve a key path inside a record.
///
/// Before every key lookup a sequence is collapsed to its first element, so
/// `[{"a": 1}]` and `{"a": 1}` both resolve `["a"]` to `1`. Any shape mismatch
/// (a scalar where a mapping is expected, a missing key, an empty sequence)
/// yields `None`. The final value is returned as-is, sequences included.
#[must_use]
pub fn resolve<'a, K: AsRef<str>>(record: &'a Value, path: &[K]) -> Option<&'a Value> {
    let mut current = record;

    for key in path {
        if let Value::Array(items) = current {
            current = items.first()?;
        }

        match current {
            Value::Object(map) => current = map.get(key.as_ref())?,
            _ => return None,
        }
    }

    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resolve_nested_keys() {
        let record = json!({"package": {"name": "samtools", "version": "1.19"}});
        assert_eq!(resolve(&record, &["package", "name"]), Some(&json!("samtools")));
        assert_eq!(resolve(&record, &["package", "version"]), Some(&json!("1.19")));
    }

    #[test]
    fn test_resolve_empty_path_returns_record() {
        let record = json!({"a": 1});
        let empty: [&str; 0] = [];
        assert_eq!(resolve(&record, &empty), Some(&record));
    }

    #[test]
    fn test_resolve_missing_key() {
        let record = json!({"package": {"name": "samtools"}});
        assert_eq!(resolve(&record, &["package", "license"]), None);
        assert_eq!(resolve(&record, &["about", "license"]), None);
    }

    #[test]
    fn test_resolve_through_scalar_is_absent() {
        let record = json!({"package": "samtools"});
        assert_eq!(resolve(&record, &["package", "name"]), None);

        let record = json!(42);
        assert_eq!(resolve(&record, &["anything"]), None);
    }

    #[test]
    fn test_resolve_unwraps_single_element_lists() {
        let record = json!({"about": [{"license": "MIT"}]});
        assert_eq!(resolve(&record, &["about", "license"]), Some(&json!("MIT")));
    }

    #[test]
    fn test_resolve_takes_head_of_longer_lists() {
        let record = json!({"about": [{"license": "MIT"}, {"license": "GPL-3.0"}]});
        assert_eq!(resolve(&record, &["about", "license"]), Some(&json!("MIT")));
    }

    #[test]
    fn test_resolve_empty_list_is_absent() {
        let record = json!({"about": []});
        assert_eq!(resolve(&record, &["about", "license"]), None);
    }

    #[test]
    fn test_resolve_root_sequence_matches_head() {
        let head = json!({"name": "bwa", "extra": {"identifiers": ["biotools:bwa"]}});
        let record = json!([head.clone(), {"name": "other"}]);

        for path in [vec!["name"], vec!["extra", "identifiers"], vec!["missing"]] {
            assert_eq!(resolve(&record, &path), resolve(&head, &path));
        }

        assert_eq!(resolve(&json!([]), &["name"]), None);
    }

    #[test]
    fn test_resolve_unwraps_only_one_level_per_step() {
        let record = json!([[{"name": "bwa"}]]);
        assert_eq!(resolve(&record, &["name"]), None);
    }

    #[test]
    fn test_resolve_returns_final_list_untouched() {
        let record = json!({"EDAM_topics": ["Genomics", "Mapping"]});
        assert_eq!(resolve(&record, &["EDAM_topics"]), Some(&json!(["Genomics", "Mapping"])));
    }

    #[test]
    fn test_resolve_dotted_key_is_single_segment() {
        let record = json!({"bio.tool_ID": "bwa", "bio": {"tool_ID": "wrong"}});
        assert_eq!(resolve(&record, &["bio.tool_ID"]), Some(&json!("bwa")));
    }

    #[test]
    fn test_resolve_explicit_null_is_returned() {
        let record = json!({"license": null});
        assert_eq!(resolve(&record, &["license"]), Some(&Value::Null));
        assert_eq!(resolve(&record, &["license", "name"]), None);
    }
}
