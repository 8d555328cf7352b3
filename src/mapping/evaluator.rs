use super::path::resolve;
use super::table::{FieldSpec, MappingTable};
use serde_json::{Map, Value};

/// Apply a mapping table to a record.
///
/// Every field of the table appears in the output, in table order. Paths that resolve
/// to nothing, or to a falsy value, become `null`. Groups always produce a nested
/// object carrying all of their fields, even when every one of them is `null`.
#[must_use]
pub fn evaluate(record: &Value, table: MappingTable) -> Map<String, Value> {
    table
        .iter()
        .map(|field| {
            let value = match field.spec {
                FieldSpec::Group(inner) => Value::Object(evaluate(record, inner)),
                FieldSpec::Path(keys) => resolve(record, keys).filter(|v| is_truthy(v)).cloned().unwrap_or(Value::Null),
            };

            (field.name.to_string(), value)
        })
        .collect()
}

/// Whether a value carries data. `null`, `false`, zero and empty strings,
/// sequences and mappings do not.
#[must_use]
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mapping::table::{Field, page_table, summary_table};
    use crate::sources::SourceKind;
    use serde_json::json;

    #[test]
    fn test_evaluate_biotools_summary() {
        let record = json!({"license": "MIT", "description": "x", "version": "1.0"});
        let extracted = evaluate(&record, summary_table(SourceKind::Biotools));

        assert_eq!(
            Value::Object(extracted),
            json!({
                "license": "MIT",
                "summary": "x",
                "addition_date": null,
                "last_update_date": null,
                "version": "1.0"
            })
        );
    }

    #[test]
    fn test_evaluate_preserves_table_order() {
        let record = json!({"version": "1.0", "license": "MIT"});
        let extracted = evaluate(&record, summary_table(SourceKind::Biotools));
        let keys: Vec<_> = extracted.keys().map(String::as_str).collect();

        assert_eq!(keys, ["license", "summary", "addition_date", "last_update_date", "version"]);
    }

    #[test]
    fn test_evaluate_normalizes_falsy_values_to_null() {
        const TABLE: &[Field] = &[
            Field { name: "empty_string", spec: FieldSpec::Path(&["a"]) },
            Field { name: "zero", spec: FieldSpec::Path(&["b"]) },
            Field { name: "no", spec: FieldSpec::Path(&["c"]) },
            Field { name: "empty_list", spec: FieldSpec::Path(&["d"]) },
            Field { name: "empty_map", spec: FieldSpec::Path(&["e"]) },
            Field { name: "explicit_null", spec: FieldSpec::Path(&["f"]) },
            Field { name: "kept", spec: FieldSpec::Path(&["g"]) },
        ];

        let record = json!({"a": "", "b": 0, "c": false, "d": [], "e": {}, "f": null, "g": 0.5});
        let extracted = evaluate(&record, TABLE);

        assert_eq!(
            Value::Object(extracted),
            json!({
                "empty_string": null,
                "zero": null,
                "no": null,
                "empty_list": null,
                "empty_map": null,
                "explicit_null": null,
                "kept": 0.5
            })
        );
    }

    #[test]
    fn test_evaluate_group_present_when_all_children_missing() {
        let record = json!({"Description": "Sequence alignment"});
        let extracted = evaluate(&record, page_table(SourceKind::Galaxy));

        assert_eq!(
            extracted.get("no_of_tools"),
            Some(&json!({"eu": null, "org": null, "au": null, "be": null, "cz": null, "fr": null, "no": null}))
        );
        assert_eq!(extracted.get("summary"), Some(&json!("Sequence alignment")));
    }

    #[test]
    fn test_evaluate_group_values() {
        let record = json!({
            "Number_of_tools_on_UseGalaxy.eu": 12,
            "Number_of_tools_on_UseGalaxy.org_(Main)": 3,
            "Number_of_tools_on_UseGalaxy.no": 0
        });
        let extracted = evaluate(&record, page_table(SourceKind::Galaxy));

        assert_eq!(
            extracted.get("no_of_tools"),
            Some(&json!({"eu": 12, "org": 3, "au": null, "be": null, "cz": null, "fr": null, "no": null}))
        );
    }

    #[test]
    fn test_evaluate_bioconda_page_with_missing_identifiers() {
        let record = json!({
            "package": {"name": "bar", "version": 2},
            "about": {"license": "MIT", "summary": "s"}
        });
        let extracted = evaluate(&record, page_table(SourceKind::Bioconda));

        assert_eq!(extracted.get("identifiers"), Some(&Value::Null));
        assert_eq!(extracted.get("name"), Some(&json!("bar")));
        assert_eq!(extracted.get("version"), Some(&json!(2)));
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let record = json!({"package": [{"name": "bwa"}], "about": {"license": "GPL-3.0"}});
        let table = page_table(SourceKind::Bioconda);

        assert_eq!(evaluate(&record, table), evaluate(&record, table));
    }

    #[test]
    fn test_evaluate_scalar_record_yields_all_nulls() {
        let extracted = evaluate(&json!("not a mapping"), summary_table(SourceKind::Biocontainers));

        assert_eq!(Value::Object(extracted), json!({"name": null, "license": null, "summary": null}));
    }

    #[test]
    fn test_is_truthy() {
        assert!(!is_truthy(&Value::Null));
        assert!(!is_truthy(&json!(false)));
        assert!(!is_truthy(&json!(0)));
        assert!(!is_truthy(&json!(0.0)));
        assert!(!is_truthy(&json!("")));
        assert!(!is_truthy(&json!([])));
        assert!(!is_truthy(&json!({})));

        assert!(is_truthy(&json!(true)));
        assert!(is_truthy(&json!(-1)));
        assert!(is_truthy(&json!("0")));
        assert!(is_truthy(&json!([null])));
        assert!(is_truthy(&json!({"a": null})));
    }
}
