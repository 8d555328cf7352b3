use crate::Result;
use camino::Utf8Path;
use ohno::IntoAppError;
use serde_json::{Map, Number, Value};

/// Parser family, chosen from the file extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

impl Format {
    /// Pick a parser for `path`, or `None` when the extension is not recognized.
    #[must_use]
    pub fn from_path(path: &Utf8Path) -> Option<Self> {
        match path.extension()? {
            "yaml" | "yml" => Some(Self::Yaml),
            "json" | "jsonld" => Some(Self::Json),
            _ => None,
        }
    }

    /// Parse `text`. A document that is empty or `null` yields `Ok(None)`.
    pub fn parse(self, text: &str, path: &Utf8Path) -> Result<Option<Value>> {
        let value = match self {
            Self::Yaml => parse_yaml(text).into_app_err_with(|| format!("unable to parse YAML file '{path}'"))?,
            Self::Json => parse_json(text).into_app_err_with(|| format!("unable to parse JSON file '{path}'"))?,
        };

        Ok(if value.is_null() { None } else { Some(value) })
    }
}

pub fn parse_json(text: &str) -> serde_json::Result<Value> {
    serde_json::from_str(text)
}

/// Parse a YAML document into the JSON value model.
pub fn parse_yaml(text: &str) -> serde_yaml::Result<Value> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }

    serde_yaml::from_str::<serde_yaml::Value>(text).map(yaml_to_json)
}

/// Convert a YAML value into a JSON value.
///
/// Mapping keys that are not strings are rendered as their scalar text, tags are
/// dropped, and floats that JSON cannot represent become `null`.
#[must_use]
pub fn yaml_to_json(value: serde_yaml::Value) -> Value {
    match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Value::from(i)
            } else if let Some(u) = n.as_u64() {
                Value::from(u)
            } else {
                n.as_f64().and_then(Number::from_f64).map_or(Value::Null, Value::Number)
            }
        }
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(items) => Value::Array(items.into_iter().map(yaml_to_json).collect()),
        serde_yaml::Value::Mapping(mapping) => Value::Object(
            mapping
                .into_iter()
                .map(|(k, v)| (yaml_key(k), yaml_to_json(v)))
                .collect::<Map<_, _>>(),
        ),
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

fn yaml_key(key: serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s,
        serde_yaml::Value::Null => "null".to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Tagged(tagged) => yaml_key(tagged.value),
        other => yaml_to_json(other).to_string(),
    }
}
