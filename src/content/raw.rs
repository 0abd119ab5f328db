//! Raw CMS records as returned by the WordPress REST API

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// One works entry exactly as the CMS returns it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawRecord {
    /// Entry identifier
    #[serde(deserialize_with = "id_or_absent")]
    pub id: Option<u64>,

    /// Publication timestamp
    #[serde(deserialize_with = "string_or_absent")]
    pub date: Option<String>,

    /// ACF custom fields
    #[serde(deserialize_with = "fields_or_empty")]
    pub acf: FieldBag,
}

/// Flat bag of ACF custom fields keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldBag(Map<String, Value>);

impl FieldBag {
    /// Non-empty string value of a field.
    ///
    /// ACF reports unset fields as `""`, `false` or `null`; all of those,
    /// and any non-string value, count as absent.
    pub fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key) {
            Some(Value::String(s)) if !s.is_empty() => Some(s.clone()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// WordPress sends `false` or `[]` for `acf` when an entry has no custom fields
fn fields_or_empty<'de, D>(deserializer: D) -> Result<FieldBag, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Object(map) => Ok(FieldBag(map)),
        other => {
            tracing::debug!("acf is not an object ({}), treating as empty", other);
            Ok(FieldBag::default())
        }
    }
}

/// Numeric id, also accepted as a numeric string; anything else is absent
fn id_or_absent<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = match Value::deserialize(deserializer)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    Ok(id)
}

/// String value; any other JSON type is absent
fn string_or_absent<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}
