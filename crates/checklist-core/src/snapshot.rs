//! Persisted Snapshot
//!
//! Wire shape: `{"meta":{"savedAt":<ms>},"sections":{"<key>":[{"value":5,"checked":true},...]}}`.
//! Rows are positional: the Nth entry belongs to the Nth row of the section.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::coerce::to_int;
use crate::error::{ChecklistError, ChecklistResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SnapshotMeta {
    /// Milliseconds since the Unix epoch
    pub saved_at: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedRow {
    pub value: i64,
    pub checked: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Snapshot {
    pub meta: SnapshotMeta,
    /// `None` marks an entry that could not be read; that row is left alone
    pub sections: BTreeMap<String, Vec<Option<SavedRow>>>,
}

impl Snapshot {
    pub fn new(saved_at: u64) -> Self {
        Self {
            meta: SnapshotMeta { saved_at },
            sections: BTreeMap::new(),
        }
    }

    pub fn encode(&self) -> ChecklistResult<String> {
        serde_json::to_string(self).map_err(|e| ChecklistError::Encode(e.to_string()))
    }

    /// Lenient decoder.
    ///
    /// Fails only when the text is not JSON or has no `sections` object.
    /// A section that is not an array reads as empty. An entry that is not
    /// an object is kept as `None`. Values are coerced with `to_int`, so
    /// `"12%"` and `12` both read as 12; `checked` follows JS truthiness.
    pub fn decode(text: &str) -> ChecklistResult<Self> {
        let root: Value =
            serde_json::from_str(text).map_err(|e| ChecklistError::Decode(e.to_string()))?;

        let sections = root
            .get("sections")
            .and_then(Value::as_object)
            .ok_or_else(|| ChecklistError::Decode("missing sections object".to_string()))?;

        let saved_at = root
            .get("meta")
            .and_then(|meta| meta.get("savedAt"))
            .and_then(|v| v.as_u64().or_else(|| v.as_f64().map(|f| f.max(0.0) as u64)))
            .unwrap_or(0);

        let sections: BTreeMap<String, Vec<Option<SavedRow>>> = sections
            .iter()
            .map(|(key, entries)| {
                let rows: Vec<Option<SavedRow>> = entries
                    .as_array()
                    .map(|entries| entries.iter().map(decode_row).collect())
                    .unwrap_or_default();
                (key.clone(), rows)
            })
            .collect();

        Ok(Self {
            meta: SnapshotMeta { saved_at },
            sections,
        })
    }

    /// Saved entries for a section, empty when the section was never saved
    pub fn rows(&self, key: &str) -> &[Option<SavedRow>] {
        self.sections.get(key).map(Vec::as_slice).unwrap_or(&[])
    }
}

fn decode_row(entry: &Value) -> Option<SavedRow> {
    let fields = entry.as_object()?;
    let value = fields.get("value").map(value_text).unwrap_or_default();
    let checked = fields.get("checked").map(is_truthy).unwrap_or(false);
    Some(SavedRow {
        value: to_int(&value),
        checked,
    })
}

fn value_text(value: &Value) -> String {
    match value {
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        _ => String::new(),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0 && !f.is_nan()).unwrap_or(false),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_wire_shape() {
        let mut snapshot = Snapshot::new(1_700_000_000_000);
        snapshot.sections.insert(
            "4h".to_string(),
            vec![Some(SavedRow { value: 10, checked: true })],
        );
        let json: Value = serde_json::from_str(&snapshot.encode().unwrap()).unwrap();
        assert_eq!(json["meta"]["savedAt"], 1_700_000_000_000u64);
        assert_eq!(json["sections"]["4h"][0]["value"], 10);
        assert_eq!(json["sections"]["4h"][0]["checked"], true);
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert!(Snapshot::decode("").is_err());
        assert!(Snapshot::decode("not json").is_err());
        assert!(Snapshot::decode("null").is_err());
        assert!(Snapshot::decode(r#"{"meta":{}}"#).is_err());
        assert!(Snapshot::decode(r#"{"sections":[1,2]}"#).is_err());
    }

    #[test]
    fn test_decode_is_lenient_per_entry() {
        let text = r#"{
            "meta": {"savedAt": 12.0},
            "sections": {
                "daily": [
                    {"value": "15%", "checked": 1},
                    null,
                    7,
                    {"checked": true},
                    {"value": -5, "checked": ""}
                ],
                "weekly": "oops"
            }
        }"#;
        let snapshot = Snapshot::decode(text).unwrap();
        assert_eq!(snapshot.meta.saved_at, 12);

        let daily = snapshot.rows("daily");
        assert_eq!(daily.len(), 5);
        assert_eq!(daily[0], Some(SavedRow { value: 15, checked: true }));
        assert_eq!(daily[1], None);
        assert_eq!(daily[2], None);
        assert_eq!(daily[3], Some(SavedRow { value: 0, checked: true }));
        assert_eq!(daily[4], Some(SavedRow { value: -5, checked: false }));

        assert!(snapshot.rows("weekly").is_empty());
        assert!(snapshot.rows("missing").is_empty());
    }
}
