use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Backends hand out ids as JSON strings or numbers; both are kept as text.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Signed(i64),
    Unsigned(u64),
}

impl RawId {
    fn into_text(self) -> String {
        match self {
            RawId::Text(text) => text,
            RawId::Signed(value) => value.to_string(),
            RawId::Unsigned(value) => value.to_string(),
        }
    }
}

macro_rules! text_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        pub struct $name(String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                RawId::deserialize(deserializer).map(|raw| Self(raw.into_text()))
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.pad(&self.0)
            }
        }
    };
}

text_id!(
    /// Identity of a talent record.
    RecordId
);
text_id!(
    /// Identity of a published job.
    JobId
);

/// A candidate entry as returned by the talent search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    #[serde(default)]
    pub detail_url: String,
    /// Remaining backend fields, kept verbatim for display.
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Record {
    pub fn new(id: impl Into<String>, detail_url: impl Into<String>) -> Self {
        Self {
            id: RecordId::new(id),
            detail_url: detail_url.into(),
            fields: Map::new(),
        }
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(key.into(), value.into());
        self
    }

    /// Human label: the `name` field when present, otherwise the id.
    pub fn label(&self) -> String {
        self.fields
            .get("name")
            .and_then(Value::as_str)
            .map(ToOwned::to_owned)
            .unwrap_or_else(|| self.id.to_string())
    }
}

/// A published job an archived talent can be attached to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Job {
    pub id: JobId,
    #[serde(default, alias = "name")]
    pub title: Option<String>,
    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

impl Job {
    pub fn new(id: impl Into<String>, title: Option<&str>) -> Self {
        Self {
            id: JobId::new(id),
            title: title.map(ToOwned::to_owned),
            fields: Map::new(),
        }
    }

    pub fn label(&self) -> String {
        self.title.clone().unwrap_or_else(|| self.id.to_string())
    }
}

/// One page of a talent search.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TalentPage {
    #[serde(rename = "contacts", default)]
    pub records: Vec<Record>,
    /// Records not yet fetched for the search that produced this page.
    #[serde(rename = "remain", default)]
    pub remaining: u64,
}

impl TalentPage {
    pub fn new(records: Vec<Record>, remaining: u64) -> Self {
        Self { records, remaining }
    }
}

/// Appends `incoming` to `existing`, skipping every id already present.
///
/// The first occurrence of an id wins, so existing order is kept and new ids
/// follow in response order. Returns how many records were added.
pub fn merge_unique(existing: &mut Vec<Record>, incoming: Vec<Record>) -> usize {
    let mut seen: HashSet<RecordId> = existing.iter().map(|record| record.id.clone()).collect();
    let before = existing.len();
    existing.extend(incoming.into_iter().filter(|record| seen.insert(record.id.clone())));
    existing.len() - before
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric_and_text_ids_deserialize_alike() {
        let numeric: Record = serde_json::from_str(r#"{"id": 7, "detail_url": "u"}"#).unwrap();
        let text: Record = serde_json::from_str(r#"{"id": "7", "detail_url": "u"}"#).unwrap();
        assert_eq!(numeric.id, text.id);
        assert_eq!(numeric.id.as_str(), "7");
    }

    #[test]
    fn unknown_fields_are_retained() {
        let record: Record =
            serde_json::from_str(r#"{"id": "a", "detail_url": "u", "name": "Alice", "age": 30}"#)
                .unwrap();
        assert_eq!(record.label(), "Alice");
        assert_eq!(record.fields.get("age"), Some(&Value::from(30)));
    }

    #[test]
    fn merge_skips_duplicates_inside_one_response() {
        let mut records = vec![Record::new("1", "u1")];
        let added = merge_unique(
            &mut records,
            vec![
                Record::new("2", "first"),
                Record::new("2", "second"),
                Record::new("1", "again"),
            ],
        );
        assert_eq!(added, 1);
        assert_eq!(records[1].detail_url, "first");
        assert_eq!(records[0].detail_url, "u1");
    }
}
