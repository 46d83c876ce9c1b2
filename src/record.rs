use serde::Serialize;
use serde_json::{Map, Value};

/// Placeholder used when a row names no disease.
pub const UNKNOWN_DISEASE: &str = "Unknown";

const DISEASE_FIELDS: &[&str] = &["disease", "name"];
const TREATMENT_FIELDS: &[&str] = &["treatment", "care"];
const SYMPTOM_TEXT_FIELDS: &[&str] = &["symptoms_normalized", "symptoms"];
const SYMPTOM_LIST_FIELD: &str = "normalized_symptoms_list";

/// Delimiters separating phrases in free-text symptom fields.
const PHRASE_DELIMITERS: [char; 4] = [',', ';', '/', '\n'];

/// One input row before normalization.
///
/// The schema is not fixed: JSON sources contribute arbitrary values,
/// CSV sources contribute strings only. Field lookup follows explicit
/// priority lists in [`normalize_row`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    fields: Map<String, Value>,
}

impl RawRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: &str, value: impl Into<Value>) -> Self {
        self.fields.insert(key.to_string(), value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// The first of `keys` holding a non-blank value.
    ///
    /// Empty strings, `null`, `false`, zero and empty containers are
    /// treated as absent so the next key gets a chance.
    fn first_present(&self, keys: &[&str]) -> Option<&Value> {
        keys.iter()
            .filter_map(|key| self.fields.get(*key))
            .find(|value| is_present(value))
    }
}

impl From<Map<String, Value>> for RawRow {
    fn from(fields: Map<String, Value>) -> Self {
        Self { fields }
    }
}

impl FromIterator<(String, String)> for RawRow {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(k, v)| (k, Value::String(v)))
                .collect(),
        }
    }
}

/// A disease in canonical shape. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiseaseRecord {
    pub disease: String,
    pub treatment: String,
    /// Lowercased, trimmed symptom phrases in source order.
    pub symptom_phrases: Vec<String>,
}

impl DiseaseRecord {
    /// Phrases that take part in scoring.
    pub fn phrases(&self) -> impl Iterator<Item = &str> {
        self.symptom_phrases
            .iter()
            .map(String::as_str)
            .filter(|p| !p.is_empty())
    }
}

/// Convert one raw row into a [`DiseaseRecord`].
///
/// Never fails: missing or blank fields fall back to defaults.
pub fn normalize_row(row: &RawRow) -> DiseaseRecord {
    let disease = row
        .first_present(DISEASE_FIELDS)
        .map(|value| stringify(value).trim().to_string())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| UNKNOWN_DISEASE.to_string());

    let treatment = row
        .first_present(TREATMENT_FIELDS)
        .map(stringify)
        .unwrap_or_default()
        .trim()
        .to_string();

    DiseaseRecord {
        disease,
        treatment,
        symptom_phrases: symptom_phrases(row),
    }
}

pub fn normalize_rows(rows: &[RawRow]) -> Vec<DiseaseRecord> {
    rows.iter().map(normalize_row).collect()
}

fn symptom_phrases(row: &RawRow) -> Vec<String> {
    if let Some(Value::Array(items)) = row.get(SYMPTOM_LIST_FIELD) {
        return items
            .iter()
            .map(|item| stringify_element(item).trim().to_lowercase())
            .filter(|phrase| !phrase.is_empty())
            .collect();
    }

    let text = match row.first_present(SYMPTOM_TEXT_FIELDS) {
        Some(Value::Array(items)) => {
            items.iter().map(stringify).collect::<Vec<_>>().join(", ")
        }
        Some(value) => stringify(value),
        None => String::new(),
    };

    split_phrases(&text.to_lowercase())
}

/// Split free text on `,` `;` `/` and newlines, trimming each fragment.
///
/// Text made only of delimiters and whitespace falls back to a
/// whitespace split.
pub fn split_phrases(text: &str) -> Vec<String> {
    let parts: Vec<String> = text
        .split(PHRASE_DELIMITERS)
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(str::to_string)
        .collect();

    if !parts.is_empty() || text.is_empty() {
        return parts;
    }

    text.split_whitespace().map(str::to_string).collect()
}

fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Like [`stringify`], but a `null` list entry still yields a phrase.
fn stringify_element(value: &Value) -> String {
    match value {
        Value::Null => "none".to_string(),
        other => stringify(other),
    }
}

fn stringify(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
