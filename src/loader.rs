use std::path::Path;

use serde::Serialize;
use serde_json::Value;

use crate::{
    data_dir::DataDir,
    error::{Error, Result},
    record::{DiseaseRecord, RawRow, normalize_rows},
};

/// Where the loaded catalog came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Json,
    Csv,
    Builtin,
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Json => "json",
            Self::Csv => "csv",
            Self::Builtin => "builtin",
        };
        f.write_str(name)
    }
}

/// The normalized catalog plus its origin.
#[derive(Debug, Clone)]
pub struct LoadedCatalog {
    pub records: Vec<DiseaseRecord>,
    pub source: DataSource,
}

type RowReader = fn(&Path) -> Result<Option<Vec<RawRow>>>;

/// Load the disease catalog from `data_dir`.
///
/// Sources are tried in order: `diseases.json`, `diseases.csv`, then the
/// built-in fallback set. A source that is missing, empty or malformed is
/// skipped (malformed ones are logged), so this always returns at least
/// the built-in records.
pub fn load_catalog(data_dir: &DataDir) -> LoadedCatalog {
    let attempts: [(DataSource, std::path::PathBuf, RowReader); 2] = [
        (DataSource::Json, data_dir.diseases_json(), read_json_rows),
        (DataSource::Csv, data_dir.diseases_csv(), read_csv_rows),
    ];

    for (source, path, read) in attempts {
        match read(&path) {
            Ok(Some(rows)) => {
                let records = normalize_rows(&rows);
                tracing::info!(
                    "Loaded {} diseases from {}",
                    records.len(),
                    path.display()
                );
                return LoadedCatalog { records, source };
            }
            Ok(None) => {
                tracing::debug!("No usable rows in {}", path.display());
            }
            Err(e) => {
                tracing::error!("Failed to parse {}: {}", path.display(), e);
            }
        }
    }

    let records = normalize_rows(&builtin_rows());
    tracing::warn!(
        "Using built-in fallback dataset: {} diseases",
        records.len()
    );
    LoadedCatalog {
        records,
        source: DataSource::Builtin,
    }
}

/// Read a JSON array of objects.
///
/// Returns `Ok(None)` when the file is missing, the root is not an array,
/// or the array is empty. Any element that is not an object makes the
/// whole source malformed.
pub fn read_json_rows(path: &Path) -> Result<Option<Vec<RawRow>>> {
    if !path.is_file() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(path)?;
    let Value::Array(items) = serde_json::from_str::<Value>(&content)? else {
        return Ok(None);
    };
    if items.is_empty() {
        return Ok(None);
    }

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::Object(map) => Ok(RawRow::from(map)),
            _ => Err(Error::MalformedSource {
                path: path.to_path_buf(),
                reason: format!("element {i} is not an object"),
            }),
        })
        .collect::<Result<Vec<_>>>()
        .map(Some)
}

/// Read a CSV file with a header row. Every cell is a string.
///
/// Ragged rows are accepted: cells past the header are ignored and
/// missing trailing cells are simply absent from the row. Returns
/// `Ok(None)` when the file is missing or has no data rows.
pub fn read_csv_rows(path: &Path) -> Result<Option<Vec<RawRow>>> {
    if !path.is_file() {
        return Ok(None);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        let row: RawRow = headers
            .iter()
            .zip(record.iter())
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();
        rows.push(row);
    }

    Ok((!rows.is_empty()).then_some(rows))
}

/// Minimal catalog used when no data files are available.
pub fn builtin_rows() -> Vec<RawRow> {
    vec![
        RawRow::new()
            .with("disease", "Common Cold")
            .with(
                "symptoms",
                "sneezing, runny nose, sore throat, mild cough, congestion",
            )
            .with(
                "treatment",
                "rest, hydration, decongestants, throat lozenges",
            ),
        RawRow::new()
            .with("disease", "Influenza (Flu)")
            .with(
                "symptoms",
                "fever, dry cough, sore throat, headache, muscle aches, fatigue",
            )
            .with(
                "treatment",
                "rest, fluids, OTC pain relievers; antivirals when prescribed",
            ),
        RawRow::new()
            .with("disease", "Migraine")
            .with(
                "symptoms",
                "headache, nausea, light sensitivity, sound sensitivity, aura",
            )
            .with(
                "treatment",
                "rest in dark room, hydration, triptans/NSAIDs per guidance",
            ),
    ]
}
