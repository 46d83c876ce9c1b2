use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const JSON_SOURCE: &str = "diseases.json";
const CSV_SOURCE: &str = "diseases.csv";

#[derive(Debug, Clone)]
pub struct DataDir {
    root: PathBuf,
}

impl DataDir {
    /// Resolve the data directory from, in order of priority:
    /// 1. An explicit path (from --data-dir)
    /// 2. The SYMPTOMX_DATA_DIR environment variable
    /// 3. The XDG data directory (~/.local/share/symptomx/)
    ///
    /// The directory is not created. A missing directory is a valid
    /// configuration: the loader falls back to the built-in catalog.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        let root = if let Some(path) = explicit {
            path.to_path_buf()
        } else if let Ok(val) = std::env::var("SYMPTOMX_DATA_DIR") {
            PathBuf::from(val)
        } else {
            xdg::BaseDirectories::with_prefix("symptomx")
                .get_data_home()
                .ok_or_else(|| {
                    Error::Config(
                        "could not determine XDG data home directory".into(),
                    )
                })?
        };

        Ok(Self { root })
    }

    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The structured list-of-objects source, tried first.
    pub fn diseases_json(&self) -> PathBuf {
        self.root.join(JSON_SOURCE)
    }

    /// The tabular source, tried when the JSON source yields nothing.
    pub fn diseases_csv(&self) -> PathBuf {
        self.root.join(CSV_SOURCE)
    }
}
