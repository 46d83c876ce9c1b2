use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::{
    data_dir::DataDir,
    diagnosis::{DiagnosisResult, format_ranking},
    loader::{DataSource, load_catalog},
    matcher::{Query, rank},
    record::DiseaseRecord,
    vocabulary::Vocabulary,
};

/// Number of candidates returned when the caller does not ask otherwise.
pub const DEFAULT_TOP_K: usize = 5;

/// The loaded catalog and its vocabulary.
///
/// Immutable after construction; `diagnose` only reads, so a shared
/// `&Engine` serves concurrent callers without locking.
#[derive(Debug, Clone)]
pub struct Engine {
    records: Vec<DiseaseRecord>,
    vocabulary: Vocabulary,
    source: DataSource,
    data_dir: Option<PathBuf>,
}

/// Liveness summary for callers that expose a health signal.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub diseases: usize,
    pub vocab: usize,
    pub source: DataSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
}

impl Engine {
    /// Load the catalog from `data_dir`, falling back to the built-in
    /// records when no usable source exists. Never fails.
    pub fn initialize(data_dir: &Path) -> Self {
        let catalog = load_catalog(&DataDir::new(data_dir));
        let mut engine = Self::from_records(catalog.records, catalog.source);
        engine.data_dir = Some(data_dir.to_path_buf());
        engine
    }

    /// Build an engine over an already normalized catalog.
    pub fn from_records(
        records: Vec<DiseaseRecord>,
        source: DataSource,
    ) -> Self {
        let vocabulary = Vocabulary::build(&records);
        tracing::info!("Vocab built: {} phrases", vocabulary.len());

        Self {
            records,
            vocabulary,
            source,
            data_dir: None,
        }
    }

    /// Rank the catalog against free-text symptoms.
    ///
    /// Blank input yields no candidates and a prompt message. Otherwise at
    /// most `top_k` (minimum 1) candidates are returned, best first.
    pub fn diagnose(&self, text: &str, top_k: usize) -> DiagnosisResult {
        let Some(query) = Query::parse(text) else {
            return DiagnosisResult::empty_query();
        };

        let ranked = rank(&self.records, &query, top_k);
        tracing::debug!(
            "Diagnosed query of {} chars ({} tokens): {} candidates",
            query.text().len(),
            query.tokens().len(),
            ranked.len()
        );

        format_ranking(&ranked)
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn source(&self) -> DataSource {
        self.source
    }

    pub fn health(&self) -> Health {
        Health {
            status: "ok",
            diseases: self.record_count(),
            vocab: self.vocabulary_len(),
            source: self.source,
            data_dir: self.data_dir.clone(),
        }
    }
}
