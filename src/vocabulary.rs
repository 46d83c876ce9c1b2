use std::collections::HashSet;

use crate::record::DiseaseRecord;

/// Every known symptom phrase, deduplicated, in first-seen order.
///
/// Reporting only: the scorer reads phrases from the records directly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    phrases: Vec<String>,
}

impl Vocabulary {
    /// Scan records in order, and phrases within each record in order,
    /// keeping the first occurrence of each phrase.
    pub fn build(records: &[DiseaseRecord]) -> Self {
        let mut seen = HashSet::new();
        let mut phrases = Vec::new();

        for phrase in records.iter().flat_map(DiseaseRecord::phrases) {
            if seen.insert(phrase) {
                phrases.push(phrase.to_string());
            }
        }

        Self { phrases }
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.phrases.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.phrases
    }
}
