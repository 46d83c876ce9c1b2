use std::collections::BTreeSet;

use crate::{record::DiseaseRecord, tokenizer::tokenize};

/// Weight of the phrase containment ratio in the final score.
pub const PHRASE_WEIGHT: f64 = 0.7;

/// Weight of the token overlap ratio in the final score.
pub const TOKEN_OVERLAP_WEIGHT: f64 = 0.3;

/// A prepared symptom query: the lowercased text plus its token set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    text: String,
    tokens: BTreeSet<String>,
}

impl Query {
    /// Prepare `raw` for scoring. Returns `None` for blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }

        let text = trimmed.to_lowercase();
        let tokens = tokenize(&text);
        Some(Self { text, tokens })
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tokens(&self) -> &BTreeSet<String> {
        &self.tokens
    }
}

/// One record's relevance to a query.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredCandidate<'a> {
    pub record: &'a DiseaseRecord,
    /// In `[0, 1]`.
    pub score: f64,
    /// Record phrases found verbatim in the query text.
    pub matched_phrases: Vec<String>,
}

/// Score a single record.
///
/// The score blends two ratios:
/// - phrase containment: record phrases that occur as substrings of the
///   query text, over the number of record phrases;
/// - token overlap: query tokens that contain, or are contained in, some
///   record phrase, over the number of query tokens.
pub fn score_record<'a>(
    record: &'a DiseaseRecord,
    query: &Query,
) -> ScoredCandidate<'a> {
    let phrases: Vec<&str> = record.phrases().collect();

    let matched_phrases: Vec<String> = phrases
        .iter()
        .filter(|phrase| query.text.contains(**phrase))
        .map(|phrase| phrase.to_string())
        .collect();

    let token_hits = query
        .tokens
        .iter()
        .filter(|token| {
            phrases.iter().any(|phrase| {
                phrase.contains(token.as_str()) || token.contains(phrase)
            })
        })
        .count();

    let phrase_ratio =
        matched_phrases.len() as f64 / phrases.len().max(1) as f64;
    let token_ratio = token_hits as f64 / query.tokens.len().max(1) as f64;
    let score =
        PHRASE_WEIGHT * phrase_ratio + TOKEN_OVERLAP_WEIGHT * token_ratio;

    ScoredCandidate {
        record,
        score,
        matched_phrases,
    }
}

/// Score every record and keep the best `top_k` (at least one).
///
/// Sorting is stable, so records with equal scores stay in load order.
pub fn rank<'a>(
    records: &'a [DiseaseRecord],
    query: &Query,
    top_k: usize,
) -> Vec<ScoredCandidate<'a>> {
    let mut scored: Vec<ScoredCandidate<'a>> = records
        .iter()
        .map(|record| score_record(record, query))
        .collect();

    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(top_k.max(1));
    scored
}
