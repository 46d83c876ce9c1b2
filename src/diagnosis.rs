use serde::Serialize;

use crate::matcher::ScoredCandidate;

/// Returned instead of a ranking when the query is blank.
pub const EMPTY_QUERY_MESSAGE: &str = "Please enter your symptoms.";

/// Shown by callers when a diagnose call fails unexpectedly.
pub const RETRY_MESSAGE: &str =
    "Could not process that input. Try different wording (e.g., 'fever, cough').";

/// A ranked candidate as presented to callers.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateView {
    pub disease: String,
    pub treatment: String,
    /// Score as a percentage with one decimal place.
    #[serde(rename = "confidence")]
    pub confidence_percent: f64,
    #[serde(rename = "matched")]
    pub matched_phrases: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DiagnosisResult {
    pub primary: Option<CandidateView>,
    pub possible: Vec<CandidateView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl DiagnosisResult {
    pub fn empty_query() -> Self {
        Self {
            primary: None,
            possible: Vec::new(),
            message: Some(EMPTY_QUERY_MESSAGE.to_string()),
        }
    }

    /// Number of ranked candidates, primary included.
    pub fn candidate_count(&self) -> usize {
        usize::from(self.primary.is_some()) + self.possible.len()
    }

    pub fn candidates(&self) -> impl Iterator<Item = &CandidateView> {
        self.primary.iter().chain(self.possible.iter())
    }
}

/// Clamp `score` to `[0, 1]` and express it as a percentage rounded to
/// one decimal place.
///
/// Rounding works on the exact binary value of the percentage with ties to
/// even, so `73.75` becomes `73.8` and `26.25` becomes `26.2`.
pub fn confidence_percent(score: f64) -> f64 {
    let percent = 100.0 * score.clamp(0.0, 1.0);
    format!("{percent:.1}").parse().unwrap_or(percent)
}

impl From<&ScoredCandidate<'_>> for CandidateView {
    fn from(candidate: &ScoredCandidate<'_>) -> Self {
        Self {
            disease: candidate.record.disease.clone(),
            treatment: candidate.record.treatment.clone(),
            confidence_percent: confidence_percent(candidate.score),
            matched_phrases: candidate.matched_phrases.clone(),
        }
    }
}

/// Shape an already ranked window: the first candidate is primary, the
/// rest are possible alternatives in the same order.
pub fn format_ranking(ranked: &[ScoredCandidate<'_>]) -> DiagnosisResult {
    let mut views = ranked.iter().map(CandidateView::from);
    let primary = views.next();

    DiagnosisResult {
        primary,
        possible: views.collect(),
        message: None,
    }
}

/// Format a result for human-readable terminal output.
pub fn format_human(result: &DiagnosisResult) -> String {
    let mut out = String::new();

    if let Some(message) = &result.message {
        out.push_str(message);
        out.push('\n');
    }

    let Some(primary) = &result.primary else {
        return out;
    };

    out.push_str(&format!(
        "Most likely: {} ({:.1}%)\n",
        primary.disease, primary.confidence_percent
    ));
    push_details(&mut out, primary);

    if !result.possible.is_empty() {
        out.push_str("\nOther possibilities:\n");
        for (i, view) in result.possible.iter().enumerate() {
            out.push_str(&format!(
                "{:>3}. {} ({:.1}%)\n",
                i + 2,
                view.disease,
                view.confidence_percent
            ));
            push_details(&mut out, view);
        }
    }

    out
}

fn push_details(out: &mut String, view: &CandidateView) {
    if !view.treatment.is_empty() {
        out.push_str(&format!("     Treatment: {}\n", view.treatment));
    }
    if !view.matched_phrases.is_empty() {
        out.push_str(&format!(
            "     Matched: {}\n",
            view.matched_phrases.join(", ")
        ));
    }
}
