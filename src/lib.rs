//! symptomx - offline symptom lookup over a small disease catalog.
//!
//! symptomx loads disease records from `diseases.json` or `diseases.csv` in
//! a data directory (falling back to a tiny built-in catalog), then ranks
//! them against free-text symptom descriptions using phrase containment
//! and token overlap. It is a lookup utility, not a clinical tool.
//!
//! # Quick start
//!
//! ```no_run
//! use std::path::Path;
//!
//! use symptomx::Engine;
//!
//! let engine = Engine::initialize(Path::new("data"));
//! let result = engine.diagnose("fever, dry cough", 5);
//!
//! if let Some(primary) = &result.primary {
//!     println!("{} ({:.1}%)", primary.disease, primary.confidence_percent);
//! }
//! for other in &result.possible {
//!     println!("  {} ({:.1}%)", other.disease, other.confidence_percent);
//! }
//! ```

pub mod data_dir;
pub mod diagnosis;
pub mod engine;
pub mod error;
pub mod loader;
pub mod matcher;
pub mod record;
pub mod tokenizer;
pub mod vocabulary;

pub use data_dir::DataDir;
pub use diagnosis::{CandidateView, DiagnosisResult};
pub use engine::{DEFAULT_TOP_K, Engine, Health};
pub use error::{Error, Result};
pub use loader::DataSource;
pub use record::{DiseaseRecord, RawRow};
pub use vocabulary::Vocabulary;
