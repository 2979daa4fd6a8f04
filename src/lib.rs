//! Descriptive statistics and templated study recommendations for a student's
//! quiz attempt.
//!
//! [`Analyzer::analyze`] turns a [`QuizData`] summary into an
//! [`AnalysisResult`]: overall rating, per-subject status, ranked weaknesses,
//! strengths, recommendations and a daily study plan. Every rule is a fixed
//! accuracy band from [`bands`].

pub mod analyzer;
pub mod bands;
pub mod clock;
pub mod error;
pub mod format;
pub mod input;
pub mod insights;
pub mod models;
pub mod performance;
pub mod plan;
pub mod recommendations;
pub mod report;
pub mod topics;

pub use analyzer::Analyzer;
pub use clock::{Clock, FixedClock, SystemClock};
pub use error::{AnalyzerError, Result};
pub use models::{AnalysisResult, Counts, QuizData, Recommendation, StudyPlan, SubjectMap};
