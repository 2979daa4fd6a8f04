use crate::clock::{Clock, SystemClock};
use crate::error::Result;
use crate::insights;
use crate::models::{AnalysisResult, QuizData, Recommendation, StudyPlan};
use crate::performance;
use crate::plan;
use crate::recommendations;
use crate::topics;

/// Stateless quiz analyzer. Holds nothing but its clock, so one instance can
/// be shared freely across threads.
#[derive(Debug, Clone, Default)]
pub struct Analyzer<C = SystemClock> {
    clock: C,
}

impl Analyzer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<C: Clock> Analyzer<C> {
    pub fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    pub fn analyze(&self, quiz: &QuizData) -> AnalysisResult {
        let timestamp = self.clock.now();
        let analysis_id = self.clock.analysis_id(timestamp);

        let result = AnalysisResult {
            student_id: quiz.student_id.clone(),
            analysis_id,
            timestamp,
            overall_performance: performance::evaluate_overall(&quiz.overall),
            subject_analysis: performance::evaluate_subjects(&quiz.subjects),
            recommendations: recommendations::generate(quiz),
            study_plan: plan::build_study_plan(&quiz.subjects),
            strengths: insights::identify_strengths(&quiz.subjects),
            weaknesses: insights::identify_weaknesses(&quiz.subjects),
        };

        tracing::info!(
            analysis_id = %result.analysis_id,
            student_id = %result.student_id,
            subjects = quiz.subjects.len(),
            recommendations = result.recommendations.len(),
            level = %result.overall_performance.performance_level,
            "analysis complete"
        );
        result
    }

    pub fn analyze_json(&self, text: &str) -> Result<AnalysisResult> {
        let quiz = QuizData::from_json_str(text)?;
        Ok(self.analyze(&quiz))
    }

    pub fn recommendations(&self, quiz: &QuizData) -> Vec<Recommendation> {
        recommendations::generate(quiz)
    }

    pub fn study_plan(&self, quiz: &QuizData) -> StudyPlan {
        plan::build_study_plan(&quiz.subjects)
    }

    pub fn topics(&self, subject: &str) -> Option<&'static [&'static str]> {
        topics::topics_for(subject)
    }
}
