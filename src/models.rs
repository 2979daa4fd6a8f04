use std::fmt;

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

pub const ANONYMOUS_STUDENT: &str = "anonymous";

/// Subject-keyed mapping in the order keys first appeared. Ranking ties and
/// every per-subject listing follow this order.
pub type SubjectMap<V> = IndexMap<String, V>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Counts {
    pub total: i64,
    pub correct: i64,
    pub answered: i64,
}

impl Counts {
    pub fn new(total: i64, correct: i64, answered: i64) -> Self {
        Self {
            total,
            correct,
            answered,
        }
    }

    pub fn accuracy(&self) -> f64 {
        percentage(self.correct, self.total)
    }

    pub fn completion_rate(&self) -> f64 {
        percentage(self.answered, self.total)
    }

    /// Answered but not correct. Differences saturate instead of overflowing
    /// when the counts are out of order.
    pub fn incorrect(&self) -> i64 {
        self.answered.saturating_sub(self.correct)
    }

    pub fn unanswered(&self) -> i64 {
        self.total.saturating_sub(self.answered)
    }

    pub fn wrong(&self) -> i64 {
        self.total.saturating_sub(self.correct)
    }

    pub fn accumulate(&mut self, other: &Counts) {
        self.total = self.total.saturating_add(other.total);
        self.correct = self.correct.saturating_add(other.correct);
        self.answered = self.answered.saturating_add(other.answered);
    }

    pub fn is_consistent(&self) -> bool {
        0 <= self.correct && self.correct <= self.answered && self.answered <= self.total
    }
}

/// `part / whole * 100`, or 0 when there is nothing to divide by.
pub fn percentage(part: i64, whole: i64) -> f64 {
    if whole > 0 {
        part as f64 / whole as f64 * 100.0
    } else {
        0.0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizData {
    #[serde(default = "anonymous", deserialize_with = "student_or_anonymous")]
    pub student_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub overall: Counts,
    #[serde(default, deserialize_with = "null_as_default")]
    pub subjects: SubjectMap<Counts>,
}

impl Default for QuizData {
    fn default() -> Self {
        Self {
            student_id: anonymous(),
            overall: Counts::default(),
            subjects: SubjectMap::new(),
        }
    }
}

fn anonymous() -> String {
    ANONYMOUS_STUDENT.to_string()
}

fn student_or_anonymous<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(anonymous))
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PerformanceLevel {
    Excellent,
    Good,
    Average,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl PerformanceLevel {
    pub fn label(self) -> &'static str {
        match self {
            PerformanceLevel::Excellent => "Excellent",
            PerformanceLevel::Good => "Good",
            PerformanceLevel::Average => "Average",
            PerformanceLevel::NeedsImprovement => "Needs Improvement",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PerformanceLevel::Excellent => {
                "Outstanding performance! You have a strong grasp of the material."
            }
            PerformanceLevel::Good => "Good work! Focus on weak areas to reach excellence.",
            PerformanceLevel::Average => {
                "You're making progress. Consistent practice will improve your scores."
            }
            PerformanceLevel::NeedsImprovement => {
                "Don't worry! With focused study, you can significantly improve."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubjectStatus {
    Strong,
    Moderate,
    Weak,
    Critical,
}

impl SubjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            SubjectStatus::Strong => "Strong",
            SubjectStatus::Moderate => "Moderate",
            SubjectStatus::Weak => "Weak",
            SubjectStatus::Critical => "Critical",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Critical,
    Moderate,
}

impl Severity {
    pub fn label(self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::Moderate => "Moderate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FocusLevel {
    High,
    Medium,
    Maintenance,
}

impl FocusLevel {
    pub fn label(self) -> &'static str {
        match self {
            FocusLevel::High => "High",
            FocusLevel::Medium => "Medium",
            FocusLevel::Maintenance => "Maintenance",
        }
    }
}

macro_rules! display_via_label {
    ($($ty:ty),*) => {
        $(impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        })*
    };
}

display_via_label!(PerformanceLevel, SubjectStatus, Priority, Severity, FocusLevel);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OverallPerformance {
    pub accuracy: f64,
    pub completion_rate: f64,
    pub total_questions: i64,
    pub correct_answers: i64,
    pub incorrect_answers: i64,
    pub unanswered: i64,
    pub performance_level: PerformanceLevel,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectPerformance {
    pub accuracy: f64,
    pub correct: i64,
    pub total: i64,
    pub wrong: i64,
    pub status: SubjectStatus,
    pub improvement_needed: bool,
    pub priority: Priority,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Weakness {
    pub subject: String,
    pub accuracy: f64,
    pub questions_wrong: i64,
    pub severity: Severity,
    pub action: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub priority: Priority,
    pub subject: String,
    pub title: String,
    pub description: String,
    pub action_items: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TimeAllocation {
    pub time_minutes: i64,
    pub focus_level: FocusLevel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyPlan {
    pub daily_schedule: SubjectMap<TimeAllocation>,
    pub weekly_goals: Vec<String>,
    pub study_duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub student_id: String,
    pub analysis_id: String,
    pub timestamp: DateTime<Utc>,
    pub overall_performance: OverallPerformance,
    pub subject_analysis: SubjectMap<SubjectPerformance>,
    pub recommendations: Vec<Recommendation>,
    pub study_plan: StudyPlan,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<Weakness>,
}
