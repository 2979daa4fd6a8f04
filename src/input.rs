use std::io::Read;
use std::path::Path;

use serde_json::Value;

use crate::error::{AnalyzerError, Result};
use crate::models::{Counts, QuizData, SubjectMap, ANONYMOUS_STUDENT};

impl QuizData {
    pub fn from_json_str(text: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_value(value)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let value: Value = serde_json::from_reader(reader)?;
        Self::from_value(value)
    }

    /// Accepts any JSON object. Missing sections and counts become zero or
    /// empty; only a non-object top level is rejected as invalid input.
    pub fn from_value(value: Value) -> Result<Self> {
        let Value::Object(fields) = &value else {
            return Err(AnalyzerError::InvalidInput(format!(
                "quiz data must be a JSON object, got {}",
                json_kind(&value)
            )));
        };

        for section in ["overall", "subjects"] {
            if fields.get(section).map_or(true, Value::is_null) {
                tracing::debug!(section, "quiz data has no {section} section, using empty counts");
            }
        }

        let quiz: QuizData = serde_json::from_value(value)?;
        if !quiz.overall.is_consistent() {
            tracing::warn!(
                total = quiz.overall.total,
                correct = quiz.overall.correct,
                answered = quiz.overall.answered,
                "overall counts are not ordered correct <= answered <= total"
            );
        }
        for (subject, counts) in quiz.subjects.iter() {
            if !counts.is_consistent() {
                tracing::warn!(
                    subject,
                    total = counts.total,
                    correct = counts.correct,
                    answered = counts.answered,
                    "subject counts are not ordered correct <= answered <= total"
                );
            }
        }

        Ok(quiz)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    subject: String,
    total: i64,
    correct: i64,
    answered: i64,
}

/// Builds quiz data from `subject,total,correct,answered` rows; the overall
/// record is the column sums.
pub fn read_csv<R: Read>(reader: R, student_id: Option<&str>) -> Result<QuizData> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut overall = Counts::default();
    let mut subjects = SubjectMap::new();

    for result in reader.deserialize::<CsvRow>() {
        let row = result?;
        let counts = Counts::new(row.total, row.correct, row.answered);
        overall.accumulate(&counts);
        subjects.insert(row.subject, counts);
    }

    tracing::info!(subjects = subjects.len(), total = overall.total, "imported quiz counts");

    Ok(QuizData {
        student_id: student_id.unwrap_or(ANONYMOUS_STUDENT).to_string(),
        overall,
        subjects,
    })
}

pub fn import_csv(csv_path: &Path, student_id: Option<&str>) -> Result<QuizData> {
    let file = std::fs::File::open(csv_path)?;
    read_csv(file, student_id)
}
