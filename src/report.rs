use std::fmt::Write;

use serde::Serialize;
use serde_json::{json, Value};

use crate::error::AnalyzerError;
use crate::models::AnalysisResult;

pub fn build_report(result: &AnalysisResult) -> String {
    let mut output = String::new();
    let overall = &result.overall_performance;

    let _ = writeln!(output, "# Quiz Performance Report");
    let _ = writeln!(
        output,
        "Generated for {} at {} ({})",
        result.student_id,
        result.timestamp.format("%Y-%m-%d %H:%M:%S UTC"),
        result.analysis_id
    );
    let _ = writeln!(output);
    let _ = writeln!(output, "## Overall");
    let _ = writeln!(
        output,
        "- {}: {:.2}% accuracy, {:.2}% completion",
        overall.performance_level, overall.accuracy, overall.completion_rate
    );
    let _ = writeln!(
        output,
        "- {} correct, {} incorrect, {} unanswered of {} questions",
        overall.correct_answers, overall.incorrect_answers, overall.unanswered, overall.total_questions
    );
    let _ = writeln!(output, "- {}", overall.message);

    let _ = writeln!(output);
    let _ = writeln!(output, "## Subjects");

    if result.subject_analysis.is_empty() {
        let _ = writeln!(output, "No subject results recorded.");
    } else {
        for (subject, analysis) in result.subject_analysis.iter() {
            let _ = writeln!(
                output,
                "- {}: {:.2}% ({}/{}), {} status, {} priority",
                subject,
                analysis.accuracy,
                analysis.correct,
                analysis.total,
                analysis.status,
                analysis.priority
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Strengths");
    for strength in &result.strengths {
        let _ = writeln!(output, "- {strength}");
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Weaknesses");

    if result.weaknesses.is_empty() {
        let _ = writeln!(output, "No subjects below the proficiency cutoff.");
    } else {
        for weakness in &result.weaknesses {
            let _ = writeln!(
                output,
                "- {} ({}, {:.2}%, {} wrong): {}",
                weakness.subject,
                weakness.severity,
                weakness.accuracy,
                weakness.questions_wrong,
                weakness.action
            );
        }
    }

    let _ = writeln!(output);
    let _ = writeln!(output, "## Recommendations");

    if result.recommendations.is_empty() {
        let _ = writeln!(output, "No recommendations for this attempt.");
    } else {
        for recommendation in &result.recommendations {
            let _ = writeln!(
                output,
                "### [{}] {}",
                recommendation.priority, recommendation.title
            );
            let _ = writeln!(output, "{}", recommendation.description);
            for item in &recommendation.action_items {
                let _ = writeln!(output, "- {item}");
            }
        }
    }

    let plan = &result.study_plan;
    let _ = writeln!(output);
    let _ = writeln!(output, "## Study Plan ({})", plan.study_duration);

    if plan.daily_schedule.is_empty() {
        let _ = writeln!(output, "No subjects to schedule.");
    } else {
        for (subject, allocation) in plan.daily_schedule.iter() {
            let _ = writeln!(
                output,
                "- {}: {} minutes, {} focus",
                subject, allocation.time_minutes, allocation.focus_level
            );
        }
        for goal in &plan.weekly_goals {
            let _ = writeln!(output, "- Goal: {goal}");
        }
    }

    output
}

/// `{"status": "success", <key>: <payload>}`
pub fn success_envelope<T: Serialize>(key: &str, payload: &T) -> serde_json::Result<Value> {
    let mut envelope = serde_json::Map::new();
    envelope.insert("status".to_string(), json!("success"));
    envelope.insert(key.to_string(), serde_json::to_value(payload)?);
    Ok(Value::Object(envelope))
}

pub fn failure_envelope(error: &AnalyzerError) -> Value {
    json!({
        "error": error.to_string(),
        "status": "failed",
        "kind": error.kind(),
    })
}
