use crate::bands::{self, Remedy, REMEDY, SEVERITY};
use crate::format::{capitalize, round2, whole_percent};
use crate::models::{Counts, SubjectMap, Weakness};

pub const NO_STRENGTHS_YET: &str = "Keep practicing to identify your strong subjects";

/// Subjects at or above the strength cutoff, in input order. Never empty.
pub fn identify_strengths(subjects: &SubjectMap<Counts>) -> Vec<String> {
    let mut strengths: Vec<String> = subjects
        .iter()
        .filter_map(|(subject, counts)| {
            let accuracy = counts.accuracy();
            bands::is_strength(accuracy).then(|| {
                format!(
                    "{}: {}% accuracy - Excellent understanding",
                    capitalize(subject),
                    whole_percent(accuracy)
                )
            })
        })
        .collect();

    if strengths.is_empty() {
        strengths.push(NO_STRENGTHS_YET.to_string());
    }

    strengths
}

/// Subjects below the proficiency cutoff, worst first.
pub fn identify_weaknesses(subjects: &SubjectMap<Counts>) -> Vec<Weakness> {
    let mut weaknesses: Vec<Weakness> = subjects
        .iter()
        .filter_map(|(subject, counts)| {
            let accuracy = counts.accuracy();
            if !bands::needs_improvement(accuracy) {
                return None;
            }

            Some(Weakness {
                subject: capitalize(subject),
                accuracy: round2(accuracy),
                questions_wrong: counts.wrong(),
                severity: SEVERITY.classify(accuracy),
                action: action_plan(subject, accuracy),
            })
        })
        .collect();

    // stable: equal accuracies keep input order
    weaknesses.sort_by(|a, b| a.accuracy.total_cmp(&b.accuracy));
    weaknesses
}

pub fn action_plan(subject: &str, accuracy: f64) -> String {
    match REMEDY.classify(accuracy) {
        Remedy::Fundamentals => format!(
            "Start with fundamentals. Review basic concepts in {subject} before attempting practice questions."
        ),
        Remedy::CoreConcepts => format!(
            "Focus on understanding core concepts. Practice more {subject} questions and review mistakes."
        ),
        Remedy::AdvancedPractice => format!(
            "You're close! Practice advanced {subject} problems and review common error patterns."
        ),
    }
}
