use crate::bands::{self, PERFORMANCE_LEVEL, PRIORITY, SUBJECT_STATUS};
use crate::format::round2;
use crate::models::{Counts, OverallPerformance, SubjectMap, SubjectPerformance};

pub fn evaluate_overall(overall: &Counts) -> OverallPerformance {
    let accuracy = overall.accuracy();
    let level = PERFORMANCE_LEVEL.classify(accuracy);
    tracing::debug!(
        total = overall.total,
        correct = overall.correct,
        answered = overall.answered,
        accuracy,
        level = %level,
        "evaluated overall performance"
    );

    OverallPerformance {
        accuracy: round2(accuracy),
        completion_rate: round2(overall.completion_rate()),
        total_questions: overall.total,
        correct_answers: overall.correct,
        incorrect_answers: overall.incorrect(),
        unanswered: overall.unanswered(),
        performance_level: level,
        message: level.message().to_string(),
    }
}

pub fn evaluate_subject(counts: &Counts) -> SubjectPerformance {
    let accuracy = counts.accuracy();

    SubjectPerformance {
        accuracy: round2(accuracy),
        correct: counts.correct,
        total: counts.total,
        wrong: counts.wrong(),
        status: SUBJECT_STATUS.classify(accuracy),
        improvement_needed: bands::needs_improvement(accuracy),
        priority: PRIORITY.classify(accuracy),
    }
}

pub fn evaluate_subjects(subjects: &SubjectMap<Counts>) -> SubjectMap<SubjectPerformance> {
    subjects
        .iter()
        .map(|(subject, counts)| (subject.clone(), evaluate_subject(counts)))
        .collect()
}
