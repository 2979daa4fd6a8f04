//! Templated recommendations built from subject rankings and unanswered
//! questions.
//!
//! At most three are produced, always in the same order: the weakest subject,
//! completing the whole quiz, then keeping up the strongest subject. Each one
//! is guarded on its own, so any subset can appear.

use crate::bands;
use crate::format::{capitalize, whole_percent};
use crate::models::{Counts, Priority, QuizData, Recommendation, SubjectMap};

pub const ALL_SUBJECTS: &str = "All Subjects";

pub fn generate(quiz: &QuizData) -> Vec<Recommendation> {
    let ranked = rank_subjects(&quiz.subjects);
    let mut recommendations = Vec::new();

    if let Some(&(subject, accuracy)) = ranked.first() {
        if bands::needs_improvement(accuracy) {
            recommendations.push(focus_on_weakest(subject, accuracy));
        }
    }

    if quiz.overall.answered < quiz.overall.total {
        recommendations.push(complete_all_questions(&quiz.overall));
    }

    if let Some(&(subject, accuracy)) = ranked.last() {
        if bands::is_strength(accuracy) {
            recommendations.push(maintain_strength(subject, accuracy));
        }
    }

    tracing::debug!(
        subjects = ranked.len(),
        recommendations = recommendations.len(),
        "generated recommendations"
    );
    recommendations
}

/// Subjects paired with their accuracy, lowest first; ties keep input order.
pub fn rank_subjects(subjects: &SubjectMap<Counts>) -> Vec<(&str, f64)> {
    let mut ranked: Vec<(&str, f64)> = subjects
        .iter()
        .map(|(subject, counts)| (subject.as_str(), counts.accuracy()))
        .collect();
    ranked.sort_by(|a, b| a.1.total_cmp(&b.1));
    ranked
}

fn focus_on_weakest(subject: &str, accuracy: f64) -> Recommendation {
    let name = capitalize(subject);
    Recommendation {
        priority: Priority::High,
        title: format!("Focus on {name}"),
        subject: name,
        description: format!(
            "Your {subject} score is {}%. This needs immediate attention. \
             Dedicate at least 1-2 hours daily to strengthen this subject.",
            whole_percent(accuracy)
        ),
        action_items: vec![
            format!("Review fundamental {subject} concepts"),
            "Practice 10-15 questions daily".to_string(),
            "Watch tutorial videos on weak topics".to_string(),
            "Make summary notes of key concepts".to_string(),
        ],
    }
}

fn complete_all_questions(overall: &Counts) -> Recommendation {
    let unanswered = overall.unanswered();
    Recommendation {
        priority: Priority::Medium,
        subject: ALL_SUBJECTS.to_string(),
        title: "Complete All Questions".to_string(),
        description: format!(
            "You left {unanswered} questions unanswered. \
             Always attempt all questions to maximize learning."
        ),
        action_items: vec![
            "Practice time management".to_string(),
            "Attempt educated guesses for uncertain answers".to_string(),
            "Review questions you skipped".to_string(),
        ],
    }
}

fn maintain_strength(subject: &str, accuracy: f64) -> Recommendation {
    let name = capitalize(subject);
    Recommendation {
        priority: Priority::Low,
        title: format!("Maintain Your {name} Strength"),
        subject: name,
        description: format!(
            "You scored {}% in {subject}! Keep practicing to maintain this level.",
            whole_percent(accuracy)
        ),
        action_items: vec![
            format!("Solve advanced {subject} problems"),
            "Help peers who struggle with this subject".to_string(),
            "Take mock tests to stay sharp".to_string(),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quiz(overall: Counts, subjects: &[(&str, Counts)]) -> QuizData {
        QuizData {
            overall,
            subjects: subjects
                .iter()
                .map(|(name, counts)| (name.to_string(), *counts))
                .collect(),
            ..QuizData::default()
        }
    }

    #[test]
    fn weakest_and_completion_fire_for_sample() {
        let quiz = quiz(
            Counts::new(75, 45, 70),
            &[
                ("biology", Counts::new(16, 10, 16)),
                ("chemistry", Counts::new(26, 18, 24)),
                ("physics", Counts::new(33, 17, 30)),
            ],
        );

        let recommendations = generate(&quiz);
        assert_eq!(recommendations.len(), 2);

        let weakest = &recommendations[0];
        assert_eq!(weakest.priority, Priority::High);
        assert_eq!(weakest.subject, "Physics");
        assert_eq!(weakest.title, "Focus on Physics");
        assert_eq!(
            weakest.description,
            "Your physics score is 52%. This needs immediate attention. \
             Dedicate at least 1-2 hours daily to strengthen this subject."
        );
        assert_eq!(weakest.action_items.len(), 4);
        assert_eq!(weakest.action_items[0], "Review fundamental physics concepts");

        let completion = &recommendations[1];
        assert_eq!(completion.priority, Priority::Medium);
        assert_eq!(completion.subject, ALL_SUBJECTS);
        assert_eq!(
            completion.description,
            "You left 5 questions unanswered. Always attempt all questions to maximize learning."
        );
        assert_eq!(completion.action_items.len(), 3);
    }

    #[test]
    fn strength_fires_for_best_subject() {
        let quiz = quiz(
            Counts::new(20, 17, 20),
            &[
                ("chemistry", Counts::new(10, 8, 10)),
                ("biology", Counts::new(10, 9, 10)),
            ],
        );

        let recommendations = generate(&quiz);
        assert_eq!(recommendations.len(), 1);
        let strength = &recommendations[0];
        assert_eq!(strength.priority, Priority::Low);
        assert_eq!(strength.title, "Maintain Your Biology Strength");
        assert_eq!(
            strength.description,
            "You scored 90% in biology! Keep practicing to maintain this level."
        );
        assert_eq!(strength.action_items[0], "Solve advanced biology problems");
    }

    #[test]
    fn all_three_in_fixed_order() {
        let quiz = quiz(
            Counts::new(30, 15, 25),
            &[
                ("art", Counts::new(10, 9, 10)),
                ("music", Counts::new(10, 2, 10)),
            ],
        );

        let priorities: Vec<Priority> = generate(&quiz).iter().map(|r| r.priority).collect();
        assert_eq!(priorities, vec![Priority::High, Priority::Medium, Priority::Low]);
    }

    #[test]
    fn single_subject_can_be_both_weakest_and_strongest() {
        let weak = quiz(Counts::default(), &[("music", Counts::new(10, 3, 10))]);
        let recommendations = generate(&weak);
        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].priority, Priority::High);

        let strong = quiz(Counts::default(), &[("music", Counts::new(10, 8, 10))]);
        let recommendations = generate(&strong);
        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].priority, Priority::Low);
    }

    #[test]
    fn completion_depends_only_on_overall_counts() {
        let no_subjects = quiz(Counts::new(10, 0, 4), &[]);
        let recommendations = generate(&no_subjects);
        assert_eq!(recommendations.len(), 1);
        assert_eq!(recommendations[0].subject, ALL_SUBJECTS);

        assert!(generate(&quiz(Counts::default(), &[])).is_empty());
    }

    #[test]
    fn ranking_is_stable_on_ties() {
        let subjects: SubjectMap<Counts> = vec![
            ("b".to_string(), Counts::new(2, 1, 2)),
            ("a".to_string(), Counts::new(4, 2, 4)),
            ("c".to_string(), Counts::new(4, 1, 4)),
        ]
        .into_iter()
        .collect();

        let names: Vec<&str> = rank_subjects(&subjects).iter().map(|(s, _)| *s).collect();
        assert_eq!(names, vec!["c", "b", "a"]);
    }
}
