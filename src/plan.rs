use crate::bands::{FOCUS_LEVEL, TIME_SHARE, WEEKLY_TARGET};
use crate::format::{capitalize, whole_percent};
use crate::models::{Counts, StudyPlan, SubjectMap, TimeAllocation};

pub const DAILY_BUDGET_MINUTES: i64 = 180;
pub const STUDY_DURATION: &str = "2-3 hours daily";

pub fn build_study_plan(subjects: &SubjectMap<Counts>) -> StudyPlan {
    let plan = StudyPlan {
        daily_schedule: daily_schedule(subjects),
        weekly_goals: weekly_goals(subjects),
        study_duration: STUDY_DURATION.to_string(),
    };

    tracing::debug!(
        subjects = subjects.len(),
        scheduled_minutes = plan
            .daily_schedule
            .iter()
            .map(|(_, allocation)| allocation.time_minutes)
            .sum::<i64>(),
        "built study plan"
    );
    plan
}

/// Each subject gets its band's share of the budget divided by the subject
/// count, so the minutes do not have to add up to the whole budget.
pub fn daily_schedule(subjects: &SubjectMap<Counts>) -> SubjectMap<TimeAllocation> {
    if subjects.is_empty() {
        return SubjectMap::new();
    }

    let subject_count = subjects.len() as f64;
    subjects
        .iter()
        .map(|(subject, counts)| {
            let accuracy = counts.accuracy();
            let share = TIME_SHARE.classify(accuracy);
            let allocation = TimeAllocation {
                time_minutes: (DAILY_BUDGET_MINUTES as f64 * share / subject_count).floor() as i64,
                focus_level: FOCUS_LEVEL.classify(accuracy),
            };
            (subject.clone(), allocation)
        })
        .collect()
}

pub fn weekly_goals(subjects: &SubjectMap<Counts>) -> Vec<String> {
    subjects
        .iter()
        .map(|(subject, counts)| {
            let accuracy = counts.accuracy();
            format!(
                "Improve {} from {}% to {}%",
                capitalize(subject),
                whole_percent(accuracy),
                WEEKLY_TARGET.classify(accuracy)
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FocusLevel;

    fn subjects(entries: &[(&str, i64, i64)]) -> SubjectMap<Counts> {
        entries
            .iter()
            .map(|(name, total, correct)| (name.to_string(), Counts::new(*total, *correct, *total)))
            .collect()
    }

    #[test]
    fn empty_subjects_give_empty_plan() {
        let plan = build_study_plan(&SubjectMap::new());
        assert!(plan.daily_schedule.is_empty());
        assert!(plan.weekly_goals.is_empty());
        assert_eq!(plan.study_duration, STUDY_DURATION);
    }

    #[test]
    fn single_subject_takes_its_band_share() {
        let critical = daily_schedule(&subjects(&[("physics", 10, 2)]));
        assert_eq!(critical.get("physics").map(|a| a.time_minutes), Some(72));

        let weak = daily_schedule(&subjects(&[("physics", 10, 6)]));
        // 180 * 0.35 lands just under 63 in binary floating point
        assert_eq!(weak.get("physics").map(|a| a.time_minutes), Some(62));

        let strong = daily_schedule(&subjects(&[("physics", 10, 9)]));
        assert_eq!(strong.get("physics").map(|a| a.time_minutes), Some(45));
    }

    #[test]
    fn shares_are_divided_by_subject_count_not_normalized() {
        let schedule = daily_schedule(&subjects(&[
            ("biology", 10, 3),
            ("chemistry", 10, 6),
            ("physics", 10, 9),
        ]));

        let minutes: Vec<i64> = schedule.iter().map(|(_, a)| a.time_minutes).collect();
        assert_eq!(minutes, vec![24, 20, 15]);
        assert!(minutes.iter().sum::<i64>() < DAILY_BUDGET_MINUTES);
    }

    #[test]
    fn focus_levels_follow_accuracy() {
        let schedule = daily_schedule(&subjects(&[
            ("biology", 100, 59),
            ("chemistry", 100, 60),
            ("physics", 100, 75),
        ]));

        let focus: Vec<FocusLevel> = schedule.iter().map(|(_, a)| a.focus_level).collect();
        assert_eq!(
            focus,
            vec![FocusLevel::High, FocusLevel::Medium, FocusLevel::Maintenance]
        );
    }

    #[test]
    fn weekly_goal_targets() {
        let goals = weekly_goals(&subjects(&[
            ("physics", 33, 17),
            ("chemistry", 26, 18),
            ("biology", 10, 9),
            ("art", 0, 0),
        ]));

        assert_eq!(
            goals,
            vec![
                "Improve Physics from 52% to 70%",
                "Improve Chemistry from 69% to 85%",
                "Improve Biology from 90% to 90%",
                "Improve Art from 0% to 70%",
            ]
        );
    }
}
