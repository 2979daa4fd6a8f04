//! Accuracy bands shared by every evaluator.
//!
//! Each table lists inclusive lower bounds from highest to lowest; the first
//! bound the accuracy reaches picks the label, and anything below the last
//! bound falls through to the floor label.

use crate::models::{FocusLevel, PerformanceLevel, Priority, Severity, SubjectStatus};

pub const STRONG: f64 = 85.0;
pub const TOP_TARGET: f64 = 80.0;
pub const STRENGTH: f64 = 75.0;
pub const PROFICIENT: f64 = 70.0;
pub const NEAR_PROFICIENT: f64 = 60.0;
pub const PASSING: f64 = 50.0;
pub const FOUNDATIONAL: f64 = 40.0;

#[derive(Debug, Clone, Copy)]
pub struct Banding<T: 'static> {
    bands: &'static [(f64, T)],
    floor: T,
}

impl<T: Copy + 'static> Banding<T> {
    pub const fn new(bands: &'static [(f64, T)], floor: T) -> Self {
        Self { bands, floor }
    }

    pub fn classify(&self, accuracy: f64) -> T {
        self.bands
            .iter()
            .find(|(lower, _)| accuracy >= *lower)
            .map(|(_, label)| *label)
            .unwrap_or(self.floor)
    }
}

/// Which kind of remedial work a weak subject calls for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remedy {
    Fundamentals,
    CoreConcepts,
    AdvancedPractice,
}

pub const PERFORMANCE_LEVEL: Banding<PerformanceLevel> = Banding::new(
    &[
        (STRONG, PerformanceLevel::Excellent),
        (PROFICIENT, PerformanceLevel::Good),
        (PASSING, PerformanceLevel::Average),
    ],
    PerformanceLevel::NeedsImprovement,
);

pub const SUBJECT_STATUS: Banding<SubjectStatus> = Banding::new(
    &[
        (STRONG, SubjectStatus::Strong),
        (PROFICIENT, SubjectStatus::Moderate),
        (PASSING, SubjectStatus::Weak),
    ],
    SubjectStatus::Critical,
);

pub const PRIORITY: Banding<Priority> = Banding::new(
    &[(PROFICIENT, Priority::Low), (PASSING, Priority::Medium)],
    Priority::High,
);

pub const SEVERITY: Banding<Severity> =
    Banding::new(&[(PASSING, Severity::Moderate)], Severity::Critical);

pub const REMEDY: Banding<Remedy> = Banding::new(
    &[
        (NEAR_PROFICIENT, Remedy::AdvancedPractice),
        (FOUNDATIONAL, Remedy::CoreConcepts),
    ],
    Remedy::Fundamentals,
);

/// Fraction of the daily budget a subject's baseline share is drawn from.
pub const TIME_SHARE: Banding<f64> = Banding::new(&[(PROFICIENT, 0.25), (PASSING, 0.35)], 0.40);

pub const FOCUS_LEVEL: Banding<FocusLevel> = Banding::new(
    &[
        (STRENGTH, FocusLevel::Maintenance),
        (NEAR_PROFICIENT, FocusLevel::Medium),
    ],
    FocusLevel::High,
);

pub const WEEKLY_TARGET: Banding<u32> = Banding::new(&[(TOP_TARGET, 90), (NEAR_PROFICIENT, 85)], 70);

pub fn needs_improvement(accuracy: f64) -> bool {
    accuracy < PROFICIENT
}

pub fn is_strength(accuracy: f64) -> bool {
    accuracy >= STRENGTH
}
