use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Source of the generation time and identifier stamped on each analysis.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;

    fn analysis_id(&self, at: DateTime<Utc>) -> String {
        format!("analysis_{}", at.format("%Y%m%d_%H%M%S"))
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }

    /// Suffixed with part of a random UUID; several analyses can land in the
    /// same second.
    fn analysis_id(&self, at: DateTime<Utc>) -> String {
        let nonce = Uuid::new_v4().simple().to_string();
        format!("analysis_{}_{}", at.format("%Y%m%d_%H%M%S"), &nonce[..8])
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}
