use acct_core::AccountError;

use metrics::counter;

/// Counters for the account deletion callable
#[derive(Clone)]
pub struct Metrics {
    prefix: &'static str,
}

impl Metrics {
    pub fn new() -> Self {
        Self { prefix: "acct" }
    }

    pub fn deletion_requested(&self) {
        counter!(format!("{}.deletions.requested", self.prefix)).increment(1);
    }

    pub fn deletion_succeeded(&self) {
        counter!(format!("{}.deletions.succeeded", self.prefix)).increment(1);
    }

    /// Record a failed deletion, split by the step that failed
    pub fn deletion_failed(&self, error: &AccountError) {
        match error.failed_step() {
            None => {
                counter!(format!("{}.deletions.unauthenticated", self.prefix)).increment(1);
            }
            Some(step) => {
                counter!(format!("{}.deletions.failed", self.prefix)).increment(1);
                counter!(format!("{}.deletions.failed.{}", self.prefix, step)).increment(1);
            }
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}
