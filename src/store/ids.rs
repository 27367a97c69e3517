use chrono::Utc;

/// Strictly increasing ids that stay close to wall-clock milliseconds.
///
/// Each call yields `max(last + 1, now_ms)`, so two records created in the
/// same millisecond still get distinct ids.
#[derive(Debug, Default)]
pub struct IdSequence {
    last: u64,
}

impl IdSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&mut self) -> u64 {
        let now = u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0);
        self.last = now.max(self.last + 1);
        self.last
    }
}
