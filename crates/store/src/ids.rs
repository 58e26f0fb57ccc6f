//! Time-based id generation.

use chrono::Utc;

/// Issues millisecond timestamps that are strictly increasing within a
/// process, so two entities created in the same millisecond still get
/// distinct ids.
#[derive(Debug)]
pub(crate) struct IdGenerator {
    last_millis: i64,
}

impl IdGenerator {
    pub(crate) const fn new() -> Self {
        Self { last_millis: 0 }
    }

    /// Next id value: the current wall clock, bumped past the last issued
    /// value when the clock has not advanced.
    pub(crate) fn next_millis(&mut self) -> i64 {
        let now = Utc::now().timestamp_millis();
        self.last_millis = if now > self.last_millis {
            now
        } else {
            self.last_millis + 1
        };
        self.last_millis
    }
}
