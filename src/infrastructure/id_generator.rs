use crate::domain::ports::IdGenerator;
use chrono::Utc;
use rand::Rng;

/// Exclusive upper bound of the random suffix.
const SUFFIX_RANGE: u32 = 10_000;

/// Generates ids from the current time in nanoseconds followed by a random
/// four-digit suffix.
///
/// Two calls in the same nanosecond that draw the same suffix yield the same
/// id, and the later receipt replaces the earlier one in the store.
#[derive(Debug, Default, Clone, Copy)]
pub struct TimestampIdGenerator;

impl TimestampIdGenerator {
    pub fn new() -> Self {
        Self
    }
}

impl IdGenerator for TimestampIdGenerator {
    fn generate(&self) -> String {
        let nanos = Utc::now().timestamp_nanos_opt().unwrap_or_default();
        let suffix = rand::thread_rng().gen_range(0..SUFFIX_RANGE);
        format!("{nanos}{suffix:04}")
    }
}
