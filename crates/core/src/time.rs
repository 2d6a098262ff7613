use chrono::{DateTime, Utc};

/// Time source for quiz sessions.
///
/// The core never reads the system clock itself; callers pass timestamps in,
/// usually taken from a `Clock` held by the services layer.
#[derive(Debug, Clone, Copy, Default)]
pub enum Clock {
    #[default]
    System,
    Fixed(DateTime<Utc>),
}

impl Clock {
    #[must_use]
    pub fn system() -> Self {
        Self::System
    }

    #[must_use]
    pub fn fixed(at: DateTime<Utc>) -> Self {
        Self::Fixed(at)
    }

    /// Returns the current time according to the clock.
    #[must_use]
    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(t) => *t,
        }
    }
}

/// Whole seconds between two instants, rounded half-up at millisecond precision.
///
/// An `end` before `start` yields zero.
#[must_use]
pub fn rounded_seconds_between(start: DateTime<Utc>, end: DateTime<Utc>) -> u64 {
    let millis = (end - start).num_milliseconds();
    let Ok(millis) = u64::try_from(millis) else {
        return 0;
    };
    millis.saturating_add(500) / 1000
}

/// Deterministic timestamp for tests (2023-11-14T22:13:20Z).
pub const FIXED_TEST_TIMESTAMP: i64 = 1_700_000_000;

/// Returns a deterministic `DateTime<Utc>` for tests.
///
/// # Panics
///
/// Panics if the fixed timestamp cannot be represented.
#[must_use]
pub fn fixed_now() -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp(FIXED_TEST_TIMESTAMP, 0)
        .expect("fixed timestamp should be valid")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn fixed_clock_always_reports_its_instant() {
        let clock = Clock::fixed(fixed_now());
        assert_eq!(clock.now(), fixed_now());
        assert_eq!(clock.now(), clock.now());
    }

    #[test]
    fn seconds_round_half_up() {
        let start = fixed_now();
        assert_eq!(rounded_seconds_between(start, start), 0);
        assert_eq!(
            rounded_seconds_between(start, start + Duration::milliseconds(1499)),
            1
        );
        assert_eq!(
            rounded_seconds_between(start, start + Duration::milliseconds(1500)),
            2
        );
    }

    #[test]
    fn negative_span_is_zero() {
        let start = fixed_now();
        assert_eq!(
            rounded_seconds_between(start, start - Duration::seconds(3)),
            0
        );
    }
}
