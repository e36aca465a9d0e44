// SPDX-FileCopyrightText: 2026 Sheetwise Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Countdown for timed exams.

use chrono::{DateTime, TimeDelta, Utc};

/// A fixed time limit measured from a start instant.
///
/// The `_at` methods take the current time explicitly; the plain variants
/// read the system clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExamClock {
    started_at: DateTime<Utc>,
    limit: TimeDelta,
}

impl ExamClock {
    /// Starts a countdown now.
    pub fn start(limit: TimeDelta) -> Self {
        Self::starting_at(Utc::now(), limit)
    }

    /// Starts from a fixed instant. Used to resume or to test.
    pub fn starting_at(started_at: DateTime<Utc>, limit: TimeDelta) -> Self {
        Self {
            started_at,
            limit: limit.max(TimeDelta::zero()),
        }
    }

    pub fn from_secs(secs: u64) -> Self {
        let limit = i64::try_from(secs)
            .ok()
            .and_then(TimeDelta::try_seconds)
            .unwrap_or(TimeDelta::MAX);
        Self::start(limit)
    }

    pub fn limit(&self) -> TimeDelta {
        self.limit
    }

    pub fn deadline(&self) -> DateTime<Utc> {
        self.started_at
            .checked_add_signed(self.limit)
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    /// Time left, never negative.
    pub fn remaining_at(&self, now: DateTime<Utc>) -> TimeDelta {
        (self.deadline() - now).max(TimeDelta::zero())
    }

    pub fn remaining(&self) -> TimeDelta {
        self.remaining_at(Utc::now())
    }

    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now >= self.deadline()
    }

    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }
}

/// Formats a duration as `m:ss` for prompts.
pub fn format_remaining(remaining: TimeDelta) -> String {
    let secs = remaining.num_seconds().max(0);
    format!("{}:{:02}", secs / 60, secs % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_down_to_zero() {
        let start = Utc::now();
        let clock = ExamClock::starting_at(start, TimeDelta::seconds(600));

        assert_eq!(clock.remaining_at(start), TimeDelta::seconds(600));
        assert_eq!(
            clock.remaining_at(start + TimeDelta::seconds(590)),
            TimeDelta::seconds(10)
        );
        assert!(!clock.is_expired_at(start + TimeDelta::seconds(599)));
        assert!(clock.is_expired_at(start + TimeDelta::seconds(600)));
        assert_eq!(
            clock.remaining_at(start + TimeDelta::seconds(900)),
            TimeDelta::zero()
        );
    }

    #[test]
    fn negative_limit_is_already_expired() {
        let start = Utc::now();
        let clock = ExamClock::starting_at(start, TimeDelta::seconds(-5));
        assert_eq!(clock.limit(), TimeDelta::zero());
        assert!(clock.is_expired_at(start));
    }

    #[test]
    fn from_secs_starts_now() {
        let clock = ExamClock::from_secs(60);
        assert!(!clock.is_expired());
        assert!(clock.remaining() <= TimeDelta::seconds(60));
    }

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_remaining(TimeDelta::seconds(605)), "10:05");
        assert_eq!(format_remaining(TimeDelta::seconds(9)), "0:09");
        assert_eq!(format_remaining(TimeDelta::seconds(-3)), "0:00");
    }
}
