//! Countdown to the celebration.
//!
//! [`countdown`] is a pure function of the current time and a target
//! instant. [`CountdownClock`] wraps it with the session rule that once the
//! target is reached the display never goes back to counting.

use chrono::{DateTime, LocalResult, NaiveTime, TimeDelta, TimeZone, Utc};

use crate::config::CountdownTarget;

/// Remaining time split into display units
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Countdown {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub reached: bool,
}

impl Countdown {
    /// The value shown once the target has passed
    pub const REACHED: Countdown = Countdown {
        hours: 0,
        minutes: 0,
        seconds: 0,
        reached: true,
    };

    /// Seconds represented by the display units
    pub fn total_seconds(&self) -> u64 {
        u64::from(self.hours) * 3600 + u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }

    /// Zero-padded `(hours, minutes, seconds)` for the time cards
    pub fn padded(&self) -> (String, String, String) {
        (
            format!("{:02}", self.hours),
            format!("{:02}", self.minutes),
            format!("{:02}", self.seconds),
        )
    }
}

/// Decompose `target - now` into hours, minutes and seconds.
///
/// Hours wrap at 24, so a target more than a day away shows only the
/// sub-day remainder. A difference of zero or less is `reached`.
pub fn countdown<Tz1: TimeZone, Tz2: TimeZone>(
    now: &DateTime<Tz1>,
    target: &DateTime<Tz2>,
) -> Countdown {
    let diff_ms = target.timestamp_millis() - now.timestamp_millis();
    if diff_ms <= 0 {
        return Countdown::REACHED;
    }

    let total = diff_ms / 1000;
    Countdown {
        hours: ((total / 3600) % 24) as u32,
        minutes: ((total / 60) % 60) as u32,
        seconds: (total % 60) as u32,
        reached: false,
    }
}

/// First local midnight strictly after `now`, in `now`'s time zone.
///
/// When a DST transition removes midnight the first valid instant after
/// it is used; when midnight occurs twice the earlier one wins.
pub fn next_midnight<Tz: TimeZone>(now: &DateTime<Tz>) -> DateTime<Tz> {
    let tz = now.timezone();
    let fallback = || now.clone() + TimeDelta::days(1);

    let Some(tomorrow) = now.date_naive().succ_opt() else {
        return fallback();
    };
    let midnight = tomorrow.and_time(NaiveTime::MIN);

    match tz.from_local_datetime(&midnight) {
        LocalResult::Single(t) => t,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => tz
            .from_local_datetime(&(midnight + TimeDelta::hours(1)))
            .earliest()
            .unwrap_or_else(fallback),
    }
}

/// Countdown bound to a fixed target, recomputed on every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct CountdownClock {
    target: DateTime<Utc>,
    reached: bool,
}

impl CountdownClock {
    pub fn new<Tz: TimeZone>(target: DateTime<Tz>) -> Self {
        Self {
            target: target.with_timezone(&Utc),
            reached: false,
        }
    }

    /// Clock counting down to the next local midnight after `now`
    pub fn until_next_midnight<Tz: TimeZone>(now: &DateTime<Tz>) -> Self {
        Self::new(next_midnight(now))
    }

    /// Clock for a configured target, resolved against the mount time
    pub fn for_target<Tz: TimeZone>(target: &CountdownTarget, now: &DateTime<Tz>) -> Self {
        match target {
            CountdownTarget::NextMidnight => Self::until_next_midnight(now),
            CountdownTarget::At(instant) => Self::new(*instant),
        }
    }

    pub fn target(&self) -> DateTime<Utc> {
        self.target
    }

    pub fn is_reached(&self) -> bool {
        self.reached
    }

    /// Recompute for `now`. Once reached, stays reached even if the wall
    /// clock is later set backwards.
    pub fn tick<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> Countdown {
        if self.reached {
            return Countdown::REACHED;
        }

        let value = countdown(now, &self.target);
        if value.reached {
            tracing::info!(deadline = %self.target, "countdown reached");
            self.reached = true;
        }
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn at(s: &str) -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339(s).unwrap()
    }

    #[test]
    fn test_countdown_decomposes_difference() {
        let now = at("2026-03-01T21:14:05+05:30");
        let target = at("2026-03-02T00:00:00+05:30");
        let c = countdown(&now, &target);
        assert_eq!(
            c,
            Countdown {
                hours: 2,
                minutes: 45,
                seconds: 55,
                reached: false
            }
        );
        assert_eq!(c.total_seconds(), 2 * 3600 + 45 * 60 + 55);
    }

    #[test]
    fn test_countdown_floors_partial_seconds() {
        let now = at("2026-03-01T23:59:58.700+00:00");
        let target = at("2026-03-02T00:00:00+00:00");
        let c = countdown(&now, &target);
        assert_eq!(c.seconds, 1);
        assert!(!c.reached);
    }

    #[test]
    fn test_countdown_reached_at_and_after_target() {
        let target = at("2026-03-02T00:00:00+00:00");
        assert!(countdown(&target, &target).reached);
        assert!(countdown(&at("2026-03-02T00:00:01+00:00"), &target).reached);
    }

    #[test]
    fn test_countdown_across_time_zones() {
        let now = at("2026-03-01T18:00:00+00:00");
        let target = at("2026-03-02T00:00:00+05:30");
        let c = countdown(&now, &target);
        assert_eq!((c.hours, c.minutes, c.seconds), (0, 30, 0));
    }

    #[test]
    fn test_hours_wrap_at_a_day() {
        let now = at("2026-03-01T00:00:00+00:00");
        let target = at("2026-03-02T01:00:00+00:00");
        assert_eq!(countdown(&now, &target).hours, 1);
    }

    #[test]
    fn test_next_midnight_is_strictly_after_now() {
        let now = at("2026-03-01T21:14:05+05:30");
        assert_eq!(next_midnight(&now), at("2026-03-02T00:00:00+05:30"));

        let exactly = at("2026-03-02T00:00:00+05:30");
        assert_eq!(next_midnight(&exactly), at("2026-03-03T00:00:00+05:30"));
    }

    #[test]
    fn test_next_midnight_rolls_over_month_end() {
        let now = at("2026-12-31T12:00:00+00:00");
        assert_eq!(next_midnight(&now), at("2027-01-01T00:00:00+00:00"));
    }

    #[test]
    fn test_clock_latches_reached() {
        let mut clock = CountdownClock::new(at("2026-03-02T00:00:00+00:00"));
        assert!(!clock.tick(&at("2026-03-01T23:59:59+00:00")).reached);
        assert!(clock.tick(&at("2026-03-02T00:00:00+00:00")).reached);
        assert!(clock.is_reached());

        // Clock moved backwards: still reached
        let c = clock.tick(&at("2026-03-01T10:00:00+00:00"));
        assert_eq!(c, Countdown::REACHED);
    }

    #[test]
    fn test_clock_for_explicit_target() {
        let now = at("2026-03-01T10:00:00+00:00");
        let target = CountdownTarget::At(at("2026-03-01T11:00:00+00:00"));
        let mut clock = CountdownClock::for_target(&target, &now);
        assert_eq!(clock.tick(&now).hours, 1);
    }

    #[test]
    fn test_padded() {
        let c = Countdown {
            hours: 3,
            minutes: 0,
            seconds: 42,
            reached: false,
        };
        assert_eq!(
            c.padded(),
            ("03".to_string(), "00".to_string(), "42".to_string())
        );
    }
}
