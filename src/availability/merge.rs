use crate::error::{AdminResult, Error};
use crate::utils::time::{format_duration, to_minutes, MINUTES_PER_DAY};
use itertools::Itertools;
use std::fmt;

/// Half-open time-of-day range in minutes since midnight
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct TimeInterval {
    start: u32,
    end: u32,
}

impl TimeInterval {
    /// Construct a new interval.
    ///
    /// Both ends must fall on the same day and `start` must come strictly before `end`.
    ///
    /// # Examples
    /// ```
    /// use salon_admin::availability::TimeInterval;
    ///
    /// let morning = TimeInterval::new(540, 600).unwrap();
    /// assert_eq!(morning.start(), 540);
    /// assert_eq!(morning.end(), 600);
    ///
    /// assert!(TimeInterval::new(600, 540).is_err());
    /// ```
    pub fn new(start: u32, end: u32) -> AdminResult<Self> {
        if start >= end || end >= MINUTES_PER_DAY {
            return Err(Error::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build an interval from `HH:MM` start and end strings
    pub fn parse(start: &str, end: &str) -> AdminResult<Self> {
        Self::new(to_minutes(start)?, to_minutes(end)?)
    }

    pub fn start(self) -> u32 {
        self.start
    }

    pub fn end(self) -> u32 {
        self.end
    }

    /// Length of the interval in minutes
    pub fn minutes(self) -> u32 {
        self.end - self.start
    }

    /// Start and end as `HH:MM` strings
    pub fn clock_strings(self) -> (String, String) {
        (format_duration(self.start), format_duration(self.end))
    }
}

impl fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (start, end) = self.clock_strings();
        write!(f, "{} - {}", start, end)
    }
}

pub trait TimeMerge {
    fn time_merge(self) -> Vec<TimeInterval>;
}

impl<'a, T> TimeMerge for T
where
    T: Iterator<Item = &'a TimeInterval>,
{
    /// Combines overlapping and touching intervals together.
    ///
    /// Intervals are sorted by start first, so input order does not matter.
    ///
    /// # Examples
    /// ```
    /// use salon_admin::availability::{TimeInterval, TimeMerge};
    ///
    /// let slots = vec![
    ///     TimeInterval::new(600, 660).unwrap(),
    ///     TimeInterval::new(540, 600).unwrap(),
    ///     TimeInterval::new(720, 780).unwrap(),
    /// ];
    ///
    /// assert_eq!(
    ///     slots.iter().time_merge(),
    ///     vec![
    ///         TimeInterval::new(540, 660).unwrap(),
    ///         TimeInterval::new(720, 780).unwrap(),
    ///     ]
    /// );
    /// ```
    fn time_merge(self) -> Vec<TimeInterval> {
        let (last, mut acc) = self.sorted_by_key(|interval| interval.start).fold(
            (None::<TimeInterval>, Vec::new()),
            |(last, mut acc), &curr| match last {
                None => (Some(curr), acc),
                Some(open) if curr.start <= open.end => (
                    Some(TimeInterval {
                        start: open.start,
                        end: open.end.max(curr.end),
                    }),
                    acc,
                ),
                Some(open) => {
                    acc.push(open);
                    (Some(curr), acc)
                }
            },
        );

        // No open interval means the input was empty
        if let Some(open) = last {
            acc.push(open);
        }

        acc
    }
}

/// Merge one day's intervals into the minimal sorted, non-overlapping set
pub fn merge(intervals: &[TimeInterval]) -> Vec<TimeInterval> {
    intervals.iter().time_merge()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iv(start: u32, end: u32) -> TimeInterval {
        TimeInterval::new(start, end).unwrap()
    }

    #[test]
    fn test_merge_empty() {
        assert_eq!(merge(&[]), Vec::<TimeInterval>::new());
    }

    #[test]
    fn test_merge_single() {
        assert_eq!(merge(&[iv(540, 600)]), vec![iv(540, 600)]);
    }

    #[test]
    fn test_merge_adjacent() {
        assert_eq!(merge(&[iv(540, 600), iv(600, 660)]), vec![iv(540, 660)]);
    }

    #[test]
    fn test_merge_contained() {
        assert_eq!(merge(&[iv(540, 660), iv(570, 600)]), vec![iv(540, 660)]);
    }

    #[test]
    fn test_merge_disjoint() {
        assert_eq!(
            merge(&[iv(540, 600), iv(660, 720)]),
            vec![iv(540, 600), iv(660, 720)]
        );
    }

    #[test]
    fn test_merge_unsorted_staff_schedules() {
        // Two members: 14:00-18:00 and 09:00-12:00, plus 11:30-14:00
        let merged = merge(&[iv(840, 1080), iv(540, 720), iv(690, 840), iv(1140, 1200)]);
        assert_eq!(merged, vec![iv(540, 1080), iv(1140, 1200)]);
    }

    #[test]
    fn test_merge_is_idempotent() {
        let input = [iv(600, 700), iv(540, 610), iv(800, 900), iv(850, 860)];
        let once = merge(&input);
        assert_eq!(merge(&once), once);
    }

    #[test]
    fn test_invalid_intervals() {
        assert!(matches!(
            TimeInterval::new(600, 600),
            Err(Error::InvalidInterval { start: 600, end: 600 })
        ));
        assert!(TimeInterval::new(0, 1440).is_err());
        assert!(TimeInterval::parse("10:00", "09:00").is_err());
        assert!(TimeInterval::parse("9h", "10:00").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(TimeInterval::parse("09:00", "12:30").unwrap().to_string(), "09:00 - 12:30");
        assert_eq!(iv(540, 600).minutes(), 60);
    }
}
