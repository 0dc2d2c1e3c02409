mod merge;
pub mod models;

pub use merge::{merge, TimeInterval, TimeMerge};
pub use models::{
    Availability, AvailabilityOverview, DayOfWeek, NewAvailability, NewSpecialAvailability,
    SpecialAvailability,
};

use crate::error::AdminResult;
use rust_i18n::t;
use std::collections::BTreeMap;
use std::fmt;

/// One weekly slot as shown on the schedule page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    pub id: String,
    pub start: String,
    pub end: String,
}

/// Weekly availability records grouped by weekday
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WeeklyAvailability {
    days: BTreeMap<DayOfWeek, Vec<Slot>>,
}

impl WeeklyAvailability {
    /// Group availability records by their day of the week, keeping record order within a day
    pub fn group_by_day(records: &[Availability]) -> Self {
        let mut days: BTreeMap<DayOfWeek, Vec<Slot>> = BTreeMap::new();
        for record in records {
            days.entry(record.day_of_week).or_default().push(Slot {
                id: record.id.clone(),
                start: record.start_time.clone(),
                end: record.end_time.clone(),
            });
        }
        Self { days }
    }

    /// Raw slots for one day, empty if none
    pub fn slots(&self, day: DayOfWeek) -> &[Slot] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Merged open hours for one day across every slot
    pub fn merged_day(&self, day: DayOfWeek) -> AdminResult<Vec<TimeInterval>> {
        let intervals = self
            .slots(day)
            .iter()
            .map(|slot| TimeInterval::parse(&slot.start, &slot.end))
            .collect::<AdminResult<Vec<_>>>()?;
        Ok(merge(&intervals))
    }

    /// Merged open hours for the whole week, Monday first; closed days are empty
    pub fn opening_hours(&self) -> AdminResult<Vec<(DayOfWeek, Vec<TimeInterval>)>> {
        DayOfWeek::ALL
            .iter()
            .map(|&day| Ok((day, self.merged_day(day)?)))
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.days.values().all(Vec::is_empty)
    }
}

/// What a single weekday row displays
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DayView {
    /// A member's own slots, individually removable
    Slots(Vec<Slot>),
    /// The salon-wide merged opening hours
    Merged(Vec<TimeInterval>),
    /// No availability on a salon view
    Closed,
    /// No availability on a member view
    DayOff,
}

impl DayView {
    /// Build the row for `day`: members see their raw slots, the salon sees merged hours
    pub fn for_day(
        week: &WeeklyAvailability,
        day: DayOfWeek,
        member_view: bool,
    ) -> AdminResult<Self> {
        let slots = week.slots(day);
        Ok(match (slots.is_empty(), member_view) {
            (true, true) => DayView::DayOff,
            (true, false) => DayView::Closed,
            (false, true) => DayView::Slots(slots.to_vec()),
            (false, false) => DayView::Merged(week.merged_day(day)?),
        })
    }
}

impl fmt::Display for DayView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DayView::Slots(slots) => {
                let parts: Vec<String> = slots
                    .iter()
                    .map(|slot| format!("{} - {}", slot.start, slot.end))
                    .collect();
                write!(f, "{}", parts.join(", "))
            }
            DayView::Merged(intervals) => {
                let parts: Vec<String> = intervals.iter().map(ToString::to_string).collect();
                write!(f, "{}", parts.join(", "))
            }
            DayView::Closed => write!(f, "{}", t!("hours.closed")),
            DayView::DayOff => write!(f, "{}", t!("hours.day_off")),
        }
    }
}
