use chrono::NaiveDate;
use rust_i18n::t;
use serde::{Deserialize, Serialize};

/// Day of the week as the API spells it
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    /// All days, Monday first
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Localized day name
    pub fn label(self) -> String {
        match self {
            DayOfWeek::Monday => t!("day.monday"),
            DayOfWeek::Tuesday => t!("day.tuesday"),
            DayOfWeek::Wednesday => t!("day.wednesday"),
            DayOfWeek::Thursday => t!("day.thursday"),
            DayOfWeek::Friday => t!("day.friday"),
            DayOfWeek::Saturday => t!("day.saturday"),
            DayOfWeek::Sunday => t!("day.sunday"),
        }
        .to_string()
    }
}

impl From<chrono::Weekday> for DayOfWeek {
    fn from(day: chrono::Weekday) -> Self {
        DayOfWeek::ALL[day.num_days_from_monday() as usize]
    }
}

/// Recurring weekly availability slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Availability {
    pub id: String,
    pub day_of_week: DayOfWeek,
    pub start_time: String,
    pub end_time: String,
}

/// Availability valid on a single date only
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SpecialAvailability {
    pub id: String,
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
}

/// Body for creating a weekly slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAvailability {
    pub day_of_week: DayOfWeek,
    pub start_time: String,
    pub end_time: String,
}

/// Body for creating a date-specific slot
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSpecialAvailability {
    pub date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
}

/// Response of the availability listing endpoints
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityOverview {
    #[serde(default)]
    pub availabilities: Vec<Availability>,
    #[serde(default)]
    pub special_availabilities: Vec<SpecialAvailability>,
}
