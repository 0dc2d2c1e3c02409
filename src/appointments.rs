//! Appointment listing helpers: filtering, calendar entries, display formatting.

use crate::api::models::{Appointment, AppointmentStatus};
use crate::error::AdminResult;
use crate::utils::time::{appointment_end, parse_appointment_time};
use chrono::NaiveDateTime;
use itertools::Itertools;
use std::fmt;

pub const PENDING_COLOR: &str = "#FFA500";
pub const CONFIRMED_COLOR: &str = "#008000";

/// Appointments with the given status (and member, if any), earliest first
pub fn filter_and_sort<'a>(
    appointments: impl IntoIterator<Item = &'a Appointment>,
    status: Option<AppointmentStatus>,
    member_id: Option<&str>,
) -> Vec<&'a Appointment> {
    appointments
        .into_iter()
        .filter(|a| status.map_or(true, |s| a.status == s))
        .filter(|a| member_id.map_or(true, |m| a.member_id.as_deref() == Some(m)))
        .sorted_by_key(|a| (parse_appointment_time(&a.date).ok(), a.date.clone()))
        .collect()
}

/// An appointment laid out for a calendar view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarEntry {
    pub id: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    /// Name of the member performing the service
    pub title: String,
    /// Service name
    pub description: String,
    pub color: &'static str,
    pub status: AppointmentStatus,
    /// Client's full name
    pub client: String,
    /// Client's phone number, grouped in pairs
    pub client_phone: String,
}

impl CalendarEntry {
    pub fn from_appointment(appointment: &Appointment) -> AdminResult<Self> {
        let start = parse_appointment_time(&appointment.date)?;
        let client = format!(
            "{} {}",
            appointment.client.first_name, appointment.client.last_name
        );
        let title = match &appointment.member {
            Some(member) => member.full_name(),
            None => client.clone(),
        };

        Ok(Self {
            id: appointment.id.clone(),
            start,
            end: appointment_end(start, appointment.duration),
            title,
            description: appointment.service.name.clone(),
            color: match appointment.status {
                AppointmentStatus::Pending => PENDING_COLOR,
                _ => CONFIRMED_COLOR,
            },
            status: appointment.status,
            client,
            client_phone: format_phone_number(&appointment.client.phone_number),
        })
    }
}

impl fmt::Display for CalendarEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}-{} {} ({})",
            self.start.format("%d/%m/%Y"),
            self.start.format("%H:%M"),
            self.end.format("%H:%M"),
            self.title,
            self.description
        )
    }
}

/// Calendar entries for every appointment with a readable date; others are skipped with a warning
pub fn calendar_entries<'a>(
    appointments: impl IntoIterator<Item = &'a Appointment>,
) -> Vec<CalendarEntry> {
    appointments
        .into_iter()
        .filter_map(|a| match CalendarEntry::from_appointment(a) {
            Ok(entry) => Some(entry),
            Err(e) => {
                tracing::warn!("Skipping appointment {}: {}", a.id, e);
                None
            }
        })
        .collect()
}

/// Split every run of digits into pairs: `0612345678` becomes `06 12 34 56 78`
pub fn format_phone_number(phone_number: &str) -> String {
    let chars: Vec<char> = phone_number.chars().collect();
    let mut out = String::with_capacity(chars.len() + chars.len() / 2);
    let mut run = 0;

    for (i, c) in chars.iter().enumerate() {
        out.push(*c);
        if c.is_ascii_digit() {
            run += 1;
            let next_is_digit = chars.get(i + 1).is_some_and(|n| n.is_ascii_digit());
            if run % 2 == 0 && next_is_digit {
                out.push(' ');
            }
        } else {
            run = 0;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::models::{Client, MemberRef, ServiceRef};

    fn appointment(id: &str, date: &str, status: AppointmentStatus, member: &str) -> Appointment {
        Appointment {
            id: id.to_string(),
            date: date.to_string(),
            duration: 45,
            status,
            payment_status: None,
            member_id: Some(member.to_string()),
            member: Some(MemberRef {
                id: Some(member.to_string()),
                first_name: "Ana".to_string(),
                last_name: "Lopez".to_string(),
            }),
            service: ServiceRef {
                id: "s1".to_string(),
                name: "Brushing".to_string(),
            },
            client: Client {
                first_name: "Jean".to_string(),
                last_name: "Dupont".to_string(),
                phone_number: "0612345678".to_string(),
                email: None,
            },
        }
    }

    #[test]
    fn test_filter_and_sort() {
        let list = vec![
            appointment("a3", "2024-03-06T09:00:00", AppointmentStatus::Pending, "m1"),
            appointment("a1", "2024-03-05T14:00:00", AppointmentStatus::Pending, "m2"),
            appointment("a2", "2024-03-05T10:30:00", AppointmentStatus::Accepted, "m1"),
            appointment("a0", "2024-03-04T08:00:00", AppointmentStatus::Pending, "m1"),
        ];

        fn ids<'a>(v: Vec<&'a Appointment>) -> Vec<&'a str> {
            v.into_iter().map(|a| a.id.as_str()).collect()
        }

        assert_eq!(ids(filter_and_sort(&list, None, None)), ["a0", "a2", "a1", "a3"]);
        assert_eq!(
            ids(filter_and_sort(&list, Some(AppointmentStatus::Pending), None)),
            ["a0", "a1", "a3"]
        );
        assert_eq!(
            ids(filter_and_sort(&list, Some(AppointmentStatus::Pending), Some("m1"))),
            ["a0", "a3"]
        );
        assert!(filter_and_sort(&list, Some(AppointmentStatus::Cancelled), None).is_empty());
    }

    #[test]
    fn test_calendar_entry() {
        let pending = appointment("a1", "2024-03-05T10:30:00", AppointmentStatus::Pending, "m1");
        let entry = CalendarEntry::from_appointment(&pending).unwrap();
        assert_eq!(entry.title, "Ana Lopez");
        assert_eq!(entry.description, "Brushing");
        assert_eq!(entry.color, PENDING_COLOR);
        assert_eq!(entry.end.format("%H:%M").to_string(), "11:15");
        assert_eq!(entry.to_string(), "05/03/2024 10:30-11:15 Ana Lopez (Brushing)");
        assert_eq!(entry.client, "Jean Dupont");
        assert_eq!(entry.client_phone, "06 12 34 56 78");

        let mut accepted = pending.clone();
        accepted.status = AppointmentStatus::Accepted;
        accepted.member = None;
        let entry = CalendarEntry::from_appointment(&accepted).unwrap();
        assert_eq!(entry.color, CONFIRMED_COLOR);
        assert_eq!(entry.title, "Jean Dupont");
    }

    #[test]
    fn test_calendar_entries_skip_bad_dates() {
        let list = vec![
            appointment("a1", "2024-03-05T10:30:00", AppointmentStatus::Pending, "m1"),
            appointment("a2", "tomorrow", AppointmentStatus::Pending, "m1"),
        ];
        let entries = calendar_entries(&list);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].id, "a1");
    }

    #[test]
    fn test_format_phone_number() {
        assert_eq!(format_phone_number("0612345678"), "06 12 34 56 78");
        assert_eq!(format_phone_number("061234567"), "06 12 34 56 7");
        assert_eq!(format_phone_number("+33612345678"), "+33 61 23 45 67 8");
        assert_eq!(format_phone_number(""), "");
    }
}
