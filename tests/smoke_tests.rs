use salon_admin::availability::{merge, Availability, DayOfWeek, DayView, TimeInterval, WeeklyAvailability};
use salon_admin::config::{AccountKind, Config};
use salon_admin::error::Error;
use salon_admin::utils::time::{format_duration, parse_duration, to_clock_string, to_minutes};

fn interval(start: u32, end: u32) -> TimeInterval {
    TimeInterval::new(start, end).unwrap()
}

/// Smoke test to verify that the config can be built from plain values
#[test]
fn test_config_loads() {
    let config = Config::from_sources(
        |key| match key {
            "SALON_API_URL" => Some("https://api.example.com/v1".to_string()),
            "SALON_ACCOUNT" => Some("member".to_string()),
            _ => None,
        },
        None,
    )
    .unwrap();

    assert_eq!(config.account, AccountKind::Member);
    assert_eq!(config.locale, "fr");
    assert_eq!(config.base_url().unwrap().as_str(), "https://api.example.com/v1/");
}

/// The documented merge cases
#[test]
fn test_merge_cases() {
    assert!(merge(&[]).is_empty());
    assert_eq!(merge(&[interval(540, 600)]), vec![interval(540, 600)]);
    assert_eq!(
        merge(&[interval(540, 600), interval(600, 660)]),
        vec![interval(540, 660)]
    );
    assert_eq!(
        merge(&[interval(540, 660), interval(570, 600)]),
        vec![interval(540, 660)]
    );
    assert_eq!(
        merge(&[interval(540, 600), interval(660, 720)]),
        vec![interval(540, 600), interval(660, 720)]
    );
}

#[test]
fn test_clock_strings() {
    assert_eq!(to_clock_string(0).unwrap(), "00:00");
    assert_eq!(to_clock_string(90).unwrap(), "01:30");
    assert_eq!(to_minutes("23:59").unwrap(), 1439);
    assert!(matches!(to_clock_string(1440), Err(Error::OutOfRange(1440))));
    assert!(matches!(to_minutes("9h30"), Err(Error::InvalidFormat(_))));

    assert_eq!(format_duration(150), "02:30");
    assert_eq!(parse_duration("02:30").unwrap(), 150);
}

/// A salon week built from raw records shows merged hours per day
#[test]
fn test_salon_week() {
    let records = [
        ("1", DayOfWeek::Saturday, "14:00", "18:00"),
        ("2", DayOfWeek::Saturday, "09:00", "12:30"),
        ("3", DayOfWeek::Saturday, "12:00", "14:00"),
    ]
    .map(|(id, day, start, end)| Availability {
        id: id.to_string(),
        day_of_week: day,
        start_time: start.to_string(),
        end_time: end.to_string(),
    });
    let week = WeeklyAvailability::group_by_day(&records);

    let saturday = DayView::for_day(&week, DayOfWeek::Saturday, false).unwrap();
    assert_eq!(saturday.to_string(), "09:00 - 18:00");
    assert_eq!(
        DayView::for_day(&week, DayOfWeek::Sunday, false).unwrap(),
        DayView::Closed
    );
    assert_eq!(DayOfWeek::Friday.label(), "Friday");
}
