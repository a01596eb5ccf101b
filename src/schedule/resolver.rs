use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};

/// Concrete start and end timestamps for one schedule row
///
/// Both timestamps sit on the nearest upcoming occurrence of the
/// row's weekday, seconds zeroed. Times are naive; the calendar sink
/// attaches the configured timezone when it writes the event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

/// Parse time string in HH:MM format
pub fn parse_time(time_str: &str) -> Option<(u32, u32)> {
    let parts: Vec<&str> = time_str.split(':').collect();
    if parts.len() != 2 {
        return None;
    }
    let hour = parts[0].parse::<u32>().ok()?;
    let minute = parts[1].parse::<u32>().ok()?;
    if hour > 23 || minute > 59 {
        return None;
    }
    Some((hour, minute))
}

/// Match a weekday name case-insensitively against the English names
pub fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name.trim().to_ascii_lowercase().as_str() {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Calculate the nearest upcoming date falling on the named weekday
///
/// Returns the reference date itself when the weekday already
/// matches, otherwise a date 1-6 days ahead. `None` means the name is
/// not a recognized weekday and the row should be skipped.
pub fn next_date_for_weekday(name: &str, reference: NaiveDate) -> Option<NaiveDate> {
    let target = weekday_from_name(name)?;

    let mut diff =
        target.num_days_from_monday() as i64 - reference.weekday().num_days_from_monday() as i64;
    if diff < 0 {
        diff += 7;
    }

    reference.checked_add_signed(Duration::days(diff))
}

/// Combine a resolved date with HH:MM start and end times
///
/// `None` means one of the times is malformed and the row should be
/// skipped.
pub fn build_interval(date: NaiveDate, start_time: &str, end_time: &str) -> Option<ResolvedInterval> {
    let (start_hour, start_minute) = parse_time(start_time)?;
    let (end_hour, end_minute) = parse_time(end_time)?;

    let start = date.and_hms_opt(start_hour, start_minute, 0)?;
    let end = date.and_hms_opt(end_hour, end_minute, 0)?;

    Some(ResolvedInterval { start, end })
}
