use time::{
    Date, Duration, OffsetDateTime, format_description::BorrowedFormatItem,
    macros::format_description,
};

/// Calendar dates are stored and exchanged as `YYYY-MM-DD`.
pub const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Today in the local timezone, falling back to UTC when the offset is unknown.
pub fn today() -> Date {
    OffsetDateTime::now_local()
        .unwrap_or_else(|_| OffsetDateTime::now_utc())
        .date()
}

pub fn format_date(date: Date) -> String {
    date.format(DATE_FORMAT).unwrap_or_else(|_| date.to_string())
}

pub fn parse_date(value: &str) -> crate::Result<Date> {
    Ok(Date::parse(value.trim(), DATE_FORMAT)?)
}

/// Monday of the week containing `date`.
pub fn week_start(date: Date) -> crate::Result<Date> {
    let days_since_monday = date.weekday().number_days_from_monday();
    match date.checked_sub(Duration::days(days_since_monday as i64)) {
        Some(monday) => Ok(monday),
        None => crate::invalid!("week of {} is out of range", format_date(date)),
    }
}

/// `count` consecutive days starting at `start`.
///
/// Fails when the last day falls outside the supported calendar.
pub fn days_from(start: Date, count: usize) -> crate::Result<Vec<Date>> {
    (0..count)
        .map(|i| match start.checked_add(Duration::days(i as i64)) {
            Some(day) => Ok(day),
            None => crate::invalid!("{} days from {} is out of range", count, format_date(start)),
        })
        .collect()
}
