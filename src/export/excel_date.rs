use crate::utils::date::STAMP_FORMAT;
use chrono::{NaiveDate, NaiveDateTime};

/// Interpret a time-in / time-out stamp as an Excel serial date, returning
/// the number format to display it with.
pub(crate) fn parse_to_excel_date(s: &str) -> Option<(&'static str, f64)> {
    let dt = NaiveDateTime::parse_from_str(s.trim(), STAMP_FORMAT).ok()?;
    Some(("m/d/yyyy h:mm:ss AM/PM", naive_datetime_to_excel_serial(&dt)))
}

fn naive_datetime_to_excel_serial(dt: &NaiveDateTime) -> f64 {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or_default();

    let duration = *dt - excel_epoch;

    let days = duration.num_days() as f64;
    let secs = (duration.num_seconds() - duration.num_days() * 86400) as f64;

    days + secs / 86400.0
}
