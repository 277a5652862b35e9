use chrono::{DateTime, NaiveDate, Utc};

/// Today's date in the browser's local time zone
pub fn today() -> NaiveDate {
    use js_sys::Date;
    let now = Date::new_0();
    let year = now.get_full_year() as i32;
    let month = now.get_month() + 1; // JavaScript months are 0-indexed
    let day = now.get_date();

    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_else(|| chrono::Local::now().date_naive())
}

/// Timestamp recorded on achievement edits
pub fn now() -> DateTime<Utc> {
    Utc::now()
}
