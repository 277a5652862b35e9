use chrono::{Datelike, NaiveDate};

/// Whole years between `date_of_birth` and `today`, i.e. the number of
/// birthdays already celebrated.
pub fn age_in_years(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut years = today.year() - date_of_birth.year();
    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        years -= 1;
    }
    years
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January", 2 => "February", 3 => "March", 4 => "April",
        5 => "May", 6 => "June", 7 => "July", 8 => "August",
        9 => "September", 10 => "October", 11 => "November", 12 => "December",
        _ => "January",
    }
}

/// Format a date for display, e.g. "June 1, 2021"
pub fn format_long_date(date: NaiveDate) -> String {
    format!("{} {}, {}", month_name(date.month()), date.day(), date.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_age_around_birthday() {
        let dob = ymd(2020, 3, 15);
        assert_eq!(age_in_years(dob, ymd(2024, 3, 14)), 3);
        assert_eq!(age_in_years(dob, ymd(2024, 3, 15)), 4);
        assert_eq!(age_in_years(dob, ymd(2024, 3, 16)), 4);
    }

    #[test]
    fn test_month_takes_precedence_over_day() {
        // Later month, earlier day: birthday already passed
        assert_eq!(age_in_years(ymd(2020, 3, 28), ymd(2024, 4, 2)), 4);
        // Earlier month, later day: birthday not reached yet
        assert_eq!(age_in_years(ymd(2020, 3, 2), ymd(2024, 2, 28)), 3);
    }

    #[test]
    fn test_age_on_birth_date_and_first_year() {
        let dob = ymd(2023, 10, 17);
        assert_eq!(age_in_years(dob, dob), 0);
        assert_eq!(age_in_years(dob, ymd(2024, 10, 16)), 0);
        assert_eq!(age_in_years(dob, ymd(2024, 10, 17)), 1);
    }

    #[test]
    fn test_leap_day_birthday() {
        let dob = ymd(2020, 2, 29);
        assert_eq!(age_in_years(dob, ymd(2023, 2, 28)), 2);
        assert_eq!(age_in_years(dob, ymd(2023, 3, 1)), 3);
        assert_eq!(age_in_years(dob, ymd(2024, 2, 29)), 4);
    }

    #[test]
    fn test_format_long_date() {
        assert_eq!(format_long_date(ymd(2021, 6, 1)), "June 1, 2021");
        assert_eq!(format_long_date(ymd(2019, 12, 31)), "December 31, 2019");
    }
}
