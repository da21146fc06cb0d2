use chrono::NaiveDate;

const MS_PER_DAY: i64 = 1000 * 60 * 60 * 24;

/// Whole days between two calendar dates: the millisecond difference divided
/// by the length of a day, rounded up. Same-day spans are 0 and reversed
/// spans go negative.
pub fn duration_days(start: NaiveDate, end: NaiveDate) -> i64 {
    let ms = (end - start).num_milliseconds();
    let days = ms / MS_PER_DAY;
    if ms % MS_PER_DAY > 0 {
        days + 1
    } else {
        days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_month_long_flight() {
        assert_eq!(duration_days(date("2025-10-15"), date("2025-11-15")), 31);
    }

    #[test]
    fn test_same_day_is_zero() {
        assert_eq!(duration_days(date("2025-10-15"), date("2025-10-15")), 0);
    }

    #[test]
    fn test_reversed_dates_go_negative() {
        assert_eq!(duration_days(date("2025-10-20"), date("2025-10-15")), -5);
    }

    #[test]
    fn test_spans_leap_day() {
        assert_eq!(duration_days(date("2028-02-28"), date("2028-03-01")), 2);
    }
}
