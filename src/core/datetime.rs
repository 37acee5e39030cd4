use crate::utils::error::{PcsError, Result};
use chrono::{Month, TimeDelta};

/// Converts `D Month YYYY` (e.g. `30 July 2022`) to `YYYY-MM-DD`.
///
/// The month must be a full English month name; the day is kept as given.
pub fn convert_date(date: &str) -> Result<String> {
    let parts: Vec<&str> = date.split(' ').collect();
    let [day, month, year] = parts.as_slice() else {
        return Err(PcsError::format_error(format!(
            "expected `D Month YYYY`, got '{}'",
            date
        )));
    };

    let month = month_number(month)?;
    Ok(format!("{}-{:02}-{}", year, month, day))
}

fn month_number(name: &str) -> Result<u32> {
    name.parse::<Month>()
        .ok()
        .filter(|m| m.name().eq_ignore_ascii_case(name))
        .map(|m| m.number_from_month())
        .ok_or_else(|| PcsError::format_error(format!("'{}' is not a month name", name)))
}

/// Renders a duration as `H:MM:SS`. Whole days are folded into the hours and
/// sub-second precision is dropped. A negative duration is rendered as `-`
/// followed by its absolute value, e.g. `-0:00:01`.
pub fn timedelta_to_time(delta: &TimeDelta) -> String {
    let total = delta.num_seconds();
    let sign = if total < 0 { "-" } else { "" };
    let total = total.unsigned_abs();
    format!(
        "{}{}:{:02}:{:02}",
        sign,
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// Parses `H:MM:SS` into a duration. Hours may exceed 23.
pub fn time_to_timedelta(time: &str) -> Result<TimeDelta> {
    let parts: Vec<&str> = time.split(':').collect();
    let [hours, minutes, seconds] = parts.as_slice() else {
        return Err(PcsError::format_error(format!(
            "expected `H:MM:SS`, got '{}'",
            time
        )));
    };

    let hours = time_component(hours, time)?;
    let minutes = time_component(minutes, time)?;
    let seconds = time_component(seconds, time)?;

    TimeDelta::try_hours(hours)
        .zip(TimeDelta::try_minutes(minutes))
        .zip(TimeDelta::try_seconds(seconds))
        .and_then(|((h, m), s)| h.checked_add(&m)?.checked_add(&s))
        .ok_or_else(|| PcsError::format_error(format!("'{}' is out of range", time)))
}

fn time_component(value: &str, time: &str) -> Result<i64> {
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err(PcsError::format_error(format!(
            "'{}' in '{}' is not a number",
            value, time
        )));
    }
    value
        .parse()
        .map_err(|_| PcsError::format_error(format!("'{}' in '{}' is too large", value, time)))
}

/// Normalises `M:SS`, `MM:SS` or `H:MM:SS` to `H:MM:SS`.
///
/// Single-digit minutes and seconds are zero padded and a `0` hour is added
/// when only two components are given. Anything else is returned untouched.
pub fn format_time(time: &str) -> String {
    let mut parts: Vec<String> = time.split(':').map(str::to_string).collect();

    let tail = parts.len().saturating_sub(2);
    for part in &mut parts[tail..] {
        if part.chars().count() == 1 {
            part.insert(0, '0');
        }
    }

    let formatted = parts.join(":");
    if parts.len() == 2 {
        format!("0:{}", formatted)
    } else {
        formatted
    }
}

/// Adds two times given as `M:SS`, `MM:SS` or `H:MM:SS`; the sum is `H:MM:SS`.
pub fn add_time(time1: &str, time2: &str) -> Result<String> {
    let first = time_to_timedelta(&format_time(time1))?;
    let second = time_to_timedelta(&format_time(time2))?;
    let sum = first
        .checked_add(&second)
        .ok_or_else(|| PcsError::format_error("time sum is out of range"))?;
    Ok(timedelta_to_time(&sum))
}

/// Finds the first `DD/MM` or `DD-MM` in `text` and returns `(day, month)`.
pub fn get_day_month(text: &str) -> Result<(String, String)> {
    let chars: Vec<char> = text.chars().collect();

    chars
        .windows(5)
        .find(|w| {
            w[0].is_ascii_digit()
                && w[1].is_ascii_digit()
                && matches!(w[2], '/' | '-')
                && w[3].is_ascii_digit()
                && w[4].is_ascii_digit()
        })
        .map(|w| (w[..2].iter().collect(), w[3..].iter().collect()))
        .ok_or_else(|| {
            PcsError::format_error(format!(
                "'{}' doesn't contain day and month in `DD/MM` or `DD-MM` format",
                text
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_convert_date() {
        assert_eq!(convert_date("30 July 2022").unwrap(), "2022-07-30");
        assert_eq!(convert_date("1 december 1999").unwrap(), "1999-12-1");
        assert_eq!(convert_date("15 October 2021").unwrap(), "2021-10-15");
    }

    #[test]
    fn test_convert_date_rejects_bad_shapes() {
        assert!(matches!(
            convert_date("30 Jul 2022"),
            Err(PcsError::FormatError { .. })
        ));
        assert!(convert_date("30 Juli 2022").is_err());
        assert!(convert_date("July 2022").is_err());
        assert!(convert_date("30  July 2022").is_err());
        assert!(convert_date("").is_err());
    }

    #[test]
    fn test_timedelta_to_time() {
        assert_eq!(timedelta_to_time(&TimeDelta::seconds(309)), "0:05:09");
        assert_eq!(
            timedelta_to_time(&(TimeDelta::days(1) + TimeDelta::hours(2) + TimeDelta::seconds(3))),
            "26:00:03"
        );
        assert_eq!(timedelta_to_time(&TimeDelta::milliseconds(61_900)), "0:01:01");
        assert_eq!(timedelta_to_time(&TimeDelta::zero()), "0:00:00");
        assert_eq!(timedelta_to_time(&TimeDelta::seconds(-1)), "-0:00:01");
    }

    #[test]
    fn test_time_to_timedelta() {
        assert_eq!(
            time_to_timedelta("31:03:11").unwrap(),
            TimeDelta::hours(31) + TimeDelta::minutes(3) + TimeDelta::seconds(11)
        );
        assert!(time_to_timedelta("3:11").is_err());
        assert!(time_to_timedelta("a:03:11").is_err());
        assert!(time_to_timedelta("1:-3:11").is_err());
        assert!(time_to_timedelta("1::11").is_err());
    }

    #[test]
    fn test_time_round_trip() {
        for time in ["0:00:00", "0:05:09", "4:59:59", "23:00:01", "86:12:30", "120:00:00"] {
            let delta = time_to_timedelta(time).unwrap();
            assert_eq!(timedelta_to_time(&delta), time);
        }
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time("5:9"), "0:05:09");
        assert_eq!(format_time("15:09"), "0:15:09");
        assert_eq!(format_time("45:12:30"), "45:12:30");
        assert_eq!(format_time("1:2:3"), "1:02:03");
        assert_eq!(format_time("42"), "42");
    }

    #[test]
    fn test_add_time() {
        assert_eq!(add_time("1:30", "0:45").unwrap(), "0:02:15");
        assert!(add_time("4:59:50", "15").is_err());
        assert_eq!(add_time("59:59", "0:01").unwrap(), "1:00:00");
        assert_eq!(add_time("23:59:59", "1:00:01").unwrap(), "25:00:00");
    }

    #[test]
    fn test_get_day_month() {
        assert_eq!(
            get_day_month("Stage 4: 12/07 somewhere").unwrap(),
            ("12".to_string(), "07".to_string())
        );
        assert_eq!(
            get_day_month("03-10").unwrap(),
            ("03".to_string(), "10".to_string())
        );
        // 取第一個符合的位置
        assert_eq!(
            get_day_month("Paris 21-07, Nice 22/07").unwrap(),
            ("21".to_string(), "07".to_string())
        );
        assert_eq!(
            get_day_month("ÉTAPE 02/07").unwrap(),
            ("02".to_string(), "07".to_string())
        );
    }

    #[test]
    fn test_get_day_month_missing() {
        for text in ["", "12/7", "1/07 stage", "12.07", "Stage 4 tomorrow"] {
            assert!(
                matches!(get_day_month(text), Err(PcsError::FormatError { .. })),
                "{} should fail",
                text
            );
        }
    }
}
