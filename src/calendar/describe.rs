//! Human-readable cell descriptions ("3 contributions on March 2nd.").

use super::grid::DayCell;
use chrono::{Datelike, NaiveDate};

/// English ordinal suffix for a day of the month
fn day_suffix(day: u32) -> &'static str {
    if (11..=13).contains(&day) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// "January 1st", "March 22nd"
pub fn format_pretty_date(date: NaiveDate) -> String {
    let day = date.day();
    format!("{} {}{}", date.format("%B"), day, day_suffix(day))
}

/// Tooltip-style sentence for a cell; placeholders have none
pub fn describe_cell(cell: &DayCell) -> Option<String> {
    let date = format_pretty_date(cell.date?);
    Some(match cell.contribution_count {
        0 => format!("No contributions on {}.", date),
        count => format!("{} contributions on {}.", count, date),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, m, d).unwrap()
    }

    #[test]
    fn test_day_suffix() {
        assert_eq!(day_suffix(1), "st");
        assert_eq!(day_suffix(2), "nd");
        assert_eq!(day_suffix(3), "rd");
        assert_eq!(day_suffix(4), "th");
        assert_eq!(day_suffix(11), "th");
        assert_eq!(day_suffix(12), "th");
        assert_eq!(day_suffix(13), "th");
        assert_eq!(day_suffix(21), "st");
        assert_eq!(day_suffix(22), "nd");
        assert_eq!(day_suffix(31), "st");
    }

    #[test]
    fn test_format_pretty_date() {
        assert_eq!(format_pretty_date(date(1, 1)), "January 1st");
        assert_eq!(format_pretty_date(date(3, 22)), "March 22nd");
        assert_eq!(format_pretty_date(date(12, 13)), "December 13th");
    }

    #[test]
    fn test_describe_cell() {
        let empty = DayCell {
            date: Some(date(1, 1)),
            contribution_count: 0,
        };
        let busy = DayCell {
            date: Some(date(3, 2)),
            contribution_count: 3,
        };

        assert_eq!(
            describe_cell(&empty).as_deref(),
            Some("No contributions on January 1st.")
        );
        assert_eq!(
            describe_cell(&busy).as_deref(),
            Some("3 contributions on March 2nd.")
        );
        assert_eq!(describe_cell(&DayCell::placeholder()), None);
    }
}
