//! Text rendering of a contribution grid.
//!
//! Weeks run left to right and weekdays top to bottom, the same orientation
//! as the GitHub profile calendar. Each cell is its level digit (0-4);
//! placeholders print as `.` and the missing tail of a ragged week as a space.

use crate::calendar::{color_for, grid_total, WeekRow};

/// Render week rows as a seven-line grid followed by the contribution total
pub fn render_text_grid(weeks: &[WeekRow]) -> String {
    let mut lines: Vec<String> = (0..7)
        .map(|weekday| {
            weeks
                .iter()
                .map(|week| match week.get(weekday) {
                    Some(cell) if cell.is_placeholder() => '.',
                    Some(cell) => level_char(cell.contribution_count),
                    None => ' ',
                })
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect();

    lines.push(format!("{} contributions", grid_total(weeks)));
    lines.join("\n")
}

fn level_char(count: u32) -> char {
    char::from(b'0' + color_for(count).index())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::build_weeks;
    use crate::parser::schema::ContributionDay;
    use chrono::NaiveDate;

    #[test]
    fn test_level_char() {
        assert_eq!(level_char(0), '0');
        assert_eq!(level_char(5), '1');
        assert_eq!(level_char(40), '4');
    }

    #[test]
    fn test_render_text_grid() {
        // 2024-01-03 is a Wednesday
        let start = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
        let days: Vec<ContributionDay> = start
            .iter_days()
            .take(5)
            .zip([0, 5, 15, 25, 50])
            .map(|(date, count)| ContributionDay::new(date, count))
            .collect();

        let rendered = render_text_grid(&build_weeks(&days));
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], ".4");
        assert_eq!(lines[1], ".");
        assert_eq!(lines[2], ".");
        assert_eq!(lines[3], "0");
        assert_eq!(lines[4], "1");
        assert_eq!(lines[5], "2");
        assert_eq!(lines[6], "3");
        assert_eq!(lines[7], "95 contributions");
    }
}
