//! Month calendar derivation and date formatting.
//!
//! Everything here is a pure function of a [`NaiveDate`]. [`CalendarView`]
//! only stores the date being browsed.

use chrono::{Datelike, Months, NaiveDate};

// =============================================================================
// CELLS
// =============================================================================

/// One cell of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell {
    /// Padding before the first day of the month.
    Blank,

    /// A day of the month (1-based).
    Day(u32),
}

/// Build the month grid for the month containing `date`.
///
/// The grid starts on Sunday: it holds one blank per weekday before the
/// 1st, followed by every day of the month. At most 42 cells.
pub fn calendar_days(date: NaiveDate) -> Vec<CalendarCell> {
    let first = first_of_month(date);
    let leading = first.weekday().num_days_from_sunday() as usize;
    let days = days_in_month(date);

    let mut cells = Vec::with_capacity(leading + days as usize);
    cells.extend(std::iter::repeat_n(CalendarCell::Blank, leading));
    cells.extend((1..=days).map(CalendarCell::Day));
    cells
}

/// Number of days in the month containing `date`.
pub fn days_in_month(date: NaiveDate) -> u32 {
    let first = first_of_month(date);
    first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map_or(31, |last| last.day())
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

// =============================================================================
// FORMATTING
// =============================================================================

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Full English month name of `date`.
pub fn month_name(date: NaiveDate) -> &'static str {
    MONTH_NAMES[date.month0() as usize]
}

/// Full English weekday name of `date`.
pub fn weekday_name(date: NaiveDate) -> &'static str {
    WEEKDAY_NAMES[date.weekday().num_days_from_sunday() as usize]
}

/// Ordinal suffix for a day of the month (`st`, `nd`, `rd`, `th`).
pub fn day_suffix(day: u32) -> &'static str {
    if (4..=20).contains(&day) {
        return "th";
    }
    match day % 10 {
        1 => "st",
        2 => "nd",
        3 => "rd",
        _ => "th",
    }
}

/// Day of month with its ordinal suffix, e.g. `"21st"`.
pub fn day_of_month_with_suffix(date: NaiveDate) -> String {
    format!("{}{}", date.day(), day_suffix(date.day()))
}

/// Header line, e.g. `"Friday, March 21st"`.
pub fn formatted_date_header(date: NaiveDate) -> String {
    format!(
        "{}, {} {}",
        weekday_name(date),
        month_name(date),
        day_of_month_with_suffix(date)
    )
}

/// Sub-header line, e.g. `"Friday, March 21"`.
pub fn formatted_date_subheader(date: NaiveDate) -> String {
    format!("{}, {} {}", weekday_name(date), month_name(date), date.day())
}

// =============================================================================
// VIEW STATE
// =============================================================================

/// The month currently browsed on the calendar page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarView {
    current_date: NaiveDate,
}

impl CalendarView {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            current_date: today,
        }
    }

    pub fn current_date(&self) -> NaiveDate {
        self.current_date
    }

    /// Grid cells for the browsed month.
    pub fn days(&self) -> Vec<CalendarCell> {
        calendar_days(self.current_date)
    }

    /// Title shown above the grid, e.g. `"March 2025"`.
    pub fn title(&self) -> String {
        format!(
            "{} {}",
            month_name(self.current_date),
            self.current_date.year()
        )
    }

    /// Check if `day` of the browsed month is `today`.
    pub fn is_today(&self, day: u32, today: NaiveDate) -> bool {
        self.current_date.year() == today.year()
            && self.current_date.month() == today.month()
            && day == today.day()
    }

    /// Move to day 1 of the previous month.
    pub fn prev_month(&mut self) {
        let first = first_of_month(self.current_date);
        if let Some(prev) = first.checked_sub_months(Months::new(1)) {
            self.current_date = prev;
        }
    }

    /// Move to day 1 of the next month.
    pub fn next_month(&mut self) {
        let first = first_of_month(self.current_date);
        if let Some(next) = first.checked_add_months(Months::new(1)) {
            self.current_date = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_suffix() {
        let cases = [
            (1, "st"),
            (2, "nd"),
            (3, "rd"),
            (4, "th"),
            (11, "th"),
            (12, "th"),
            (13, "th"),
            (20, "th"),
            (21, "st"),
            (22, "nd"),
            (23, "rd"),
            (30, "th"),
            (31, "st"),
        ];
        for (day, suffix) in cases {
            assert_eq!(day_suffix(day), suffix, "day {day}");
        }
    }

    #[test]
    fn test_days_in_month() {
        assert_eq!(days_in_month(date(2024, 2, 10)), 29);
        assert_eq!(days_in_month(date(2025, 2, 10)), 28);
        assert_eq!(days_in_month(date(2025, 12, 31)), 31);
        assert_eq!(days_in_month(date(2025, 4, 30)), 30);
    }

    #[test]
    fn test_headers() {
        let d = date(2025, 3, 21);
        assert_eq!(formatted_date_header(d), "Friday, March 21st");
        assert_eq!(formatted_date_subheader(d), "Friday, March 21");
    }

    #[test]
    fn test_month_paging_normalizes_to_first() {
        let mut view = CalendarView::new(date(2025, 1, 31));
        view.next_month();
        assert_eq!(view.current_date(), date(2025, 2, 1));
        view.prev_month();
        view.prev_month();
        assert_eq!(view.current_date(), date(2024, 12, 1));
        assert_eq!(view.title(), "December 2024");
    }
}
