use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};
use std::fmt;
use std::fmt::{Display, Formatter};

/// The calendar window requested for one target year.
///
/// Both ends are inclusive, matching the `start_date`/`end_date` semantics of the
/// Open-Meteo API.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct DateWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateWindow {
    /// Replays the month/day of `today` in `year` and extends it by `days`.
    ///
    /// A Feb 29 reference date maps to Feb 28 in non-leap years. The end is computed
    /// from the transplanted start, so a window crossing New Year ends in `year + 1`.
    ///
    /// Returns `None` if `year` is outside the range chrono can represent.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use weather_trends::DateWindow;
    ///
    /// let today = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();
    /// let window = DateWindow::for_year(today, 1, 2023).unwrap();
    /// assert_eq!(window.start, NaiveDate::from_ymd_opt(2023, 2, 28).unwrap());
    /// assert_eq!(window.end, NaiveDate::from_ymd_opt(2023, 3, 1).unwrap());
    /// ```
    pub fn for_year(today: NaiveDate, days: u32, year: i32) -> Option<Self> {
        let start = transplant_year(today, year)?;
        let end = start.checked_add_days(Days::new(u64::from(days)))?;
        Some(Self { start, end })
    }

    /// The timestamp of hour index 0.
    pub fn first_hour(&self) -> NaiveDateTime {
        self.start.and_time(NaiveTime::MIN)
    }

    pub fn start_param(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    pub fn end_param(&self) -> String {
        self.end.format("%Y-%m-%d").to_string()
    }
}

impl Display for DateWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

fn transplant_year(date: NaiveDate, year: i32) -> Option<NaiveDate> {
    date.with_year(year).or_else(|| {
        if date.month() == 2 && date.day() == 29 {
            NaiveDate::from_ymd_opt(year, 2, 28)
        } else {
            None
        }
    })
}
