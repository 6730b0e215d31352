//! Reporting period representation
//!
//! A `Period` is the selector the dashboard exposes (today, this week, this
//! month, this year, or a custom range). Resolving a period against an
//! instant yields a `ReportWindow`, which knows how to split itself into
//! buckets.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reporting-window selector
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    /// Start of the current day until now, hourly buckets
    #[default]
    Day,
    /// Start of the current week until now, daily buckets
    Week,
    /// Start of the current month until now, daily buckets
    Month,
    /// Start of the current year until now, monthly buckets
    Year,
    /// Explicit date range, daily buckets
    Custom,
}

impl Period {
    /// All selectors in display order
    pub const ALL: [Period; 5] = [
        Period::Day,
        Period::Week,
        Period::Month,
        Period::Year,
        Period::Custom,
    ];

    /// Bucket unit used for this period
    pub fn granularity(&self) -> Granularity {
        match self {
            Self::Day => Granularity::Hourly,
            Self::Week | Self::Month | Self::Custom => Granularity::Daily,
            Self::Year => Granularity::Monthly,
        }
    }

    /// How bucket labels are rendered for this period
    pub fn label_style(&self) -> LabelStyle {
        match self {
            Self::Day => LabelStyle::HourMinute,
            Self::Week => LabelStyle::Weekday,
            Self::Month | Self::Custom => LabelStyle::DayMonth,
            Self::Year => LabelStyle::Month,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Week => "week",
            Self::Month => "month",
            Self::Year => "year",
            Self::Custom => "custom",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = PeriodParseError;

    /// Parse a period name; also accepts the dashboard's Spanish labels
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "day" | "today" | "hoy" => Ok(Self::Day),
            "week" | "semana" => Ok(Self::Week),
            "month" | "mes" => Ok(Self::Month),
            "year" | "año" | "ano" => Ok(Self::Year),
            "custom" | "personalizado" => Ok(Self::Custom),
            _ => Err(PeriodParseError::UnknownPeriod(s.to_string())),
        }
    }
}

/// Size of one bucket in a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    Hourly,
    Daily,
    Monthly,
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hourly => f.write_str("hourly"),
            Self::Daily => f.write_str("daily"),
            Self::Monthly => f.write_str("monthly"),
        }
    }
}

/// Bucket label format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LabelStyle {
    /// "14:00"
    HourMinute,
    /// "Mon"
    Weekday,
    /// "05 Mar"
    DayMonth,
    /// "Mar"
    Month,
}

/// Language used for month and weekday names in labels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LabelLocale {
    #[default]
    En,
    Es,
}

const MONTHS_EN: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];
const MONTHS_ES: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
];
const WEEKDAYS_EN: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
const WEEKDAYS_ES: [&str; 7] = ["lun", "mar", "mié", "jue", "vie", "sáb", "dom"];

impl LabelLocale {
    fn month_name(&self, month0: u32) -> &'static str {
        let idx = month0 as usize % 12;
        match self {
            Self::En => MONTHS_EN[idx],
            Self::Es => MONTHS_ES[idx],
        }
    }

    fn weekday_name(&self, from_monday: u32) -> &'static str {
        let idx = from_monday as usize % 7;
        match self {
            Self::En => WEEKDAYS_EN[idx],
            Self::Es => WEEKDAYS_ES[idx],
        }
    }

    /// Render the label of a bucket starting at `at`
    pub fn label(&self, style: LabelStyle, at: NaiveDateTime) -> String {
        match style {
            LabelStyle::HourMinute => format!("{:02}:{:02}", at.hour(), at.minute()),
            LabelStyle::Weekday => self
                .weekday_name(at.weekday().num_days_from_monday())
                .to_string(),
            LabelStyle::DayMonth => format!("{:02} {}", at.day(), self.month_name(at.month0())),
            LabelStyle::Month => self.month_name(at.month0()).to_string(),
        }
    }
}

impl fmt::Display for LabelLocale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::En => f.write_str("en"),
            Self::Es => f.write_str("es"),
        }
    }
}

impl FromStr for LabelLocale {
    type Err = PeriodParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "en" => Ok(Self::En),
            "es" => Ok(Self::Es),
            _ => Err(PeriodParseError::UnknownLocale(s.to_string())),
        }
    }
}

/// A resolved reporting window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportWindow {
    /// Inclusive start
    pub start: NaiveDateTime,
    /// Inclusive end
    pub end: NaiveDateTime,
    pub granularity: Granularity,
}

impl ReportWindow {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime, granularity: Granularity) -> Self {
        Self {
            start,
            end,
            granularity,
        }
    }

    /// Start instant of every bucket touched by the window, ascending
    ///
    /// Hourly buckets start on the hour, daily buckets at midnight and monthly
    /// buckets on the first of the month. A window whose start is after its
    /// end yields no buckets.
    pub fn bucket_starts(&self) -> Vec<NaiveDateTime> {
        if self.start > self.end {
            return Vec::new();
        }

        match self.granularity {
            Granularity::Hourly => {
                let mut cursor = truncate_to_hour(self.start);
                let mut starts = Vec::new();
                while cursor <= self.end {
                    starts.push(cursor);
                    cursor = match cursor.checked_add_signed(Duration::hours(1)) {
                        Some(next) => next,
                        None => break,
                    };
                }
                starts
            }
            Granularity::Daily => self
                .start
                .date()
                .iter_days()
                .take_while(|d| *d <= self.end.date())
                .map(|d| d.and_time(NaiveTime::MIN))
                .collect(),
            Granularity::Monthly => {
                let mut starts = Vec::new();
                let last = first_of_month(self.end.date());
                let mut cursor = first_of_month(self.start.date());
                while cursor <= last {
                    starts.push(cursor.and_time(NaiveTime::MIN));
                    cursor = match next_month(cursor) {
                        Some(next) => next,
                        None => break,
                    };
                }
                starts
            }
        }
    }

    /// Number of buckets the window produces
    pub fn bucket_count(&self) -> usize {
        self.bucket_starts().len()
    }
}

impl fmt::Display for ReportWindow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} .. {} ({})",
            self.start.format("%Y-%m-%d %H:%M"),
            self.end.format("%Y-%m-%d %H:%M"),
            self.granularity
        )
    }
}

fn truncate_to_hour(at: NaiveDateTime) -> NaiveDateTime {
    at.date()
        .and_hms_opt(at.hour(), 0, 0)
        .unwrap_or(at)
}

/// First day of the month containing `date`
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

fn next_month(date: NaiveDate) -> Option<NaiveDate> {
    if date.month() == 12 {
        NaiveDate::from_ymd_opt(date.year() + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(date.year(), date.month() + 1, 1)
    }
}

/// Error type for period and locale parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PeriodParseError {
    UnknownPeriod(String),
    UnknownLocale(String),
}

impl fmt::Display for PeriodParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PeriodParseError::UnknownPeriod(s) => write!(
                f,
                "Unknown period '{}' (expected day, week, month, year or custom)",
                s
            ),
            PeriodParseError::UnknownLocale(s) => {
                write!(f, "Unknown label locale '{}' (expected en or es)", s)
            }
        }
    }
}

impl std::error::Error for PeriodParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, 0)
            .unwrap()
    }

    #[test]
    fn test_parse_period() {
        assert_eq!("day".parse::<Period>().unwrap(), Period::Day);
        assert_eq!(" WEEK ".parse::<Period>().unwrap(), Period::Week);
        assert_eq!("mes".parse::<Period>().unwrap(), Period::Month);
        assert_eq!("personalizado".parse::<Period>().unwrap(), Period::Custom);
        assert!("fortnight".parse::<Period>().is_err());
    }

    #[test]
    fn test_display_round_trips_through_parse() {
        for period in Period::ALL {
            assert_eq!(period.to_string().parse::<Period>().unwrap(), period);
        }
    }

    #[test]
    fn test_granularity() {
        assert_eq!(Period::Day.granularity(), Granularity::Hourly);
        assert_eq!(Period::Week.granularity(), Granularity::Daily);
        assert_eq!(Period::Month.granularity(), Granularity::Daily);
        assert_eq!(Period::Custom.granularity(), Granularity::Daily);
        assert_eq!(Period::Year.granularity(), Granularity::Monthly);
    }

    #[test]
    fn test_hourly_buckets_include_current_hour() {
        let window = ReportWindow::new(
            at(2025, 3, 14, 0, 0),
            at(2025, 3, 14, 9, 42),
            Granularity::Hourly,
        );
        let starts = window.bucket_starts();
        assert_eq!(starts.len(), 10);
        assert_eq!(starts[0], at(2025, 3, 14, 0, 0));
        assert_eq!(starts[9], at(2025, 3, 14, 9, 0));
    }

    #[test]
    fn test_daily_buckets_are_inclusive() {
        let window = ReportWindow::new(
            at(2025, 2, 26, 0, 0),
            at(2025, 3, 2, 18, 0),
            Granularity::Daily,
        );
        let starts = window.bucket_starts();
        assert_eq!(starts.len(), 5);
        assert_eq!(starts[4], at(2025, 3, 2, 0, 0));
    }

    #[test]
    fn test_monthly_buckets_cross_year() {
        let window = ReportWindow::new(
            at(2024, 11, 20, 0, 0),
            at(2025, 2, 3, 0, 0),
            Granularity::Monthly,
        );
        let starts = window.bucket_starts();
        assert_eq!(starts.len(), 4);
        assert_eq!(starts[0], at(2024, 11, 1, 0, 0));
        assert_eq!(starts[3], at(2025, 2, 1, 0, 0));
    }

    #[test]
    fn test_hourly_window_ending_at_latest_instant() {
        let end = NaiveDateTime::MAX;
        let start = end.date().and_time(NaiveTime::MIN);
        let window = ReportWindow::new(start, end, Granularity::Hourly);
        assert_eq!(window.bucket_count(), 24);
    }

    #[test]
    fn test_inverted_window_has_no_buckets() {
        let window = ReportWindow::new(
            at(2025, 3, 10, 0, 0),
            at(2025, 3, 1, 0, 0),
            Granularity::Daily,
        );
        assert_eq!(window.bucket_count(), 0);
    }

    #[test]
    fn test_labels() {
        let moment = at(2025, 3, 5, 14, 0);
        assert_eq!(LabelLocale::En.label(LabelStyle::HourMinute, moment), "14:00");
        assert_eq!(LabelLocale::En.label(LabelStyle::Weekday, moment), "Wed");
        assert_eq!(LabelLocale::Es.label(LabelStyle::Weekday, moment), "mié");
        assert_eq!(LabelLocale::En.label(LabelStyle::DayMonth, moment), "05 Mar");
        assert_eq!(LabelLocale::Es.label(LabelStyle::DayMonth, moment), "05 mar");
        assert_eq!(LabelLocale::Es.label(LabelStyle::Month, at(2025, 1, 1, 0, 0)), "ene");
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&Period::Year).unwrap();
        assert_eq!(json, "\"year\"");
        let back: Period = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Period::Year);
    }
}
