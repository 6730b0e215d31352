//! Reporting period service
//!
//! Resolves a `Period` selector into a concrete `ReportWindow` anchored at a
//! given instant, honoring the configured week start.

use crate::config::settings::Settings;
use crate::error::{DashError, DashResult};
use crate::models::period::first_of_month;
use crate::models::{Period, ReportWindow};
use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime};
use log::debug;

/// Length of the fallback custom range when no start date is given
pub const DEFAULT_CUSTOM_DAYS: u64 = 30;

/// Service for resolving reporting windows
pub struct PeriodService<'a> {
    settings: &'a Settings,
}

impl<'a> PeriodService<'a> {
    /// Create a new period service
    pub fn new(settings: &'a Settings) -> Self {
        Self { settings }
    }

    /// Resolve the window a period covers at `now`
    ///
    /// `from` and `to` are only consulted for `Period::Custom`. A custom range
    /// whose start falls after its end is rejected.
    pub fn resolve(
        &self,
        period: Period,
        now: NaiveDateTime,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> DashResult<ReportWindow> {
        let today = now.date();
        let (start, end) = match period {
            Period::Day => (midnight(today), now),
            Period::Week => (midnight(self.week_start_of(today)), now),
            Period::Month => (midnight(first_of_month(today)), now),
            Period::Year => (midnight(today.with_ordinal(1).unwrap_or(today)), now),
            Period::Custom => {
                let end_date = to.unwrap_or(today);
                let start_date = match from {
                    Some(date) => date,
                    None => end_date
                        .checked_sub_days(Days::new(DEFAULT_CUSTOM_DAYS))
                        .ok_or_else(|| {
                            DashError::Validation(format!(
                                "Cannot count {} days back from {}",
                                DEFAULT_CUSTOM_DAYS, end_date
                            ))
                        })?,
                };

                if start_date > end_date {
                    return Err(DashError::InvalidRange {
                        from: start_date,
                        to: end_date,
                    });
                }

                let end = match to {
                    Some(date) => end_of_day(date),
                    None => now,
                };
                (midnight(start_date), end)
            }
        };

        let window = ReportWindow::new(start, end, period.granularity());
        debug!("Resolved {} window: {}", period, window);
        Ok(window)
    }

    /// First day of the week containing `date`
    pub fn week_start_of(&self, date: NaiveDate) -> NaiveDate {
        let first = self.settings.week_start().num_days_from_monday();
        let current = date.weekday().num_days_from_monday();
        let back = (current + 7 - first) % 7;
        date.checked_sub_days(Days::new(back as u64))
            .unwrap_or(NaiveDate::MIN)
    }

    /// Describe a window in a human-friendly way
    pub fn format_window_friendly(&self, period: Period, window: &ReportWindow) -> String {
        match period {
            Period::Day => format!("Today, {}", window.start.format("%Y-%m-%d")),
            Period::Week => format!("Week of {}", window.start.format("%b %d, %Y")),
            Period::Month => format!("{}", window.start.format("%B %Y")),
            Period::Year => format!("Year {}", window.start.format("%Y")),
            Period::Custom => format!(
                "{} to {}",
                window.start.format("%Y-%m-%d"),
                window.end.format("%Y-%m-%d")
            ),
        }
    }
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

fn end_of_day(date: NaiveDate) -> NaiveDateTime {
    date.and_hms_opt(23, 59, 59).unwrap_or_else(|| midnight(date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Granularity;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn test_day_window() {
        let settings = Settings::default();
        let service = PeriodService::new(&settings);

        let window = service
            .resolve(Period::Day, at(2025, 3, 14, 15, 20), None, None)
            .unwrap();
        assert_eq!(window.start, at(2025, 3, 14, 0, 0));
        assert_eq!(window.end, at(2025, 3, 14, 15, 20));
        assert_eq!(window.granularity, Granularity::Hourly);
        assert_eq!(window.bucket_count(), 16);
    }

    #[test]
    fn test_week_starts_on_monday() {
        let settings = Settings::default();
        let service = PeriodService::new(&settings);

        // Friday 2025-03-14
        let window = service
            .resolve(Period::Week, at(2025, 3, 14, 8, 0), None, None)
            .unwrap();
        assert_eq!(window.start.date(), date(2025, 3, 10));
        assert_eq!(window.bucket_count(), 5);
    }

    #[test]
    fn test_week_on_a_monday_has_one_bucket() {
        let settings = Settings::default();
        let service = PeriodService::new(&settings);

        let window = service
            .resolve(Period::Week, at(2025, 3, 10, 8, 0), None, None)
            .unwrap();
        assert_eq!(window.bucket_count(), 1);
    }

    #[test]
    fn test_week_start_sunday() {
        let mut settings = Settings::default();
        settings.first_day_of_week = 0;
        let service = PeriodService::new(&settings);

        assert_eq!(service.week_start_of(date(2025, 3, 14)), date(2025, 3, 9));
        assert_eq!(service.week_start_of(date(2025, 3, 9)), date(2025, 3, 9));
    }

    #[test]
    fn test_month_window() {
        let settings = Settings::default();
        let service = PeriodService::new(&settings);

        let window = service
            .resolve(Period::Month, at(2025, 2, 28, 23, 0), None, None)
            .unwrap();
        assert_eq!(window.start.date(), date(2025, 2, 1));
        assert_eq!(window.granularity, Granularity::Daily);
        assert_eq!(window.bucket_count(), 28);
    }

    #[test]
    fn test_year_window() {
        let settings = Settings::default();
        let service = PeriodService::new(&settings);

        let window = service
            .resolve(Period::Year, at(2025, 3, 14, 12, 0), None, None)
            .unwrap();
        assert_eq!(window.start.date(), date(2025, 1, 1));
        assert_eq!(window.granularity, Granularity::Monthly);
        assert_eq!(window.bucket_count(), 3);
    }

    #[test]
    fn test_custom_defaults_to_last_thirty_days() {
        let settings = Settings::default();
        let service = PeriodService::new(&settings);

        let now = at(2025, 3, 31, 10, 0);
        let window = service.resolve(Period::Custom, now, None, None).unwrap();
        assert_eq!(window.start.date(), date(2025, 3, 1));
        assert_eq!(window.end, now);
        assert_eq!(window.bucket_count(), 31);
    }

    #[test]
    fn test_custom_explicit_range() {
        let settings = Settings::default();
        let service = PeriodService::new(&settings);

        let window = service
            .resolve(
                Period::Custom,
                at(2025, 6, 1, 0, 0),
                Some(date(2025, 1, 30)),
                Some(date(2025, 2, 2)),
            )
            .unwrap();
        assert_eq!(window.bucket_count(), 4);
        assert_eq!(window.end, at(2025, 2, 2, 23, 59) + chrono::Duration::seconds(59));
    }

    #[test]
    fn test_custom_only_to_counts_back_from_it() {
        let settings = Settings::default();
        let service = PeriodService::new(&settings);

        let window = service
            .resolve(Period::Custom, at(2025, 6, 1, 0, 0), None, Some(date(2025, 2, 10)))
            .unwrap();
        assert_eq!(window.start.date(), date(2025, 1, 11));
    }

    #[test]
    fn test_custom_fallback_before_earliest_date_is_an_error() {
        let settings = Settings::default();
        let service = PeriodService::new(&settings);
        let earliest = NaiveDate::MIN.checked_add_days(Days::new(9)).unwrap();

        let err = service
            .resolve(Period::Custom, at(2025, 3, 1, 0, 0), None, Some(earliest))
            .unwrap_err();
        assert!(matches!(err, DashError::Validation(_)));

        // An explicit start needs no arithmetic
        let window = service
            .resolve(Period::Custom, at(2025, 3, 1, 0, 0), Some(earliest), Some(earliest))
            .unwrap();
        assert_eq!(window.start.date(), earliest);
    }

    #[test]
    fn test_week_start_clamps_at_earliest_date() {
        let mut settings = Settings::default();
        settings.first_day_of_week = 0;
        let service = PeriodService::new(&settings);
        assert_eq!(service.week_start_of(NaiveDate::MIN), NaiveDate::MIN);
    }

    #[test]
    fn test_inverted_range_rejected() {
        let settings = Settings::default();
        let service = PeriodService::new(&settings);

        let err = service
            .resolve(
                Period::Custom,
                at(2025, 6, 1, 0, 0),
                Some(date(2025, 3, 10)),
                Some(date(2025, 3, 1)),
            )
            .unwrap_err();
        assert!(matches!(err, DashError::InvalidRange { .. }));
    }

    #[test]
    fn test_future_from_without_to_rejected() {
        let settings = Settings::default();
        let service = PeriodService::new(&settings);

        let result = service.resolve(
            Period::Custom,
            at(2025, 3, 1, 0, 0),
            Some(date(2025, 3, 5)),
            None,
        );
        assert!(result.unwrap_err().is_validation());
    }

    #[test]
    fn test_bounds_ignored_for_fixed_periods() {
        let settings = Settings::default();
        let service = PeriodService::new(&settings);

        let window = service
            .resolve(
                Period::Day,
                at(2025, 3, 14, 2, 0),
                Some(date(2025, 3, 10)),
                Some(date(2025, 3, 1)),
            )
            .unwrap();
        assert_eq!(window.bucket_count(), 3);
    }

    #[test]
    fn test_format_window_friendly() {
        let settings = Settings::default();
        let service = PeriodService::new(&settings);
        let window = service
            .resolve(Period::Year, at(2025, 3, 14, 12, 0), None, None)
            .unwrap();
        assert_eq!(service.format_window_friendly(Period::Year, &window), "Year 2025");
    }
}
