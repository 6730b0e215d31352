//! Synthetic series generation
//!
//! Fills every bucket of a report window with uniformly drawn income and
//! expense values sized to the bucket granularity.

use rand::Rng;

use crate::models::{Amount, BucketRanges, LabelLocale, LabelStyle, ReportWindow, TimeBucket};

/// Build the labeled, randomly valued series for a window
pub fn generate_series<R: Rng + ?Sized>(
    rng: &mut R,
    window: &ReportWindow,
    style: LabelStyle,
    locale: LabelLocale,
) -> Vec<TimeBucket> {
    let ranges = BucketRanges::for_granularity(window.granularity);

    window
        .bucket_starts()
        .into_iter()
        .map(|start| {
            let income = rng.gen_range(ranges.income.clone());
            let expense = rng.gen_range(ranges.expense.clone());
            TimeBucket::new(
                locale.label(style, start),
                start,
                Amount::new(income),
                Amount::new(expense),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Granularity;
    use chrono::{NaiveDate, NaiveDateTime};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_hourly_series() {
        let mut rng = StdRng::seed_from_u64(42);
        let window = ReportWindow::new(at(2025, 3, 14, 0), at(2025, 3, 14, 23), Granularity::Hourly);
        let series = generate_series(&mut rng, &window, LabelStyle::HourMinute, LabelLocale::En);

        assert_eq!(series.len(), 24);
        assert_eq!(series[0].label, "00:00");
        assert_eq!(series[23].label, "23:00");

        let ranges = BucketRanges::for_granularity(Granularity::Hourly);
        assert!(series.iter().all(|b| ranges.contains(b)));
    }

    #[test]
    fn test_series_is_chronological() {
        let mut rng = StdRng::seed_from_u64(1);
        let window = ReportWindow::new(at(2024, 12, 28, 0), at(2025, 1, 3, 0), Granularity::Daily);
        let series = generate_series(&mut rng, &window, LabelStyle::DayMonth, LabelLocale::Es);

        assert_eq!(series.len(), 7);
        assert!(series.windows(2).all(|w| w[0].start < w[1].start));
        assert_eq!(series[0].label, "28 dic");
        assert_eq!(series[6].label, "03 ene");
    }

    #[test]
    fn test_same_seed_same_series() {
        let window = ReportWindow::new(at(2025, 1, 1, 0), at(2025, 6, 1, 0), Granularity::Monthly);
        let first = generate_series(
            &mut StdRng::seed_from_u64(8),
            &window,
            LabelStyle::Month,
            LabelLocale::En,
        );
        let second = generate_series(
            &mut StdRng::seed_from_u64(8),
            &window,
            LabelStyle::Month,
            LabelLocale::En,
        );
        assert_eq!(first, second);
        assert_eq!(first.len(), 6);
    }

    #[test]
    fn test_empty_window() {
        let mut rng = StdRng::seed_from_u64(1);
        let window = ReportWindow::new(at(2025, 1, 2, 0), at(2025, 1, 1, 0), Granularity::Daily);
        assert!(generate_series(&mut rng, &window, LabelStyle::DayMonth, LabelLocale::En).is_empty());
    }
}
