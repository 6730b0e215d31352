//! Dashboard report generation
//!
//! Ties the pieces together: resolve the window, fill the series, total it,
//! then spread the totals over branches and categories.

use chrono::{NaiveDate, NaiveDateTime};
use log::{debug, warn};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::allocation::{
    allocate_branches, allocate_categories, EXPENSE_SPAN_DIVISOR, SALES_SPAN_DIVISOR,
};
use super::clock::{Clock, SystemClock};
use super::period::PeriodService;
use super::series::generate_series;
use crate::config::settings::Settings;
use crate::error::DashResult;
use crate::models::{FinancialReport, FinancialSummary, Period};

/// Build an RNG from an optional seed, falling back to OS entropy
pub fn rng_from_seed(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Service producing synthetic dashboard reports
pub struct DashboardService<'a, R, C = SystemClock> {
    settings: &'a Settings,
    rng: R,
    clock: C,
}

impl<'a> DashboardService<'a, StdRng, SystemClock> {
    /// Service seeded from the settings (or entropy) and the system clock
    pub fn from_settings(settings: &'a Settings) -> Self {
        Self::new(settings, rng_from_seed(settings.seed), SystemClock)
    }
}

impl<'a, R: Rng, C: Clock> DashboardService<'a, R, C> {
    pub fn new(settings: &'a Settings, rng: R, clock: C) -> Self {
        Self {
            settings,
            rng,
            clock,
        }
    }

    /// Generate the report for a period as of the clock's current time
    pub fn generate(
        &mut self,
        period: Period,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> DashResult<FinancialReport> {
        let now = self.clock.now();
        self.generate_at(now, period, from, to)
    }

    /// Generate the report for a period as of `now`
    pub fn generate_at(
        &mut self,
        now: NaiveDateTime,
        period: Period,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> DashResult<FinancialReport> {
        let window = PeriodService::new(self.settings).resolve(period, now, from, to)?;

        let series = generate_series(
            &mut self.rng,
            &window,
            period.label_style(),
            self.settings.label_locale,
        );
        debug!("Generated {} {} buckets", series.len(), window.granularity);

        let summary = FinancialSummary::from_series(&series);

        if self.settings.branches.is_empty() {
            warn!("No branches configured; branch allocation will be empty");
        }
        let branches = allocate_branches(
            &mut self.rng,
            &self.settings.branches,
            summary.total_income,
            summary.total_expenses,
        );
        let expense_categories = allocate_categories(
            &mut self.rng,
            &self.settings.expense_categories,
            summary.total_expenses,
            EXPENSE_SPAN_DIVISOR,
        );
        let sales_categories = allocate_categories(
            &mut self.rng,
            &self.settings.sales_categories,
            summary.total_income,
            SALES_SPAN_DIVISOR,
        );

        Ok(FinancialReport {
            period,
            window,
            summary,
            series,
            branches,
            expense_categories,
            sales_categories,
        })
    }
}
