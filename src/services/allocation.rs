//! Synthetic allocation of totals
//!
//! Branches partition the totals exactly: each non-last branch draws a share
//! of what remains and the last branch takes the remainder. Category shares
//! are independent draws and are not normalized.

use rand::Rng;

use crate::models::{Amount, BranchAllocation, BranchSpec, CategoryAllocation, CategorySpec};

/// Divisor of the remainder for the upper span of a branch draw
pub const BRANCH_SPAN_DIVISOR: i64 = 2;
/// Divisor of the total for the upper span of an expense category draw
pub const EXPENSE_SPAN_DIVISOR: i64 = 2;
/// Divisor of the total for the upper span of a sales category draw
pub const SALES_SPAN_DIVISOR: i64 = 3;

/// Draw uniformly from `[total/10, total/10 + total/span_divisor)`
///
/// An empty span (small or non-positive totals) yields the lower bound.
fn draw_share<R: Rng + ?Sized>(rng: &mut R, total: i64, span_divisor: i64) -> i64 {
    let base = total / 10;
    let span = total / span_divisor;
    if span > 0 {
        base + rng.gen_range(0..span)
    } else {
        base
    }
}

/// Split income and expenses across branches
///
/// Income and expenses are drawn independently. The sums of the returned
/// income and expenses equal the inputs exactly; every balance is
/// `income - expenses`.
pub fn allocate_branches<R: Rng + ?Sized>(
    rng: &mut R,
    branches: &[BranchSpec],
    total_income: Amount,
    total_expenses: Amount,
) -> Vec<BranchAllocation> {
    let mut remaining_income = total_income.units();
    let mut remaining_expenses = total_expenses.units();
    let last = branches.len().saturating_sub(1);

    branches
        .iter()
        .enumerate()
        .map(|(index, branch)| {
            let (income, expenses) = if index == last {
                (remaining_income, remaining_expenses)
            } else {
                (
                    draw_share(rng, remaining_income, BRANCH_SPAN_DIVISOR),
                    draw_share(rng, remaining_expenses, BRANCH_SPAN_DIVISOR),
                )
            };

            remaining_income -= income;
            remaining_expenses -= expenses;

            BranchAllocation::new(branch, Amount::new(income), Amount::new(expenses))
        })
        .collect()
}

/// Give each category an independent share of `total`
pub fn allocate_categories<R: Rng + ?Sized>(
    rng: &mut R,
    categories: &[CategorySpec],
    total: Amount,
    span_divisor: i64,
) -> Vec<CategoryAllocation> {
    categories
        .iter()
        .map(|category| {
            let value = draw_share(rng, total.units(), span_divisor.max(1));
            CategoryAllocation::new(category, Amount::new(value))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_branches_sum_exactly() {
        let mut rng = StdRng::seed_from_u64(11);
        for total in [0_i64, 1, 9, 10, 99, 12_345, 4_800_000] {
            let branches = allocate_branches(
                &mut rng,
                &BranchSpec::defaults(),
                Amount::new(total),
                Amount::new(total / 2),
            );
            assert_eq!(branches.len(), 5);

            let income: Amount = branches.iter().map(|b| b.income).sum();
            let expenses: Amount = branches.iter().map(|b| b.expenses).sum();
            assert_eq!(income, Amount::new(total));
            assert_eq!(expenses, Amount::new(total / 2));
        }
    }

    #[test]
    fn test_branch_shares_are_non_negative() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let branches = allocate_branches(
                &mut rng,
                &BranchSpec::defaults(),
                Amount::new(250_000),
                Amount::new(180_000),
            );
            assert!(branches.iter().all(|b| !b.income.is_negative()));
            assert!(branches.iter().all(|b| !b.expenses.is_negative()));
        }
    }

    #[test]
    fn test_balance_matches_income_minus_expenses() {
        let mut rng = StdRng::seed_from_u64(5);
        let branches = allocate_branches(
            &mut rng,
            &BranchSpec::defaults(),
            Amount::new(100_000),
            Amount::new(70_000),
        );
        for branch in &branches {
            assert_eq!(branch.balance, branch.income - branch.expenses);
        }
        let balance: Amount = branches.iter().map(|b| b.balance).sum();
        assert_eq!(balance, Amount::new(30_000));
    }

    #[test]
    fn test_first_branch_draw_bounds() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..200 {
            let branches = allocate_branches(
                &mut rng,
                &BranchSpec::defaults(),
                Amount::new(10_000),
                Amount::new(10_000),
            );
            let first = branches[0].income.units();
            assert!((1_000..6_000).contains(&first));
        }
    }

    #[test]
    fn test_single_branch_takes_everything() {
        let mut rng = StdRng::seed_from_u64(1);
        let only = vec![BranchSpec::new("#01", "Única")];
        let branches = allocate_branches(&mut rng, &only, Amount::new(500), Amount::new(200));
        assert_eq!(branches[0].income, Amount::new(500));
        assert_eq!(branches[0].expenses, Amount::new(200));
    }

    #[test]
    fn test_empty_lists() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(allocate_branches(&mut rng, &[], Amount::new(500), Amount::new(200)).is_empty());
        assert!(allocate_categories(&mut rng, &[], Amount::new(500), EXPENSE_SPAN_DIVISOR).is_empty());
    }

    #[test]
    fn test_category_bounds() {
        let mut rng = StdRng::seed_from_u64(21);
        let total = Amount::new(90_000);

        for _ in 0..100 {
            let expenses = allocate_categories(
                &mut rng,
                &CategorySpec::default_expense(),
                total,
                EXPENSE_SPAN_DIVISOR,
            );
            assert_eq!(expenses.len(), 6);
            assert!(expenses
                .iter()
                .all(|c| (9_000..54_000).contains(&c.value.units())));

            let sales = allocate_categories(
                &mut rng,
                &CategorySpec::default_sales(),
                total,
                SALES_SPAN_DIVISOR,
            );
            assert_eq!(sales.len(), 5);
            assert!(sales
                .iter()
                .all(|c| (9_000..39_000).contains(&c.value.units())));
        }
    }

    #[test]
    fn test_zero_total_categories() {
        let mut rng = StdRng::seed_from_u64(2);
        let sales = allocate_categories(
            &mut rng,
            &CategorySpec::default_sales(),
            Amount::zero(),
            SALES_SPAN_DIVISOR,
        );
        assert!(sales.iter().all(|c| c.value.is_zero()));
        assert_eq!(sales[0].color, "#FF6B6B");
    }
}
