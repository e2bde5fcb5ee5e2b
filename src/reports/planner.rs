//! Household budget planner
//!
//! Pure monthly-budget computations: expense buckets, leftover after
//! expenses, fixed-ratio allocations of the leftover, per-paycheck splits,
//! and a combined household view. No I/O.

use crate::models::Money;

/// Fixed allocation ratios applied to the monthly leftover
pub const ALLOCATION_RATIOS: [(&str, f64); 4] = [
    ("Credit Card Payment", 0.25),
    ("Savings", 0.40),
    ("Spending Money", 0.20),
    ("Investments", 0.15),
];

/// One person's monthly planner inputs
#[derive(Debug, Clone)]
pub struct PlannerProfile {
    /// Person's name, used to label the plan
    pub name: String,
    /// Monthly income
    pub income: Money,
    /// Personal fixed costs
    pub fixed_costs: Money,
    /// Subscription costs
    pub subscriptions: Money,
    /// Full household rent (shared)
    pub shared_rent: Money,
    /// Full household utilities (shared)
    pub shared_utilities: Money,
    /// Number of people splitting the shared costs
    pub household_size: u32,
    /// Paychecks per month, for per-paycheck allocation splits
    pub paychecks_per_month: u32,
}

/// One labelled expense bucket with its share of income
#[derive(Debug, Clone)]
pub struct ExpenseBucket {
    pub label: String,
    pub amount: Money,
    /// Percentage of monthly income
    pub percent_of_income: f64,
}

/// One allocation of the monthly leftover
#[derive(Debug, Clone)]
pub struct Allocation {
    pub label: &'static str,
    pub ratio: f64,
    pub amount: Money,
    pub per_paycheck: Money,
}

/// A computed monthly budget plan for one person
#[derive(Debug, Clone)]
pub struct BudgetPlan {
    pub name: String,
    pub income: Money,
    pub buckets: Vec<ExpenseBucket>,
    pub total_expenses: Money,
    /// Income minus expenses, floored at zero
    pub leftover: Money,
    pub allocations: Vec<Allocation>,
}

impl BudgetPlan {
    /// Compute a plan from a profile
    pub fn compute(profile: &PlannerProfile) -> Self {
        let share = profile.household_size.max(1) as i64;
        let paychecks = profile.paychecks_per_month.max(1) as i64;

        let bucket_amounts = [
            ("Rent (Shared)".to_string(), profile.shared_rent.split(share)),
            (
                "Utilities (Shared)".to_string(),
                profile.shared_utilities.split(share),
            ),
            ("Fixed Costs".to_string(), profile.fixed_costs),
            ("Subscriptions".to_string(), profile.subscriptions),
        ];

        let total_expenses: Money = bucket_amounts.iter().map(|(_, amount)| *amount).sum();

        let buckets = bucket_amounts
            .into_iter()
            .map(|(label, amount)| ExpenseBucket {
                label,
                amount,
                percent_of_income: amount.percent_of(profile.income),
            })
            .collect();

        let leftover = if profile.income > total_expenses {
            profile.income - total_expenses
        } else {
            Money::zero()
        };

        let allocations = ALLOCATION_RATIOS
            .iter()
            .map(|&(label, ratio)| {
                let amount = leftover.mul_ratio(ratio);
                Allocation {
                    label,
                    ratio,
                    amount,
                    per_paycheck: amount.split(paychecks),
                }
            })
            .collect();

        Self {
            name: profile.name.clone(),
            income: profile.income,
            buckets,
            total_expenses,
            leftover,
            allocations,
        }
    }
}

/// Combined view over every household member's plan
#[derive(Debug, Clone)]
pub struct HouseholdPlan {
    pub combined_income: Money,
    pub buckets: Vec<ExpenseBucket>,
    pub total_expenses: Money,
    pub leftover: Money,
    /// Leftover as a percentage of combined income (0.0 when income is 0)
    pub savings_rate: f64,
}

impl HouseholdPlan {
    /// Combine profiles into one household plan
    ///
    /// Shared costs are counted once, at full value, taken from the first
    /// profile; personal buckets are labelled per person.
    pub fn combine(profiles: &[PlannerProfile]) -> Self {
        let combined_income: Money = profiles.iter().map(|p| p.income).sum();

        let mut bucket_amounts: Vec<(String, Money)> = Vec::new();
        if let Some(first) = profiles.first() {
            bucket_amounts.push(("Rent".to_string(), first.shared_rent));
            bucket_amounts.push(("Utilities".to_string(), first.shared_utilities));
        }
        for profile in profiles {
            bucket_amounts.push((format!("{} Fixed", profile.name), profile.fixed_costs));
            bucket_amounts.push((
                format!("{} Subscriptions", profile.name),
                profile.subscriptions,
            ));
        }

        let total_expenses: Money = bucket_amounts.iter().map(|(_, amount)| *amount).sum();

        let buckets = bucket_amounts
            .into_iter()
            .map(|(label, amount)| ExpenseBucket {
                label,
                amount,
                percent_of_income: amount.percent_of(combined_income),
            })
            .collect();

        let leftover = if combined_income > total_expenses {
            combined_income - total_expenses
        } else {
            Money::zero()
        };

        Self {
            combined_income,
            buckets,
            total_expenses,
            leftover,
            savings_rate: leftover.percent_of(combined_income),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str, income: i64, fixed: i64, subs: i64) -> PlannerProfile {
        PlannerProfile {
            name: name.to_string(),
            income: Money::from_cents(income),
            fixed_costs: Money::from_cents(fixed),
            subscriptions: Money::from_cents(subs),
            shared_rent: Money::from_cents(144000),
            shared_utilities: Money::from_cents(30000),
            household_size: 2,
            paychecks_per_month: 2,
        }
    }

    #[test]
    fn test_compute_buckets_and_leftover() {
        // Income $4788, half rent $720, half utilities $150, fixed $400, subs $80
        let plan = BudgetPlan::compute(&profile("Greg", 478800, 40000, 8000));

        assert_eq!(plan.total_expenses, Money::from_cents(135000));
        assert_eq!(plan.leftover, Money::from_cents(343800));

        assert_eq!(plan.buckets.len(), 4);
        assert_eq!(plan.buckets[0].label, "Rent (Shared)");
        assert_eq!(plan.buckets[0].amount, Money::from_cents(72000));
        assert!((plan.buckets[0].percent_of_income - 15.037).abs() < 0.01);
    }

    #[test]
    fn test_allocations_and_per_paycheck() {
        let plan = BudgetPlan::compute(&profile("Greg", 478800, 40000, 8000));

        // Leftover $3438.00, credit card 25% = $859.50, $429.75 per paycheck
        assert_eq!(plan.allocations[0].label, "Credit Card Payment");
        assert_eq!(plan.allocations[0].amount, Money::from_cents(85950));
        assert_eq!(plan.allocations[0].per_paycheck, Money::from_cents(42975));

        // Savings 40% = $1375.20
        assert_eq!(plan.allocations[1].amount, Money::from_cents(137520));

        let ratio_sum: f64 = ALLOCATION_RATIOS.iter().map(|&(_, r)| r).sum();
        assert!((ratio_sum - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_leftover_floors_at_zero() {
        let plan = BudgetPlan::compute(&profile("Broke", 100000, 500000, 0));
        assert_eq!(plan.leftover, Money::zero());
        for allocation in &plan.allocations {
            assert!(allocation.amount.is_zero());
        }
    }

    #[test]
    fn test_household_combine() {
        let greg = profile("Greg", 478800, 40000, 8000);
        let tyler = profile("Tyler", 478800, 30000, 10000);

        let household = HouseholdPlan::combine(&[greg, tyler]);

        assert_eq!(household.combined_income, Money::from_cents(957600));
        // Rent $1440 + utilities $300 + fixed $400 + subs $80 + fixed $300 + subs $100
        assert_eq!(household.total_expenses, Money::from_cents(262000));
        assert_eq!(household.leftover, Money::from_cents(695600));
        assert!((household.savings_rate - 72.64).abs() < 0.01);

        // Shared buckets counted once, personal buckets labelled per person
        assert_eq!(household.buckets[0].label, "Rent");
        assert_eq!(household.buckets[2].label, "Greg Fixed");
        assert_eq!(household.buckets[5].label, "Tyler Subscriptions");
    }

    #[test]
    fn test_household_combine_empty() {
        let household = HouseholdPlan::combine(&[]);
        assert_eq!(household.combined_income, Money::zero());
        assert_eq!(household.savings_rate, 0.0);
        assert!(household.buckets.is_empty());
    }
}
