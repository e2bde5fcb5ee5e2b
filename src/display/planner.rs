//! Budget planner display formatting
//!
//! Renders a person's monthly budget plan and the combined household view
//! as terminal tables.

use tabled::{Table, Tabled};

use crate::reports::{BudgetPlan, HouseholdPlan};

#[derive(Tabled)]
struct BucketRow {
    #[tabled(rename = "Category")]
    label: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "% of Income")]
    percent: String,
}

#[derive(Tabled)]
struct AllocationRow {
    #[tabled(rename = "Allocation")]
    label: String,
    #[tabled(rename = "Monthly")]
    amount: String,
    #[tabled(rename = "Per Paycheck")]
    per_paycheck: String,
}

/// Format one person's monthly budget plan
pub fn format_budget_plan(plan: &BudgetPlan) -> String {
    let mut output = String::new();

    output.push_str(&format!("{}'s Monthly Budget\n", plan.name));
    output.push_str(&"=".repeat(60));
    output.push('\n');
    output.push_str(&format!("Income:         {}\n", plan.income));
    output.push_str(&format!("Total Expenses: {}\n", plan.total_expenses));
    output.push_str(&format!("Net Leftover:   {}\n\n", plan.leftover));

    output.push_str("Breakdown - % of Income\n");
    let mut bucket_rows: Vec<BucketRow> = plan
        .buckets
        .iter()
        .map(|bucket| BucketRow {
            label: bucket.label.clone(),
            amount: bucket.amount.to_string(),
            percent: format!("{:.2}%", bucket.percent_of_income),
        })
        .collect();
    bucket_rows.push(BucketRow {
        label: "Total Expenses".to_string(),
        amount: plan.total_expenses.to_string(),
        percent: format!("{:.2}%", plan.total_expenses.percent_of(plan.income)),
    });
    output.push_str(&Table::new(bucket_rows).to_string());
    output.push_str("\n\n");

    output.push_str("Allocations (from leftover)\n");
    let allocation_rows: Vec<AllocationRow> = plan
        .allocations
        .iter()
        .map(|allocation| AllocationRow {
            label: format!("{} ({:.0}%)", allocation.label, allocation.ratio * 100.0),
            amount: allocation.amount.to_string(),
            per_paycheck: allocation.per_paycheck.to_string(),
        })
        .collect();
    output.push_str(&Table::new(allocation_rows).to_string());
    output.push('\n');

    output
}

/// Format the combined household view
pub fn format_household_plan(household: &HouseholdPlan) -> String {
    let mut output = String::new();

    output.push_str("Combined Household Budget\n");
    output.push_str(&"=".repeat(60));
    output.push('\n');
    output.push_str(&format!("Combined Income: {}\n", household.combined_income));
    output.push_str(&format!("Total Expenses:  {}\n", household.total_expenses));
    output.push_str(&format!("Net Leftover:    {}\n", household.leftover));
    output.push_str(&format!("Savings Rate:    {:.1}%\n\n", household.savings_rate));

    let bucket_rows: Vec<BucketRow> = household
        .buckets
        .iter()
        .map(|bucket| BucketRow {
            label: bucket.label.clone(),
            amount: bucket.amount.to_string(),
            percent: format!("{:.2}%", bucket.percent_of_income),
        })
        .collect();
    output.push_str(&Table::new(bucket_rows).to_string());
    output.push('\n');

    output
}
