//! Budget planner CLI command
//!
//! Builds a planner profile from command-line amounts plus household
//! settings and renders the computed plan.

use crate::config::Settings;
use crate::display::{format_budget_plan, format_household_plan};
use crate::error::{TallyError, TallyResult};
use crate::models::Money;
use crate::reports::{BudgetPlan, HouseholdPlan, PlannerProfile};

/// Arguments for the plan command, as raw textual amounts
pub struct PlanArgs {
    pub name: String,
    pub income: String,
    pub fixed: String,
    pub subscriptions: String,
    pub rent: String,
    pub utilities: String,
    /// Second earner; when set, the combined household view is rendered too
    pub partner: Option<PartnerArgs>,
}

/// The partner's share of the plan inputs (shared costs come from PlanArgs)
pub struct PartnerArgs {
    pub name: String,
    pub income: String,
    pub fixed: String,
    pub subscriptions: String,
}

/// Compute and render a monthly budget plan
///
/// With partner arguments, renders each person's plan followed by the
/// combined household summary.
pub fn handle_plan(settings: &Settings, args: PlanArgs) -> TallyResult<()> {
    let shared_rent = parse_amount("rent", &args.rent)?;
    let shared_utilities = parse_amount("utilities", &args.utilities)?;

    let profile = PlannerProfile {
        name: args.name,
        income: parse_amount("income", &args.income)?,
        fixed_costs: parse_amount("fixed", &args.fixed)?,
        subscriptions: parse_amount("subscriptions", &args.subscriptions)?,
        shared_rent,
        shared_utilities,
        household_size: settings.household_size,
        paychecks_per_month: settings.paychecks_per_month,
    };

    print!("{}", format_budget_plan(&BudgetPlan::compute(&profile)));

    if let Some(partner) = args.partner {
        let partner_profile = PlannerProfile {
            name: partner.name,
            income: parse_amount("partner-income", &partner.income)?,
            fixed_costs: parse_amount("partner-fixed", &partner.fixed)?,
            subscriptions: parse_amount("partner-subscriptions", &partner.subscriptions)?,
            shared_rent,
            shared_utilities,
            household_size: settings.household_size,
            paychecks_per_month: settings.paychecks_per_month,
        };

        println!();
        print!("{}", format_budget_plan(&BudgetPlan::compute(&partner_profile)));

        let household = HouseholdPlan::combine(&[profile, partner_profile]);
        println!();
        print!("{}", format_household_plan(&household));
    }

    Ok(())
}

/// Parse a non-negative planner amount, naming the offending field on failure
fn parse_amount(field: &'static str, value: &str) -> TallyResult<Money> {
    let amount = Money::parse(value)
        .map_err(|_| TallyError::validation(field, format!("'{}' is not a valid amount", value)))?;
    if amount.is_negative() {
        return Err(TallyError::validation(
            field,
            format!("must not be negative (got {})", amount),
        ));
    }
    Ok(amount)
}
