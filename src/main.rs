use anyhow::Result;
use chrono::Local;
use clap::{Parser, Subcommand};

use tally_cli::cli::{
    handle_add, handle_archive, handle_clear, handle_dashboard, handle_list, handle_plan,
    PartnerArgs, PlanArgs,
};
use tally_cli::config::{paths::TallyPaths, settings::Settings};
use tally_cli::storage::CsvStore;

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Terminal expense ledger dashboard and household budget planner",
    long_about = "Tally keeps a flat CSV ledger of dated, categorised expenses \
                  and renders an aggregate dashboard: total spend, spend by \
                  category, and spend over time. It also computes monthly \
                  household budget plans."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new expense record
    Add {
        /// Amount (non-negative, e.g. "10.50")
        #[arg(allow_hyphen_values = true)]
        amount: String,
        /// Category (Food, Transport, Shopping, Bills, Entertainment, Other)
        #[arg(short, long)]
        category: String,
        /// Expense date (YYYY-MM-DD), defaults to today
        #[arg(short, long)]
        date: Option<String>,
        /// Optional notes
        #[arg(short, long)]
        notes: Option<String>,
    },

    /// List ledger records, newest first
    List {
        /// Number of records to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show the aggregate expense dashboard
    #[command(alias = "report")]
    Dashboard,

    /// Archive the ledger to a month-stamped file and start fresh
    Archive,

    /// Clear all expense records
    Clear,

    /// Compute a monthly budget plan
    Plan {
        /// Person's name
        #[arg(long, default_value = "My")]
        name: String,
        /// Monthly income
        #[arg(long)]
        income: String,
        /// Personal fixed costs
        #[arg(long, default_value = "0")]
        fixed: String,
        /// Subscription costs
        #[arg(long, default_value = "0")]
        subscriptions: String,
        /// Full household rent (shared)
        #[arg(long, default_value = "0")]
        rent: String,
        /// Full household utilities (shared)
        #[arg(long, default_value = "0")]
        utilities: String,
        /// Partner's name; enables the combined household view
        #[arg(long, requires = "partner_income")]
        partner_name: Option<String>,
        /// Partner's monthly income
        #[arg(long, requires = "partner_name")]
        partner_income: Option<String>,
        /// Partner's personal fixed costs
        #[arg(long, default_value = "0")]
        partner_fixed: String,
        /// Partner's subscription costs
        #[arg(long, default_value = "0")]
        partner_subscriptions: String,
    },

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = TallyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    // Initialize the ledger store with an explicit path
    paths.ensure_directories()?;
    let store = CsvStore::new(paths.ledger_file());

    match cli.command {
        Some(Commands::Add {
            amount,
            category,
            date,
            notes,
        }) => {
            handle_add(&store, date, category, amount, notes, Local::now().date_naive())?;
        }
        Some(Commands::List { limit }) => {
            handle_list(&store, limit)?;
        }
        Some(Commands::Dashboard) => {
            handle_dashboard(&store)?;
        }
        Some(Commands::Archive) => {
            handle_archive(&store)?;
        }
        Some(Commands::Clear) => {
            handle_clear(&store)?;
        }
        Some(Commands::Plan {
            name,
            income,
            fixed,
            subscriptions,
            rent,
            utilities,
            partner_name,
            partner_income,
            partner_fixed,
            partner_subscriptions,
        }) => {
            let partner = match (partner_name, partner_income) {
                (Some(partner_name), Some(partner_income)) => Some(PartnerArgs {
                    name: partner_name,
                    income: partner_income,
                    fixed: partner_fixed,
                    subscriptions: partner_subscriptions,
                }),
                _ => None,
            };
            handle_plan(
                &settings,
                PlanArgs {
                    name,
                    income,
                    fixed,
                    subscriptions,
                    rent,
                    utilities,
                    partner,
                },
            )?;
        }
        Some(Commands::Config) => {
            println!("Tally Configuration");
            println!("===================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Ledger file:    {}", paths.ledger_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Date format:         {}", settings.date_format);
            println!("  Paychecks per month: {}", settings.paychecks_per_month);
            println!("  Household size:      {}", settings.household_size);
        }
        None => {
            println!("Tally - Terminal expense ledger dashboard");
            println!();
            println!("Run 'tally --help' for usage information.");
            println!("Run 'tally dashboard' to see your expense dashboard.");
        }
    }

    Ok(())
}
