pub mod breakdown;
pub mod calendar;
pub mod schema;
pub mod tax;
pub mod timeline;

use clap::Args;
use leavepay::core::{
    DisplayOptions, Frequency, LeavePlan, PayRate, PhaseSummary, PlanInput, TaxBreakdown,
    TaxSchedule,
};
use leavepay::utils::format_dollars;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::path::{Path, PathBuf};

/// Household and leave inputs shared by every projection command
#[derive(Args, Debug, Clone)]
pub struct PlanArgs {
    /// JSON plan file (or "-" for stdin); flags override its values
    #[arg(short, long)]
    plan: Option<PathBuf>,

    /// Monthly gross salary of the partner who keeps working
    #[arg(long)]
    non_primary: Option<Decimal>,

    /// Monthly gross salary of the primary carer
    #[arg(long)]
    primary: Option<Decimal>,

    /// Weeks of employer paid leave after government pay
    #[arg(long, allow_negative_numbers = true)]
    paid_weeks: Option<Decimal>,

    /// Employer paid leave at full pay
    #[arg(long, conflicts_with = "half_pay")]
    full_pay: bool,

    /// Employer paid leave at half pay
    #[arg(long)]
    half_pay: bool,

    /// First day of leave (YYYY-MM-DD), default first of next month
    #[arg(long)]
    start: Option<NaiveDate>,

    /// Override the number of government pay weeks
    #[arg(long, allow_negative_numbers = true)]
    gov_weeks: Option<i64>,

    /// Override the government gross weekly rate
    #[arg(long)]
    gov_rate: Option<Decimal>,
}

impl PlanArgs {
    /// Merge the plan file (if any) with flags and resolve defaults
    pub fn load(&self) -> anyhow::Result<LeavePlan> {
        let mut input = match &self.plan {
            Some(path) => read_plan_input(path)?,
            None => PlanInput::default(),
        };

        if let Some(amount) = self.non_primary {
            input.non_primary_monthly_gross = amount;
        }
        if let Some(amount) = self.primary {
            input.primary_monthly_gross = amount;
        }
        if let Some(weeks) = self.paid_weeks {
            input.employer_paid_weeks = weeks;
        }
        if let Some(rate) = PayRate::from_choice(self.full_pay, self.half_pay) {
            input.pay_rate = Some(rate);
        }
        if self.start.is_some() {
            input.leave_start = self.start;
        }
        if self.gov_weeks.is_some() {
            input.government_weeks = self.gov_weeks;
        }
        if self.gov_rate.is_some() {
            input.government_weekly_rate = self.gov_rate;
        }

        let plan = input.into_plan(today());
        log::debug!("Resolved plan: {:?}", plan);
        Ok(plan)
    }
}

/// Display choices shared by the breakdown commands
#[derive(Args, Debug, Clone, Copy)]
pub struct DisplayArgs {
    /// Show amounts after income tax and levy
    #[arg(long)]
    after_tax: bool,

    /// Period amounts are shown in: weekly, fortnightly or monthly (anything else shows monthly)
    #[arg(short, long, default_value_t = Frequency::Monthly)]
    frequency: Frequency,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

impl DisplayArgs {
    pub fn options(&self) -> DisplayOptions {
        DisplayOptions {
            show_after_tax: self.after_tax,
            frequency: self.frequency,
        }
    }
}

/// Read a plan (JSON) from a file or stdin with "-"
pub fn read_plan_input(path: &Path) -> anyhow::Result<PlanInput> {
    if path.as_os_str() == "-" {
        read_from_stdin()
    } else {
        let file = File::open(path)?;
        PlanInput::read_json(BufReader::new(file))
    }
}

fn read_from_stdin() -> anyhow::Result<PlanInput> {
    let mut buffer = Vec::new();
    io::stdin().lock().read_to_end(&mut buffer)?;

    if buffer.is_empty() {
        anyhow::bail!("No input received. Provide a plan file or pipe JSON to stdin.");
    }

    PlanInput::read_json(io::Cursor::new(buffer))
}

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Phase summaries with their tax info panels, for JSON output
#[derive(Debug, Serialize)]
struct PhaseOutput<'a> {
    basis: &'static str,
    frequency: String,
    phases: Vec<PhaseView<'a>>,
}

#[derive(Debug, Serialize)]
struct PhaseView<'a> {
    #[serde(flatten)]
    summary: &'a PhaseSummary,
    non_primary_tax: TaxBreakdown,
    primary_tax: TaxBreakdown,
}

/// Print phase summaries as cards, or as JSON
pub fn print_phases(
    phases: &[PhaseSummary],
    schedule: &TaxSchedule,
    options: DisplayOptions,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        let output = PhaseOutput {
            basis: options.label(),
            frequency: options.frequency.to_string(),
            phases: phases
                .iter()
                .map(|summary| PhaseView {
                    summary,
                    non_primary_tax: schedule.monthly_breakdown(summary.non_primary_gross),
                    primary_tax: schedule.monthly_breakdown(summary.primary_gross),
                })
                .collect(),
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let label = options.label();
    let suffix = options.frequency.suffix();
    for phase in phases {
        println!();
        println!("{}", phase.title);
        println!("  Non-Primary ({}): {}{}", label, format_dollars(phase.non_primary, 0), suffix);
        println!("  Primary ({}): {}{}", label, format_dollars(phase.primary, 0), suffix);
        println!("  Total: {}{}", format_dollars(phase.total, 0), suffix);
        if !phase.note.is_empty() {
            println!("  {}", phase.note);
        }
    }
    println!();
    Ok(())
}
