//! Tax command - income tax and levy on a monthly gross

use clap::Args;
use leavepay::core::{TaxBreakdown, TaxSchedule};
use leavepay::utils::format_dollars;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[derive(Args, Debug)]
pub struct TaxCommand {
    /// Monthly gross income
    #[arg(short, long)]
    gross: Decimal,

    /// Output as JSON instead of formatted text
    #[arg(long)]
    json: bool,
}

impl TaxCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let schedule = TaxSchedule::default();
        let breakdown = schedule.monthly_breakdown(self.gross);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&breakdown)?);
        } else {
            print_breakdown(&breakdown, schedule.levy_rate());
        }
        Ok(())
    }
}

fn print_breakdown(breakdown: &TaxBreakdown, levy_rate: Decimal) {
    println!();
    println!("TAX BREAKDOWN (Estimate)");
    println!("  Gross: {}/month", format_dollars(breakdown.gross, 0));
    println!("  Income tax: {}/month", format_dollars(breakdown.income_tax, 0));
    println!(
        "  Levy ({}%): {}/month",
        (levy_rate * dec!(100)).normalize(),
        format_dollars(breakdown.levy, 0)
    );
    println!("  Total tax: {}/month", format_dollars(breakdown.total_tax, 0));
    println!("  Net: {}/month", format_dollars(breakdown.net, 0));
    println!();
}
