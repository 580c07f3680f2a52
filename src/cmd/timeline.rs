//! Timeline command - daily gross income across the leave horizon

use super::PlanArgs;
use clap::Args;
use leavepay::core::{DailyIncomeEntry, Timeline};
use leavepay::utils::{format_dollars, round_money, write_csv};
use serde::Serialize;
use std::io;
use tabled::{
    settings::{object::Columns, Alignment, Modify, Style},
    Table, Tabled,
};

#[derive(Args, Debug)]
pub struct TimelineCommand {
    #[command(flatten)]
    plan: PlanArgs,

    /// Output as CSV instead of formatted table
    #[arg(long)]
    csv: bool,
}

#[derive(Debug, Clone, Tabled, Serialize)]
struct TimelineRow {
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Day")]
    weekday: String,
    #[tabled(rename = "Gross")]
    amount: String,
}

impl From<&DailyIncomeEntry> for TimelineRow {
    fn from(entry: &DailyIncomeEntry) -> Self {
        TimelineRow {
            date: entry.date.format("%Y-%m-%d").to_string(),
            weekday: entry.date.format("%a").to_string(),
            amount: round_money(entry.amount, 2).to_string(),
        }
    }
}

impl TimelineCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let plan = self.plan.load()?;
        let timeline = plan.timeline()?;

        if self.csv {
            write_csv(timeline.entries().iter().map(TimelineRow::from), io::stdout())
        } else {
            self.print_table(&timeline);
            Ok(())
        }
    }

    fn print_table(&self, timeline: &Timeline) {
        let rows: Vec<TimelineRow> = timeline
            .entries()
            .iter()
            .map(|entry| TimelineRow {
                amount: format_dollars(entry.amount, 2),
                ..TimelineRow::from(entry)
            })
            .collect();

        let table = Table::new(rows)
            .with(Style::rounded())
            .with(Modify::new(Columns::new(2..)).with(Alignment::right()))
            .to_string();
        println!("{}", table);
        println!("Total: {}", format_dollars(timeline.total(), 2));
    }
}
