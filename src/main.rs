mod cmd;

use clap::{Parser, Subcommand};

/// Household income across a parental leave period
#[derive(Parser, Debug)]
#[command(name = "leavepay", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Household income for each phase of leave
    Breakdown(cmd::breakdown::BreakdownCommand),
    /// Daily income calendar across the leave period
    Calendar(cmd::calendar::CalendarCommand),
    /// Income tax and levy on a monthly gross
    Tax(cmd::tax::TaxCommand),
    /// Daily gross income as a table or CSV
    Timeline(cmd::timeline::TimelineCommand),
    /// Print the plan input format
    Schema(cmd::schema::SchemaCommand),
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Breakdown(breakdown) => breakdown.exec(),
        Command::Calendar(calendar) => calendar.exec(),
        Command::Tax(tax) => tax.exec(),
        Command::Timeline(timeline) => timeline.exec(),
        Command::Schema(schema) => schema.exec(),
    }
}
