//! Calendar command - daily gross income laid out month by month

use super::PlanArgs;
use clap::{Args, ValueEnum};
use leavepay::core::{build_calendar_document, PayDay};
use leavepay::render::{CalendarRenderer, HtmlRenderer, TextRenderer};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct CalendarCommand {
    #[command(flatten)]
    plan: PlanArgs,

    /// Day of the month salary is paid (1-31)
    #[arg(long)]
    pay_day: Option<u32>,

    /// Show each month's total on the pay day instead of daily amounts
    #[arg(long)]
    collapse: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = CalendarFormat::Text)]
    format: CalendarFormat,

    /// Output file path (html default: opens in browser)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum CalendarFormat {
    /// Month tables in the terminal
    #[default]
    Text,
    /// Self-contained HTML page
    Html,
    /// Month grids as JSON
    Json,
}

impl CalendarCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let plan = self.plan.load()?;
        let pay_day = self.pay_day.and_then(|day| {
            let pay_day = PayDay::new(day);
            if pay_day.is_none() {
                log::warn!("Ignoring pay day {}, expected 1-31", day);
            }
            pay_day
        });

        let document = build_calendar_document(&plan, pay_day, self.collapse)?;

        let rendered = match self.format {
            CalendarFormat::Text => TextRenderer.render(&document),
            CalendarFormat::Html => HtmlRenderer::default().render(&document),
            CalendarFormat::Json => serde_json::to_string_pretty(&document)?,
        };

        match (&self.output, self.format) {
            (Some(output_path), _) => {
                std::fs::write(output_path, &rendered)?;
                println!("Calendar written to: {}", output_path.display());
            }
            (None, CalendarFormat::Html) => {
                let temp_path = std::env::temp_dir().join("leavepay-calendar.html");
                std::fs::write(&temp_path, &rendered)?;
                opener::open(&temp_path)?;
                println!("Opened calendar in browser: {}", temp_path.display());
            }
            (None, _) => println!("{}", rendered),
        }

        Ok(())
    }
}
