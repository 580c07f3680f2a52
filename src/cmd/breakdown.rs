//! Breakdown command - household income per phase of leave

use super::{print_phases, DisplayArgs, PlanArgs};
use clap::Args;
use leavepay::core::{
    render_view, FlagStore, JsonFileFlagStore, MemoryFlagStore, ReturnToWorkDays, TaxSchedule,
    View,
};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct BreakdownCommand {
    #[command(flatten)]
    plan: PlanArgs,

    #[command(flatten)]
    display: DisplayArgs,

    /// Show the return-to-work projection at this many days per week (2-4)
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(2..=4))]
    return_days: Option<u32>,

    /// JSON file holding feature flags, e.g. {"unlocked": true}
    #[arg(long)]
    flags: Option<PathBuf>,
}

impl BreakdownCommand {
    pub fn exec(&self) -> anyhow::Result<()> {
        let plan = self.plan.load()?;
        let schedule = TaxSchedule::default();
        let options = self.display.options();
        let flags: Box<dyn FlagStore> = match &self.flags {
            Some(path) => Box::new(JsonFileFlagStore::load(path)?),
            None => Box::new(MemoryFlagStore::default()),
        };

        let view = match self.return_days.and_then(ReturnToWorkDays::new) {
            Some(days) => View::ReturnToWork(days),
            None => View::PhaseBreakdown,
        };

        let phases = render_view(view, &plan, &schedule, options, flags.as_ref())?;
        print_phases(&phases, &schedule, options, self.display.json)
    }
}
