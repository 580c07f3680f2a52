//! User-facing projections: the phase breakdown, the return-to-work view and
//! the full-horizon calendar document.

use super::calendar::{build_month_grids, MonthGrid, PayDay};
use super::error::{PlanError, ViewError};
use super::frequency::Frequency;
use super::gate::{is_feature_unlocked, FlagStore};
use super::plan::LeavePlan;
use super::tax::TaxSchedule;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// How amounts are presented
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DisplayOptions {
    pub show_after_tax: bool,
    pub frequency: Frequency,
}

impl DisplayOptions {
    /// Net (when after-tax) then converted to the display frequency.
    /// Tax always applies to the monthly gross.
    pub fn display(&self, schedule: &TaxSchedule, monthly_gross: Decimal) -> Decimal {
        let monthly = if self.show_after_tax {
            schedule.net_monthly(monthly_gross)
        } else {
            monthly_gross
        };
        self.frequency.to_display(monthly)
    }

    pub fn label(&self) -> &'static str {
        if self.show_after_tax {
            "Net"
        } else {
            "Gross"
        }
    }
}

/// Household income during one phase of leave
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PhaseSummary {
    pub title: String,
    pub non_primary: Decimal,
    pub primary: Decimal,
    pub total: Decimal,
    pub note: String,
    /// Monthly gross behind `non_primary`, for the tax info panel
    pub non_primary_gross: Decimal,
    /// Monthly gross behind `primary`, for the tax info panel
    pub primary_gross: Decimal,
}

impl PhaseSummary {
    fn new(
        title: String,
        note: &str,
        non_primary_gross: Decimal,
        primary_gross: Decimal,
        schedule: &TaxSchedule,
        options: DisplayOptions,
    ) -> Self {
        let non_primary = options.display(schedule, non_primary_gross);
        let primary = options.display(schedule, primary_gross);
        PhaseSummary {
            title,
            non_primary,
            primary,
            total: non_primary + primary,
            note: note.to_string(),
            non_primary_gross,
            primary_gross,
        }
    }
}

/// Government pay then employer paid leave, same-period comparison
pub fn build_phase_breakdown(
    plan: &LeavePlan,
    schedule: &TaxSchedule,
    options: DisplayOptions,
) -> Result<Vec<PhaseSummary>, PlanError> {
    plan.validate()?;

    let government = PhaseSummary::new(
        format!("Government Pay ({} weeks)", plan.government.capped_weeks()),
        &format!(
            "Government payment rate: ${:.2} per week (gross)",
            plan.government.weekly_rate
        ),
        plan.non_primary_gross(),
        plan.government.monthly_gross(),
        schedule,
        options,
    );
    let employer = PhaseSummary::new(
        format!("Paid Leave ({} weeks)", plan.employer_weeks().normalize()),
        "Non-primary caretaker remains at work; salary is unchanged.",
        plan.non_primary_gross(),
        plan.employer_leave_gross(),
        schedule,
        options,
    );

    Ok(vec![government, employer])
}

/// Days per week the primary carer works after returning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ReturnToWorkDays(u32);

impl ReturnToWorkDays {
    pub fn new(days: u32) -> Option<Self> {
        (2..=4).contains(&days).then_some(ReturnToWorkDays(days))
    }

    pub fn days(self) -> u32 {
        self.0
    }

    /// Part-time share of a five-day week
    pub fn fraction(self) -> Decimal {
        Decimal::from(self.0) / dec!(5)
    }
}

/// Household income once the primary carer returns part time
pub fn build_return_to_work(
    plan: &LeavePlan,
    days: ReturnToWorkDays,
    schedule: &TaxSchedule,
    options: DisplayOptions,
) -> Result<PhaseSummary, PlanError> {
    plan.validate_income()?;

    Ok(PhaseSummary::new(
        format!("Return to Work ({} Days/Week)", days.days()),
        "(Non-primary caretaker continues full salary.)",
        plan.non_primary_gross(),
        plan.primary_gross() * days.fraction(),
        schedule,
        options,
    ))
}

/// Which projection to show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    PhaseBreakdown,
    ReturnToWork(ReturnToWorkDays),
}

impl View {
    /// Four days a week is only available once unlocked
    pub fn requires_unlock(&self) -> bool {
        matches!(self, View::ReturnToWork(days) if days.days() == 4)
    }
}

/// Recompute `view` from the current inputs
pub fn render_view(
    view: View,
    plan: &LeavePlan,
    schedule: &TaxSchedule,
    options: DisplayOptions,
    flags: &dyn FlagStore,
) -> Result<Vec<PhaseSummary>, ViewError> {
    if let View::ReturnToWork(days) = view {
        if view.requires_unlock() && !is_feature_unlocked(flags) {
            log::info!("Return to work at {} days is locked", days.days());
            return Err(ViewError::Locked(days.days()));
        }
    }

    let phases = match view {
        View::PhaseBreakdown => build_phase_breakdown(plan, schedule, options)?,
        View::ReturnToWork(days) => vec![build_return_to_work(plan, days, schedule, options)?],
    };
    Ok(phases)
}

/// Everything a renderer needs to draw the income calendar
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CalendarDocument {
    /// Gross across the whole horizon, whether or not every month shows it
    pub total_gross: Decimal,
    pub period_start: NaiveDate,
    /// Last day of the horizon, inclusive
    pub period_end: NaiveDate,
    pub pay_day: Option<PayDay>,
    pub collapse_to_pay_day: bool,
    pub month_grids: Vec<MonthGrid>,
}

/// Calendar of daily gross income across the leave horizon
pub fn build_calendar_document(
    plan: &LeavePlan,
    pay_day: Option<PayDay>,
    collapse_to_pay_day: bool,
) -> Result<CalendarDocument, PlanError> {
    let timeline = plan.timeline()?;
    let month_grids = build_month_grids(&timeline, pay_day, collapse_to_pay_day);

    let total_gross = timeline.total();
    log::info!(
        "Calendar covers {} days across {} months, total gross {}",
        timeline.len(),
        month_grids.len(),
        total_gross.round_dp(2)
    );

    Ok(CalendarDocument {
        total_gross,
        period_start: timeline.first_date().unwrap_or(plan.leave_start),
        period_end: timeline.last_date().unwrap_or(plan.leave_start),
        pay_day,
        collapse_to_pay_day,
        month_grids,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::gate::MemoryFlagStore;
    use crate::core::plan::{GovernmentBenefit, PayRate};

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn plan() -> LeavePlan {
        LeavePlan {
            non_primary_monthly_gross: dec!(5000),
            primary_monthly_gross: dec!(6000),
            employer_paid_weeks: dec!(10),
            pay_rate: Some(PayRate::Full),
            government: GovernmentBenefit::default(),
            leave_start: date("2026-01-01"),
        }
    }

    fn gross_monthly() -> DisplayOptions {
        DisplayOptions::default()
    }

    #[test]
    fn phase_breakdown_gross_monthly() {
        let phases = build_phase_breakdown(&plan(), &TaxSchedule::default(), gross_monthly()).unwrap();
        assert_eq!(phases.len(), 2);

        assert_eq!(phases[0].title, "Government Pay (21 weeks)");
        assert_eq!(phases[0].non_primary, dec!(5000));
        assert_eq!(phases[0].primary.round_dp(2), dec!(4108.43));
        assert_eq!(phases[0].total, phases[0].non_primary + phases[0].primary);
        assert_eq!(phases[0].note, "Government payment rate: $948.10 per week (gross)");

        assert_eq!(phases[1].title, "Paid Leave (10 weeks)");
        assert_eq!(phases[1].primary, dec!(6000));
        assert_eq!(phases[1].total, dec!(11000));
    }

    #[test]
    fn after_tax_applies_before_frequency() {
        let plan = LeavePlan {
            non_primary_monthly_gross: dec!(10000),
            ..plan()
        };
        let options = DisplayOptions {
            show_after_tax: true,
            frequency: Frequency::Weekly,
        };
        let schedule = TaxSchedule::default();
        let phases = build_phase_breakdown(&plan, &schedule, options).unwrap();

        let expected = schedule.net_monthly(dec!(10000)) * dec!(12) / dec!(52);
        assert_eq!(phases[0].non_primary, expected);
        assert_eq!(phases[0].non_primary.round_dp(2), dec!(1746.38));
        // Raw gross stays monthly for the info panel
        assert_eq!(phases[0].non_primary_gross, dec!(10000));
    }

    #[test]
    fn half_pay_leave_and_part_weeks_title() {
        let plan = LeavePlan {
            employer_paid_weeks: dec!(12.50),
            pay_rate: Some(PayRate::Half),
            ..plan()
        };
        let phases = build_phase_breakdown(&plan, &TaxSchedule::default(), gross_monthly()).unwrap();
        assert_eq!(phases[1].title, "Paid Leave (12.5 weeks)");
        assert_eq!(phases[1].primary, dec!(3000));
    }

    #[test]
    fn breakdown_rejects_invalid_plan() {
        let plan = LeavePlan {
            pay_rate: None,
            ..plan()
        };
        assert_eq!(
            build_phase_breakdown(&plan, &TaxSchedule::default(), gross_monthly()),
            Err(PlanError::NoPayRate)
        );
    }

    #[test]
    fn return_to_work_pro_rata() {
        let days = ReturnToWorkDays::new(3).unwrap();
        let summary =
            build_return_to_work(&plan(), days, &TaxSchedule::default(), gross_monthly()).unwrap();
        assert_eq!(summary.title, "Return to Work (3 Days/Week)");
        assert_eq!(summary.primary, dec!(3600));
        assert_eq!(summary.non_primary, dec!(5000));
        assert_eq!(summary.total, dec!(8600));
    }

    #[test]
    fn return_to_work_days_range() {
        assert_eq!(ReturnToWorkDays::new(1), None);
        assert_eq!(ReturnToWorkDays::new(5), None);
        assert!(ReturnToWorkDays::new(2).is_some());
        assert!(ReturnToWorkDays::new(4).is_some());
    }

    #[test]
    fn return_to_work_needs_no_pay_rate() {
        let plan = LeavePlan {
            pay_rate: None,
            ..plan()
        };
        let days = ReturnToWorkDays::new(2).unwrap();
        assert!(build_return_to_work(&plan, days, &TaxSchedule::default(), gross_monthly()).is_ok());
    }

    #[test]
    fn four_day_view_is_gated() {
        let view = View::ReturnToWork(ReturnToWorkDays::new(4).unwrap());
        let schedule = TaxSchedule::default();

        let locked = render_view(view, &plan(), &schedule, gross_monthly(), &MemoryFlagStore::default());
        assert_eq!(locked, Err(ViewError::Locked(4)));

        let unlocked =
            render_view(view, &plan(), &schedule, gross_monthly(), &MemoryFlagStore::unlocked()).unwrap();
        assert_eq!(unlocked[0].primary, dec!(4800));
    }

    #[test]
    fn ungated_views_render_without_flags() {
        let schedule = TaxSchedule::default();
        let flags = MemoryFlagStore::default();
        let breakdown = render_view(View::PhaseBreakdown, &plan(), &schedule, gross_monthly(), &flags).unwrap();
        assert_eq!(breakdown.len(), 2);

        let three = View::ReturnToWork(ReturnToWorkDays::new(3).unwrap());
        assert!(!three.requires_unlock());
        assert_eq!(render_view(three, &plan(), &schedule, gross_monthly(), &flags).unwrap().len(), 1);
    }

    #[test]
    fn view_errors_carry_plan_errors() {
        let plan = LeavePlan {
            non_primary_monthly_gross: dec!(0),
            primary_monthly_gross: dec!(0),
            ..plan()
        };
        let result = render_view(
            View::PhaseBreakdown,
            &plan,
            &TaxSchedule::default(),
            gross_monthly(),
            &MemoryFlagStore::default(),
        );
        assert_eq!(result, Err(ViewError::Plan(PlanError::NoIncome)));
    }

    #[test]
    fn calendar_document_spans_horizon() {
        let document = build_calendar_document(&plan(), PayDay::new(14), false).unwrap();
        assert_eq!(document.period_start, date("2026-01-01"));
        assert_eq!(document.period_end, date("2026-08-05"));
        assert_eq!(document.month_grids.len(), 8);
        assert_eq!(document.month_grids[0].title(), "January 2026");
        assert_eq!(document.month_grids[7].title(), "August 2026");

        // 217 days of salary, 147 of government pay, 70 of employer leave
        let expected = dec!(5000) * dec!(12) / dec!(52) / dec!(7) * dec!(217)
            + dec!(948.10) / dec!(7) * dec!(147)
            + dec!(6000) * dec!(12) / dec!(52) / dec!(7) * dec!(70);
        assert_eq!(document.total_gross.round_dp(2), expected.round_dp(2));
    }

    #[test]
    fn collapsed_calendar_keeps_total() {
        let document = build_calendar_document(&plan(), PayDay::new(14), true).unwrap();
        let shown: Decimal = document.month_grids.iter().map(MonthGrid::displayed_total).sum();
        assert_eq!(shown.round_dp(2), document.total_gross.round_dp(2));
        assert!(document.collapse_to_pay_day);
    }

    #[test]
    fn calendar_document_rejects_invalid_plan() {
        let plan = LeavePlan {
            non_primary_monthly_gross: dec!(0),
            primary_monthly_gross: dec!(0),
            ..plan()
        };
        assert_eq!(build_calendar_document(&plan, None, false), Err(PlanError::NoIncome));
    }
}
