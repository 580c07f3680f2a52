//! Leave plan configuration and the income streams it produces.

use super::error::PlanError;
use super::frequency::{Frequency, DAYS_PER_WEEK};
use super::stream::{IncomeStream, StreamId};
use super::timeline::{build_timeline, Timeline};
use chrono::{Datelike, NaiveDate};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Weeks of government paid parental leave
pub const GOVERNMENT_WEEKS: u32 = 21;

/// Government paid parental leave gross rate per week
pub const GOVERNMENT_WEEKLY_RATE: Decimal = dec!(948.10);

/// Upper bound on each leave period; longer values clamp to it
pub const MAX_LEAVE_WEEKS: u32 = 520;

/// Largest salary or benefit rate accepted, per pay period
pub const MAX_GROSS_AMOUNT: Decimal = dec!(1_000_000_000);

/// Employer paid leave rate as a share of the primary carer's salary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum PayRate {
    Full,
    Half,
}

impl PayRate {
    pub fn fraction(self) -> Decimal {
        match self {
            PayRate::Full => Decimal::ONE,
            PayRate::Half => dec!(0.5),
        }
    }

    /// Exclusive full/half choice; neither or both chosen means no pay rate
    pub fn from_choice(full: bool, half: bool) -> Option<PayRate> {
        match (full, half) {
            (true, false) => Some(PayRate::Full),
            (false, true) => Some(PayRate::Half),
            _ => None,
        }
    }
}

/// Fixed-length government benefit paid from the first day of leave
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct GovernmentBenefit {
    pub weeks: u32,
    #[schemars(with = "f64")]
    pub weekly_rate: Decimal,
}

impl Default for GovernmentBenefit {
    fn default() -> Self {
        GovernmentBenefit {
            weeks: GOVERNMENT_WEEKS,
            weekly_rate: GOVERNMENT_WEEKLY_RATE,
        }
    }
}

impl GovernmentBenefit {
    pub fn monthly_gross(&self) -> Decimal {
        Frequency::Weekly.to_monthly(self.weekly_rate)
    }

    /// Benefit weeks, capped at `MAX_LEAVE_WEEKS`
    pub fn capped_weeks(&self) -> u32 {
        self.weeks.min(MAX_LEAVE_WEEKS)
    }

    pub fn days(&self) -> u32 {
        self.capped_weeks() * 7
    }
}

/// Clamp a signed week count into `0..=MAX_LEAVE_WEEKS`
pub fn clamp_weeks(weeks: i64) -> u32 {
    u32::try_from(weeks.clamp(0, i64::from(MAX_LEAVE_WEEKS))).unwrap_or(0)
}

/// Everything needed to project household income across a leave period
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LeavePlan {
    /// Monthly gross of the partner who keeps working
    pub non_primary_monthly_gross: Decimal,
    /// Monthly gross of the primary carer before leave
    pub primary_monthly_gross: Decimal,
    pub employer_paid_weeks: Decimal,
    pub pay_rate: Option<PayRate>,
    pub government: GovernmentBenefit,
    pub leave_start: NaiveDate,
}

impl LeavePlan {
    pub fn non_primary_gross(&self) -> Decimal {
        self.non_primary_monthly_gross.max(Decimal::ZERO)
    }

    pub fn primary_gross(&self) -> Decimal {
        self.primary_monthly_gross.max(Decimal::ZERO)
    }

    /// Employer paid weeks, clamped into `0..=MAX_LEAVE_WEEKS`
    pub fn employer_weeks(&self) -> Decimal {
        self.employer_paid_weeks
            .clamp(Decimal::ZERO, Decimal::from(MAX_LEAVE_WEEKS))
    }

    pub fn total_weeks(&self) -> Decimal {
        Decimal::from(self.government.capped_weeks()) + self.employer_weeks()
    }

    /// Employer paid leave in whole days; a part day counts as a full day
    pub fn employer_days(&self) -> u32 {
        (self.employer_weeks() * DAYS_PER_WEEK)
            .ceil()
            .to_u32()
            .unwrap_or(MAX_LEAVE_WEEKS * 7)
    }

    /// Length of the leave horizon in days
    pub fn horizon_days(&self) -> u32 {
        self.government.days().saturating_add(self.employer_days())
    }

    /// Monthly gross paid by the employer during paid leave
    pub fn employer_leave_gross(&self) -> Decimal {
        self.pay_rate
            .map_or(Decimal::ZERO, |rate| self.primary_gross() * rate.fraction())
    }

    /// Check the plan has some income to project
    pub fn validate_income(&self) -> Result<(), PlanError> {
        let amounts = [
            self.non_primary_monthly_gross,
            self.primary_monthly_gross,
            self.government.weekly_rate,
        ];
        if amounts.iter().any(|amount| *amount > MAX_GROSS_AMOUNT) {
            return Err(PlanError::IncomeOutOfRange);
        }
        if self.non_primary_gross().is_zero() && self.primary_gross().is_zero() {
            return Err(PlanError::NoIncome);
        }
        Ok(())
    }

    /// Check the plan can produce a leave projection
    pub fn validate(&self) -> Result<(), PlanError> {
        self.validate_income()?;
        if self.pay_rate.is_none() {
            return Err(PlanError::NoPayRate);
        }
        if self.total_weeks() <= Decimal::ZERO {
            return Err(PlanError::NoLeaveWeeks);
        }
        Ok(())
    }

    /// Income streams over the leave horizon.
    ///
    /// The non-primary salary runs for the whole horizon, the government
    /// benefit from day 0, and employer paid leave from the day the government
    /// benefit ends.
    pub fn streams(&self) -> Result<Vec<IncomeStream>, PlanError> {
        self.validate()?;

        let horizon = self.horizon_days();
        let government_end = self.government.days();
        let mut streams = Vec::with_capacity(3);

        if self.non_primary_gross() > Decimal::ZERO {
            streams.push(IncomeStream::new(
                StreamId::NonPrimarySalary,
                0,
                horizon,
                self.non_primary_gross(),
            ));
        }
        if government_end > 0 && self.government.weekly_rate > Decimal::ZERO {
            streams.push(IncomeStream::new(
                StreamId::GovernmentBenefit,
                0,
                government_end,
                self.government.monthly_gross(),
            ));
        }
        let employer_gross = self.employer_leave_gross();
        if self.employer_days() > 0 && employer_gross > Decimal::ZERO {
            streams.push(IncomeStream::new(
                StreamId::EmployerPaidLeave,
                government_end,
                horizon,
                employer_gross,
            ));
        }

        for stream in &streams {
            log::debug!(
                "Stream {}: days [{}, {}) at {}/month",
                stream.id,
                stream.day_offset_start,
                stream.day_offset_end,
                stream.monthly_gross_rate.round_dp(2)
            );
        }

        Ok(streams)
    }

    /// Daily gross income across the whole leave horizon
    pub fn timeline(&self) -> Result<Timeline, PlanError> {
        let streams = self.streams()?;
        Ok(build_timeline(&streams, self.leave_start, self.horizon_days()))
    }
}

/// First day of the month after `today`
pub fn default_leave_start(today: NaiveDate) -> NaiveDate {
    let (year, month) = if today.month() == 12 {
        (today.year() + 1, 1)
    } else {
        (today.year(), today.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or(today)
}
