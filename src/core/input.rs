//! Plan input as read from a JSON file or stdin.

use super::plan::{clamp_weeks, default_leave_start, GovernmentBenefit, LeavePlan, PayRate};
use chrono::NaiveDate;
use leavepay_derive::FieldDocs;
use rust_decimal::Decimal;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::io::Read;

/// Documentation for one input field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDoc {
    pub name: &'static str,
    pub ty: &'static str,
    pub optional: bool,
    pub description: &'static str,
}

/// Leave plan inputs. Every field may be omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema, FieldDocs)]
#[serde(default, deny_unknown_fields)]
pub struct PlanInput {
    /// Monthly gross salary of the partner who keeps working
    #[schemars(with = "f64")]
    pub non_primary_monthly_gross: Decimal,
    /// Monthly gross salary of the primary carer before leave
    #[schemars(with = "f64")]
    pub primary_monthly_gross: Decimal,
    /// Weeks of employer paid leave after the government benefit ends
    #[schemars(with = "f64")]
    pub employer_paid_weeks: Decimal,
    /// Employer paid leave rate, "full" or "half"
    pub pay_rate: Option<PayRate>,
    /// First day of leave (YYYY-MM-DD); defaults to the first of next month
    pub leave_start: Option<NaiveDate>,
    /// Weeks of government pay, overriding the built-in value; negative counts as zero
    pub government_weeks: Option<i64>,
    /// Government gross weekly rate, overriding the built-in value
    #[schemars(with = "Option<f64>")]
    pub government_weekly_rate: Option<Decimal>,
}

impl PlanInput {
    pub fn read_json<R: Read>(reader: R) -> anyhow::Result<Self> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Resolve defaults against `today` and build the plan
    pub fn into_plan(self, today: NaiveDate) -> LeavePlan {
        let defaults = GovernmentBenefit::default();
        LeavePlan {
            non_primary_monthly_gross: self.non_primary_monthly_gross,
            primary_monthly_gross: self.primary_monthly_gross,
            employer_paid_weeks: self.employer_paid_weeks,
            pay_rate: self.pay_rate,
            government: GovernmentBenefit {
                weeks: self.government_weeks.map_or(defaults.weeks, clamp_weeks),
                weekly_rate: self.government_weekly_rate.unwrap_or(defaults.weekly_rate),
            },
            leave_start: self
                .leave_start
                .unwrap_or_else(|| default_leave_start(today)),
        }
    }
}
