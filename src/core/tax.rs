//! Progressive income tax plus a flat levy.
//!
//! Tax is always worked out on an annual gross and divided back down, so a
//! monthly figure is `net_annual(monthly * 12) / 12` and never a per-period
//! approximation.

use super::frequency::MONTHS_PER_YEAR;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Flat levy charged on the whole annual gross
pub const LEVY_RATE: Decimal = dec!(0.02);

/// One band of the progressive schedule.
///
/// Income in `(previous upper bound, upper_bound]` is taxed at `marginal_rate`.
/// `upper_bound: None` means the band is open ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct TaxBracket {
    #[schemars(with = "Option<f64>")]
    pub upper_bound: Option<Decimal>,
    #[schemars(with = "f64")]
    pub marginal_rate: Decimal,
}

impl TaxBracket {
    pub const fn bounded(upper_bound: Decimal, marginal_rate: Decimal) -> Self {
        TaxBracket {
            upper_bound: Some(upper_bound),
            marginal_rate,
        }
    }

    pub const fn top(marginal_rate: Decimal) -> Self {
        TaxBracket {
            upper_bound: None,
            marginal_rate,
        }
    }
}

/// Resident individual income tax brackets
pub const RESIDENT_BRACKETS: [TaxBracket; 5] = [
    TaxBracket::bounded(dec!(18200), dec!(0)),
    TaxBracket::bounded(dec!(45000), dec!(0.16)),
    TaxBracket::bounded(dec!(135000), dec!(0.30)),
    TaxBracket::bounded(dec!(190000), dec!(0.37)),
    TaxBracket::top(dec!(0.45)),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("tax schedule has no brackets")]
    Empty,
    #[error("bracket {index} upper bound {bound} is not above the previous bound")]
    Unordered { index: usize, bound: Decimal },
    #[error("bracket {index} is open ended but is not the last bracket")]
    OpenEndedBeforeLast { index: usize },
    #[error("last bracket must be open ended")]
    BoundedLast,
    #[error("bracket {index} marginal rate {rate} is outside [0, 1)")]
    RateOutOfRange { index: usize, rate: Decimal },
    #[error("levy rate {0} is outside [0, 1)")]
    LevyOutOfRange(Decimal),
    #[error("bracket {index} rate plus levy reaches 100%")]
    CombinedRateTooHigh { index: usize },
}

/// Ordered bracket schedule covering `[0, ∞)` plus a flat levy
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaxSchedule {
    brackets: Vec<TaxBracket>,
    levy_rate: Decimal,
}

impl Default for TaxSchedule {
    fn default() -> Self {
        TaxSchedule {
            brackets: RESIDENT_BRACKETS.to_vec(),
            levy_rate: LEVY_RATE,
        }
    }
}

impl TaxSchedule {
    /// Build a schedule, checking that brackets ascend without gaps and that
    /// every marginal rate (with the levy on top) stays below 100%.
    pub fn new(brackets: Vec<TaxBracket>, levy_rate: Decimal) -> Result<Self, ScheduleError> {
        if brackets.is_empty() {
            return Err(ScheduleError::Empty);
        }
        if levy_rate < Decimal::ZERO || levy_rate >= Decimal::ONE {
            return Err(ScheduleError::LevyOutOfRange(levy_rate));
        }

        let last = brackets.len() - 1;
        let mut previous = Decimal::ZERO;
        for (index, bracket) in brackets.iter().enumerate() {
            let rate = bracket.marginal_rate;
            if rate < Decimal::ZERO || rate >= Decimal::ONE {
                return Err(ScheduleError::RateOutOfRange { index, rate });
            }
            if rate + levy_rate >= Decimal::ONE {
                return Err(ScheduleError::CombinedRateTooHigh { index });
            }
            match bracket.upper_bound {
                Some(bound) if bound <= previous => {
                    return Err(ScheduleError::Unordered { index, bound });
                }
                Some(_) if index == last => return Err(ScheduleError::BoundedLast),
                Some(bound) => previous = bound,
                None if index != last => {
                    return Err(ScheduleError::OpenEndedBeforeLast { index });
                }
                None => {}
            }
        }

        Ok(TaxSchedule {
            brackets,
            levy_rate,
        })
    }

    pub fn brackets(&self) -> &[TaxBracket] {
        &self.brackets
    }

    pub fn levy_rate(&self) -> Decimal {
        self.levy_rate
    }

    /// Progressive tax on an annual gross, excluding the levy
    pub fn bracket_tax(&self, gross_annual: Decimal) -> Decimal {
        let mut tax = Decimal::ZERO;
        let mut lower = Decimal::ZERO;

        for bracket in &self.brackets {
            if gross_annual <= lower {
                break;
            }
            let upper = bracket
                .upper_bound
                .map_or(gross_annual, |bound| bound.min(gross_annual));
            tax += (upper - lower) * bracket.marginal_rate;
            match bracket.upper_bound {
                Some(bound) => lower = bound,
                None => break,
            }
        }

        tax
    }

    pub fn levy(&self, gross_annual: Decimal) -> Decimal {
        if gross_annual <= Decimal::ZERO {
            Decimal::ZERO
        } else {
            gross_annual * self.levy_rate
        }
    }

    pub fn total_tax(&self, gross_annual: Decimal) -> Decimal {
        self.bracket_tax(gross_annual) + self.levy(gross_annual)
    }

    pub fn net_annual(&self, gross_annual: Decimal) -> Decimal {
        gross_annual - self.total_tax(gross_annual)
    }

    pub fn net_monthly(&self, monthly_gross: Decimal) -> Decimal {
        self.net_annual(annualize(monthly_gross)) / MONTHS_PER_YEAR
    }

    /// Monthly tax split for an info panel
    pub fn monthly_breakdown(&self, monthly_gross: Decimal) -> TaxBreakdown {
        let annual = annualize(monthly_gross);
        let income_tax = self.bracket_tax(annual) / MONTHS_PER_YEAR;
        let levy = self.levy(annual) / MONTHS_PER_YEAR;
        let total_tax = income_tax + levy;

        TaxBreakdown {
            gross: monthly_gross,
            income_tax,
            levy,
            total_tax,
            net: monthly_gross - total_tax,
        }
    }
}

/// Annual figure for a monthly gross, saturating at the `Decimal` range
fn annualize(monthly_gross: Decimal) -> Decimal {
    monthly_gross.saturating_mul(MONTHS_PER_YEAR)
}

/// Monthly gross, the tax taken from it, and what is left
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TaxBreakdown {
    pub gross: Decimal,
    pub income_tax: Decimal,
    pub levy: Decimal,
    pub total_tax: Decimal,
    pub net: Decimal,
}
