use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const MONTHS_PER_YEAR: Decimal = dec!(12);
pub const WEEKS_PER_YEAR: Decimal = dec!(52);
pub const FORTNIGHTS_PER_YEAR: Decimal = dec!(26);
pub const DAYS_PER_WEEK: Decimal = dec!(7);

/// Period a money amount is expressed in.
///
/// Every amount inside the engine is stored per month; the other periods only
/// exist for display, plus `Daily` which the timeline uses to spread a monthly
/// rate across calendar days.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    Weekly,
    Fortnightly,
    #[default]
    Monthly,
    Daily,
}

impl Frequency {
    /// Parse a display frequency name, falling back to monthly for anything
    /// else. `Daily` is internal to the timeline and never parsed.
    pub fn parse(s: &str) -> Frequency {
        match s.trim().to_lowercase().as_str() {
            "weekly" => Frequency::Weekly,
            "fortnightly" => Frequency::Fortnightly,
            "monthly" => Frequency::Monthly,
            other => {
                log::warn!("Unknown frequency {:?}, showing monthly amounts", other);
                Frequency::Monthly
            }
        }
    }

    /// Convert a canonical monthly amount into this period. No rounding.
    pub fn to_display(self, monthly: Decimal) -> Decimal {
        match self {
            Frequency::Weekly => monthly.saturating_mul(MONTHS_PER_YEAR) / WEEKS_PER_YEAR,
            Frequency::Fortnightly => monthly.saturating_mul(MONTHS_PER_YEAR) / FORTNIGHTS_PER_YEAR,
            Frequency::Monthly => monthly,
            Frequency::Daily => monthly.saturating_mul(MONTHS_PER_YEAR) / WEEKS_PER_YEAR / DAYS_PER_WEEK,
        }
    }

    /// Convert an amount in this period back to the canonical monthly base
    pub fn to_monthly(self, amount: Decimal) -> Decimal {
        match self {
            Frequency::Weekly => amount.saturating_mul(WEEKS_PER_YEAR) / MONTHS_PER_YEAR,
            Frequency::Fortnightly => amount.saturating_mul(FORTNIGHTS_PER_YEAR) / MONTHS_PER_YEAR,
            Frequency::Monthly => amount,
            Frequency::Daily => amount.saturating_mul(DAYS_PER_WEEK * WEEKS_PER_YEAR) / MONTHS_PER_YEAR,
        }
    }

    /// Suffix used when formatting an amount, e.g. `$1,200/week`
    pub fn suffix(self) -> &'static str {
        match self {
            Frequency::Weekly => "/week",
            Frequency::Fortnightly => "/fortnight",
            Frequency::Monthly => "/month",
            Frequency::Daily => "/day",
        }
    }
}

impl std::fmt::Display for Frequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Frequency::Weekly => "weekly",
            Frequency::Fortnightly => "fortnightly",
            Frequency::Monthly => "monthly",
            Frequency::Daily => "daily",
        };
        write!(f, "{}", name)
    }
}

impl std::str::FromStr for Frequency {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Frequency::parse(s))
    }
}

/// Convert a canonical monthly amount for display at `frequency`
pub fn to_display(monthly: Decimal, frequency: Frequency) -> Decimal {
    frequency.to_display(monthly)
}
