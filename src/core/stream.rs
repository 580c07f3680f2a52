use super::frequency::Frequency;
use rust_decimal::Decimal;
use serde::Serialize;

/// Which contributor an income stream belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StreamId {
    /// Salary of the partner who keeps working through the leave
    NonPrimarySalary,
    GovernmentBenefit,
    EmployerPaidLeave,
    /// Part-time salary of the primary carer after leave
    ReturnToWork,
}

impl StreamId {
    pub fn display(&self) -> &'static str {
        match self {
            StreamId::NonPrimarySalary => "Non-primary salary",
            StreamId::GovernmentBenefit => "Government pay",
            StreamId::EmployerPaidLeave => "Employer paid leave",
            StreamId::ReturnToWork => "Return to work",
        }
    }
}

impl std::fmt::Display for StreamId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display())
    }
}

/// One contributor's income over the half-open day range
/// `[day_offset_start, day_offset_end)`, counted from the leave start date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IncomeStream {
    pub id: StreamId,
    pub day_offset_start: u32,
    pub day_offset_end: u32,
    pub monthly_gross_rate: Decimal,
}

impl IncomeStream {
    pub fn new(id: StreamId, day_offset_start: u32, day_offset_end: u32, monthly_gross_rate: Decimal) -> Self {
        IncomeStream {
            id,
            day_offset_start,
            day_offset_end,
            monthly_gross_rate,
        }
    }

    /// Gross paid for each active day
    pub fn daily_rate(&self) -> Decimal {
        Frequency::Daily.to_display(self.monthly_gross_rate)
    }

    pub fn is_active(&self, day_offset: u32) -> bool {
        self.day_offset_start <= day_offset && day_offset < self.day_offset_end
    }

    /// Number of active days; zero when the range is empty or inverted
    pub fn len_days(&self) -> u32 {
        self.day_offset_end.saturating_sub(self.day_offset_start)
    }

    pub fn is_empty(&self) -> bool {
        self.len_days() == 0
    }

    /// Total gross paid over the whole range
    pub fn total(&self) -> Decimal {
        self.daily_rate() * Decimal::from(self.len_days())
    }
}
