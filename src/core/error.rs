use thiserror::Error;

/// Reasons a leave plan cannot produce a projection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlanError {
    /// Neither earner has a positive monthly gross salary
    #[error("no income configured: enter at least one monthly gross salary")]
    NoIncome,
    /// A salary or benefit rate is above `MAX_GROSS_AMOUNT`
    #[error("income amounts must not exceed $1,000,000,000 per pay period")]
    IncomeOutOfRange,
    /// Government weeks plus employer paid weeks is zero
    #[error("total leave weeks must be greater than zero")]
    NoLeaveWeeks,
    /// Neither full pay nor half pay was chosen for employer paid leave
    #[error("choose full pay or half pay for employer paid leave")]
    NoPayRate,
}

/// Errors from building a view for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ViewError {
    #[error(transparent)]
    Plan(#[from] PlanError),
    /// The requested view needs the unlock flag to be set
    #[error("this projection is locked; unlock it to view {0} days per week")]
    Locked(u32),
}
