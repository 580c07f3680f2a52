pub mod calendar;
pub mod error;
pub mod frequency;
pub mod gate;
pub mod input;
pub mod plan;
pub mod projection;
pub mod stream;
pub mod tax;
pub mod timeline;

// Flat public surface for domain types and functions.
pub use calendar::{build_month_grids, CalendarCell, MonthGrid, PayDay, WEEKDAY_HEADERS};
pub use error::{PlanError, ViewError};
pub use frequency::{to_display, Frequency};
pub use gate::{is_feature_unlocked, FlagStore, JsonFileFlagStore, MemoryFlagStore, UNLOCK_FLAG};
pub use input::{FieldDoc, PlanInput};
pub use plan::{
    clamp_weeks, default_leave_start, GovernmentBenefit, LeavePlan, PayRate,
    GOVERNMENT_WEEKLY_RATE, GOVERNMENT_WEEKS, MAX_GROSS_AMOUNT, MAX_LEAVE_WEEKS,
};
pub use projection::{
    build_calendar_document, build_phase_breakdown, build_return_to_work, render_view,
    CalendarDocument, DisplayOptions, PhaseSummary, ReturnToWorkDays, View,
};
pub use stream::{IncomeStream, StreamId};
pub use tax::{TaxBracket, TaxBreakdown, TaxSchedule, LEVY_RATE};
pub use timeline::{build_timeline, DailyIncomeEntry, Timeline};
