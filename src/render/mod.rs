//! Presentation of calendar documents.
//!
//! The engine only produces a [`CalendarDocument`]; each renderer decides how
//! it looks. Money is rounded here and nowhere earlier.

pub mod html;
pub mod text;

use crate::core::{CalendarCell, CalendarDocument};
use crate::utils::format_dollars;
use rust_decimal::Decimal;

pub use html::HtmlRenderer;
pub use text::TextRenderer;

/// Turns a calendar document into a printable format
pub trait CalendarRenderer {
    fn render(&self, document: &CalendarDocument) -> String;
}

/// Cell amount text, or `None` when nothing is paid that day
pub fn cell_amount(cell: &CalendarCell) -> Option<String> {
    let amount = cell.amount();
    (amount > Decimal::ZERO).then(|| format_dollars(amount, 2))
}

/// Headline line shared by renderers
pub fn summary_line(document: &CalendarDocument) -> String {
    format!(
        "Total estimated income across this period: {} (gross)",
        format_dollars(document.total_gross, 2)
    )
}

pub fn period_line(document: &CalendarDocument) -> String {
    format!(
        "{} to {}",
        document.period_start.format("%-d %B %Y"),
        document.period_end.format("%-d %B %Y")
    )
}

pub const DISCLAIMER: &str = "For planning only. Actual payment dates and amounts may differ; \
please confirm with your employer, your payslips, and the government agency paying your benefit.";
