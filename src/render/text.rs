use super::{cell_amount, period_line, summary_line, CalendarRenderer, DISCLAIMER};
use crate::core::{CalendarCell, CalendarDocument, MonthGrid, WEEKDAY_HEADERS};
use tabled::{builder::Builder, settings::Style};

/// Month tables for the terminal
#[derive(Debug, Clone, Copy, Default)]
pub struct TextRenderer;

impl CalendarRenderer for TextRenderer {
    fn render(&self, document: &CalendarDocument) -> String {
        let mut out = String::new();
        out.push_str(&format!("INCOME CALENDAR ({})\n", period_line(document)));
        out.push_str(&summary_line(document));
        out.push('\n');
        if let Some(pay_day) = document.pay_day {
            out.push_str(&format!("Pay day: {} of each month\n", pay_day.day()));
        }

        for grid in &document.month_grids {
            out.push('\n');
            out.push_str(&grid.title());
            out.push('\n');
            out.push_str(&month_table(grid));
            out.push('\n');
        }
        out.push('\n');
        out.push_str(DISCLAIMER);
        out.push('\n');
        out
    }
}

fn month_table(grid: &MonthGrid) -> String {
    let mut builder = Builder::default();
    builder.push_record(WEEKDAY_HEADERS);
    for row in grid.rows() {
        let mut record: Vec<String> = row.iter().map(cell_text).collect();
        record.resize(WEEKDAY_HEADERS.len(), String::new());
        builder.push_record(record);
    }
    builder.build().with(Style::rounded()).to_string()
}

fn cell_text(cell: &CalendarCell) -> String {
    let Some(day) = cell.day_of_month() else {
        return String::new();
    };
    let amount = cell_amount(cell).unwrap_or_else(|| "-".to_string());
    if cell.is_pay_day() {
        format!("{}*\n{}", day, amount)
    } else {
        format!("{}\n{}", day, amount)
    }
}
