//! Printable HTML calendar.

use super::{cell_amount, period_line, summary_line, CalendarRenderer, DISCLAIMER};
use crate::core::{CalendarCell, CalendarDocument, MonthGrid, WEEKDAY_HEADERS};
use std::fmt::Write;

const CSS: &str = r#"
    * { box-sizing: border-box; }
    body { font-family: Arial, sans-serif; margin: 20px; color: #222; }
    h1 { font-size: 22px; margin: 0; }
    .subtitle { font-size: 13px; margin-top: 2px; color: #555; }
    .summary { font-size: 13px; margin: 10px 0 18px 0; }
    .month { page-break-inside: avoid; margin-bottom: 24px; }
    .month h2 { font-size: 16px; margin: 8px 0; }
    table { border-collapse: collapse; width: 100%; table-layout: fixed; }
    th, td { border: 1px solid #ccc; padding: 4px; vertical-align: top; height: 70px; }
    th { background: #f3f3f3; font-size: 12px; height: auto; }
    td { font-size: 11px; }
    td.empty { background: #fafafa; }
    td.payday { background: #fff9c4; }
    .day { font-weight: bold; margin-bottom: 4px; }
    .none { opacity: 0.5; }
    .payday-label { font-size: 9px; color: #c49000; margin-top: 3px; }
    footer { margin-top: 16px; font-size: 10px; color: #777; }
    @page { margin: 15mm; }
"#;

/// Self-contained HTML page, ready for the browser's print dialog
#[derive(Debug, Clone)]
pub struct HtmlRenderer {
    pub title: String,
}

impl Default for HtmlRenderer {
    fn default() -> Self {
        HtmlRenderer {
            title: "Leave Income Calendar".to_string(),
        }
    }
}

impl CalendarRenderer for HtmlRenderer {
    fn render(&self, document: &CalendarDocument) -> String {
        let mut months = String::new();
        for grid in &document.month_grids {
            render_month(&mut months, grid);
        }

        let mut notes = String::new();
        if let Some(pay_day) = document.pay_day {
            let _ = write!(
                notes,
                "<br/>Expected main pay date each month: day {}",
                pay_day.day()
            );
            if document.collapse_to_pay_day {
                notes.push_str("<br/>Each month's income is shown on its pay date");
            }
        }

        format!(
            r##"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <style>{css}</style>
</head>
<body>
    <header>
        <h1>{title}</h1>
        <div class="subtitle">Estimated income across your government and paid leave period, {period}</div>
    </header>
    <div class="summary">{summary}{notes}</div>
{months}
    <footer>{disclaimer}</footer>
</body>
</html>
"##,
            title = escape(&self.title),
            css = CSS,
            period = period_line(document),
            summary = summary_line(document),
            notes = notes,
            months = months,
            disclaimer = DISCLAIMER,
        )
    }
}

fn render_month(out: &mut String, grid: &MonthGrid) {
    let _ = writeln!(out, r#"    <section class="month">"#);
    let _ = writeln!(out, "        <h2>{}</h2>", grid.title());
    out.push_str("        <table>\n            <thead><tr>");
    for header in WEEKDAY_HEADERS {
        let _ = write!(out, "<th>{}</th>", header);
    }
    out.push_str("</tr></thead>\n            <tbody>\n");

    for row in grid.rows() {
        out.push_str("                <tr>");
        for cell in row {
            render_cell(out, cell);
        }
        out.push_str("</tr>\n");
    }

    out.push_str("            </tbody>\n        </table>\n    </section>\n");
}

fn render_cell(out: &mut String, cell: &CalendarCell) {
    let Some(day) = cell.day_of_month() else {
        out.push_str(r#"<td class="empty"></td>"#);
        return;
    };

    let amount = cell_amount(cell).unwrap_or_else(|| r#"<span class="none">&ndash;</span>"#.to_string());
    if cell.is_pay_day() {
        let _ = write!(
            out,
            r#"<td class="payday"><div class="day">{}</div><div>{}</div><div class="payday-label">Pay day</div></td>"#,
            day, amount
        );
    } else {
        let _ = write!(out, r#"<td><div class="day">{}</div><div>{}</div></td>"#, day, amount);
    }
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
