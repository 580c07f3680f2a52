//! Month grids for the income calendar.
//!
//! Each month is laid out Monday first: blank cells pad the week up to day 1,
//! then one cell per day, split into rows of seven.

use super::timeline::Timeline;
use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

pub const WEEKDAY_HEADERS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Day of the month the household is usually paid on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PayDay(u32);

impl PayDay {
    /// `None` outside 1..=31, which turns off pay-day highlighting
    pub fn new(day: u32) -> Option<PayDay> {
        (1..=31).contains(&day).then_some(PayDay(day))
    }

    pub fn day(self) -> u32 {
        self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CalendarCell {
    /// Padding before the first of the month
    Empty,
    Day {
        day_of_month: u32,
        amount: Decimal,
        is_pay_day: bool,
    },
}

impl CalendarCell {
    pub fn amount(&self) -> Decimal {
        match self {
            CalendarCell::Empty => Decimal::ZERO,
            CalendarCell::Day { amount, .. } => *amount,
        }
    }

    pub fn day_of_month(&self) -> Option<u32> {
        match self {
            CalendarCell::Empty => None,
            CalendarCell::Day { day_of_month, .. } => Some(*day_of_month),
        }
    }

    pub fn is_pay_day(&self) -> bool {
        matches!(self, CalendarCell::Day { is_pay_day: true, .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthGrid {
    pub year: i32,
    /// 0 = January
    pub month_index: u32,
    pub cells: Vec<CalendarCell>,
}

impl MonthGrid {
    /// Rows of seven cells; the last row may be shorter
    pub fn rows(&self) -> std::slice::Chunks<'_, CalendarCell> {
        self.cells.chunks(7)
    }

    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[self.month_index as usize % 12]
    }

    pub fn title(&self) -> String {
        format!("{} {}", self.month_name(), self.year)
    }

    /// Sum of the amounts shown in the grid
    pub fn displayed_total(&self) -> Decimal {
        self.cells.iter().map(CalendarCell::amount).sum()
    }
}

/// One grid per calendar month from the timeline's first date to its last,
/// in order.
///
/// With `collapse_to_pay_day` and a pay day set, a month's whole total is
/// shown on the pay-day cell and every other day shows zero. A pay day past
/// the end of a month marks nothing in that month, and in collapse mode that
/// month's total is not shown anywhere.
pub fn build_month_grids(
    timeline: &Timeline,
    pay_day: Option<PayDay>,
    collapse_to_pay_day: bool,
) -> Vec<MonthGrid> {
    let (Some(first), Some(last)) = (timeline.first_date(), timeline.last_date()) else {
        return Vec::new();
    };

    let grids: Vec<MonthGrid> = months_between(first, last)
        .filter_map(|month_start| build_month(timeline, month_start, pay_day, collapse_to_pay_day))
        .collect();

    log::debug!(
        "Built {} month grids from {} to {} (pay day {:?}, collapse {})",
        grids.len(),
        first,
        last,
        pay_day.map(PayDay::day),
        collapse_to_pay_day
    );

    grids
}

fn build_month(
    timeline: &Timeline,
    month_start: NaiveDate,
    pay_day: Option<PayDay>,
    collapse_to_pay_day: bool,
) -> Option<MonthGrid> {
    let month_end = last_day_of_month(month_start)?;
    let days_in_month = month_end.day();
    let leading_blanks = month_start.weekday().num_days_from_monday();
    let pay_day = pay_day.map(PayDay::day);

    let collapsed_total = match pay_day {
        Some(day) if collapse_to_pay_day => {
            if day > days_in_month {
                log::debug!(
                    "Pay day {} is past the end of {}; month total not shown",
                    day,
                    month_start.format("%B %Y")
                );
            }
            Some(timeline.total_between(month_start, month_end))
        }
        _ => None,
    };

    let mut cells = Vec::with_capacity((leading_blanks + days_in_month) as usize);
    cells.extend((0..leading_blanks).map(|_| CalendarCell::Empty));
    cells.extend(month_start.iter_days().take(days_in_month as usize).map(|date| {
        let day_of_month = date.day();
        let is_pay_day = pay_day == Some(day_of_month);
        let amount = match collapsed_total {
            Some(total) if is_pay_day => total,
            Some(_) => Decimal::ZERO,
            None => timeline.amount_on(date),
        };
        CalendarCell::Day {
            day_of_month,
            amount,
            is_pay_day,
        }
    }));

    Some(MonthGrid {
        year: month_start.year(),
        month_index: month_start.month0(),
        cells,
    })
}

/// First day of every month touched by `first..=last`
fn months_between(first: NaiveDate, last: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    let end = first_of_month(last);
    std::iter::successors(first_of_month(first), |current| {
        first_of_next_month(*current)
    })
    .take_while(move |month| Some(*month) <= end)
}

fn first_of_month(date: NaiveDate) -> Option<NaiveDate> {
    date.with_day(1)
}

fn first_of_next_month(date: NaiveDate) -> Option<NaiveDate> {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
}

fn last_day_of_month(month_start: NaiveDate) -> Option<NaiveDate> {
    match first_of_next_month(month_start) {
        Some(next) => next.pred_opt(),
        // December of the last representable year
        None => NaiveDate::from_ymd_opt(month_start.year(), 12, 31),
    }
}
