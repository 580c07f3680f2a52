//! Day-indexed income timeline built from overlapping income streams.

use super::stream::IncomeStream;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

/// Gross income received on one calendar date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DailyIncomeEntry {
    pub date: NaiveDate,
    pub amount: Decimal,
}

/// Entries ordered by date with at most one entry per date
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Timeline {
    entries: Vec<DailyIncomeEntry>,
}

impl Timeline {
    /// Group arbitrary entries by date, summing amounts that share a date
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = DailyIncomeEntry>,
    {
        let mut by_date: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
        for entry in entries {
            *by_date.entry(entry.date).or_default() += entry.amount;
        }

        Timeline {
            entries: by_date
                .into_iter()
                .map(|(date, amount)| DailyIncomeEntry { date, amount })
                .collect(),
        }
    }

    pub fn entries(&self) -> &[DailyIncomeEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first_date(&self) -> Option<NaiveDate> {
        self.entries.first().map(|e| e.date)
    }

    pub fn last_date(&self) -> Option<NaiveDate> {
        self.entries.last().map(|e| e.date)
    }

    /// Amount for `date`, zero when the date has no entry
    pub fn amount_on(&self, date: NaiveDate) -> Decimal {
        self.entries
            .binary_search_by_key(&date, |e| e.date)
            .map_or(Decimal::ZERO, |i| self.entries[i].amount)
    }

    pub fn total(&self) -> Decimal {
        self.entries.iter().map(|e| e.amount).sum()
    }

    /// Sum of entries with dates in `from..=to`
    pub fn total_between(&self, from: NaiveDate, to: NaiveDate) -> Decimal {
        let start = self.entries.partition_point(|e| e.date < from);
        let end = self.entries.partition_point(|e| e.date <= to);
        self.entries
            .get(start..end)
            .map_or(Decimal::ZERO, |slice| slice.iter().map(|e| e.amount).sum())
    }
}

/// Sum every stream's daily rate over `start + [0, horizon_days)`.
///
/// Produces exactly one entry per day with consecutive dates. A stream
/// contributes on day `d` only when `d` falls in its half-open range, so the
/// last day of one stream and the first day of the next never double count.
pub fn build_timeline(streams: &[IncomeStream], start: NaiveDate, horizon_days: u32) -> Timeline {
    let rates: Vec<(&IncomeStream, Decimal)> = streams
        .iter()
        .filter(|s| !s.is_empty())
        .map(|s| (s, s.daily_rate()))
        .collect();

    let entries: Vec<DailyIncomeEntry> = start
        .iter_days()
        .take(horizon_days as usize)
        .zip(0u32..)
        .map(|(date, day)| DailyIncomeEntry {
            date,
            amount: rates
                .iter()
                .filter(|(stream, _)| stream.is_active(day))
                .map(|(_, rate)| *rate)
                .sum(),
        })
        .collect();

    log::debug!(
        "Built timeline of {} days from {} streams starting {}",
        entries.len(),
        rates.len(),
        start
    );

    Timeline { entries }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stream::StreamId;
    use proptest::prelude::*;
    use rust_decimal_macros::dec;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn stream(id: StreamId, start: u32, end: u32, monthly: Decimal) -> IncomeStream {
        IncomeStream::new(id, start, end, monthly)
    }

    #[test]
    fn dense_over_horizon() {
        let timeline = build_timeline(&[], date("2026-01-30"), 5);
        let dates: Vec<_> = timeline.entries().iter().map(|e| e.date).collect();
        assert_eq!(
            dates,
            vec![
                date("2026-01-30"),
                date("2026-01-31"),
                date("2026-02-01"),
                date("2026-02-02"),
                date("2026-02-03"),
            ]
        );
        assert!(timeline.entries().iter().all(|e| e.amount.is_zero()));
    }

    #[test]
    fn zero_horizon_is_empty() {
        let timeline = build_timeline(
            &[stream(StreamId::NonPrimarySalary, 0, 10, dec!(5000))],
            date("2026-01-01"),
            0,
        );
        assert!(timeline.is_empty());
        assert_eq!(timeline.first_date(), None);
    }

    #[test]
    fn handover_day_counted_once() {
        let government = stream(StreamId::GovernmentBenefit, 0, 147, dec!(5200));
        let employer = stream(StreamId::EmployerPaidLeave, 147, 217, dec!(6000));
        let timeline = build_timeline(&[government, employer], date("2026-01-01"), 217);

        let last_gov = timeline.entries()[146];
        let first_employer = timeline.entries()[147];
        assert_eq!(last_gov.date, date("2026-05-27"));
        assert_eq!(last_gov.amount, government.daily_rate());
        assert_eq!(first_employer.date, date("2026-05-28"));
        assert_eq!(first_employer.amount, employer.daily_rate());
        assert_eq!(
            timeline.total().round_dp(8),
            (government.total() + employer.total()).round_dp(8)
        );
    }

    #[test]
    fn streams_beyond_horizon_are_cut() {
        let long = stream(StreamId::NonPrimarySalary, 0, 1000, dec!(5000));
        let timeline = build_timeline(&[long], date("2026-01-01"), 14);
        assert_eq!(timeline.len(), 14);
        assert_eq!(timeline.total().round_dp(8), (long.daily_rate() * dec!(14)).round_dp(8));
    }

    #[test]
    fn amount_lookup() {
        let timeline = build_timeline(
            &[stream(StreamId::NonPrimarySalary, 2, 4, dec!(5200))],
            date("2026-03-01"),
            6,
        );
        assert_eq!(timeline.amount_on(date("2026-03-01")), dec!(0));
        assert_eq!(timeline.amount_on(date("2026-03-03")).round_dp(2), dec!(171.43));
        assert_eq!(timeline.amount_on(date("2026-03-05")), dec!(0));
        assert_eq!(timeline.amount_on(date("2026-04-01")), dec!(0));
    }

    #[test]
    fn total_between_is_inclusive() {
        let timeline = Timeline::from_entries(vec![
            DailyIncomeEntry { date: date("2026-01-31"), amount: dec!(1) },
            DailyIncomeEntry { date: date("2026-02-01"), amount: dec!(2) },
            DailyIncomeEntry { date: date("2026-02-28"), amount: dec!(4) },
            DailyIncomeEntry { date: date("2026-03-01"), amount: dec!(8) },
        ]);
        assert_eq!(timeline.total_between(date("2026-02-01"), date("2026-02-28")), dec!(6));
        assert_eq!(timeline.total_between(date("2026-04-01"), date("2026-04-30")), dec!(0));
    }

    #[test]
    fn from_entries_sums_duplicates() {
        let timeline = Timeline::from_entries(vec![
            DailyIncomeEntry { date: date("2026-02-02"), amount: dec!(10) },
            DailyIncomeEntry { date: date("2026-02-01"), amount: dec!(5) },
            DailyIncomeEntry { date: date("2026-02-02"), amount: dec!(2.5) },
        ]);
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline.first_date(), Some(date("2026-02-01")));
        assert_eq!(timeline.amount_on(date("2026-02-02")), dec!(12.5));
    }

    fn arb_stream() -> impl Strategy<Value = IncomeStream> {
        (0u32..120, 0u32..120, 0u32..20_000).prop_map(|(start, len, monthly)| {
            stream(StreamId::NonPrimarySalary, start, start + len, Decimal::from(monthly))
        })
    }

    proptest! {
        #[test]
        fn one_entry_per_consecutive_day(
            streams in proptest::collection::vec(arb_stream(), 0..4),
            horizon in 0u32..400,
            offset in 0i64..3000,
        ) {
            let start = date("2024-01-01") + chrono::Duration::days(offset);
            let timeline = build_timeline(&streams, start, horizon);
            prop_assert_eq!(timeline.len(), horizon as usize);
            for pair in timeline.entries().windows(2) {
                prop_assert_eq!(pair[0].date.succ_opt(), Some(pair[1].date));
            }
        }

        #[test]
        fn overlapping_streams_sum(a in arb_stream(), b in arb_stream(), day in 0u32..240) {
            let timeline = build_timeline(&[a, b], date("2026-01-01"), 240);
            let mut expected = Decimal::ZERO;
            if a.is_active(day) {
                expected += a.daily_rate();
            }
            if b.is_active(day) {
                expected += b.daily_rate();
            }
            prop_assert_eq!(timeline.entries()[day as usize].amount, expected);
        }
    }
}
