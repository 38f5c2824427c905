use chrono::{Datelike, Days, Months, NaiveDate};
use std::collections::BTreeSet;

/// One calendar month, Sunday-first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonthView {
    first: NaiveDate,
}

impl MonthView {
    pub fn of(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn prev(&self) -> Self {
        Self::of(self.first - Months::new(1))
    }

    pub fn next(&self) -> Self {
        Self::of(self.first + Months::new(1))
    }

    pub fn days_in_month(&self) -> u32 {
        let next = self.next().first;
        next.signed_duration_since(self.first).num_days() as u32
    }

    /// Cells of the month grid: leading blanks up to the first weekday,
    /// then every day, then trailing blanks to complete the last week.
    pub fn grid(&self) -> Vec<Option<NaiveDate>> {
        let leading = self.first.weekday().num_days_from_sunday() as usize;
        let days = self.days_in_month() as u64;

        let mut cells = vec![None; leading];
        cells.extend((0..days).map(|offset| self.first.checked_add_days(Days::new(offset))));
        let trailing = (7 - cells.len() % 7) % 7;
        cells.extend(std::iter::repeat(None).take(trailing));
        cells
    }
}

/// Picked days, always sorted and unique.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Selection {
    dates: BTreeSet<NaiveDate>,
    anchor: Option<NaiveDate>,
}

impl Selection {
    pub fn from_dates(dates: impl IntoIterator<Item = NaiveDate>) -> Self {
        Self {
            dates: dates.into_iter().collect(),
            anchor: None,
        }
    }

    pub fn dates(&self) -> Vec<NaiveDate> {
        self.dates.iter().copied().collect()
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.dates.contains(&date)
    }

    pub fn toggle(&mut self, date: NaiveDate) {
        if !self.dates.remove(&date) {
            self.dates.insert(date);
        }
        self.anchor = Some(date);
    }

    /// Adds the inclusive range from the last clicked day; without one it
    /// behaves like a plain toggle.
    pub fn extend_to(&mut self, date: NaiveDate) {
        let Some(anchor) = self.anchor else {
            return self.toggle(date);
        };

        let (from, to) = if anchor <= date {
            (anchor, date)
        } else {
            (date, anchor)
        };
        self.dates
            .extend(from.iter_days().take_while(|day| *day <= to));
        self.anchor = Some(date);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_lengths() {
        assert_eq!(MonthView::of(date(2026, 2, 14)).days_in_month(), 28);
        assert_eq!(MonthView::of(date(2028, 2, 1)).days_in_month(), 29);
        assert_eq!(MonthView::of(date(2026, 12, 31)).days_in_month(), 31);
    }

    #[test]
    fn navigation_crosses_years() {
        let december = MonthView::of(date(2026, 12, 5));
        assert_eq!((december.next().year(), december.next().month()), (2027, 1));
        let january = MonthView::of(date(2027, 1, 20));
        assert_eq!((january.prev().year(), january.prev().month()), (2026, 12));
    }

    #[test]
    fn grid_starts_on_sunday_and_fills_weeks() {
        // 2026-10-01 is a Thursday
        let grid = MonthView::of(date(2026, 10, 19)).grid();
        assert_eq!(grid.len() % 7, 0);
        assert!(grid[..4].iter().all(Option::is_none));
        assert_eq!(grid[4], Some(date(2026, 10, 1)));
        assert_eq!(grid.iter().flatten().count(), 31);
        assert_eq!(grid.iter().flatten().last(), Some(&date(2026, 10, 31)));
    }

    #[test]
    fn toggle_adds_then_removes() {
        let mut selection = Selection::default();
        selection.toggle(date(2026, 11, 3));
        assert!(selection.contains(date(2026, 11, 3)));
        selection.toggle(date(2026, 11, 3));
        assert!(selection.dates().is_empty());
    }

    #[test]
    fn extend_selects_inclusive_range_in_either_direction() {
        let mut selection = Selection::default();
        selection.toggle(date(2026, 11, 10));
        selection.extend_to(date(2026, 11, 7));

        assert_eq!(
            selection.dates(),
            (7..=10).map(|d| date(2026, 11, d)).collect::<Vec<_>>()
        );

        selection.extend_to(date(2026, 11, 12));
        assert_eq!(selection.dates().len(), 6);
        assert_eq!(selection.dates().last(), Some(&date(2026, 11, 12)));
    }

    #[test]
    fn extend_without_anchor_toggles() {
        let mut selection = Selection::from_dates([date(2026, 11, 1)]);
        selection.extend_to(date(2026, 11, 5));
        assert_eq!(selection.dates(), vec![date(2026, 11, 1), date(2026, 11, 5)]);
    }
}
