use chrono::{Datelike, Days, Local, Months, NaiveDate, Weekday};
use std::fmt;

use crate::error::GridError;
use crate::format::Formatter;
use crate::parse::parse_date;

pub const DAYS_PER_WEEK: u32 = 7;

/// Number of days in the given month, or `None` when the month (or the one
/// after it) cannot be represented.
pub fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let next = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    };
    Some((next? - first).num_days() as u32)
}

/// 0 = Sunday .. 6 = Saturday.
pub fn weekday_number(day: Weekday) -> u32 {
    day.num_days_from_sunday()
}

pub fn weekday_from_number(n: u32) -> Option<Weekday> {
    match n {
        0 => Some(Weekday::Sun),
        1 => Some(Weekday::Mon),
        2 => Some(Weekday::Tue),
        3 => Some(Weekday::Wed),
        4 => Some(Weekday::Thu),
        5 => Some(Weekday::Fri),
        6 => Some(Weekday::Sat),
        _ => None,
    }
}

// ─── Month grid ───────────────────────────────────────────────────────────────

/// Day grid of one calendar month.
///
/// Every query is computed on demand from the month and the current
/// configuration; returned vectors are owned snapshots, so later calls to
/// [`week_starts_at`](Self::week_starts_at) or
/// [`set_formatter`](Self::set_formatter) never touch them. The setters
/// mutate this grid in place and hand back `&mut Self` for chaining.
///
/// ```
/// use monthgrid::MonthGrid;
///
/// let grid  = MonthGrid::new(5, 2018)?;
/// let weeks = grid.weeks()?;
/// assert_eq!(weeks.len(), 5);
/// assert_eq!(weeks[0][0].to_string(), "2018-04-29");
/// # Ok::<(), monthgrid::GridError>(())
/// ```
pub struct MonthGrid<T = NaiveDate> {
    first:      NaiveDate,
    len:        u32,
    week_start: u32,
    formatter:  Formatter<T>,
}

impl MonthGrid<NaiveDate> {
    pub fn new(month: u32, year: i32) -> Result<Self, GridError> {
        if !(1..=12).contains(&month) {
            return Err(GridError::InvalidMonth { month });
        }
        let out_of_range = || GridError::YearOutOfRange { year };
        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(out_of_range)?;
        let len   = days_in_month(year, month).ok_or_else(out_of_range)?;

        // Filler days reach at most six days past either end of the month.
        let margin = Days::new(u64::from(DAYS_PER_WEEK - 1));
        first.checked_sub_days(margin).ok_or_else(out_of_range)?;
        first
            .checked_add_days(Days::new(u64::from(len - 1)))
            .and_then(|last| last.checked_add_days(margin))
            .ok_or_else(out_of_range)?;

        tracing::debug!("month grid {year}-{month:02}: {len} days");
        Ok(Self { first, len, week_start: 0, formatter: Formatter::default() })
    }

    /// Grid for the month containing today's local date.
    pub fn current() -> Result<Self, GridError> {
        Self::containing(Local::now().date_naive())
    }

    pub fn containing(date: impl Datelike) -> Result<Self, GridError> {
        Self::new(date.month(), date.year())
    }
}

impl<T> MonthGrid<T> {
    // ── Identity ──────────────────────────────────────────────────────────────

    pub fn month(&self) -> u32 { self.first.month() }
    pub fn year(&self)  -> i32 { self.first.year() }
    pub fn days_in_month(&self) -> u32 { self.len }
    pub fn week_start(&self) -> u32 { self.week_start }

    pub fn first_day(&self) -> NaiveDate { self.first }

    pub fn last_day(&self) -> NaiveDate {
        self.first + Days::new(u64::from(self.len - 1))
    }

    /// True when `day` falls in this grid's year and month. Time of day and
    /// offset are ignored.
    pub fn contains(&self, day: impl Datelike) -> bool {
        day.year() == self.year() && day.month() == self.month()
    }

    /// Like [`contains`](Self::contains) for a date string such as
    /// `2018-05-01` or `2018-05-01 00:00:00`.
    pub fn contains_str(&self, day: &str) -> Result<bool, GridError> {
        Ok(self.contains(parse_date(day)?))
    }

    // ── Configuration ─────────────────────────────────────────────────────────

    /// Sets the weekday that begins each row (0 = Sunday .. 6 = Saturday).
    pub fn week_starts_at(&mut self, day: u32) -> Result<&mut Self, GridError> {
        if day >= DAYS_PER_WEEK {
            return Err(GridError::InvalidWeekStart { day });
        }
        self.week_start = day;
        Ok(self)
    }

    pub fn week_starts_on(&mut self, day: Weekday) -> &mut Self {
        self.week_start = weekday_number(day);
        self
    }

    pub fn set_formatter(&mut self, formatter: Formatter<T>) -> &mut Self {
        self.formatter = formatter;
        self
    }

    /// Swaps in a formatter with a different output type.
    pub fn with_formatter<U>(self, formatter: Formatter<U>) -> MonthGrid<U> {
        MonthGrid { first: self.first, len: self.len, week_start: self.week_start, formatter }
    }

    pub fn clear_formatter(self) -> MonthGrid<NaiveDate> {
        self.with_formatter(Formatter::default())
    }

    /// The seven weekdays of a row, in column order.
    pub fn weekday_order(&self) -> [Weekday; 7] {
        let mut day = weekday_from_number(self.week_start).unwrap_or(Weekday::Sun);
        let mut order = [day; 7];
        for slot in order.iter_mut().skip(1) {
            day = day.succ();
            *slot = day;
        }
        order
    }

    // ── Navigation ────────────────────────────────────────────────────────────

    /// The month before this one, same week start, raw dates.
    pub fn previous_month(&self) -> Result<MonthGrid<NaiveDate>, GridError> {
        let date = self
            .first
            .checked_sub_months(Months::new(1))
            .ok_or(GridError::YearOutOfRange { year: self.year() - 1 })?;
        self.neighbour(date)
    }

    pub fn next_month(&self) -> Result<MonthGrid<NaiveDate>, GridError> {
        let date = self
            .first
            .checked_add_months(Months::new(1))
            .ok_or(GridError::YearOutOfRange { year: self.year() + 1 })?;
        self.neighbour(date)
    }

    fn neighbour(&self, date: NaiveDate) -> Result<MonthGrid<NaiveDate>, GridError> {
        let mut grid = MonthGrid::containing(date)?;
        grid.week_start = self.week_start;
        Ok(grid)
    }

    // ── Filler counts ─────────────────────────────────────────────────────────

    /// Days of the previous month shown before the 1st (0..=6).
    pub fn previous_filler_count(&self) -> u32 {
        let dow = weekday_number(self.first.weekday());
        (dow + DAYS_PER_WEEK - self.week_start) % DAYS_PER_WEEK
    }

    /// Days of the next month shown after the last day (0..=6).
    pub fn next_filler_count(&self) -> u32 {
        let dow = weekday_number(self.last_day().weekday());
        // Distance from the last day to the next row start, 1..=13.
        let boundary = DAYS_PER_WEEK - dow + self.week_start;
        (boundary - 1) % DAYS_PER_WEEK
    }

    // ── Raw sequences ─────────────────────────────────────────────────────────

    pub fn raw_days(&self) -> Vec<NaiveDate> {
        span(self.first, self.len)
    }

    pub fn raw_previous_filler_days(&self) -> Vec<NaiveDate> {
        let count = self.previous_filler_count();
        span(self.first - Days::new(u64::from(count)), count)
    }

    pub fn raw_next_filler_days(&self) -> Vec<NaiveDate> {
        span(self.last_day() + Days::new(1), self.next_filler_count())
    }

    pub fn raw_weeks(&self) -> Vec<Vec<NaiveDate>> {
        chunk_weeks(self.raw_grid())
    }

    fn raw_grid(&self) -> Vec<NaiveDate> {
        let mut all = self.raw_previous_filler_days();
        all.extend(self.raw_days());
        all.extend(self.raw_next_filler_days());
        tracing::trace!(
            "grid {}-{:02} week_start={}: {} cells",
            self.year(), self.month(), self.week_start, all.len()
        );
        all
    }

    // ── Formatted sequences ───────────────────────────────────────────────────

    pub fn days(&self) -> Result<Vec<T>, GridError> {
        self.formatter.apply_all(self.raw_days())
    }

    pub fn previous_filler_days(&self) -> Result<Vec<T>, GridError> {
        self.formatter.apply_all(self.raw_previous_filler_days())
    }

    pub fn next_filler_days(&self) -> Result<Vec<T>, GridError> {
        self.formatter.apply_all(self.raw_next_filler_days())
    }

    /// Previous fillers, the month and next fillers in rows of seven.
    pub fn weeks(&self) -> Result<Vec<Vec<T>>, GridError> {
        Ok(chunk_weeks(self.formatter.apply_all(self.raw_grid())?))
    }
}

impl<T> Clone for MonthGrid<T> {
    fn clone(&self) -> Self {
        Self {
            first:      self.first,
            len:        self.len,
            week_start: self.week_start,
            formatter:  self.formatter.clone(),
        }
    }
}

impl<T> fmt::Debug for MonthGrid<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MonthGrid")
            .field("month", &self.month())
            .field("year", &self.year())
            .field("week_start", &self.week_start)
            .field("formatter", &self.formatter)
            .finish()
    }
}

// ─── Helpers ──────────────────────────────────────────────────────────────────

fn span(start: NaiveDate, count: u32) -> Vec<NaiveDate> {
    start.iter_days().take(count as usize).collect()
}

fn chunk_weeks<T>(cells: Vec<T>) -> Vec<Vec<T>> {
    let week = DAYS_PER_WEEK as usize;
    let mut rows = Vec::with_capacity(cells.len() / week);
    let mut cells = cells.into_iter();
    loop {
        let row: Vec<T> = cells.by_ref().take(week).collect();
        if row.is_empty() { break; }
        rows.push(row);
    }
    rows
}
