//! Expense session
//!
//! Owns the store, the filter range and the derived view. Every mutation
//! recomputes the filtered sequence and then the total before returning, so
//! readers always see values consistent with the latest store and range.

use chrono::{Local, NaiveDate};
use tracing::debug;

use crate::error::ExpenseError;
use crate::models::{DateRange, Expense, Money};
use crate::services::aggregate::{summarize, ExpenseSummary};
use crate::services::filter::matching_indices;
use crate::services::validation::{parse_date, ExpenseCandidate, ValidationErrors};
use crate::storage::ExpenseStore;

/// Source of "today" for the not-in-the-future check
pub trait Clock {
    fn today(&self) -> NaiveDate;
}

/// Local calendar date of the machine
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// A clock pinned to one date
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// Which side of the filter range an input edits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeBound {
    Start,
    End,
}

/// One session's expenses, filter range and derived view
pub struct ExpenseSession<C: Clock = SystemClock> {
    store: ExpenseStore,
    range: DateRange,
    clock: C,
    filtered: Vec<usize>,
    summary: ExpenseSummary,
}

impl ExpenseSession<SystemClock> {
    /// Create an empty session using the system clock
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for ExpenseSession<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ExpenseSession<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            store: ExpenseStore::new(),
            range: DateRange::unbounded(),
            clock,
            filtered: Vec::new(),
            summary: ExpenseSummary::default(),
        }
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// Validate and append a submission
    pub fn submit(&mut self, candidate: &ExpenseCandidate) -> Result<Expense, ValidationErrors> {
        let today = self.clock.today();
        let result = self.store.add_expense(candidate, today).map(Expense::clone);
        match &result {
            Ok(expense) => {
                debug!(id = %expense.id(), name = expense.name(), amount = %expense.amount(), date = %expense.date(), "expense added");
                self.recompute();
            }
            Err(errors) => debug!(%errors, "expense rejected"),
        }
        result
    }

    pub fn set_range(&mut self, range: DateRange) {
        self.range = range;
        debug!(range = %self.range, "filter range changed");
        self.recompute();
    }

    pub fn set_start(&mut self, start: Option<NaiveDate>) {
        self.set_range(DateRange::new(start, self.range.end));
    }

    pub fn set_end(&mut self, end: Option<NaiveDate>) {
        self.set_range(DateRange::new(self.range.start, end));
    }

    pub fn clear_range(&mut self) {
        self.set_range(DateRange::unbounded());
    }

    /// Apply a filter bound typed as text
    ///
    /// Empty text unsets the bound and a `YYYY-MM-DD` date sets it. Anything
    /// else is an error and leaves the range as it was.
    pub fn set_bound_text(&mut self, bound: RangeBound, input: &str) -> Result<(), ExpenseError> {
        let value = if input.trim().is_empty() {
            None
        } else {
            Some(parse_date(input).ok_or_else(|| ExpenseError::InvalidRange {
                input: input.trim().to_string(),
            })?)
        };

        match bound {
            RangeBound::Start => self.set_start(value),
            RangeBound::End => self.set_end(value),
        }
        Ok(())
    }

    pub fn range(&self) -> DateRange {
        self.range
    }

    /// Every accepted expense in insertion order
    pub fn expenses(&self) -> &[Expense] {
        self.store.all()
    }

    /// The expenses inside the current range, in insertion order
    pub fn filtered(&self) -> Vec<&Expense> {
        let all = self.store.all();
        self.filtered.iter().map(|&index| &all[index]).collect()
    }

    /// Total of the filtered expenses
    pub fn total(&self) -> Money {
        self.summary.total
    }

    pub fn summary(&self) -> ExpenseSummary {
        self.summary
    }

    fn recompute(&mut self) {
        self.filtered = matching_indices(self.store.all(), &self.range);
        let all = self.store.all();
        self.summary = summarize(self.filtered.iter().map(|&index| &all[index]));
    }
}
