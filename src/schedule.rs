use chrono::{Days, Months, NaiveDate};

/// add whole calendar months, clamping to the end of the target month
///
/// due dates are always computed from the start date, so a loan starting on
/// Jan 31 falls due on Feb 29 (or 28), Mar 31, Apr 30 and so on
pub fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

/// dates on which a monthly payment falls due, excluding the start date
pub fn monthly_due_dates(start_date: NaiveDate, end_date: NaiveDate) -> Vec<NaiveDate> {
    (1..)
        .map_while(|k| add_months(start_date, k))
        .take_while(|date| *date <= end_date)
        .collect()
}

/// number of days in the term, counting both endpoints
pub fn day_count(start_date: NaiveDate, end_date: NaiveDate) -> u32 {
    let days = (end_date - start_date).num_days() + 1;
    days.max(0) as u32
}

/// number of monthly periods starting within the term, never less than one
pub fn month_count(start_date: NaiveDate, end_date: NaiveDate) -> u32 {
    let periods = (0..)
        .map_while(|k| add_months(start_date, k))
        .take_while(|date| *date <= end_date)
        .count() as u32;
    periods.max(1)
}

/// every calendar day from `start_date` to `end_date` inclusive
pub fn days_in_term(start_date: NaiveDate, end_date: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    std::iter::successors(Some(start_date), |date| date.checked_add_days(Days::new(1)))
        .take_while(move |date| *date <= end_date)
}

/// term boundaries with the derived period counts
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub due_dates: Vec<NaiveDate>,
    pub total_days: u32,
    pub total_months: u32,
}

impl Schedule {
    pub fn build(start_date: NaiveDate, end_date: NaiveDate) -> Self {
        Self {
            start_date,
            end_date,
            due_dates: monthly_due_dates(start_date, end_date),
            total_days: day_count(start_date, end_date),
            total_months: month_count(start_date, end_date),
        }
    }

    /// monthly payments made inside the term (whole months elapsed), at least one
    pub fn payment_count(&self) -> u32 {
        (self.due_dates.len() as u32).max(1)
    }

    /// true when no monthly payment date falls inside the term
    pub fn is_shorter_than_one_month(&self) -> bool {
        self.due_dates.is_empty()
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> {
        days_in_term(self.start_date, self.end_date)
    }
}
