//! Age and pregnancy calculators.
//!
//! Both take the reference date as a parameter; callers pass today's date
//! for live use.

use chrono::{Datelike, Days, Months, NaiveDate};
use ck_core::utilities::data_parsers::parse_iso_date;
use ck_core::{ensure, Error, Result, StatField};

/// Days from the last menstrual period to the estimated due date.
pub const GESTATION_DAYS: u64 = 280;

/// Parse a `YYYY-MM-DD` date.
pub fn parse_date(field: &str, text: &str) -> Result<NaiveDate> {
    let s = text.trim();
    ensure!(!s.is_empty(), "Enter a value for {field}");
    parse_iso_date(s)
        .and_then(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d))
        .ok_or_else(|| Error::invalid_input(format!("Invalid date for {field}: '{s}'")))
}

/// Completed years, months and days between two dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Age {
    /// Whole years.
    pub years: i32,
    /// Whole months after `years`.
    pub months: i32,
    /// Days after `months`.
    pub days: i32,
    /// Total elapsed days.
    pub total_days: i64,
}

impl Age {
    /// `Years`, `Months`, `Days` and `Total Days` display fields.
    pub fn fields(&self) -> Vec<StatField> {
        vec![
            StatField::new("Years", self.years.to_string()),
            StatField::new("Months", self.months.to_string()),
            StatField::new("Days", self.days.to_string()),
            StatField::new("Total Days", self.total_days.to_string()),
        ]
    }
}

/// Age on `as_of` of someone born on `birth`.
///
/// A month is complete once `as_of` reaches the birth day of the month.
/// Days are counted from the last completed monthly anniversary, which for
/// late-month birthdays falls on the last day of a shorter month.
pub fn age(birth: NaiveDate, as_of: NaiveDate) -> Result<Age> {
    ensure!(birth <= as_of, "Date of birth cannot be in the future");
    let mut months = (as_of.year() - birth.year()) * 12 + as_of.month() as i32
        - birth.month() as i32;
    if as_of.day() < birth.day() {
        months -= 1;
    }
    let mut anniversary = add_months(birth, months)?;
    while anniversary > as_of {
        months -= 1;
        anniversary = add_months(birth, months)?;
    }
    Ok(Age {
        years: months / 12,
        months: months % 12,
        days: (as_of - anniversary).num_days() as i32,
        total_days: (as_of - birth).num_days(),
    })
}

fn add_months(date: NaiveDate, months: i32) -> Result<NaiveDate> {
    u32::try_from(months)
        .ok()
        .and_then(|m| date.checked_add_months(Months::new(m)))
        .ok_or_else(|| Error::invalid_input("Date is out of range"))
}

/// Due date and progress of a pregnancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pregnancy {
    /// Estimated due date (LMP + 280 days).
    pub due_date: NaiveDate,
    /// Completed weeks since the LMP.
    pub weeks: i64,
}

impl Pregnancy {
    /// Due date in long form (`"Fri Oct 06 2023"`).
    pub fn display_due_date(&self) -> String {
        self.due_date.format("%a %b %d %Y").to_string()
    }

    /// `"You are approx. N weeks pregnant"`.
    pub fn progress_note(&self) -> String {
        format!("You are approx. {} weeks pregnant", self.weeks)
    }
}

/// Estimate the due date from the first day of the last menstrual period.
pub fn pregnancy(lmp: NaiveDate, as_of: NaiveDate) -> Result<Pregnancy> {
    ensure!(lmp <= as_of, "Last period date cannot be in the future");
    let due_date = lmp
        .checked_add_days(Days::new(GESTATION_DAYS))
        .ok_or_else(|| Error::invalid_input("Date is out of range"))?;
    Ok(Pregnancy {
        due_date,
        weeks: (as_of - lmp).num_days() / 7,
    })
}
