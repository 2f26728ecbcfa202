//! Integration tests for the calculators.

use approx::assert_abs_diff_eq;
use ck_calculators::{age, body_mass_index, grade_point_average, parse_date, percentage, pregnancy};
use ck_core::ErrorKind;

// ─── Health ──────────────────────────────────────────────────────────────────

#[test]
fn bmi_fields() {
    let bmi = body_mass_index(95.0, 180.0).unwrap();
    let fields = bmi.fields();
    assert_eq!(fields[0].value, "29.3");
    assert_eq!(fields[1].value, "Overweight");
}

#[test]
fn pregnancy_from_parsed_dates() {
    let lmp = parse_date("date", "2024-01-15").unwrap();
    let today = parse_date("asOf", "2024-04-15").unwrap();
    let p = pregnancy(lmp, today).unwrap();
    assert_eq!(p.due_date, parse_date("dueDate", "2024-10-21").unwrap());
    assert_eq!(p.weeks, 13);
}

// ─── Academic & arithmetic ───────────────────────────────────────────────────

#[test]
fn cgpa_over_semesters() {
    let gpa = grade_point_average(&[3.2, 3.8], &[18.0, 15.0]).unwrap();
    assert_abs_diff_eq!(gpa.value, 3.47, epsilon = 1e-12);
    assert_eq!(gpa.credits_note(), "Total Credits: 33");
}

#[test]
fn percentage_of_total() {
    assert_abs_diff_eq!(percentage(45.0, 60.0).unwrap(), 75.0, epsilon = 1e-12);
    assert_eq!(
        percentage(1.0, 0.0).unwrap_err().kind(),
        ErrorKind::InvalidInput
    );
}

#[test]
fn age_across_leap_day() {
    let birth = parse_date("date", "2000-02-29").unwrap();
    let as_of = parse_date("asOf", "2001-02-28").unwrap();
    let a = age(birth, as_of).unwrap();
    // Last monthly anniversary is 2001-01-29.
    assert_eq!((a.years, a.months, a.days), (0, 11, 30));
    assert_eq!(a.total_days, 365);
}
