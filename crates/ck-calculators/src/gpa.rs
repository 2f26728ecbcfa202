//! Weighted grade point average (GPA and CGPA).

use ck_core::utilities::data_formatters::{format_fixed, format_trimmed};
use ck_core::{ensure, Real, Result};
use ck_math::round_closest;

/// A weighted average of grade points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gpa {
    /// Average rounded to two decimals.
    pub value: Real,
    /// Sum of the credits.
    pub total_credits: Real,
}

impl Gpa {
    /// The average with two decimals (`"3.43"`).
    pub fn display_value(&self) -> String {
        format_fixed(self.value, 2)
    }

    /// `"Total Credits: N"`.
    pub fn credits_note(&self) -> String {
        format!("Total Credits: {}", format_trimmed(self.total_credits, 2))
    }
}

/// `Σ grade·credit / Σ credit`.
pub fn grade_point_average(grades: &[Real], credits: &[Real]) -> Result<Gpa> {
    ensure!(!grades.is_empty(), "Enter at least one grade");
    ensure!(
        grades.len() == credits.len(),
        "Number of grades and credits must match"
    );
    ensure!(
        grades.iter().all(|g| *g >= 0.0),
        "Grades cannot be negative"
    );
    ensure!(
        credits.iter().all(|c| *c > 0.0),
        "Credits must be positive"
    );
    let points: Real = grades.iter().zip(credits).map(|(g, c)| g * c).sum();
    let total_credits: Real = credits.iter().sum();
    Ok(Gpa {
        value: round_closest(points / total_credits, 2),
        total_credits,
    })
}
