//! Body-mass index.

use std::fmt;

use ck_core::utilities::data_formatters::format_fixed;
use ck_core::{ensure, Real, Result, StatField};
use ck_math::round_closest;

/// WHO adult weight category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BmiCategory {
    /// BMI below 18.5.
    Underweight,
    /// BMI from 18.5 up to 25.
    Normal,
    /// BMI from 25 up to 30.
    Overweight,
    /// BMI of 30 or more.
    Obese,
}

impl BmiCategory {
    /// Category of a (rounded) BMI value.
    pub fn of(bmi: Real) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if bmi < 25.0 {
            BmiCategory::Normal
        } else if bmi < 30.0 {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obese
        }
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A computed body-mass index.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bmi {
    /// Index rounded to one decimal.
    pub value: Real,
    /// Category of the rounded index.
    pub category: BmiCategory,
}

impl Bmi {
    /// `BMI` and `Category` display fields.
    pub fn fields(&self) -> Vec<StatField> {
        vec![
            StatField::new("BMI", format_fixed(self.value, 1)),
            StatField::new("Category", self.category.label()),
        ]
    }
}

/// `weight_kg / (height_cm / 100)²`.
pub fn body_mass_index(weight_kg: Real, height_cm: Real) -> Result<Bmi> {
    ensure!(
        weight_kg.is_finite() && weight_kg > 0.0 && height_cm.is_finite() && height_cm > 0.0,
        "Enter valid weight and height"
    );
    let height_m = height_cm / 100.0;
    let value = round_closest(weight_kg / (height_m * height_m), 1);
    Ok(Bmi {
        value,
        category: BmiCategory::of(value),
    })
}
