//! Core domain types for the BMI calculator.
//!
//! This module defines the fundamental types used throughout the system:
//! - Raw form input and its validated counterpart
//! - Weight categories
//! - Calculation results and history entries

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Input Types
// ============================================================================

/// Raw text captured from the four form fields
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputRecord {
    pub name: String,
    pub weight_kg: String,
    pub height_feet: String,
    pub height_inches: String,
}

impl InputRecord {
    pub fn new(
        name: impl Into<String>,
        weight_kg: impl Into<String>,
        height_feet: impl Into<String>,
        height_inches: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            weight_kg: weight_kg.into(),
            height_feet: height_feet.into(),
            height_inches: height_inches.into(),
        }
    }
}

/// An input record that passed validation, with its numbers parsed once.
///
/// Only [`crate::validator::validate`] builds these, so the engine never sees
/// unparsed text.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedInput {
    record: InputRecord,
    weight_kg: f64,
    feet: f64,
    inches: f64,
}

impl ValidatedInput {
    /// `feet` and `inches` are whole numbers (already truncated)
    pub(crate) fn new(record: InputRecord, weight_kg: f64, feet: f64, inches: f64) -> Self {
        Self {
            record,
            weight_kg,
            feet,
            inches,
        }
    }

    /// The original text as entered
    pub fn record(&self) -> &InputRecord {
        &self.record
    }

    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }

    pub fn feet(&self) -> f64 {
        self.feet
    }

    pub fn inches(&self) -> f64 {
        self.inches
    }

    pub fn total_inches(&self) -> f64 {
        self.feet * 12.0 + self.inches
    }
}

// ============================================================================
// Result Types
// ============================================================================

/// Weight category derived from a rounded BMI
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightCategory {
    Underweight,
    NormalWeight,
    Overweight,
}

impl WeightCategory {
    pub fn label(&self) -> &'static str {
        match self {
            WeightCategory::Underweight => "Underweight",
            WeightCategory::NormalWeight => "Normal weight",
            WeightCategory::Overweight => "Overweight",
        }
    }
}

impl fmt::Display for WeightCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One successful calculation, as recorded in the session history.
///
/// Input fields are copied verbatim from the form, not normalized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub name: String,
    pub weight_kg: String,
    pub height_feet: String,
    pub height_inches: String,
    /// Always carries exactly two fractional digits
    pub bmi: Decimal,
    pub timestamp: String,
}

/// Outcome of a calculation: the value to display plus the history record
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    pub bmi: Decimal,
    pub category: WeightCategory,
    pub entry: HistoryEntry,
}
