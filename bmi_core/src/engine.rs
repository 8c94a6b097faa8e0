//! BMI engine: unit conversion, rounding, and classification.
//!
//! Computation order:
//! 1. Height in whole feet and inches → total inches → meters
//! 2. BMI = weight (kg) / meters²
//! 3. Round to exactly two fractional digits
//! 4. Classify the rounded value
//! 5. Stamp the result with the current time

use crate::{
    format_timestamp, Calculation, Clock, Error, HistoryEntry, Result, ValidatedInput,
    WeightCategory,
};
use rust_decimal::{Decimal, RoundingStrategy};

/// Meters per inch
pub const METERS_PER_INCH: f64 = 0.0254;

/// Number of fractional digits kept in a BMI value
pub const BMI_SCALE: u32 = 2;

/// Compute, round, classify and timestamp a validated input
pub fn calculate(input: &ValidatedInput, clock: &dyn Clock) -> Result<Calculation> {
    let raw = bmi_value(input.weight_kg(), input.total_inches());
    let bmi = round_bmi(raw).ok_or_else(|| {
        Error::Calculation(format!("BMI {} cannot be represented", raw))
    })?;
    let category = classify(bmi);

    tracing::debug!(
        "Computed BMI {} ({}) from {} kg at {} in",
        bmi,
        category,
        input.weight_kg(),
        input.total_inches()
    );

    let record = input.record();
    let entry = HistoryEntry {
        name: record.name.clone(),
        weight_kg: record.weight_kg.clone(),
        height_feet: record.height_feet.clone(),
        height_inches: record.height_inches.clone(),
        bmi,
        timestamp: format_timestamp(clock.now()),
    };

    Ok(Calculation {
        bmi,
        category,
        entry,
    })
}

/// Unrounded BMI for a weight in kilograms and a height in inches
pub fn bmi_value(weight_kg: f64, total_inches: f64) -> f64 {
    let height_meters = total_inches * METERS_PER_INCH;
    weight_kg / (height_meters * height_meters)
}

/// Round to two places, ties away from zero on the exact binary value.
///
/// Returns `None` for non-finite values or magnitudes a `Decimal` cannot hold.
pub fn round_bmi(value: f64) -> Option<Decimal> {
    let mut rounded = Decimal::from_f64_retain(value)?
        .round_dp_with_strategy(BMI_SCALE, RoundingStrategy::MidpointAwayFromZero);
    // keep trailing zeros: 25 → 25.00
    rounded.rescale(BMI_SCALE);
    Some(rounded)
}

/// Classify a rounded BMI
///
/// Below 18.50 is underweight, 25.00 and above is overweight.
pub fn classify(bmi: Decimal) -> WeightCategory {
    if bmi < Decimal::new(1850, 2) {
        WeightCategory::Underweight
    } else if bmi < Decimal::new(25, 0) {
        WeightCategory::NormalWeight
    } else {
        WeightCategory::Overweight
    }
}
