//! Input validation for the calculator form.
//!
//! Checks run in a fixed order: presence of all four fields, then numeric
//! well-formedness of weight and height, then range. The first failing
//! stage decides the error kind.

use crate::{InputRecord, ValidatedInput, ValidationError};

/// Validate a raw input record and parse its numeric fields.
///
/// Height parts keep only their leading whole number; weight keeps full
/// precision.
pub fn validate(record: &InputRecord) -> Result<ValidatedInput, ValidationError> {
    // The name only has to be non-empty; numbers are read trimmed, so
    // blank numeric text counts as missing.
    let numeric = [
        &record.weight_kg,
        &record.height_feet,
        &record.height_inches,
    ];
    if record.name.is_empty() || numeric.iter().any(|f| f.trim().is_empty()) {
        tracing::debug!("Rejected input: missing field");
        return Err(ValidationError::MissingField);
    }

    let parsed = (
        parse_number(&record.weight_kg),
        parse_number(&record.height_feet),
        parse_number(&record.height_inches),
        parse_leading_integer(&record.height_feet),
        parse_leading_integer(&record.height_inches),
    );
    let (weight_kg, feet, inches, whole_feet, whole_inches) = match parsed {
        (Some(w), Some(f), Some(i), Some(wf), Some(wi)) => (w, f, i, wf, wi),
        _ => {
            tracing::debug!("Rejected input: non-numeric weight or height");
            return Err(ValidationError::NotNumeric);
        }
    };

    // Sign comes from the full value so "-0.5" counts as negative.
    if weight_kg <= 0.0
        || feet < 0.0
        || inches < 0.0
        || whole_feet * 12.0 + whole_inches <= 0.0
    {
        tracing::debug!(
            "Rejected input: out of range (weight {}, height {} ft {} in)",
            weight_kg,
            feet,
            inches
        );
        return Err(ValidationError::InvalidRange);
    }

    Ok(ValidatedInput::new(
        record.clone(),
        weight_kg,
        whole_feet,
        whole_inches,
    ))
}

/// Parse trimmed text as a finite number
fn parse_number(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

/// Whole-number reading of height text: optional sign, then the leading
/// digits. Anything after the digits is ignored, so "5.9" is 5 and "1e1"
/// is 1. `None` when there are no leading digits.
fn parse_leading_integer(text: &str) -> Option<f64> {
    let text = text.trim();
    let (negative, unsigned) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };

    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());
    let magnitude = unsigned[..digits_end].parse::<f64>().ok()?;

    // "-0" is plain zero
    Some(if negative { -magnitude + 0.0 } else { magnitude })
}
