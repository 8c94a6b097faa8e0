//! Calculator session state.
//!
//! Owns the four form fields, the last result, and the session history.
//! The presentation layer holds one of these and drives it with user
//! actions; nothing here is global.

use crate::{engine, validator, Calculation, Clock, History, InputRecord, Result};

/// Mutable state of one calculator session
#[derive(Clone, Debug, Default)]
pub struct CalculatorState {
    name: String,
    weight_kg: String,
    height_feet: String,
    height_inches: String,
    last: Option<Calculation>,
    history: History,
}

impl CalculatorState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        self.name = value.into();
    }

    pub fn set_weight(&mut self, value: impl Into<String>) {
        self.weight_kg = value.into();
    }

    pub fn set_feet(&mut self, value: impl Into<String>) {
        self.height_feet = value.into();
    }

    pub fn set_inches(&mut self, value: impl Into<String>) {
        self.height_inches = value.into();
    }

    /// The form fields as an input record
    pub fn input_record(&self) -> InputRecord {
        InputRecord::new(
            self.name.clone(),
            self.weight_kg.clone(),
            self.height_feet.clone(),
            self.height_inches.clone(),
        )
    }

    /// Validate the form, compute the BMI, and record it.
    ///
    /// On failure neither the last result nor the history changes.
    pub fn calculate(&mut self, clock: &dyn Clock) -> Result<&Calculation> {
        let input = validator::validate(&self.input_record())?;
        let calculation = engine::calculate(&input, clock)?;

        self.history.append(calculation.entry.clone());
        Ok(self.last.insert(calculation))
    }

    /// Clear the form fields and the displayed result. History is kept.
    pub fn reset(&mut self) {
        self.name.clear();
        self.weight_kg.clear();
        self.height_feet.clear();
        self.height_inches.clear();
        self.last = None;
        tracing::debug!("Form reset ({} history entries kept)", self.history.len());
    }

    /// Most recent successful calculation since the last reset
    pub fn last(&self) -> Option<&Calculation> {
        self.last.as_ref()
    }

    pub fn history(&self) -> &History {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, FixedClock, ValidationError, WeightCategory};
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2024, 6, 4)
                .unwrap()
                .and_hms_opt(15, 45, 12)
                .unwrap(),
        )
    }

    fn filled(name: &str, weight: &str, feet: &str, inches: &str) -> CalculatorState {
        let mut state = CalculatorState::new();
        state.set_name(name);
        state.set_weight(weight);
        state.set_feet(feet);
        state.set_inches(inches);
        state
    }

    #[test]
    fn test_calculate_appends_to_history() {
        let mut state = filled("Alex", "70", "5", "9");

        let calc = state.calculate(&clock()).unwrap();
        assert_eq!(calc.bmi.to_string(), "22.79");
        assert_eq!(calc.category, WeightCategory::NormalWeight);

        assert_eq!(state.history().len(), 1);
        let entry = &state.history().entries()[0];
        assert_eq!(entry.name, "Alex");
        assert_eq!(entry.timestamp, "June 4th 2024, 3:45:12 pm");
        assert_eq!(state.last().map(|c| c.bmi), Some(entry.bmi));
    }

    #[test]
    fn test_empty_name_does_not_mutate() {
        let mut state = filled("", "70", "5", "9");

        let err = state.calculate(&clock()).unwrap_err();
        assert_eq!(err.as_validation(), Some(ValidationError::MissingField));
        assert!(state.history().is_empty());
        assert!(state.last().is_none());
    }

    #[test]
    fn test_non_numeric_weight_does_not_mutate() {
        let mut state = filled("Alex", "abc", "5", "9");

        let err = state.calculate(&clock()).unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::NotNumeric)
        ));
        assert!(state.history().is_empty());
    }

    #[test]
    fn test_failure_keeps_previous_result() {
        let mut state = filled("Alex", "70", "5", "9");
        state.calculate(&clock()).unwrap();

        state.set_feet("0");
        state.set_inches("0");
        let err = state.calculate(&clock()).unwrap_err();
        assert_eq!(err.as_validation(), Some(ValidationError::InvalidRange));

        assert_eq!(state.history().len(), 1);
        assert_eq!(state.last().map(|c| c.bmi.to_string()), Some("22.79".into()));
    }

    #[test]
    fn test_reset_keeps_history() {
        let mut state = filled("Alex", "70", "5", "9");
        state.calculate(&clock()).unwrap();
        state.calculate(&clock()).unwrap();

        state.reset();

        assert_eq!(state.input_record(), InputRecord::default());
        assert!(state.last().is_none());
        assert_eq!(state.history().len(), 2);
    }

    #[test]
    fn test_history_grows_across_resets() {
        let mut state = filled("Alex", "70", "5", "9");
        state.calculate(&clock()).unwrap();
        state.reset();

        state.set_name("Sam");
        state.set_weight("55.5");
        state.set_feet("5");
        state.set_inches("4");
        state.calculate(&clock()).unwrap();

        let names: Vec<_> = state.history().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Alex", "Sam"]);
    }
}
