//! View-state for the calculator panels.
//!
//! A panel owns its form fields, a pending flag, and the latest result or error.
//! Rendering is left to the presentation layer; the state here is plain data and
//! serializes as such.

pub mod blood_pressure;
pub mod bmi;

use std::fmt::Display;

use serde::Serialize;

pub use blood_pressure::BloodPressurePanel;
pub use bmi::BmiPanel;

/// Form, pending flag, result and error of one calculator panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculatorPanel<F, R> {
    /// Raw field values as entered
    pub form: F,
    is_calculating: bool,
    result: Option<R>,
    error: Option<String>,
}

impl<F: Default, R> Default for CalculatorPanel<F, R> {
    fn default() -> Self {
        Self::new(F::default())
    }
}

impl<F, R> CalculatorPanel<F, R> {
    pub fn new(form: F) -> Self {
        Self {
            form,
            is_calculating: false,
            result: None,
            error: None,
        }
    }

    pub fn is_calculating(&self) -> bool {
        self.is_calculating
    }

    pub fn result(&self) -> Option<&R> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start a calculation, clearing the previous outcome.
    ///
    /// Returns `false` and leaves the state alone while another calculation is pending.
    pub fn begin_calculation(&mut self) -> bool {
        if self.is_calculating {
            return false;
        }
        self.is_calculating = true;
        self.result = None;
        self.error = None;
        true
    }

    pub fn complete(&mut self, result: R) {
        self.is_calculating = false;
        self.result = Some(result);
        self.error = None;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.is_calculating = false;
        self.result = None;
        self.error = Some(message.into());
    }

    /// Record the outcome of a calculation; errors are kept as their display text
    pub fn settle<E: Display>(&mut self, outcome: Result<R, E>) {
        match outcome {
            Ok(result) => self.complete(result),
            Err(e) => self.fail(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type TextPanel = CalculatorPanel<String, u32>;

    #[test]
    fn test_pending_panel_refuses_new_calculation() {
        let mut panel = TextPanel::default();

        assert!(panel.begin_calculation());
        assert!(panel.is_calculating());
        assert!(!panel.begin_calculation());

        panel.complete(7);
        assert!(!panel.is_calculating());
        assert_eq!(panel.result(), Some(&7));
    }

    #[test]
    fn test_new_calculation_clears_previous_outcome() {
        let mut panel = TextPanel::new("form".to_string());
        panel.fail("Please enter valid numbers");
        assert_eq!(panel.error(), Some("Please enter valid numbers"));

        assert!(panel.begin_calculation());
        assert_eq!(panel.error(), None);
        assert_eq!(panel.result(), None);

        panel.settle::<String>(Ok(3));
        panel.settle(Err::<u32, _>("boom"));
        assert_eq!(panel.result(), None);
        assert_eq!(panel.error(), Some("boom"));
    }

    #[test]
    fn test_panel_serializes_as_plain_state() {
        let mut panel = TextPanel::new("70".to_string());
        panel.complete(22);

        let json = serde_json::to_value(&panel).unwrap();
        assert_eq!(json["form"], "70");
        assert_eq!(json["is_calculating"], false);
        assert_eq!(json["result"], 22);
        assert!(json["error"].is_null());
    }
}
