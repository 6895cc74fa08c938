use tracing::debug;

use super::CalculatorPanel;
use crate::entities::bmi::{BmiRequest, BmiResult};
use crate::entities::units::{rerender_field, HeightUnit, WeightUnit};
use crate::services::bmi::BmiServiceTrait;

/// BMI calculator panel
pub type BmiPanel = CalculatorPanel<BmiRequest, BmiResult>;

impl CalculatorPanel<BmiRequest, BmiResult> {
    /// Switch the weight unit, re-rendering an entered weight in the new unit
    pub fn set_weight_unit(&mut self, unit: WeightUnit) {
        if let Some(text) = rerender_field(&self.form.weight, self.form.weight_unit, unit) {
            debug!("Weight re-rendered from {} to {}: {}", self.form.weight_unit, unit, text);
            self.form.weight = text;
        }
        self.form.weight_unit = unit;
    }

    /// Switch the height unit, re-rendering an entered height in the new unit
    pub fn set_height_unit(&mut self, unit: HeightUnit) {
        if let Some(text) = rerender_field(&self.form.height, self.form.height_unit, unit) {
            debug!("Height re-rendered from {} to {}: {}", self.form.height_unit, unit, text);
            self.form.height = text;
        }
        self.form.height_unit = unit;
    }

    /// Submit the current form. Returns `false` if a calculation is already pending.
    pub async fn submit(&mut self, service: &dyn BmiServiceTrait) -> bool {
        if !self.begin_calculation() {
            return false;
        }
        let outcome = service.submit(self.form.clone()).await;
        self.settle(outcome);
        true
    }
}
