use super::CalculatorPanel;
use crate::entities::blood_pressure::{BloodPressureRequest, BloodPressureResult};
use crate::services::blood_pressure::BloodPressureServiceTrait;

/// Blood pressure calculator panel
pub type BloodPressurePanel = CalculatorPanel<BloodPressureRequest, BloodPressureResult>;

impl CalculatorPanel<BloodPressureRequest, BloodPressureResult> {
    /// Submit the current form. Returns `false` if a calculation is already pending.
    pub async fn submit(&mut self, service: &dyn BloodPressureServiceTrait) -> bool {
        if !self.begin_calculation() {
            return false;
        }
        let outcome = service.submit(self.form.clone()).await;
        self.settle(outcome);
        true
    }
}
