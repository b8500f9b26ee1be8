use serde::{Deserialize, Serialize};

use diabetes_classifiers::controls::{self, SliderSpec};
use diabetes_classifiers::encoding::{RawSelections, SelectionLabels};
use diabetes_classifiers::{Gender, PredictionError, SmokingStatus, YesNo};

/// A form submission as received, before any control constraints apply.
/// Fields absent from the submission take the control defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmittedForm {
    pub gender: String,
    pub age: f64,
    pub bmi: f64,
    pub hba1c_level: f64,
    pub blood_glucose_level: f64,
    pub hypertension: String,
    pub heart_disease: String,
    pub smoking_history: String,
}

impl Default for SubmittedForm {
    fn default() -> Self {
        SubmittedForm {
            gender: controls::GENDER.default_option().to_string(),
            age: controls::AGE.default,
            bmi: controls::BMI.default,
            hba1c_level: controls::HBA1C_LEVEL.default,
            blood_glucose_level: controls::BLOOD_GLUCOSE_LEVEL.default,
            hypertension: controls::HYPERTENSION.default_option().to_string(),
            heart_disease: controls::HEART_DISEASE.default_option().to_string(),
            smoking_history: controls::SMOKING_HISTORY.default_option().to_string(),
        }
    }
}

impl SubmittedForm {
    /// Apply the slider constraints to the numbers and parse the labels.
    pub fn into_selections(&self) -> Result<RawSelections, PredictionError> {
        let labels = SelectionLabels {
            gender: &self.gender,
            hypertension: &self.hypertension,
            heart_disease: &self.heart_disease,
            smoking_history: &self.smoking_history,
        };
        RawSelections::from_labels(
            labels,
            whole(&controls::AGE, self.age),
            controls::BMI.clamp(self.bmi) as f32,
            controls::HBA1C_LEVEL.clamp(self.hba1c_level) as f32,
            whole(&controls::BLOOD_GLUCOSE_LEVEL, self.blood_glucose_level),
        )
    }

    /// The selections to re-render after a rejected submission: clamped
    /// numbers as submitted, with each unrecognized label reset to its
    /// control default.
    pub fn best_effort_selections(&self) -> RawSelections {
        let defaults = RawSelections::default();
        RawSelections {
            gender: self.gender.parse::<Gender>().unwrap_or(defaults.gender),
            age: whole(&controls::AGE, self.age),
            bmi: controls::BMI.clamp(self.bmi) as f32,
            hba1c_level: controls::HBA1C_LEVEL.clamp(self.hba1c_level) as f32,
            blood_glucose_level: whole(&controls::BLOOD_GLUCOSE_LEVEL, self.blood_glucose_level),
            hypertension: YesNo::parse(controls::HYPERTENSION.name, &self.hypertension)
                .unwrap_or(defaults.hypertension),
            heart_disease: YesNo::parse(controls::HEART_DISEASE.name, &self.heart_disease)
                .unwrap_or(defaults.heart_disease),
            smoking_history: self
                .smoking_history
                .parse::<SmokingStatus>()
                .unwrap_or(defaults.smoking_history),
        }
    }
}

fn whole(spec: &SliderSpec, value: f64) -> u32 {
    spec.clamp(value) as u32
}
