//! The fixed-order feature vector consumed by the diabetes classifier.

use serde::{Deserialize, Serialize};

use crate::controls::{self, SliderSpec};
use crate::error::PredictionError;

/// Number of columns the classifier was trained on.
pub const N_FEATURES: usize = 10;

/// Column names in the positional order the model expects.
pub const FEATURE_NAMES: [&str; N_FEATURES] = [
    "gender",
    "age",
    "hypertension",
    "heart_disease",
    "bmi",
    "HbA1c_level",
    "blood_glucose_level",
    "smoking_history_current",
    "smoking_history_former",
    "smoking_history_never",
];

/// One encoded patient row. Built fresh for every prediction and never
/// mutated afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    /// 0 = Female, 1 = Male
    pub gender: u8,
    pub age: u32,
    pub hypertension: u8,
    pub heart_disease: u8,
    pub bmi: f32,
    #[serde(rename = "HbA1c_level")]
    pub hba1c_level: f32,
    pub blood_glucose_level: u32,
    pub smoking_history_current: u8,
    pub smoking_history_former: u8,
    pub smoking_history_never: u8,
}

impl FeatureVector {
    /// Values as `f32` in [`FEATURE_NAMES`] order.
    pub fn to_vec(&self) -> Vec<f32> {
        vec![
            self.gender as f32,
            self.age as f32,
            self.hypertension as f32,
            self.heart_disease as f32,
            self.bmi,
            self.hba1c_level,
            self.blood_glucose_level as f32,
            self.smoking_history_current as f32,
            self.smoking_history_former as f32,
            self.smoking_history_never as f32,
        ]
    }

    /// Rebuild a vector from positional values.
    ///
    /// Fails when the slice does not hold exactly [`N_FEATURES`] values, when
    /// a value is not finite, when an integer column holds a fraction, or
    /// when a number falls outside the range its form control allows.
    pub fn from_slice(values: &[f32]) -> Result<Self, PredictionError> {
        if values.len() != N_FEATURES {
            return Err(PredictionError::invalid_input(format!(
                "expected {} features, got {}",
                N_FEATURES,
                values.len()
            )));
        }
        if let Some(idx) = values.iter().position(|v| !v.is_finite()) {
            return Err(PredictionError::invalid_input(format!(
                "{} is not a finite number",
                FEATURE_NAMES[idx]
            )));
        }

        let vector = FeatureVector {
            gender: indicator(values, 0)?,
            age: whole(values, 1)?,
            hypertension: indicator(values, 2)?,
            heart_disease: indicator(values, 3)?,
            bmi: values[4],
            hba1c_level: values[5],
            blood_glucose_level: whole(values, 6)?,
            smoking_history_current: indicator(values, 7)?,
            smoking_history_former: indicator(values, 8)?,
            smoking_history_never: indicator(values, 9)?,
        };
        vector.validate()?;
        Ok(vector)
    }

    /// Check the invariants a vector must satisfy before inference.
    pub fn validate(&self) -> Result<(), PredictionError> {
        let binary = [
            ("gender", self.gender),
            ("hypertension", self.hypertension),
            ("heart_disease", self.heart_disease),
            ("smoking_history_current", self.smoking_history_current),
            ("smoking_history_former", self.smoking_history_former),
            ("smoking_history_never", self.smoking_history_never),
        ];
        for (name, value) in binary {
            if value > 1 {
                return Err(PredictionError::invalid_input(format!(
                    "{} must be 0 or 1, got {}",
                    name, value
                )));
            }
        }

        if !self.bmi.is_finite() || !self.hba1c_level.is_finite() {
            return Err(PredictionError::invalid_input(
                "bmi and HbA1c_level must be finite numbers",
            ));
        }

        in_range(&controls::AGE, FEATURE_NAMES[1], self.age as f64)?;
        in_range(&controls::BMI, FEATURE_NAMES[4], self.bmi as f64)?;
        in_range(&controls::HBA1C_LEVEL, FEATURE_NAMES[5], self.hba1c_level as f64)?;
        in_range(&controls::BLOOD_GLUCOSE_LEVEL, FEATURE_NAMES[6], self.blood_glucose_level as f64)?;

        let smoking = self.smoking_history_current
            + self.smoking_history_former
            + self.smoking_history_never;
        if smoking != 1 {
            return Err(PredictionError::invalid_input(format!(
                "exactly one smoking_history indicator must be set, got {}",
                smoking
            )));
        }

        Ok(())
    }
}

fn in_range(spec: &SliderSpec, name: &str, value: f64) -> Result<(), PredictionError> {
    if value < spec.min || value > spec.max {
        return Err(PredictionError::invalid_input(format!(
            "{} must be between {} and {}, got {}",
            name,
            spec.format(spec.min),
            spec.format(spec.max),
            value
        )));
    }
    Ok(())
}

fn whole(values: &[f32], idx: usize) -> Result<u32, PredictionError> {
    let value = values[idx];
    // `as u32` saturates, so anything past u32::MAX must be refused here.
    if value < 0.0 || value.fract() != 0.0 || value >= u32::MAX as f32 {
        return Err(PredictionError::invalid_input(format!(
            "{} must be a non-negative whole number, got {}",
            FEATURE_NAMES[idx], value
        )));
    }
    Ok(value as u32)
}

fn indicator(values: &[f32], idx: usize) -> Result<u8, PredictionError> {
    match values[idx] {
        v if v == 0.0 => Ok(0),
        v if v == 1.0 => Ok(1),
        v => Err(PredictionError::invalid_input(format!(
            "{} must be 0 or 1, got {}",
            FEATURE_NAMES[idx], v
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FeatureVector {
        FeatureVector {
            gender: 1,
            age: 60,
            hypertension: 1,
            heart_disease: 1,
            bmi: 35.5,
            hba1c_level: 9.2,
            blood_glucose_level: 220,
            smoking_history_current: 1,
            smoking_history_former: 0,
            smoking_history_never: 0,
        }
    }

    #[test]
    fn test_to_vec_follows_feature_names() {
        let values = sample().to_vec();
        assert_eq!(values.len(), FEATURE_NAMES.len());
        assert_eq!(values, vec![1.0, 60.0, 1.0, 1.0, 35.5, 9.2, 220.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn test_from_slice_rejects_wrong_length() {
        let err = FeatureVector::from_slice(&[0.0; 9]).unwrap_err();
        assert!(matches!(err, PredictionError::InvalidInput(_)));
        assert!(err.to_string().contains("expected 10 features, got 9"));
    }

    #[test]
    fn test_from_slice_rejects_nan() {
        let mut values = sample().to_vec();
        values[4] = f32::NAN;
        let err = FeatureVector::from_slice(&values).unwrap_err();
        assert!(err.to_string().contains("bmi"));
    }

    #[test]
    fn test_from_slice_rejects_non_binary_indicator() {
        let mut values = sample().to_vec();
        values[2] = 0.5;
        assert!(FeatureVector::from_slice(&values).is_err());
    }

    #[test]
    fn test_from_slice_rejects_age_outside_slider_range() {
        let mut values = sample().to_vec();
        values[1] = 500.0;
        let err = FeatureVector::from_slice(&values).unwrap_err();
        assert!(matches!(err, PredictionError::InvalidInput(_)));
        assert!(err.to_string().contains("age must be between 18 and 100, got 500"));

        values[1] = 1e10;
        let err = FeatureVector::from_slice(&values).unwrap_err();
        assert!(matches!(err, PredictionError::InvalidInput(_)));
        assert!(err.to_string().contains("age"));
    }

    #[test]
    fn test_validate_checks_numeric_ranges() {
        let mut vector = sample();
        vector.bmi = 9.9;
        assert!(vector.validate().unwrap_err().to_string().contains("bmi"));

        let mut vector = sample();
        vector.hba1c_level = 15.5;
        assert!(vector.validate().unwrap_err().to_string().contains("HbA1c_level"));

        let mut vector = sample();
        vector.blood_glucose_level = 49;
        assert!(vector.validate().unwrap_err().to_string().contains("blood_glucose_level"));

        let mut vector = sample();
        vector.age = 100;
        vector.bmi = 60.0;
        vector.hba1c_level = 4.0;
        vector.blood_glucose_level = 300;
        assert!(vector.validate().is_ok());
    }

    #[test]
    fn test_validate_requires_one_smoking_indicator() {
        let mut vector = sample();
        vector.smoking_history_current = 0;
        assert!(vector.validate().is_err());
        vector.smoking_history_former = 1;
        assert!(vector.validate().is_ok());
    }
}
