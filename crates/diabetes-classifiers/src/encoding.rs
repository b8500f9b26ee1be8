//! Mapping of the form's human-readable selections to model columns.
//!
//! Categorical labels are parsed into typed enums first; an unknown label is
//! a [`PredictionError::Configuration`]. This includes the smoking status:
//! a label outside Current/Former/Never is rejected rather than encoded as
//! an all-zero one-hot block.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::controls;
use crate::error::PredictionError;
use crate::feature_vector::FeatureVector;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Gender {
    Female,
    Male,
}

impl Gender {
    pub fn code(self) -> u8 {
        match self {
            Gender::Female => 0,
            Gender::Male => 1,
        }
    }

    pub fn as_label(self) -> &'static str {
        match self {
            Gender::Female => "Female",
            Gender::Male => "Male",
        }
    }
}

impl FromStr for Gender {
    type Err = PredictionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Female" => Ok(Gender::Female),
            "Male" => Ok(Gender::Male),
            _ => Err(PredictionError::configuration(controls::GENDER.name, s)),
        }
    }
}

/// Answer to a Yes/No selector (hypertension, heart disease).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum YesNo {
    No,
    Yes,
}

impl YesNo {
    pub fn code(self) -> u8 {
        match self {
            YesNo::No => 0,
            YesNo::Yes => 1,
        }
    }

    pub fn as_label(self) -> &'static str {
        match self {
            YesNo::No => "No",
            YesNo::Yes => "Yes",
        }
    }

    /// Parse the label of the selector called `field`.
    pub fn parse(field: &'static str, s: &str) -> Result<Self, PredictionError> {
        match s {
            "No" => Ok(YesNo::No),
            "Yes" => Ok(YesNo::Yes),
            _ => Err(PredictionError::configuration(field, s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SmokingStatus {
    Current,
    Former,
    Never,
}

impl SmokingStatus {
    pub fn as_label(self) -> &'static str {
        match self {
            SmokingStatus::Current => "Current",
            SmokingStatus::Former => "Former",
            SmokingStatus::Never => "Never",
        }
    }

    /// One-hot indicators as (current, former, never).
    pub fn one_hot(self) -> (u8, u8, u8) {
        match self {
            SmokingStatus::Current => (1, 0, 0),
            SmokingStatus::Former => (0, 1, 0),
            SmokingStatus::Never => (0, 0, 1),
        }
    }
}

impl FromStr for SmokingStatus {
    type Err = PredictionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Current" => Ok(SmokingStatus::Current),
            "Former" => Ok(SmokingStatus::Former),
            "Never" => Ok(SmokingStatus::Never),
            _ => Err(PredictionError::configuration(
                controls::SMOKING_HISTORY.name,
                s,
            )),
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

impl fmt::Display for YesNo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

impl fmt::Display for SmokingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_label())
    }
}

/// Everything the user picked on the form, already typed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawSelections {
    pub gender: Gender,
    pub age: u32,
    pub bmi: f32,
    pub hba1c_level: f32,
    pub blood_glucose_level: u32,
    pub hypertension: YesNo,
    pub heart_disease: YesNo,
    pub smoking_history: SmokingStatus,
}

/// The categorical part of a submission, as the raw labels sent by the form.
#[derive(Debug, Clone, Copy)]
pub struct SelectionLabels<'a> {
    pub gender: &'a str,
    pub hypertension: &'a str,
    pub heart_disease: &'a str,
    pub smoking_history: &'a str,
}

impl RawSelections {
    /// Combine raw categorical labels with already range-constrained numbers.
    pub fn from_labels(
        labels: SelectionLabels<'_>,
        age: u32,
        bmi: f32,
        hba1c_level: f32,
        blood_glucose_level: u32,
    ) -> Result<Self, PredictionError> {
        Ok(RawSelections {
            gender: labels.gender.parse()?,
            age,
            bmi,
            hba1c_level,
            blood_glucose_level,
            hypertension: YesNo::parse(controls::HYPERTENSION.name, labels.hypertension)?,
            heart_disease: YesNo::parse(controls::HEART_DISEASE.name, labels.heart_disease)?,
            smoking_history: labels.smoking_history.parse()?,
        })
    }
}

impl Default for RawSelections {
    /// The form as first rendered.
    fn default() -> Self {
        RawSelections {
            gender: Gender::Female,
            age: controls::AGE.default as u32,
            bmi: controls::BMI.default as f32,
            hba1c_level: controls::HBA1C_LEVEL.default as f32,
            blood_glucose_level: controls::BLOOD_GLUCOSE_LEVEL.default as u32,
            hypertension: YesNo::No,
            heart_disease: YesNo::No,
            smoking_history: SmokingStatus::Never,
        }
    }
}

/// Build the model's feature vector from the user's selections.
pub fn encode(selections: &RawSelections) -> FeatureVector {
    let (current, former, never) = selections.smoking_history.one_hot();

    FeatureVector {
        gender: selections.gender.code(),
        age: selections.age,
        hypertension: selections.hypertension.code(),
        heart_disease: selections.heart_disease.code(),
        bmi: selections.bmi,
        hba1c_level: selections.hba1c_level,
        blood_glucose_level: selections.blood_glucose_level,
        smoking_history_current: current,
        smoking_history_former: former,
        smoking_history_never: never,
    }
}

/// Parse the labels and encode in one step.
pub fn encode_labels(
    labels: SelectionLabels<'_>,
    age: u32,
    bmi: f32,
    hba1c_level: f32,
    blood_glucose_level: u32,
) -> Result<FeatureVector, PredictionError> {
    let selections = RawSelections::from_labels(labels, age, bmi, hba1c_level, blood_glucose_level)?;
    Ok(encode(&selections))
}
