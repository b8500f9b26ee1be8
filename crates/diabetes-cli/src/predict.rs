//! One-off prediction from command line flags.
use std::path::Path;

use anyhow::Result;
use clap::ArgMatches;
use serde::Serialize;

use diabetes_classifiers::{encode, FeatureVector, Label, Predictor, RawSelections};

use crate::web::form::SubmittedForm;

#[derive(Debug, Clone, Serialize)]
pub struct PredictOutput {
    pub selections: RawSelections,
    pub features: FeatureVector,
    pub label: Label,
    pub label_code: u8,
    pub probability: f32,
}

impl PredictOutput {
    pub fn to_text(&self) -> String {
        format!("{}\n{}", self.label.headline(), self.label.message())
    }
}

/// Collect the form fields from `predict` subcommand flags; absent flags keep
/// the control defaults.
pub fn form_from_matches(matches: &ArgMatches) -> SubmittedForm {
    let mut form = SubmittedForm::default();

    if let Some(gender) = matches.get_one::<String>("gender") {
        form.gender = gender.clone();
    }
    if let Some(age) = matches.get_one::<f64>("age") {
        form.age = *age;
    }
    if let Some(bmi) = matches.get_one::<f64>("bmi") {
        form.bmi = *bmi;
    }
    if let Some(hba1c) = matches.get_one::<f64>("hba1c_level") {
        form.hba1c_level = *hba1c;
    }
    if let Some(glucose) = matches.get_one::<f64>("blood_glucose_level") {
        form.blood_glucose_level = *glucose;
    }
    if let Some(hypertension) = matches.get_one::<String>("hypertension") {
        form.hypertension = hypertension.clone();
    }
    if let Some(heart_disease) = matches.get_one::<String>("heart_disease") {
        form.heart_disease = heart_disease.clone();
    }
    if let Some(smoking) = matches.get_one::<String>("smoking_history") {
        form.smoking_history = smoking.clone();
    }

    form
}

pub fn predict_form(predictor: &Predictor, form: &SubmittedForm) -> Result<PredictOutput> {
    let selections = form.into_selections()?;
    let features = encode(&selections);
    let prediction = predictor.predict_with_probability(&features)?;

    Ok(PredictOutput {
        selections,
        features,
        label: prediction.label,
        label_code: prediction.label.code(),
        probability: prediction.probability,
    })
}

pub fn run_predict(model_path: &Path, form: &SubmittedForm) -> Result<PredictOutput> {
    let predictor = Predictor::load(model_path)?;
    predict_form(&predictor, form)
}
