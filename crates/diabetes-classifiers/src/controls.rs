//! Input controls offered by the prediction form.
//!
//! Ranges, defaults and steps live here so the page, the command line and
//! the encoder tests all agree on what a valid selection looks like.

/// A numeric range selector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub min: f64,
    pub max: f64,
    pub default: f64,
    pub step: f64,
    /// Decimal places shown and kept after snapping to `step`.
    pub decimals: u32,
}

impl SliderSpec {
    /// Constrain `value` the way the slider widget does: clamp to
    /// `[min, max]` and snap to the nearest step. Non-finite input falls
    /// back to the default.
    pub fn clamp(&self, value: f64) -> f64 {
        if !value.is_finite() {
            return self.default;
        }
        let clamped = value.clamp(self.min, self.max);
        let steps = ((clamped - self.min) / self.step).round();
        let snapped = (self.min + steps * self.step).min(self.max);
        let scale = 10f64.powi(self.decimals as i32);
        (snapped * scale).round() / scale
    }

    pub fn format(&self, value: f64) -> String {
        format!("{:.*}", self.decimals as usize, value)
    }
}

/// A fixed-option selector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub options: &'static [&'static str],
    pub default_index: usize,
}

impl SelectSpec {
    pub fn default_option(&self) -> &'static str {
        self.options[self.default_index]
    }

    pub fn contains(&self, option: &str) -> bool {
        self.options.contains(&option)
    }
}

pub const GENDER: SelectSpec = SelectSpec {
    name: "gender",
    label: "Gender",
    options: &["Female", "Male"],
    default_index: 0,
};

pub const AGE: SliderSpec = SliderSpec {
    name: "age",
    label: "Age",
    min: 18.0,
    max: 100.0,
    default: 45.0,
    step: 1.0,
    decimals: 0,
};

pub const BMI: SliderSpec = SliderSpec {
    name: "bmi",
    label: "BMI",
    min: 10.0,
    max: 60.0,
    default: 25.0,
    step: 0.1,
    decimals: 1,
};

pub const HBA1C_LEVEL: SliderSpec = SliderSpec {
    name: "hba1c_level",
    label: "HbA1c Level",
    min: 4.0,
    max: 15.0,
    default: 6.0,
    step: 0.1,
    decimals: 1,
};

pub const BLOOD_GLUCOSE_LEVEL: SliderSpec = SliderSpec {
    name: "blood_glucose_level",
    label: "Blood Glucose Level (mg/dL)",
    min: 50.0,
    max: 300.0,
    default: 100.0,
    step: 1.0,
    decimals: 0,
};

pub const HYPERTENSION: SelectSpec = SelectSpec {
    name: "hypertension",
    label: "Hypertension",
    options: &["No", "Yes"],
    default_index: 0,
};

pub const HEART_DISEASE: SelectSpec = SelectSpec {
    name: "heart_disease",
    label: "Heart Disease",
    options: &["No", "Yes"],
    default_index: 0,
};

pub const SMOKING_HISTORY: SelectSpec = SelectSpec {
    name: "smoking_history",
    label: "Smoking Status",
    options: &["Current", "Former", "Never"],
    default_index: 2,
};

pub const SLIDERS: [SliderSpec; 4] = [AGE, BMI, HBA1C_LEVEL, BLOOD_GLUCOSE_LEVEL];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_to_range() {
        assert_eq!(AGE.clamp(5.0), 18.0);
        assert_eq!(AGE.clamp(130.0), 100.0);
        assert_eq!(BLOOD_GLUCOSE_LEVEL.clamp(299.6), 300.0);
    }

    #[test]
    fn test_clamp_snaps_to_step() {
        assert_eq!(BMI.clamp(25.04), 25.0);
        assert_eq!(BMI.clamp(35.46), 35.5);
        assert_eq!(HBA1C_LEVEL.clamp(9.2), 9.2);
        assert_eq!(AGE.clamp(44.6), 45.0);
    }

    #[test]
    fn test_clamp_non_finite_uses_default() {
        assert_eq!(BMI.clamp(f64::NAN), 25.0);
        assert_eq!(AGE.clamp(f64::INFINITY), 45.0);
    }

    #[test]
    fn test_defaults_are_valid_options() {
        for select in [GENDER, HYPERTENSION, HEART_DISEASE, SMOKING_HISTORY] {
            assert!(select.contains(select.default_option()));
        }
        for slider in SLIDERS {
            assert_eq!(slider.clamp(slider.default), slider.default);
        }
        assert_eq!(SMOKING_HISTORY.default_option(), "Never");
    }
}
