//! HTML rendering of the prediction page.

use maud::{html, Markup, PreEscaped, DOCTYPE};

use diabetes_classifiers::controls::{self, SelectSpec, SliderSpec};
use diabetes_classifiers::{Prediction, RawSelections};

use crate::input::SidebarCredit;

const STYLE: &str = r#"
body {
    margin: 0;
    font-family: "Source Sans Pro", sans-serif;
    color: #31333f;
}
.layout {
    display: flex;
    min-height: 100vh;
}
.sidebar {
    width: 280px;
    padding: 24px;
    background-color: #f0f2f6;
}
.sidebar img {
    max-width: 100%;
    border-radius: 6px;
}
.main {
    flex: 1;
    padding: 32px 48px;
}
.title {
    font-size: 28px;
    font-weight: bold;
}
.info {
    font-size: 18px;
    background-color: #e8f0fe;
    color: #1c4f9c;
    padding: 12px 16px;
    border-radius: 6px;
}
.error {
    font-size: 16px;
    background-color: #fdecea;
    color: #8a1c1c;
    padding: 12px 16px;
    border-radius: 6px;
}
.control {
    font-size: 16px;
    padding: 10px;
}
.control label {
    display: block;
    margin-bottom: 6px;
}
.control select, .control input[type=range] {
    width: 100%;
    max-width: 640px;
}
.predict-button {
    background-color: #1f77b4;
    color: white;
    font-size: 20px;
    border: none;
    border-radius: 10px;
    padding: 15px;
    cursor: pointer;
}
.predict-button:hover {
    background-color: #47a0f5;
}
"#;

/// Static content of the page outside the form.
#[derive(Debug, Clone, PartialEq)]
pub struct PageConfig {
    pub sidebar_text: String,
    pub sidebar_credit: Option<SidebarCredit>,
    pub has_sidebar_image: bool,
}

/// What to show below the submit button.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Prediction(Prediction),
    Rejected(String),
}

pub fn render_page(page: &PageConfig, values: &RawSelections, outcome: Option<&Outcome>) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { "Diabetes Prediction" }
                style { (PreEscaped(STYLE)) }
            }
            body {
                div class="layout" {
                    (sidebar(page))
                    main class="main" {
                        h1 class="title" { "Diabetes Prediction Web App" }
                        div class="info" {
                            "An easy and user-friendly application to predict diabetes based on your health data."
                        }
                        form method="post" action="/predict" {
                            (select_control(&controls::GENDER, values.gender.as_label()))
                            (slider_control(&controls::AGE, values.age as f64))
                            (slider_control(&controls::BMI, values.bmi as f64))
                            (slider_control(&controls::HBA1C_LEVEL, values.hba1c_level as f64))
                            (slider_control(&controls::BLOOD_GLUCOSE_LEVEL, values.blood_glucose_level as f64))
                            (select_control(&controls::HYPERTENSION, values.hypertension.as_label()))
                            (select_control(&controls::HEART_DISEASE, values.heart_disease.as_label()))
                            (select_control(&controls::SMOKING_HISTORY, values.smoking_history.as_label()))
                            div class="control" {
                                button class="predict-button" type="submit" { "Predict Diabetes" }
                            }
                        }
                        @if let Some(outcome) = outcome {
                            (outcome_section(outcome))
                        }
                    }
                }
            }
        }
    }
}

fn sidebar(page: &PageConfig) -> Markup {
    html! {
        aside class="sidebar" {
            h2 { "Diabetic Prediction Project" }
            @if page.has_sidebar_image {
                img src="/sidebar-image" alt="Diabetes";
            }
            p { (page.sidebar_text) }
            @if let Some(credit) = &page.sidebar_credit {
                p class="credit" {
                    "Made with \u{1F36C} By "
                    a href=(credit.url) target="_blank" rel="noopener" { (credit.author) }
                }
            }
        }
    }
}

fn select_control(spec: &SelectSpec, selected: &str) -> Markup {
    html! {
        div class="control" {
            label for=(spec.name) { (spec.label) }
            select name=(spec.name) id=(spec.name) {
                @for option in spec.options {
                    option value=(option) selected[*option == selected] { (option) }
                }
            }
        }
    }
}

fn slider_control(spec: &SliderSpec, value: f64) -> Markup {
    let output_id = format!("{}_value", spec.name);
    html! {
        div class="control" {
            label for=(spec.name) {
                (spec.label) ": "
                output id=(output_id) { (spec.format(value)) }
            }
            input type="range"
                name=(spec.name)
                id=(spec.name)
                min=(spec.format(spec.min))
                max=(spec.format(spec.max))
                step=(spec.format(spec.step))
                value=(spec.format(value))
                oninput=(format!("document.getElementById('{}').value = this.value", output_id));
        }
    }
}

fn outcome_section(outcome: &Outcome) -> Markup {
    match outcome {
        Outcome::Prediction(prediction) => {
            let label = prediction.label;
            html! {
                section class="result" {
                    h3 style=(format!("color: {};", label.color())) { (label.headline()) }
                    p { (label.message()) }
                }
            }
        }
        Outcome::Rejected(reason) => html! {
            div class="error" { (reason) }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diabetes_classifiers::{Label, SmokingStatus};

    fn page() -> PageConfig {
        PageConfig {
            sidebar_text: "Built on <Kaggle> data".to_string(),
            sidebar_credit: None,
            has_sidebar_image: false,
        }
    }

    #[test]
    fn test_initial_page_has_every_control() {
        let html = render_page(&page(), &RawSelections::default(), None).into_string();
        for name in ["gender", "age", "bmi", "hba1c_level", "blood_glucose_level", "hypertension", "heart_disease", "smoking_history"] {
            assert!(html.contains(&format!("name=\"{}\"", name)), "missing control {}", name);
        }
        assert!(html.contains("Predict Diabetes"));
        assert!(!html.contains("Prediction:"));
        assert!(!html.contains("/sidebar-image"));
    }

    #[test]
    fn test_sidebar_text_is_escaped() {
        let html = render_page(&page(), &RawSelections::default(), None).into_string();
        assert!(html.contains("Built on &lt;Kaggle&gt; data"));
    }

    #[test]
    fn test_sidebar_credit_is_a_link() {
        let html = render_page(&page(), &RawSelections::default(), None).into_string();
        assert!(!html.contains("Made with"));

        let credited = PageConfig {
            sidebar_credit: Some(SidebarCredit {
                author: "Jane Doe".to_string(),
                url: "https://example.org/jane".to_string(),
            }),
            ..page()
        };
        let html = render_page(&credited, &RawSelections::default(), None).into_string();
        assert!(html.contains("Made with \u{1F36C} By "));
        assert!(html.contains(r#"href="https://example.org/jane""#));
        assert!(html.contains(">Jane Doe</a>"));
    }

    #[test]
    fn test_selected_values_are_preserved() {
        let values = RawSelections {
            smoking_history: SmokingStatus::Current,
            bmi: 35.5,
            ..RawSelections::default()
        };
        let html = render_page(&page(), &values, None).into_string();
        assert!(html.contains(r#"<option value="Current" selected>Current</option>"#));
        assert!(html.contains(r#"value="35.5""#));
    }

    #[test]
    fn test_prediction_is_rendered() {
        let outcome = Outcome::Prediction(Prediction {
            label: Label::Diabetic,
            probability: 0.9,
        });
        let html = render_page(&page(), &RawSelections::default(), Some(&outcome)).into_string();
        assert!(html.contains("color: red;"));
        assert!(html.contains("Prediction: Diabetic"));
        assert!(html.contains("Consider consulting a healthcare provider"));
    }
}
