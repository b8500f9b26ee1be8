use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use diabetes_classifiers::controls;
use diabetes_classifiers::Predictor;
use diabetes_cli::input::ServeConfig;
use diabetes_cli::predict::{form_from_matches, run_predict};
use diabetes_cli::web;

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("DIABETES_LOG", "error,diabetes=info"))
        .init();

    let matches = Command::new("diabetes")
        .version(clap::crate_version!())
        .about("\u{1FA7A} Diabetes risk prediction from a handful of health metrics")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("serve")
                .about("Serve the prediction web page")
                .arg(
                    Arg::new("config")
                        .help("Path to a JSON server configuration file")
                        .required(false)
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                )
                .arg(model_arg())
                .arg(
                    Arg::new("bind")
                        .short('b')
                        .long("bind")
                        .help("Address to bind. Overrides the bind_address in the configuration file.")
                        .value_parser(clap::builder::NonEmptyStringValueParser::new())
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("port")
                        .short('p')
                        .long("port")
                        .help("Port to listen on. Overrides the port in the configuration file.")
                        .value_parser(clap::value_parser!(u16)),
                )
                .arg(
                    Arg::new("sidebar_image")
                        .long("sidebar-image")
                        .help("Image shown in the page sidebar")
                        .value_parser(clap::value_parser!(PathBuf))
                        .value_hint(ValueHint::FilePath),
                ),
        )
        .subcommand(
            Command::new("predict")
                .about("Predict once from command line values and print the result")
                .arg(model_arg())
                .arg(select_arg("gender", "gender", controls::GENDER.options))
                .arg(number_arg("age", "age", "Age in years"))
                .arg(number_arg("bmi", "bmi", "Body mass index"))
                .arg(number_arg("hba1c_level", "hba1c", "HbA1c level (%)"))
                .arg(number_arg("blood_glucose_level", "glucose", "Blood glucose level (mg/dL)"))
                .arg(select_arg("hypertension", "hypertension", controls::HYPERTENSION.options))
                .arg(select_arg("heart_disease", "heart-disease", controls::HEART_DISEASE.options))
                .arg(select_arg("smoking_history", "smoking", controls::SMOKING_HISTORY.options))
                .arg(
                    Arg::new("json")
                        .long("json")
                        .help("Print the encoded features, label and probability as JSON")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(Command::new("config").about("Print the default server configuration as JSON"))
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    match matches.subcommand() {
        Some(("serve", sub_m)) => handle_serve(sub_m),
        Some(("predict", sub_m)) => handle_predict(sub_m),
        Some(("config", _)) => {
            println!("{}", serde_json::to_string_pretty(&ServeConfig::default())?);
            Ok(())
        }
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn model_arg() -> Arg {
    Arg::new("model_path")
        .short('m')
        .long("model")
        .help("Path to the model artifact (*.json)")
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn select_arg(id: &'static str, long: &'static str, options: &'static [&'static str]) -> Arg {
    Arg::new(id)
        .long(long)
        .help(format!("One of: {}", options.join(", ")))
        .value_parser(options.to_vec())
}

fn number_arg(id: &'static str, long: &'static str, help: &'static str) -> Arg {
    Arg::new(id)
        .long(long)
        .help(help)
        .allow_negative_numbers(true)
        .value_parser(clap::value_parser!(f64))
}

fn handle_serve(matches: &ArgMatches) -> Result<()> {
    let config_path: Option<&PathBuf> = matches.get_one("config");
    match config_path {
        Some(path) => log::info!("[Diabetes::Serve] Using config: {:?}", path),
        None => log::info!("[Diabetes::Serve] No config provided; using defaults."),
    }
    let config = ServeConfig::from_arguments(config_path, matches)?;

    let predictor = match Predictor::load(&config.model_path) {
        Ok(predictor) => predictor,
        Err(e) => {
            log::error!("Failed to load model: {:#}", e);
            std::process::exit(1)
        }
    };

    let runtime = tokio::runtime::Runtime::new()?;
    match runtime.block_on(web::serve(config, predictor)) {
        Ok(_) => Ok(()),
        Err(e) => {
            log::error!("Server failed: {:#}", e);
            std::process::exit(1)
        }
    }
}

fn handle_predict(matches: &ArgMatches) -> Result<()> {
    let model_path = matches
        .get_one::<PathBuf>("model_path")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(ServeConfig::default().model_path));
    let form = form_from_matches(matches);

    match run_predict(&model_path, &form) {
        Ok(output) => {
            if matches.get_flag("json") {
                println!("{}", serde_json::to_string_pretty(&output)?);
            } else {
                println!("{}", output.to_text());
            }
            Ok(())
        }
        Err(e) => {
            log::error!("Prediction failed: {:#}", e);
            std::process::exit(1)
        }
    }
}
