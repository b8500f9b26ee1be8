//! diabetes-cli: command line and web front end for the diabetes risk
//! predictor.
pub mod input;
pub mod predict;
pub mod web;
