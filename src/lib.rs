//! Greedy autoregressive evaluation of bracket-matching predictors.
//!
//! The binary drives everything through [`cli::Cli`]. Trained burn
//! models plug in through [`ml::burn_predictor::BurnPredictor`] and
//! [`application::evaluate_use_case::EvaluateUseCase::run`].

pub mod cli;
pub mod application;
pub mod domain;
pub mod data;
pub mod ml;
pub mod infra;
