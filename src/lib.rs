//! Interslavic translator: a web form in front of a fine-tuned NLLB-200 model.
//!
//! The crate is a thin adapter. `languages` maps display names to model tags,
//! `translate` turns a multi-line request into one batched model call, and
//! `routes` exposes both through an HTML form and a JSON API.

pub mod config;
pub mod config_manager;
pub mod errors;
pub mod languages;
pub mod model_service;
pub mod routes;
pub mod state;
pub mod translate;
pub mod ui;
