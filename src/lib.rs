//! Contract Lens - contract risk analysis for small businesses
//!
//! Submits contract text (optionally translated from Hindi) to a hosted
//! generation service, validates the structured risk analysis it returns,
//! and serves the resulting scorecard, templates, audit trail and dashboard.

pub mod adapters;
pub mod application;
pub mod bootstrap;
pub mod config;
pub mod domain;
pub mod ports;
