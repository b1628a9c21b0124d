//! `risk-scorer` — classify retail property inspections by risk.
//!
//! The scoring core ([`scoring`]) is a set of pure functions mapping 0–100
//! scores onto [`models::RiskLevel`]s, display labels, style tokens, chart
//! colors and weighted aggregates. The remaining modules wrap it in a small
//! command-line tool.
//!
//! # Flow
//! 1. Load category weights and policy ([`config::load_config`]).
//! 2. Read an inspection file ([`inspection::load_inspections`]).
//! 3. Assess every property ([`assessment::assess`]).
//! 4. Render the requested report ([`report`]).

pub mod assessment;
pub mod config;
pub mod detector;
pub mod inspection;
pub mod models;
pub mod report;
pub mod scoring;
