//! Report renderers for property risk assessments.
//!
//! - [`terminal`] — colored summary box and tables; respects `--verbose` / `--quiet`.
//! - [`pdf`] — cover page with per-level stat cards and level reference,
//!   followed by the property table.
//!
//! JSON output is plain `serde_json` serialization of the models and lives in `main`.

pub mod pdf;
pub mod terminal;
