//! Plain data types shared by the Metroscape crates.
//!
//! Nothing in here computes anything; validation and the scoring models live in
//! `metroscape-core`.

pub mod dataset;
pub mod file_formats;
pub mod geo;
pub mod index;
pub mod inputs;
pub mod status;
pub mod waste;
