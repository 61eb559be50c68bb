//! Scoring and simulation models behind the Metroscape dashboard.
//!
//! Every model is a pure function of its inputs and the immutable
//! [`DashboardDataset`](metroscape_schemas::dataset::DashboardDataset). The
//! [`dashboard::Dashboard`] controller wires input events to those models and
//! pushes the results through a [`dashboard::DashboardView`].

pub mod analysis;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod geo;
pub mod simulation;
pub mod validation;

pub use error::{MetroscapeError, Result};
pub use validation::Validation;
