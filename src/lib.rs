//! Test plan hierarchy: plans own functionalities, which own scenarios,
//! which own ordered steps.

pub mod audit;
pub mod codec;
pub mod config;
pub mod error;
pub mod models;
pub mod render;

pub use error::ModelError;
