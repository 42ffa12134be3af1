//! Constellation Cost - parametric lifecycle cost and risk estimation for
//! satellite constellations.
//!
//! The costing engine lives in [`domain::costing`]; the rest of the crate
//! reads mission documents, runs the engine and writes the cost report.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
