// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Podium Core
//!
//! Core types and aggregation algorithms for the Podium report generator.
//!
//! This crate is pure: it performs no I/O and knows nothing about the wire
//! format of the upstream API. The `podium-ergast` crate decodes API
//! responses into the types defined here, and the aggregation functions in
//! [`aggregate`] reduce them to per-circuit totals.
//!
//! ## Key Types
//!
//! - [`Constructor`] - A team competing in a season
//! - [`RaceScore`] - Points earned at one circuit for one queried finishing
//!   position
//! - [`CircuitScore`] - Running per-circuit aggregate (total points plus a
//!   positional occurrence vector)
//! - [`ReportEntry`] - A constructor paired with its best circuit, if any
//!
//! ## Aggregation
//!
//! - [`aggregate_circuits`] - Reduce per-position race scores to per-circuit
//!   aggregates
//! - [`best_circuit`] - Select the circuit with the strictly greatest total

pub mod aggregate;
pub mod models;

pub use aggregate::{aggregate_circuits, best_circuit};
pub use models::{CircuitScore, Constructor, RaceScore, ReportEntry};
