// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Podium Ergast
//!
//! Ergast API client for the Podium report generator.
//!
//! The Ergast API serves historical Formula 1 data as JSON inside an
//! `MRData` envelope. This crate decodes that envelope once, at the wire
//! boundary, into the domain types of `podium-core`; nothing downstream
//! touches raw JSON.
//!
//! - [`api`] - Wire-format response types, every nested field optional
//! - [`parser`] - Envelope-to-domain extraction, with the missing-data
//!   degradation rules of the report contract
//! - [`ErgastClient`] - Roster loader, per-position result collector, and
//!   the per-constructor best-circuit pipeline

pub mod api;
pub mod client;
pub mod parser;

pub use client::{ErgastClient, ERGAST_API_BASE, RESULT_HISTORY_LIMIT};
