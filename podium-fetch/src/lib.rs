// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Podium Fetch
//!
//! HTTP JSON fetching for the Podium report generator.
//!
//! This crate owns the single network-facing seam of the workspace:
//!
//! - [`JsonFetch`] - Object-safe trait for fetching a JSON document by
//!   relative path. Production code uses [`HttpClient`]; tests substitute
//!   scripted in-process implementations.
//! - [`HttpClient`] - `reqwest`-backed implementation bound to a fixed API
//!   base URL.
//! - [`FetchError`] - The one error type of the fetch layer. HTTP status
//!   failures, transport failures, and JSON parse failures all surface here;
//!   callers display the message and do not branch on the cause.
//!
//! No retries, no backoff, no rate limiting: a failed request fails the
//! call, full stop.

pub mod client;
pub mod error;

pub use client::{HttpClient, JsonFetch};
pub use error::FetchError;
