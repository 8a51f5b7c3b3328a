// sparkify-core/src/lib.rs

#![allow(missing_docs)]
// Memory safety
#![deny(unsafe_code)]
// Robustness
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]
#![warn(clippy::perf)]

// --- HEXAGONAL MODULES ---

// 1. Ports: what the core needs from the outside (SQL executor).
pub mod ports;

// 2. Domain: expectations, load specs, statement builders, insert templates.
// Depends on nothing else in the crate.
pub mod domain;

// 3. Infrastructure: DuckDB adapter, Jinja rendering, YAML configuration.
pub mod infrastructure;

// 4. Application: the operators (stage, load, quality suite).
pub mod application;

pub mod error;

// use sparkify_core::SparkifyError;
pub use error::SparkifyError;
