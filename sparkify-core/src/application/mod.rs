// sparkify-core/src/application/mod.rs

pub mod context;
pub mod engine;
pub mod load;
pub mod ports;
pub mod quality;
pub mod staging;

#[cfg(test)]
pub(crate) mod testing;

// --- RE-EXPORTS (FACADE) ---
// `use sparkify_core::application::{run_suite, stage_table, load_table};`

pub use context::RunContext;
pub use engine::execute_statement;
pub use load::load_table;
pub use quality::run_suite;
pub use staging::{plan_staging, resolve_load_spec, stage_table};
