// sparkify-core/src/ports/mod.rs

pub mod executor;

pub use executor::SqlExecutor;
