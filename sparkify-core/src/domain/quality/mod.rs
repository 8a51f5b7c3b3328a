// sparkify-core/src/domain/quality/mod.rs

pub mod check;
pub mod expectation;
pub mod scalar;

pub use check::{CheckResult, FailureKind, QualityCheck, SuiteReport};
pub use expectation::{Expectation, evaluate};
pub use scalar::Scalar;
