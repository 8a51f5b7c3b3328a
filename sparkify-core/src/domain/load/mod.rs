// sparkify-core/src/domain/load/mod.rs

pub mod copy;
pub mod spec;
pub mod templates;

pub use copy::{build_copy_statement, build_truncate_statement};
pub use spec::{FileFormat, LoadSpec};
pub use templates::{InsertTemplate, LoadMode, TableLoad};
