pub mod error;
pub mod load;
pub mod pipeline;
pub mod quality;

pub use error::DomainError;
