// sparkify/src/commands/mod.rs

pub mod check;
pub mod render;
pub mod template;
