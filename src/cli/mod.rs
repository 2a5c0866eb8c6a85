pub mod commands;
pub mod compare;
pub mod batch;

pub use commands::{Cli, Commands};
