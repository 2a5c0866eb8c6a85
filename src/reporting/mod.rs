pub mod formatter;

pub use formatter::{render_batch, render_comparison};
