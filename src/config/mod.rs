pub mod parser;
pub mod schema;
pub mod types;
pub mod filter;

pub use types::*;
pub use parser::{load_config, parse_config, parse_config_str};
pub use filter::build_filter;
