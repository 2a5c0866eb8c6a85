pub mod types;
pub mod classification;

pub use types::SimcheckError;
pub use classification::ErrorClassification;
