pub mod config;
pub mod checker;

// Re-export main types
pub use config::PolicyConfig;
pub use checker::{evaluate, EvaluatedRow, Report, Status};
