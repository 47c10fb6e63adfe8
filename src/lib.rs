pub mod error;
pub mod http;
pub mod probe;
pub mod report;
pub mod runner;
pub mod utils;

// Re-export common items
pub use report::write_reports;
pub use runner::{run_plan, verify_deployment};
