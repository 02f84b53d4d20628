pub mod config;
pub mod error;
pub mod init;
pub mod license;
pub mod output;
pub mod policy;
pub mod scanner;

// Re-export main types for easy access
pub use error::{AuditError, ManifestError};
pub use license::{normalize_license, LicenseField, PackageRecord, UNKNOWN_LICENSE};
pub use policy::{evaluate, EvaluatedRow, PolicyConfig, Report, Status};
pub use scanner::scan;
