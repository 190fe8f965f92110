pub mod manager;
pub mod models;
pub mod repository;

pub use manager::{DatabaseManager, DatabaseError};
pub use models::{ReportFile, ReportFileSummary};
pub use repository::{PgReportFileStore, ReportFileStore};
