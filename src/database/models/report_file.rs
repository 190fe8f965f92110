use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One generated bulk-issuance report, as written by the upload pipeline
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReportFile {
    pub id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub filename: String,
    /// Comma-joined header line
    pub headers: String,
    /// JSON array of rows, each an array of string cells
    #[serde(skip)]
    pub row_data: Vec<u8>,
    pub total_records: i32,
    pub created_at: DateTime<Utc>,
}

/// Listing view of a report file, without the row payload
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReportFileSummary {
    pub id: i64,
    pub user_id: i64,
    pub user_name: String,
    pub filename: String,
    pub total_records: i32,
    pub created_at: DateTime<Utc>,
}

impl From<&ReportFile> for ReportFileSummary {
    fn from(file: &ReportFile) -> Self {
        Self {
            id: file.id,
            user_id: file.user_id,
            user_name: file.user_name.clone(),
            filename: file.filename.clone(),
            total_records: file.total_records,
            created_at: file.created_at,
        }
    }
}
