use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{ReportFile, ReportFileSummary};

/// Read access to stored report files.
///
/// Lookups are always scoped to the owning user: a file that belongs to
/// someone else is reported as `DatabaseError::NotFound`, exactly like a
/// file that does not exist.
#[async_trait]
pub trait ReportFileStore: Send + Sync {
    async fn find_by_id_and_user(&self, file_id: i64, user_id: i64) -> Result<ReportFile, DatabaseError>;

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<ReportFileSummary>, DatabaseError>;

    async fn health_check(&self) -> Result<(), DatabaseError>;
}

/// PostgreSQL-backed store reading the `report_files` table
#[derive(Clone)]
pub struct PgReportFileStore {
    pool: PgPool,
}

impl PgReportFileStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportFileStore for PgReportFileStore {
    async fn find_by_id_and_user(&self, file_id: i64, user_id: i64) -> Result<ReportFile, DatabaseError> {
        let query = r#"
            SELECT
                id, user_id, user_name, filename, headers,
                row_data, total_records, created_at
            FROM report_files
            WHERE id = $1
            AND user_id = $2
        "#;

        sqlx::query_as::<_, ReportFile>(query)
            .bind(file_id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| DatabaseError::NotFound(format!("report file {} for user {}", file_id, user_id)))
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<ReportFileSummary>, DatabaseError> {
        let query = r#"
            SELECT
                id, user_id, user_name, filename, total_records, created_at
            FROM report_files
            WHERE user_id = $1
            ORDER BY created_at DESC, id DESC
        "#;

        let files = sqlx::query_as::<_, ReportFileSummary>(query)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(files)
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        DatabaseManager::health_check(&self.pool).await
    }
}
