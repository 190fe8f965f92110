#![allow(dead_code)]

use anyhow::Result;
use async_trait::async_trait;
use axum::{
    body::Body,
    http::{header, HeaderMap, Request, StatusCode},
    Router,
};
use chrono::{TimeZone, Utc};
use tower::ServiceExt;

use bulk_issuance::auth::{generate_jwt, Claims};
use bulk_issuance::config::AppConfig;
use bulk_issuance::database::{DatabaseError, ReportFile, ReportFileStore, ReportFileSummary};
use bulk_issuance::state::AppState;

pub const SECRET: &str = "integration-test-secret";

/// In-memory stand-in for the report_files table
#[derive(Default)]
pub struct MemoryReportStore {
    files: Vec<ReportFile>,
    broken: bool,
}

impl MemoryReportStore {
    pub fn with_files(files: Vec<ReportFile>) -> Self {
        Self { files, broken: false }
    }

    /// A store whose database is unreachable
    pub fn broken() -> Self {
        Self { files: Vec::new(), broken: true }
    }
}

#[async_trait]
impl ReportFileStore for MemoryReportStore {
    async fn find_by_id_and_user(&self, file_id: i64, user_id: i64) -> Result<ReportFile, DatabaseError> {
        if self.broken {
            return Err(DatabaseError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        self.files
            .iter()
            .find(|f| f.id == file_id && f.user_id == user_id)
            .cloned()
            .ok_or_else(|| DatabaseError::NotFound(format!("report file {} for user {}", file_id, user_id)))
    }

    async fn list_by_user(&self, user_id: i64) -> Result<Vec<ReportFileSummary>, DatabaseError> {
        if self.broken {
            return Err(DatabaseError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        let mut files: Vec<ReportFileSummary> = self
            .files
            .iter()
            .filter(|f| f.user_id == user_id)
            .map(ReportFileSummary::from)
            .collect();
        files.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(files)
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        if self.broken {
            return Err(DatabaseError::Sqlx(sqlx::Error::PoolTimedOut));
        }
        Ok(())
    }
}

pub fn test_config() -> AppConfig {
    let mut config = AppConfig::development();
    config.security.jwt_secret = SECRET.to_string();
    config.api.enable_request_logging = false;
    config
}

pub fn app_with(store: MemoryReportStore, config: AppConfig) -> Router {
    bulk_issuance::app(AppState::new(store, config))
}

pub fn report_file(id: i64, user_id: i64, filename: &str, headers: &str, row_data: &[u8]) -> ReportFile {
    ReportFile {
        id,
        user_id,
        user_name: format!("user-{}", user_id),
        filename: filename.to_string(),
        headers: headers.to_string(),
        row_data: row_data.to_vec(),
        total_records: 1,
        created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + chrono::Duration::minutes(id),
    }
}

pub fn token_for(user_id: i64) -> String {
    generate_jwt(&Claims::new(user_id, format!("user-{}", user_id), 1), SECRET).unwrap()
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl TestResponse {
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("response body is not JSON")
    }
}

pub async fn get(app: Router, uri: &str, token: Option<&str>) -> Result<TestResponse> {
    let mut request = Request::builder().method("GET").uri(uri);
    if let Some(token) = token {
        request = request.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let response = app.oneshot(request.body(Body::empty())?).await?;
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX).await?;

    Ok(TestResponse { status, headers, body: body.to_vec() })
}
