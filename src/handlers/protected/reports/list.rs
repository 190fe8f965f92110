use axum::{extract::State, Extension};

use crate::database::ReportFileSummary;
use crate::middleware::{ApiResponse, ApiResult, AuthUser};
use crate::state::AppState;

/// GET /v1/uploadedFiles - list the caller's report files, newest first
pub async fn list(
    State(state): State<AppState>,
    Extension(auth_user): Extension<AuthUser>,
) -> ApiResult<Vec<ReportFileSummary>> {
    let files = state.store.list_by_user(auth_user.user_id).await?;

    tracing::debug!("Listed {} report files for user {}", files.len(), auth_user.user);

    Ok(ApiResponse::success(files))
}
