use axum::{
    extract::{Path, State},
    http::{header, HeaderValue},
    response::{IntoResponse, Response},
    Extension,
};

use crate::database::DatabaseError;
use crate::middleware::AuthUser;
use crate::report::{content_disposition, render_report, ReportError};
use crate::state::AppState;

/// GET /v1/:id/report - download a report file as CSV
///
/// The lookup is scoped to the caller, so a missing file and a file owned by
/// someone else look the same. Every lookup failure answers 403 with a fixed
/// message; only the logs record which one it was.
pub async fn download(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Extension(auth_user): Extension<AuthUser>,
) -> Result<Response, ReportError> {
    tracing::info!("Downloading report file with ID : {}", id);

    let file = match state.store.find_by_id_and_user(id, auth_user.user_id).await {
        Ok(file) => file,
        Err(DatabaseError::NotFound(msg)) => {
            tracing::warn!("User {} denied report file {}: {}", auth_user.user_id, id, msg);
            return Err(ReportError::Forbidden);
        }
        Err(e) => {
            tracing::error!("Report file {} lookup failed for user {}: {}", id, auth_user.user_id, e);
            return Err(ReportError::Forbidden);
        }
    };

    let body = render_report(&file, state.config.report.strict_row_decode)?;

    tracing::info!("Downloading file with name : {}", file.filename);

    Ok((
        [
            (header::CONTENT_TYPE, HeaderValue::from_static("application/octet-stream")),
            (header::CONTENT_DISPOSITION, content_disposition(&file.filename)),
        ],
        body,
    )
        .into_response())
}
