pub mod table;

use axum::{
    http::{HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

use crate::database::models::ReportFile;

pub const FORBIDDEN_MESSAGE: &str = "User is not allowed to access this file";

/// Failures of the report download path. All of them render as plain text.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("User is not allowed to access this file")]
    Forbidden,

    #[error("Row data could not be decoded: {0}")]
    RowDataDecode(#[source] serde_json::Error),

    #[error("Failed to write report CSV: {0}")]
    CsvWrite(#[from] csv::Error),
}

impl ReportError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ReportError::Forbidden => StatusCode::FORBIDDEN,
            ReportError::RowDataDecode(_) | ReportError::CsvWrite(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing body; internal details stay in the logs
    pub fn message(&self) -> &'static str {
        match self {
            ReportError::Forbidden => FORBIDDEN_MESSAGE,
            ReportError::RowDataDecode(_) => "Report row data is corrupt",
            ReportError::CsvWrite(_) => "Failed to generate report",
        }
    }
}

impl IntoResponse for ReportError {
    fn into_response(self) -> Response {
        (self.status_code(), self.message()).into_response()
    }
}

/// Render a stored report as CSV: the split header line followed by the
/// decoded rows.
///
/// Undecodable row data is logged and replaced by an empty table unless
/// `strict` is set, in which case it is returned as an error.
pub fn render_report(file: &ReportFile, strict: bool) -> Result<Vec<u8>, ReportError> {
    let rows = match table::decode_rows(&file.row_data) {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("Error while decoding row data for report of file {}: {}", file.id, e);
            if strict {
                return Err(ReportError::RowDataDecode(e));
            }
            Vec::new()
        }
    };

    let header = table::split_header(&file.headers);
    let output = table::write_csv(std::iter::once(&header).chain(rows.iter()))?;
    Ok(output)
}

/// `attachment; filename="<name>"`, with `\` and `"` escaped and control
/// characters replaced so the value is always a legal header.
pub fn content_disposition(filename: &str) -> HeaderValue {
    let mut escaped = String::with_capacity(filename.len());
    for c in filename.chars() {
        match c {
            '"' | '\\' => {
                escaped.push('\\');
                escaped.push(c);
            }
            c if c.is_control() => escaped.push('_'),
            c => escaped.push(c),
        }
    }

    let value = format!("attachment; filename=\"{}\"", escaped);
    HeaderValue::from_bytes(value.as_bytes()).unwrap_or_else(|_| HeaderValue::from_static("attachment"))
}
