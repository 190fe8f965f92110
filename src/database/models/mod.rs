pub mod report_file;

pub use report_file::{ReportFile, ReportFileSummary};
