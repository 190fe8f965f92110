pub mod download;
pub mod list;

// Re-export handler functions for use in routing
pub use download::download as report_download;
pub use list::list as uploaded_files;
