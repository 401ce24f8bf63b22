//! Application configuration.
//!
//! Centralized configuration for the admin console. Values are fixed at
//! compile time; the API location can be overridden with the `API_URL`
//! environment variable when building the bundle.

/// School backend base URL.
///
/// Taken from `API_URL` at build time, falling back to a local backend.
pub const API_URL: &str = match option_env!("API_URL") {
    Some(url) => url,
    None => "http://localhost:3000",
};

/// Batch student creation endpoint (admin only).
pub const CREATE_STUDENTS_PATH: &str = "/admin/create/students";

/// Subjects taught by the signed-in faculty member.
pub const TEACHER_SUBJECTS_PATH: &str = "/teacher/subjects";

/// Application name shown in the header and page titles.
pub const APP_NAME: &str = "Campus Admin";

/// Column headings a student CSV import must carry.
pub const CSV_COLUMNS: [&str; 4] = ["name", "email", "password", "roll_number"];
