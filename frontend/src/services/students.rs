//! Batch student account creation.

use crate::services::http::post_json;
use crate::{AppResult, StudentForm, CREATE_STUDENTS_PATH};

/// Submit a batch of students in a single request.
///
/// The backend treats the batch as one unit; any non-success status fails
/// the whole call.
pub async fn create_students(students: &[StudentForm]) -> AppResult<()> {
    log::info!("📤 Creating {} student(s)", students.len());

    post_json(CREATE_STUDENTS_PATH, students).await?;

    log::info!("✅ Created {} student(s)", students.len());
    Ok(())
}
