//! Faculty subject listing.

use crate::services::http::get_json;
use crate::{AppResult, Subject, SubjectsResponse, TEACHER_SUBJECTS_PATH};

/// Fetch the subjects taught by the signed-in faculty member.
pub async fn fetch_subjects() -> AppResult<Vec<Subject>> {
    let response: SubjectsResponse = get_json(TEACHER_SUBJECTS_PATH).await?;
    log::info!("📚 Loaded {} subject(s)", response.subjects.len());
    Ok(response.subjects)
}
