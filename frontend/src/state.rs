//! UI state for the two admin screens, kept free of DOM concerns.
//!
//! Components hold these values in signals and render from them.

use crate::{AppError, AppResult, StudentField, StudentForm, Subject, SubjectNavState};

/// Shown after a batch is accepted by the backend.
pub const CREATED_MESSAGE: &str = "Successfully created students";
/// Shown when a manual batch has a blank field.
pub const INCOMPLETE_MESSAGE: &str = "Please fill in all fields for each student.";
/// Shown for any failed creation, whatever the cause.
pub const FAILED_MESSAGE: &str = "Failed to create students";

// =============================================================================
// Student batch
// =============================================================================

/// The student creation form: an ordered, never-empty list of records plus
/// the submission status around it.
#[derive(Clone, Debug, PartialEq)]
pub struct StudentBatch {
    students: Vec<StudentForm>,
    submitting: bool,
    success: Option<String>,
    error: Option<String>,
}

impl Default for StudentBatch {
    fn default() -> Self {
        Self {
            students: vec![StudentForm::default()],
            submitting: false,
            success: None,
            error: None,
        }
    }
}

impl StudentBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn students(&self) -> &[StudentForm] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Never true: the list keeps at least one record.
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Whether a record may be removed (more than one left).
    pub fn can_remove(&self) -> bool {
        self.students.len() > 1
    }

    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    pub fn success(&self) -> Option<&str> {
        self.success.as_deref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Value of one field, empty when `index` is out of range.
    pub fn value(&self, index: usize, field: StudentField) -> String {
        self.students
            .get(index)
            .map(|student| student.get(field).to_string())
            .unwrap_or_default()
    }

    /// Append a blank record.
    pub fn add_student(&mut self) {
        self.students.push(StudentForm::default());
    }

    /// Remove the record at `index`.
    ///
    /// The last remaining record cannot be removed; out-of-range indices are
    /// ignored.
    pub fn remove_student(&mut self, index: usize) -> Option<StudentForm> {
        if !self.can_remove() || index >= self.students.len() {
            return None;
        }
        Some(self.students.remove(index))
    }

    /// Edit one field of one record.
    pub fn set_field(&mut self, index: usize, field: StudentField, value: impl Into<String>) {
        if let Some(student) = self.students.get_mut(index) {
            student.set(field, value);
        }
    }

    /// Validate the typed-in records and, if complete, start submitting them.
    ///
    /// Returns the payload to send, or `None` when nothing must be sent
    /// (blank fields, or a batch already in flight).
    pub fn submit_manual(&mut self) -> Option<Vec<StudentForm>> {
        if self.submitting {
            return None;
        }

        if !self.students.iter().all(StudentForm::is_complete) {
            log::warn!("Student form has blank fields, not submitting");
            self.success = None;
            self.error = Some(INCOMPLETE_MESSAGE.to_string());
            return None;
        }

        self.begin();
        Some(self.students.clone())
    }

    /// Start submitting records parsed from a CSV file.
    ///
    /// Imported rows are sent as-is.
    pub fn submit_imported(&mut self, students: Vec<StudentForm>) -> Vec<StudentForm> {
        self.begin();
        students
    }

    fn begin(&mut self) {
        self.submitting = true;
        self.success = None;
        self.error = None;
    }

    /// Apply the outcome of a creation request.
    pub fn complete(&mut self, outcome: &AppResult<()>) {
        match outcome {
            Ok(()) => {
                self.students = vec![StudentForm::default()];
                self.success = Some(CREATED_MESSAGE.to_string());
                self.error = None;
            }
            Err(e) => {
                log::error!("❌ Student creation failed: {}", e);
                self.success = None;
                self.error = Some(FAILED_MESSAGE.to_string());
            }
        }
        self.submitting = false;
    }

    /// Record a failure that happened before any request was made.
    pub fn fail(&mut self, error: &AppError) {
        self.complete(&Err(error.clone()));
    }
}

// =============================================================================
// Subject listing
// =============================================================================

/// Route to a subject's student roster.
pub fn students_href(subject_code: &str) -> String {
    format!("/faculty/students/{}", subject_code)
}

/// Route to a subject's enrollment request status.
pub fn requests_href(subject_code: &str) -> String {
    format!("/faculty/students/requests/{}", subject_code)
}

/// One rendered row of the subject table.
#[derive(Clone, Debug, PartialEq)]
pub struct SubjectRow {
    pub code: String,
    pub name: String,
    pub students_href: String,
    pub requests_href: String,
    pub nav_state: SubjectNavState,
}

impl From<&Subject> for SubjectRow {
    fn from(subject: &Subject) -> Self {
        Self {
            code: subject.subject_code.clone(),
            name: subject.name.clone(),
            students_href: students_href(&subject.subject_code),
            requests_href: requests_href(&subject.subject_code),
            nav_state: SubjectNavState {
                subject_id: subject.id.clone(),
            },
        }
    }
}

/// What the subject table shows.
#[derive(Clone, Debug, PartialEq)]
pub enum SubjectsView {
    Loading,
    Failed(String),
    Empty,
    Table(Vec<SubjectRow>),
}

impl SubjectsView {
    /// View for a finished fetch. Pending fetches are [`SubjectsView::Loading`].
    pub fn from_result(result: &AppResult<Vec<Subject>>) -> Self {
        match result {
            Err(e) => SubjectsView::Failed(format!("Error loading subjects: {}", e)),
            Ok(subjects) if subjects.is_empty() => SubjectsView::Empty,
            Ok(subjects) => SubjectsView::Table(subjects.iter().map(SubjectRow::from).collect()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(tag: &str) -> StudentForm {
        StudentForm {
            name: format!("Student {}", tag),
            email: format!("{}@school.edu", tag),
            password: "pw".into(),
            roll_number: format!("R-{}", tag),
        }
    }

    fn batch_of(students: Vec<StudentForm>) -> StudentBatch {
        StudentBatch {
            students,
            ..StudentBatch::default()
        }
    }

    fn subject(id: &str, code: &str, name: &str) -> Subject {
        Subject {
            id: id.into(),
            name: name.into(),
            subject_code: code.into(),
            teacher_id: "t-1".into(),
        }
    }

    #[test]
    fn test_starts_with_one_blank_record() {
        let batch = StudentBatch::new();
        assert_eq!(batch.students(), &[StudentForm::default()]);
        assert!(!batch.can_remove());
        assert!(!batch.is_submitting());
    }

    #[test]
    fn test_add_keeps_existing_records() {
        let mut batch = batch_of(vec![filled("a"), filled("b")]);
        batch.add_student();

        assert_eq!(
            batch.students(),
            &[filled("a"), filled("b"), StudentForm::default()]
        );
    }

    #[test]
    fn test_remove_keeps_order_of_others() {
        let mut batch = batch_of(vec![filled("a"), filled("b"), filled("c")]);

        assert_eq!(batch.remove_student(1), Some(filled("b")));
        assert_eq!(batch.students(), &[filled("a"), filled("c")]);
    }

    #[test]
    fn test_remove_never_empties_the_list() {
        let mut batch = batch_of(vec![filled("a"), filled("b")]);
        assert!(batch.remove_student(5).is_none());
        assert!(batch.remove_student(0).is_some());
        assert!(batch.remove_student(0).is_none());
        assert_eq!(batch.students(), &[filled("b")]);
    }

    #[test]
    fn test_set_field_touches_only_target() {
        let mut batch = batch_of(vec![filled("a"), filled("b")]);
        batch.set_field(1, StudentField::Email, "new@school.edu");
        batch.set_field(9, StudentField::Name, "ignored");

        assert_eq!(batch.students()[0], filled("a"));
        assert_eq!(batch.value(1, StudentField::Email), "new@school.edu");
        assert_eq!(batch.value(1, StudentField::Name), "Student b");
        assert_eq!(batch.value(9, StudentField::Name), "");
    }

    #[test]
    fn test_blank_field_blocks_submission() {
        let mut second = filled("b");
        second.roll_number = "  ".into();
        let mut batch = batch_of(vec![filled("a"), second]);

        assert!(batch.submit_manual().is_none());
        assert_eq!(batch.error(), Some(INCOMPLETE_MESSAGE));
        assert!(!batch.is_submitting());
        assert_eq!(batch.len(), 2);
    }

    #[test]
    fn test_complete_batch_is_submitted() {
        let mut batch = batch_of(vec![filled("a"), filled("b")]);
        batch.fail(&AppError::Network("offline".into()));

        let payload = batch.submit_manual().unwrap();
        assert_eq!(payload, vec![filled("a"), filled("b")]);
        assert!(batch.is_submitting());
        assert_eq!(batch.error(), None);

        // A second click while in flight sends nothing.
        assert!(batch.submit_manual().is_none());
    }

    #[test]
    fn test_success_resets_to_one_blank_record() {
        let mut batch = batch_of(vec![filled("a"), filled("b"), filled("c")]);
        batch.submit_manual().unwrap();
        batch.complete(&Ok(()));

        assert_eq!(batch.students(), &[StudentForm::default()]);
        assert_eq!(batch.success(), Some(CREATED_MESSAGE));
        assert_eq!(batch.error(), None);
        assert!(!batch.is_submitting());
    }

    #[test]
    fn test_failure_keeps_records() {
        let mut batch = batch_of(vec![filled("a")]);
        batch.submit_manual().unwrap();
        batch.complete(&Err(AppError::Server {
            status: 500,
            body: "boom".into(),
        }));

        assert_eq!(batch.students(), &[filled("a")]);
        assert_eq!(batch.error(), Some(FAILED_MESSAGE));
        assert_eq!(batch.success(), None);
        assert!(!batch.is_submitting());
    }

    #[test]
    fn test_imported_rows_skip_validation() {
        let mut batch = StudentBatch::new();
        let rows = vec![StudentForm {
            name: "Only a name".into(),
            ..StudentForm::default()
        }];

        let payload = batch.submit_imported(rows.clone());
        assert_eq!(payload, rows);
        assert!(batch.is_submitting());
        assert_eq!(batch.error(), None);
    }

    #[test]
    fn test_empty_subjects_show_empty_state() {
        assert_eq!(SubjectsView::from_result(&Ok(vec![])), SubjectsView::Empty);
    }

    #[test]
    fn test_one_row_per_subject() {
        let subjects = vec![
            subject("1", "CS301", "Operating Systems"),
            subject("2", "MA101", "Calculus"),
        ];

        let SubjectsView::Table(rows) = SubjectsView::from_result(&Ok(subjects)) else {
            panic!("expected a table");
        };

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].code, "CS301");
        assert_eq!(rows[0].name, "Operating Systems");
        assert_eq!(rows[1].code, "MA101");
        assert_eq!(rows[1].name, "Calculus");
        assert_eq!(rows[1].students_href, "/faculty/students/MA101");
        assert_eq!(rows[1].requests_href, "/faculty/students/requests/MA101");
        assert_eq!(rows[1].nav_state.subject_id, "2");
    }

    #[test]
    fn test_fetch_error_message() {
        let view = SubjectsView::from_result(&Err(AppError::Network("connection refused".into())));
        assert_eq!(
            view,
            SubjectsView::Failed("Error loading subjects: Network error: connection refused".into())
        );
    }
}
