//! Common types used across the frontend application.
//!
//! # Categories
//!
//! - **Student Types** - records edited in the batch creation form
//! - **Subject Types** - faculty subject listing
//! - **Error Types** - frontend error handling

use serde::{Deserialize, Serialize};
use thiserror::Error;

// =============================================================================
// Student Types
// =============================================================================

/// One student account to create.
///
/// Serialized as-is into the batch creation request body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub roll_number: String,
}

impl StudentForm {
    /// Read a single field.
    pub fn get(&self, field: StudentField) -> &str {
        match field {
            StudentField::Name => &self.name,
            StudentField::Email => &self.email,
            StudentField::Password => &self.password,
            StudentField::RollNumber => &self.roll_number,
        }
    }

    /// Overwrite a single field.
    pub fn set(&mut self, field: StudentField, value: impl Into<String>) {
        let slot = match field {
            StudentField::Name => &mut self.name,
            StudentField::Email => &mut self.email,
            StudentField::Password => &mut self.password,
            StudentField::RollNumber => &mut self.roll_number,
        };
        *slot = value.into();
    }

    /// True when every field has non-whitespace content.
    pub fn is_complete(&self) -> bool {
        StudentField::ALL
            .iter()
            .all(|field| !self.get(*field).trim().is_empty())
    }
}

/// The editable fields of a [`StudentForm`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StudentField {
    Name,
    Email,
    Password,
    RollNumber,
}

impl StudentField {
    /// All fields, in form order.
    pub const ALL: [StudentField; 4] = [
        StudentField::Name,
        StudentField::Email,
        StudentField::Password,
        StudentField::RollNumber,
    ];

    /// Wire and CSV header name.
    pub fn key(&self) -> &'static str {
        match self {
            StudentField::Name => "name",
            StudentField::Email => "email",
            StudentField::Password => "password",
            StudentField::RollNumber => "roll_number",
        }
    }

    /// Resolve a CSV header name. Matching is exact.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.key() == key)
    }

    /// Label shown above the input.
    pub fn label(&self) -> &'static str {
        match self {
            StudentField::Name => "Name",
            StudentField::Email => "Email",
            StudentField::Password => "Password",
            StudentField::RollNumber => "Roll Number",
        }
    }

    /// HTML input type.
    pub fn input_type(&self) -> &'static str {
        match self {
            StudentField::Email => "email",
            StudentField::Password => "password",
            StudentField::Name | StudentField::RollNumber => "text",
        }
    }
}

// =============================================================================
// Subject Types
// =============================================================================

/// A subject taught by the current faculty member. Server-owned.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subject {
    pub id: String,
    pub name: String,
    pub subject_code: String,
    pub teacher_id: String,
}

/// Response from the teacher subjects endpoint.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SubjectsResponse {
    pub subjects: Vec<Subject>,
}

/// Navigation state handed to the roster and request pages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectNavState {
    pub subject_id: String,
}

// =============================================================================
// Error Types
// =============================================================================

/// Frontend application errors.
///
/// Unified error type for all frontend operations.
#[derive(Clone, Debug, Error)]
pub enum AppError {
    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status.
    #[error("Server error ({status}): {body}")]
    Server { status: u16, body: String },

    /// The response body did not match the expected shape.
    #[error("Invalid response: {0}")]
    Decode(String),

    /// The selected file could not be read.
    #[error("File error: {0}")]
    File(String),

    /// The CSV content could not be turned into students.
    #[error("CSV error: {0}")]
    Csv(String),
}

/// Result type alias for frontend operations.
pub type AppResult<T> = Result<T, AppError>;
