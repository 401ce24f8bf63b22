//! UI Components for the admin console.
//!
//! # Layout Components
//! - [`Header`] - Navigation bar
//! - [`Home`] - Landing page
//! - [`Footer`] - Page footer
//!
//! # Feature Components
//! - [`CreateStudents`] - Batch student creation, manual or CSV
//! - [`SubjectTable`] - Faculty subject listing

mod header;
mod home;
mod footer;
mod create_students;
mod subject_table;

pub use header::*;
pub use home::*;
pub use footer::*;
pub use create_students::*;
pub use subject_table::*;
