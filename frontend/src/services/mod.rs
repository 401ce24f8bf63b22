//! Backend and browser services.
//!
//! # Services
//!
//! - [`http`] - credentialed JSON requests to the school backend
//! - [`students`] - batch student creation
//! - [`subjects`] - faculty subject listing
//! - [`files`] - reading uploaded files

pub mod http;
pub mod students;
pub mod subjects;
pub mod files;

pub use students::*;
pub use subjects::*;
pub use files::read_text;
