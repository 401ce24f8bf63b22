//! Campus Admin - Frontend Rust/Leptos Application
//!
//! A WebAssembly admin console for the school-management backend:
//! bulk student account creation and the faculty subject listing.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        App                                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Header (navigation)                                         │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Routes                                                      │
//! │  ├── /                        Home                           │
//! │  ├── /admin/students/create   CreateStudents                 │
//! │  └── /faculty/subjects        SubjectTable                   │
//! ├─────────────────────────────────────────────────────────────┤
//! │  Footer                                                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`types`] - Records exchanged with the backend, errors
//! - [`state`] - Form and listing state, independent of the DOM
//! - [`csv_import`] - Student CSV parsing
//! - [`components`] - UI components
//! - [`services`] - Backend and browser communication

use leptos::*;
use leptos_meta::*;
use leptos_router::*;

// =============================================================================
// Module declarations
// =============================================================================

pub mod config;
pub mod types;
pub mod state;
pub mod csv_import;
pub mod components;
pub mod services;

// =============================================================================
// Re-exports
// =============================================================================

// Configuration
pub use config::*;

// Types
pub use types::{
    // Students
    StudentForm, StudentField,
    // Subjects
    Subject, SubjectsResponse, SubjectNavState,
    // Errors
    AppError, AppResult,
};

// State
pub use state::{StudentBatch, SubjectRow, SubjectsView};

// CSV
pub use csv_import::parse_students_csv;

// Components
pub use components::*;

// =============================================================================
// Application
// =============================================================================

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text=APP_NAME/>
        <Router>
            <Header/>
            <main class="container">
                <Routes>
                    <Route path="/" view=Home/>
                    <Route path="/admin/students/create" view=CreateStudentsPage/>
                    <Route path="/faculty/subjects" view=SubjectsPage/>
                </Routes>
            </main>
            <Footer/>
        </Router>
    }
}

#[component]
fn CreateStudentsPage() -> impl IntoView {
    view! {
        <Title text=format!("Create Students • {}", APP_NAME)/>
        <CreateStudents/>
    }
}

#[component]
fn SubjectsPage() -> impl IntoView {
    view! {
        <Title text=format!("My Subjects • {}", APP_NAME)/>
        <h2 class="section-title">"My Subjects"</h2>
        <SubjectTable/>
    }
}
