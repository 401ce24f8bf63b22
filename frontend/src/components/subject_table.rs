//! Faculty subject listing with links to rosters and enrollment requests.

use leptos::*;
use leptos_router::{State, A};

use crate::services::fetch_subjects;
use crate::{SubjectNavState, SubjectRow, SubjectsView};

const HEADINGS: [&str; 4] = ["Subject Code", "Subject Name", "Actions", "Request Status"];

#[component]
pub fn SubjectTable() -> impl IntoView {
    // Fetched once per mount
    let subjects = create_local_resource(|| (), |_| fetch_subjects());

    let view_state = move || {
        subjects
            .get()
            .map(|result| SubjectsView::from_result(&result))
            .unwrap_or(SubjectsView::Loading)
    };

    move || match view_state() {
        SubjectsView::Loading => view! {
            <div class="loading">
                <div class="spinner"></div>
            </div>
        }
        .into_view(),
        SubjectsView::Failed(message) => view! {
            <div class="error-panel">
                <p>{message}</p>
            </div>
        }
        .into_view(),
        SubjectsView::Empty => view! {
            <div class="empty-panel">
                <p>"No subjects found"</p>
            </div>
        }
        .into_view(),
        SubjectsView::Table(rows) => view! { <SubjectRows rows=rows/> }.into_view(),
    }
}

#[component]
fn SubjectRows(rows: Vec<SubjectRow>) -> impl IntoView {
    view! {
        <div class="table-wrapper">
            <table class="subject-table">
                <thead>
                    <tr>
                        {HEADINGS.iter().map(|heading| view! { <th>{*heading}</th> }).collect_view()}
                    </tr>
                </thead>
                <tbody>
                    {rows
                        .into_iter()
                        .map(|row| {
                            let students_state = nav_state(&row.nav_state);
                            let requests_state = nav_state(&row.nav_state);
                            view! {
                                <tr class="subject-row">
                                    <td>{row.code}</td>
                                    <td>{row.name}</td>
                                    <td>
                                        <A href=row.students_href state=students_state class="btn btn-primary">
                                            "View Students"
                                            <span class="arrow">"→"</span>
                                        </A>
                                    </td>
                                    <td>
                                        <A href=row.requests_href state=requests_state class="btn btn-primary">
                                            "Request Status"
                                            <span class="arrow">"→"</span>
                                        </A>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </div>
    }
}

/// History state carried by both subject links.
fn nav_state(state: &SubjectNavState) -> State {
    match serde_wasm_bindgen::to_value(state) {
        Ok(value) => State(Some(value)),
        Err(e) => {
            log::warn!("Could not encode navigation state for {}: {}", state.subject_id, e);
            State(None)
        }
    }
}
