//! Batch student creation, typed in by hand or imported from CSV.
//!
//! Both paths post to the same endpoint; only the manual path is validated.

use leptos::html::Input;
use leptos::*;
use web_sys::{Event, File, HtmlInputElement};

use crate::services::{create_students, read_text};
use crate::{parse_students_csv, StudentBatch, StudentField, StudentForm, CSV_COLUMNS};

#[component]
pub fn CreateStudents() -> impl IntoView {
    let batch = create_rw_signal(StudentBatch::new());
    let (csv_file, set_csv_file) = create_signal(None::<File>);
    let file_input = create_node_ref::<Input>();

    let create = create_action(|students: &Vec<StudentForm>| {
        let students = students.clone();
        async move { create_students(&students).await }
    });

    // Fold each finished request back into the form
    create_effect(move |_| {
        if let Some(outcome) = create.value().get() {
            batch.update(|b| b.complete(&outcome));
        }
    });

    let is_submitting = move || batch.with(StudentBatch::is_submitting);
    let submit_label = move || {
        if is_submitting() {
            "Creating..."
        } else {
            "Create Students"
        }
    };

    let on_csv_change = move |ev: Event| {
        let input: HtmlInputElement = event_target(&ev);
        set_csv_file.set(input.files().and_then(|files| files.get(0)));
    };

    let open_file_picker = move |_| {
        if let Some(input) = file_input.get() {
            input.click();
        }
    };

    let on_csv_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        let Some(file) = csv_file.get_untracked() else {
            return;
        };
        if batch.with_untracked(StudentBatch::is_submitting) {
            return;
        }

        spawn_local(async move {
            let parsed = read_text(&file)
                .await
                .and_then(|text| parse_students_csv(&text));

            match parsed {
                Ok(students) => {
                    log::info!("📄 Read {} student(s) from {}", students.len(), file.name());
                    if let Some(payload) = batch.try_update(|b| b.submit_imported(students)) {
                        create.dispatch(payload);
                    }
                }
                Err(e) => batch.update(|b| b.fail(&e)),
            }
        });
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(payload) = batch.try_update(StudentBatch::submit_manual).flatten() {
            create.dispatch(payload);
        }
    };

    view! {
        <div class="create-students">
            <h2 class="section-title">"Create Students"</h2>

            {move || batch.with(|b| b.success().map(|msg| view! {
                <div class="alert alert-success">
                    <p>{msg.to_string()}</p>
                </div>
            }))}

            {move || batch.with(|b| b.error().map(|msg| view! {
                <div class="alert alert-error">{msg.to_string()}</div>
            }))}

            <div class="csv-import">
                <h3 class="csv-title">"Import Students via CSV"</h3>

                <form class="csv-form" on:submit=on_csv_submit>
                    <input
                        type="file"
                        accept=".csv"
                        style="display:none"
                        node_ref=file_input
                        on:change=on_csv_change
                    />

                    <button type="button" class="btn btn-secondary" on:click=open_file_picker>
                        "Select CSV File"
                    </button>

                    {move || match csv_file.get() {
                        Some(file) => view! { <div class="file-name">{file.name()}</div> }.into_view(),
                        None => view! { <div class="file-name empty">"No file selected"</div> }.into_view(),
                    }}

                    <button
                        type="submit"
                        class="btn btn-primary"
                        disabled=move || csv_file.with(Option::is_none) || is_submitting()
                    >
                        {submit_label}
                    </button>
                </form>

                <p class="csv-hint">
                    {format!("CSV should include columns with headings as {}", CSV_COLUMNS.join(", "))}
                </p>
            </div>

            <form class="student-forms" on:submit=on_submit>
                <For
                    each=move || 0..batch.with(StudentBatch::len)
                    key=|index| *index
                    children=move |index| view! { <StudentCard index=index batch=batch/> }
                />

                <div class="form-actions">
                    <button
                        type="button"
                        class="btn btn-secondary"
                        on:click=move |_| batch.update(StudentBatch::add_student)
                    >
                        "+ Add Another Student"
                    </button>

                    <button
                        type="submit"
                        class="btn btn-primary"
                        class:busy=is_submitting
                        disabled=is_submitting
                    >
                        {submit_label}
                    </button>
                </div>
            </form>
        </div>
    }
}

/// One record of the manual form. Reads its values by position, so cards
/// stay correct when an earlier record is removed.
#[component]
fn StudentCard(index: usize, batch: RwSignal<StudentBatch>) -> impl IntoView {
    let on_remove = move |_| {
        batch.update(|b| {
            b.remove_student(index);
        });
    };

    view! {
        <div class="student-card">
            <div class="student-card-header">
                <h3 class="student-card-title">{format!("Student {}", index + 1)}</h3>
                <Show
                    when=move || batch.with(StudentBatch::can_remove)
                    fallback=|| view! { }
                >
                    <button type="button" class="btn-remove" on:click=on_remove>
                        "Remove"
                    </button>
                </Show>
            </div>

            <div class="student-fields">
                {StudentField::ALL
                    .into_iter()
                    .map(|field| view! { <StudentInput index=index field=field batch=batch/> })
                    .collect_view()}
            </div>
        </div>
    }
}

#[component]
fn StudentInput(index: usize, field: StudentField, batch: RwSignal<StudentBatch>) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-label">{field.label()}</label>
            <input
                type=field.input_type()
                class="form-input"
                required=true
                prop:value=move || batch.with(|b| b.value(index, field))
                on:input=move |ev| batch.update(|b| b.set_field(index, field, event_target_value(&ev)))
            />
        </div>
    }
}
