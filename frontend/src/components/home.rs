//! Landing page

use leptos::*;
use leptos_router::A;

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <div class="hero">
            <h1>"Campus Admin"</h1>
            <p class="subtitle">
                "Create student accounts in bulk, or review the subjects you teach "
                "and the enrollment requests waiting on them."
            </p>
            <div class="hero-actions">
                <A href="/admin/students/create" class="btn btn-primary">"Create Students"</A>
                <A href="/faculty/subjects" class="btn btn-secondary">"My Subjects"</A>
            </div>
        </div>
    }
}
