use leptos::*;
use leptos_router::A;

use crate::APP_NAME;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header>
            <div class="header-left">
                <A href="/" class="logo">{APP_NAME}</A>
            </div>
            <nav class="header-right">
                <A href="/admin/students/create" class="nav-link" active_class="active">
                    "Create Students"
                </A>
                <A href="/faculty/subjects" class="nav-link" active_class="active">
                    "My Subjects"
                </A>
            </nav>
        </header>
    }
}
