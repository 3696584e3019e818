//! Static about page.

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <section class="page page--about">
            <h1 class="page__title">"About AsaanForm"</h1>
            <p class="page__lead">
                "AsaanForm uses AI to make form filling and document processing effortless, accurate, and fast."
            </p>
        </section>
    }
}
