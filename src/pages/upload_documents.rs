//! Second step: supporting documents for the AI to read from.

use leptos::prelude::*;

use crate::router::{View, use_router};

#[component]
pub fn UploadDocumentsPage() -> impl IntoView {
    let router = use_router();

    view! {
        <section class="page page--upload">
            <h1 class="page__title">"Upload Supporting Documents"</h1>
            <p class="page__lead">"Add the documents AsaanForm should use to fill your form"</p>
            <input class="upload__input" type="file" multiple accept=".pdf,image/*"/>
            <div class="page__actions">
                <button class="page__secondary" on:click=move |_| router.navigate(View::UploadForm)>
                    "Back"
                </button>
                <button class="page__cta" on:click=move |_| router.navigate(View::EditForm)>
                    "Process with AI"
                </button>
            </div>
        </section>
    }
}
