//! First step of the form-filling flow. File selection stays in the browser;
//! nothing is uploaded.

use leptos::prelude::*;

use crate::router::{View, use_router};

#[component]
pub fn UploadFormPage() -> impl IntoView {
    let router = use_router();

    view! {
        <section class="page page--upload">
            <h1 class="page__title">"Upload Your Forms"</h1>
            <p class="page__lead">"Upload the forms you want to fill in PDF or image format"</p>
            <input class="upload__input" type="file" multiple accept=".pdf,image/*"/>
            <button class="page__cta" on:click=move |_| router.navigate(View::UploadDocuments)>
                "Continue to Upload Documents"
            </button>
        </section>
    }
}
