//! Landing page.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::router::{View, use_router};
use crate::state::auth::AuthState;

/// Where "Get Started" leads: the upload flow when signed in, else login.
pub fn get_started_target(auth: &AuthState) -> View {
    if auth.is_authenticated() { View::UploadForm } else { View::Login }
}

#[component]
pub fn HomePage() -> impl IntoView {
    let router = use_router();
    let auth = expect_context::<RwSignal<AuthState>>();

    let on_get_started = move |_: leptos::ev::MouseEvent| {
        let target = auth.with_untracked(get_started_target);
        router.navigate(target);
    };

    view! {
        <section class="page page--home">
            <h1 class="page__title">"AsaanForm"</h1>
            <p class="page__lead">
                "Your AI-powered form filling assistant. Upload, process, and download your forms with ease."
            </p>
            <button class="page__cta" on:click=on_get_started>
                "Get Started"
            </button>
        </section>
    }
}
