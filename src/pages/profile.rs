//! Signed-in user's profile.

use leptos::prelude::*;

use crate::router::{View, use_router};
use crate::state::auth::{AuthState, User};

#[component]
pub fn ProfilePage() -> impl IntoView {
    let router = use_router();
    let auth = expect_context::<RwSignal<AuthState>>();

    let initial = move || auth.with(|state| state.user.as_ref().map(User::initial).unwrap_or_default());
    let name = move || auth.with(|state| state.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());
    let email = move || auth.with(|state| state.user.as_ref().map(|u| u.email.clone()).unwrap_or_default());

    view! {
        <section class="page page--profile">
            <Show
                when=move || auth.with(AuthState::is_authenticated)
                fallback=move || {
                    view! {
                        <p class="page__lead">"Sign in to see your forms."</p>
                        <button class="page__cta" on:click=move |_| router.navigate(View::Login)>
                            "Login"
                        </button>
                    }
                }
            >
                <div class="profile__header">
                    <span class="profile__avatar">{initial}</span>
                    <div>
                        <h1 class="page__title">{name}</h1>
                        <p class="profile__email">{email}</p>
                    </div>
                </div>
                <button class="page__cta" on:click=move |_| router.navigate(View::UploadForm)>
                    "New Form"
                </button>
            </Show>
        </section>
    }
}
