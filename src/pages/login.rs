//! Login page. Credentials are validated locally; there is no auth backend.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

use crate::router::{View, use_router};
use crate::state::auth::{AuthError, AuthState};

/// Run the login operation against the shared auth signal.
///
/// # Errors
///
/// The validation failure to show inline; the signal is left signed out.
pub fn submit_login(auth: RwSignal<AuthState>, email: &str, password: &str) -> Result<(), AuthError> {
    match auth.try_update(|state| state.login(email, password)) {
        Some(result) => result,
        None => {
            leptos::logging::warn!("login submitted after auth state was disposed");
            Ok(())
        }
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let router = use_router();
    let auth = expect_context::<RwSignal<AuthState>>();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match submit_login(auth, &email.get_untracked(), &password.get_untracked()) {
            Ok(()) => {
                leptos::logging::log!("signed in as {}", email.get_untracked().trim());
                error.set(None);
                router.navigate(View::UploadForm);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <section class="page page--auth">
            <div class="auth-card">
                <h1 class="auth-card__title">"Welcome Back"</h1>
                <p class="auth-card__subtitle">"Sign in to continue with AsaanForm"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="email"
                        placeholder="Email address"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="auth-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="auth-button" type="submit">
                        "Sign In"
                    </button>
                </form>
                <Show when=move || error.with(Option::is_some)>
                    <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <p class="auth-card__switch">
                    "Don't have an account? "
                    <button class="auth-card__link" on:click=move |_| router.navigate(View::Signup)>
                        "Sign up"
                    </button>
                </p>
            </div>
        </section>
    }
}
