//! Signup page. Mirrors login with an extra name field.

#[cfg(test)]
#[path = "signup_test.rs"]
mod signup_test;

use leptos::prelude::*;

use crate::router::{View, use_router};
use crate::state::auth::{AuthError, AuthState};

/// Run the signup operation against the shared auth signal.
///
/// # Errors
///
/// The validation failure to show inline; the signal is left signed out.
pub fn submit_signup(auth: RwSignal<AuthState>, name: &str, email: &str, password: &str) -> Result<(), AuthError> {
    match auth.try_update(|state| state.signup(name, email, password)) {
        Some(result) => result,
        None => {
            leptos::logging::warn!("signup submitted after auth state was disposed");
            Ok(())
        }
    }
}

#[component]
pub fn SignupPage() -> impl IntoView {
    let router = use_router();
    let auth = expect_context::<RwSignal<AuthState>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match submit_signup(auth, &name.get_untracked(), &email.get_untracked(), &password.get_untracked()) {
            Ok(()) => {
                leptos::logging::log!("account created for {}", email.get_untracked().trim());
                error.set(None);
                router.navigate(View::UploadForm);
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <section class="page page--auth">
            <div class="auth-card">
                <h1 class="auth-card__title">"Create Account"</h1>
                <p class="auth-card__subtitle">"Join AsaanForm and automate your form filling"</p>
                <form class="auth-form" on:submit=on_submit>
                    <input
                        class="auth-input"
                        type="text"
                        placeholder="Full name"
                        prop:value=move || name.get()
                        on:input=move |ev| name.set(event_target_value(&ev))
                    />
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
                        "Sign Up"
                    </button>
                </form>
                <Show when=move || error.with(Option::is_some)>
                    <p class="auth-card__error">{move || error.get().unwrap_or_default()}</p>
                </Show>
                <p class="auth-card__switch">
                    "Already have an account? "
                    <button class="auth-card__link" on:click=move |_| router.navigate(View::Login)>
                        "Sign in"
                    </button>
                </p>
            </div>
        </section>
    }
}
