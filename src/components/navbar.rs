//! Top navigation bar.
//!
//! Highlights the active route and swaps the login button for the user's
//! name and a logout button once signed in.

use leptos::prelude::*;

use crate::router::{View, use_router};
use crate::state::auth::AuthState;

#[component]
pub fn Navbar() -> impl IntoView {
    let router = use_router();
    let auth = expect_context::<RwSignal<AuthState>>();

    let link_class = move |view: View| {
        if router.is_at(view) { "navbar__link navbar__link--active" } else { "navbar__link" }
    };

    let on_logout = move |_: leptos::ev::MouseEvent| {
        auth.update(AuthState::logout);
        router.navigate(View::Home);
    };

    let user_name = move || auth.with(|state| state.user.as_ref().map(|u| u.name.clone()).unwrap_or_default());

    view! {
        <nav class="navbar">
            <button class="navbar__brand" on:click=move |_| router.navigate(View::Home)>
                "AsaanForm"
            </button>
            <div class="navbar__links">
                <button class=move || link_class(View::Home) on:click=move |_| router.navigate(View::Home)>
                    "Home"
                </button>
                <button class=move || link_class(View::About) on:click=move |_| router.navigate(View::About)>
                    "About"
                </button>
                <Show
                    when=move || auth.with(AuthState::is_authenticated)
                    fallback=move || {
                        view! {
                            <button class="navbar__login" on:click=move |_| router.navigate(View::Login)>
                                "Login"
                            </button>
                        }
                    }
                >
                    <button class="navbar__user" on:click=move |_| router.navigate(View::Profile)>
                        {user_name}
                    </button>
                    <button class="navbar__logout" on:click=on_logout>
                        "Logout"
                    </button>
                </Show>
            </div>
        </nav>
    }
}
