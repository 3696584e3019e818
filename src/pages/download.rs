//! Final step. There is no conversion backend, so downloading only shows a
//! local notice.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

use leptos::prelude::*;

use crate::router::{View, use_router};

/// Target of the "Back to Profile" action.
pub const RETURN_VIEW: View = View::Profile;

#[component]
pub fn DownloadPage() -> impl IntoView {
    let router = use_router();
    let notice = RwSignal::new(false);

    view! {
        <section class="page page--download">
            <h1 class="page__title">"Form Processing Complete!"</h1>
            <p class="page__lead">"Your form has been filled successfully. Download it below."</p>
            <div class="page__actions">
                <button class="page__cta" on:click=move |_| notice.set(true)>
                    "Download Filled Form"
                </button>
                <button class="page__secondary" on:click=move |_| router.navigate(RETURN_VIEW)>
                    "Back to Profile"
                </button>
            </div>
            <Show when=move || notice.get()>
                <p class="page__notice">"Downloads are not available in this preview."</p>
            </Show>
        </section>
    }
}
