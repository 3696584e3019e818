//! Review step for the AI-filled form. Saving only shows a local notice.

use leptos::prelude::*;

use crate::router::{View, use_router};

#[component]
pub fn EditFormPage() -> impl IntoView {
    let router = use_router();
    let preview = RwSignal::new(false);
    let notice = RwSignal::new(None::<&'static str>);

    let title = move || if preview.get() { "Preview Form" } else { "Edit Filled Form" };
    let toggle_label = move || if preview.get() { "Edit" } else { "Preview" };

    view! {
        <section class="page page--edit">
            <h1 class="page__title">{title}</h1>
            <div class="page__actions">
                <button class="page__secondary" on:click=move |_| preview.update(|p| *p = !*p)>
                    {toggle_label}
                </button>
                <Show when=move || !preview.get()>
                    <button class="page__secondary" on:click=move |_| notice.set(Some("Form saved."))>
                        "Save"
                    </button>
                </Show>
                <button class="page__cta" on:click=move |_| router.navigate(View::Download)>
                    "Download"
                </button>
            </div>
            <Show when=move || notice.with(Option::is_some)>
                <p class="page__notice">{move || notice.get().unwrap_or_default()}</p>
            </Show>
        </section>
    }
}
