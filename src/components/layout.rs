//! Page frame: navbar above the routed page.

use leptos::prelude::*;

use crate::components::navbar::Navbar;

#[component]
pub fn Layout(children: Children) -> impl IntoView {
    view! {
        <div class="app">
            <Navbar/>
            <main class="app__main">{children()}</main>
        </div>
    }
}
