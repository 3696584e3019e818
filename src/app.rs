//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};

use crate::components::layout::Layout;
use crate::config::AppConfig;
use crate::pages::{
    about::AboutPage, download::DownloadPage, edit_form::EditFormPage, home::HomePage, login::LoginPage,
    profile::ProfilePage, signup::SignupPage, upload_documents::UploadDocumentsPage, upload_form::UploadFormPage,
};
use crate::router::{View, platform_location, provide_router};
use crate::state::auth::AuthState;

/// Root application component.
///
/// Provides auth state and the hash router, then renders the page the
/// current route dispatches to.
#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);

    let router = provide_router(platform_location());
    let page = Memo::new(move |_| View::from_route(&router.route().get()));

    view! {
        <Title text=config.title/>
        <Layout>
            {move || render_page(page.get())}
        </Layout>
    }
}

fn render_page(page: View) -> AnyView {
    match page {
        View::Home => view! { <HomePage/> }.into_any(),
        View::About => view! { <AboutPage/> }.into_any(),
        View::Login => view! { <LoginPage/> }.into_any(),
        View::Signup => view! { <SignupPage/> }.into_any(),
        View::UploadForm => view! { <UploadFormPage/> }.into_any(),
        View::UploadDocuments => view! { <UploadDocumentsPage/> }.into_any(),
        View::EditForm => view! { <EditFormPage/> }.into_any(),
        View::Profile => view! { <ProfilePage/> }.into_any(),
        View::Download => view! { <DownloadPage/> }.into_any(),
    }
}
