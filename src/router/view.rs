//! View dispatch: maps a route onto the closed set of known pages.

#[cfg(test)]
#[path = "view_test.rs"]
mod view_test;

use super::route::Route;

/// Top-level pages the app can show.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum View {
    #[default]
    Home,
    About,
    Login,
    Signup,
    UploadForm,
    UploadDocuments,
    EditForm,
    Profile,
    Download,
}

impl View {
    pub const ALL: [View; 9] = [
        View::Home,
        View::About,
        View::Login,
        View::Signup,
        View::UploadForm,
        View::UploadDocuments,
        View::EditForm,
        View::Profile,
        View::Download,
    ];

    /// Resolve `route` to a view. Anything unrecognized shows [`View::Home`].
    pub fn from_route(route: &Route) -> Self {
        match route.as_str() {
            "about" => View::About,
            "login" => View::Login,
            "signup" => View::Signup,
            "upload-form" => View::UploadForm,
            "upload-documents" => View::UploadDocuments,
            "edit-form" => View::EditForm,
            "profile" => View::Profile,
            "download" => View::Download,
            _ => View::Home,
        }
    }

    pub fn route_name(self) -> &'static str {
        match self {
            View::Home => "home",
            View::About => "about",
            View::Login => "login",
            View::Signup => "signup",
            View::UploadForm => "upload-form",
            View::UploadDocuments => "upload-documents",
            View::EditForm => "edit-form",
            View::Profile => "profile",
            View::Download => "download",
        }
    }
}

impl From<View> for Route {
    fn from(view: View) -> Self {
        Route::new(view.route_name())
    }
}
