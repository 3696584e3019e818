use super::*;

#[test]
fn every_view_resolves_from_its_own_route_name() {
    for view in View::ALL {
        assert_eq!(View::from_route(&Route::from(view)), view);
    }
}

#[test]
fn unknown_routes_fall_back_to_home() {
    for name in ["unknown-route-xyz", "", "HOME", "About", "upload_form", " profile"] {
        assert_eq!(View::from_route(&Route::new(name)), View::Home);
    }
}

#[test]
fn default_route_is_home_view() {
    assert_eq!(View::from_route(&Route::default()), View::Home);
    assert_eq!(View::default(), View::Home);
}

#[test]
fn route_names_are_distinct() {
    let mut names: Vec<&str> = View::ALL.iter().map(|v| v.route_name()).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), View::ALL.len());
}
