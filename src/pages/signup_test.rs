use super::*;

#[test]
fn signup_signs_in_with_given_name() {
    let auth = RwSignal::new(AuthState::default());

    assert_eq!(submit_signup(auth, "Ayesha Khan", "ayesha@example.com", "pw"), Ok(()));

    let name = auth.with_untracked(|state| state.user.as_ref().map(|u| u.name.clone()));
    assert_eq!(name.as_deref(), Some("Ayesha Khan"));
}

#[test]
fn signup_without_name_is_rejected() {
    let auth = RwSignal::new(AuthState::default());

    assert_eq!(submit_signup(auth, " ", "ayesha@example.com", "pw"), Err(AuthError::MissingName));
    assert!(!auth.with_untracked(AuthState::is_authenticated));
}
