use super::*;
use std::rc::Rc;

fn recording_watch(location: &MemoryLocation) -> (Rc<RefCell<Vec<String>>>, Subscription) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    let sub = location.watch(Box::new(move |fragment| sink.borrow_mut().push(fragment.to_owned())));
    (seen, sub)
}

// =============================================================
// Fragment read/write
// =============================================================

#[test]
fn initial_fragment_drops_delimiter() {
    assert_eq!(MemoryLocation::new("#profile").fragment(), "profile");
    assert_eq!(MemoryLocation::default().fragment(), "");
}

#[test]
fn set_fragment_pushes_history_and_notifies() {
    let location = MemoryLocation::new("home");
    let (seen, _sub) = recording_watch(&location);

    location.set_fragment("about");

    assert_eq!(location.fragment(), "about");
    assert_eq!(location.history_len(), 2);
    assert_eq!(*seen.borrow(), vec!["about"]);
}

#[test]
fn writing_same_fragment_is_silent() {
    let location = MemoryLocation::new("about");
    let (seen, _sub) = recording_watch(&location);

    location.set_fragment("#about");

    assert_eq!(location.history_len(), 1);
    assert!(seen.borrow().is_empty());
}

// =============================================================
// History navigation
// =============================================================

#[test]
fn back_and_forward_walk_history() {
    let location = MemoryLocation::new("");
    let (seen, _sub) = recording_watch(&location);
    location.set_fragment("login");
    location.edit_address("signup");

    assert!(location.back());
    assert_eq!(location.fragment(), "login");
    assert!(location.back());
    assert_eq!(location.fragment(), "");
    assert!(!location.back());

    assert!(location.forward());
    assert!(location.forward());
    assert!(!location.forward());
    assert_eq!(location.fragment(), "signup");

    assert_eq!(*seen.borrow(), vec!["login", "signup", "login", "", "login", "signup"]);
}

#[test]
fn push_after_back_discards_forward_entries() {
    let location = MemoryLocation::new("home");
    location.set_fragment("about");
    location.set_fragment("login");
    assert!(location.back());
    assert!(location.back());

    location.edit_address("profile");

    assert_eq!(location.history_len(), 2);
    assert!(!location.forward());
}

// =============================================================
// Listener lifetime
// =============================================================

#[test]
fn dropped_watch_stops_notifications() {
    let location = MemoryLocation::new("home");
    let (seen, sub) = recording_watch(&location);
    assert_eq!(location.listener_count(), 1);

    drop(sub);
    location.edit_address("about");

    assert_eq!(location.listener_count(), 0);
    assert!(seen.borrow().is_empty());
}
