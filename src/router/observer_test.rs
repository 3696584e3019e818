use super::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

fn recorder() -> (Rc<RefCell<Vec<String>>>, impl Fn(&'static str) -> Box<dyn Fn(&u32)>) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&log);
    let make = move |tag: &'static str| {
        let sink = Rc::clone(&sink);
        Box::new(move |value: &u32| sink.borrow_mut().push(format!("{tag}:{value}"))) as Box<dyn Fn(&u32)>
    };
    (log, make)
}

// =============================================================
// Ordering and delivery
// =============================================================

#[test]
fn notify_runs_observers_in_subscription_order() {
    let observers = Observers::<u32>::new();
    let (log, make) = recorder();
    let _a = observers.subscribe(make("a"));
    let _b = observers.subscribe(make("b"));
    let _c = observers.subscribe(make("c"));

    observers.notify(&7);

    assert_eq!(*log.borrow(), vec!["a:7", "b:7", "c:7"]);
}

#[test]
fn late_subscriber_does_not_see_earlier_values() {
    let observers = Observers::<u32>::new();
    let (log, make) = recorder();
    let _a = observers.subscribe(make("a"));
    observers.notify(&1);

    let _b = observers.subscribe(make("b"));
    observers.notify(&2);

    assert_eq!(*log.borrow(), vec!["a:1", "a:2", "b:2"]);
}

#[test]
fn notify_with_no_observers_is_noop() {
    let observers = Observers::<u32>::default();
    observers.notify(&1);
    assert!(observers.is_empty());
}

// =============================================================
// Unsubscription
// =============================================================

#[test]
fn dropping_subscription_stops_delivery() {
    let observers = Observers::<u32>::new();
    let (log, make) = recorder();
    let a = observers.subscribe(make("a"));
    let _b = observers.subscribe(make("b"));
    assert_eq!(observers.len(), 2);

    drop(a);
    observers.notify(&3);

    assert_eq!(observers.len(), 1);
    assert_eq!(*log.borrow(), vec!["b:3"]);
}

#[test]
fn cancel_releases_immediately() {
    let observers = Observers::<u32>::new();
    let sub = observers.subscribe(|_| {});
    assert!(sub.is_active());
    sub.cancel();
    assert!(observers.is_empty());
}

#[test]
fn subscription_outliving_registry_drops_cleanly() {
    let observers = Observers::<u32>::new();
    let sub = observers.subscribe(|_| {});
    drop(observers);
    drop(sub);
}

#[test]
fn detached_subscription_is_inactive() {
    let sub = Subscription::detached();
    assert!(!sub.is_active());
}

#[test]
fn release_runs_exactly_once() {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let sub = Subscription::new(move || counter.set(counter.get() + 1));
    sub.cancel();
    assert_eq!(calls.get(), 1);
}

// =============================================================
// Re-entrancy
// =============================================================

#[test]
fn observer_removed_mid_round_is_skipped() {
    let observers = Rc::new(Observers::<u32>::new());
    let (log, make) = recorder();
    let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));

    let slot = Rc::clone(&victim);
    let _killer = observers.subscribe(move |_| {
        drop(slot.borrow_mut().take());
    });
    *victim.borrow_mut() = Some(observers.subscribe(make("victim")));

    observers.notify(&1);

    assert!(log.borrow().is_empty());
    assert_eq!(observers.len(), 1);
}

#[test]
fn observer_subscribed_mid_round_waits_for_next_round() {
    let observers = Rc::new(Observers::<u32>::new());
    let (log, make) = recorder();
    let added: Rc<RefCell<Vec<Subscription>>> = Rc::new(RefCell::new(Vec::new()));

    let registry = Rc::clone(&observers);
    let keep = Rc::clone(&added);
    let make = Rc::new(make);
    let make_inner = Rc::clone(&make);
    let _adder = observers.subscribe(move |_| {
        if keep.borrow().is_empty() {
            keep.borrow_mut().push(registry.subscribe(make_inner("late")));
        }
    });

    observers.notify(&1);
    assert!(log.borrow().is_empty());

    observers.notify(&2);
    assert_eq!(*log.borrow(), vec!["late:2"]);
}

#[test]
fn notify_while_stops_once_value_is_superseded() {
    let observers = Rc::new(Observers::<u32>::new());
    let (log, make) = recorder();
    let latest = Rc::new(Cell::new(0));

    let registry = Rc::clone(&observers);
    let bump = Rc::clone(&latest);
    let _bounce = observers.subscribe(move |value| {
        if *value == 1 {
            bump.set(2);
            registry.notify(&2);
        }
    });
    let _tail = observers.subscribe(make("tail"));

    latest.set(1);
    observers.notify_while(&1, || latest.get() == 1);

    assert_eq!(*log.borrow(), vec!["tail:2"]);
}

#[test]
fn notify_while_false_delivers_nothing() {
    let observers = Observers::<u32>::new();
    let (log, make) = recorder();
    let _sub = observers.subscribe(make("a"));

    observers.notify_while(&7, || false);

    assert!(log.borrow().is_empty());
}
