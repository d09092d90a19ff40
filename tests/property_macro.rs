//! Integration tests for composing types built with `observable_property!`.

use observable_object::observable_property;
use observable_object::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Default)]
struct Person {
    props: ObservableObject,
}

impl Observable for Person {
    fn observable(&self) -> &ObservableObject {
        &self.props
    }
}

impl Person {
    observable_property!(
        /// Given name.
        pub first_name / set_first_name: String,
        also = ["full_name"]
    );
    observable_property!(pub last_name / set_last_name: String, also = ["full_name"]);
    observable_property!(pub age / set_age: u32);
    observable_property!(nickname / set_nickname: Option<String>);

    fn full_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name().unwrap_or_default(),
            self.last_name().unwrap_or_default()
        )
    }
}

fn record(person: &Person) -> (Rc<RefCell<Vec<String>>>, SubscriptionHandle) {
    let log = Rc::new(RefCell::new(Vec::new()));
    let log_clone = Rc::clone(&log);
    let handle = person.subscribe(move |_, name| log_clone.borrow_mut().push(name.to_string()));
    (log, handle)
}

#[test]
fn test_generated_accessors() {
    let person = Person::default();

    assert_eq!(person.age().unwrap(), 0);
    assert!(person.set_age(36));
    assert!(!person.set_age(36));
    assert_eq!(person.age().unwrap(), 36);

    // Property names come from the getter identifiers
    assert_eq!(person.observable().property_names(), vec!["age"]);
}

#[test]
fn test_dependent_property_notified() {
    let person = Person::default();
    let (log, _handle) = record(&person);

    person.set_first_name("Ada".to_string());
    person.set_last_name("Lovelace".to_string());
    person.set_last_name("Lovelace".to_string());

    assert_eq!(
        *log.borrow(),
        vec!["first_name", "full_name", "last_name", "full_name"]
    );
    assert_eq!(person.full_name(), "Ada Lovelace");
}

#[test]
fn test_optional_property() {
    let person = Person::default();
    assert_eq!(person.nickname().unwrap(), None);

    assert!(person.set_nickname(Some("Countess".to_string())));
    assert_eq!(person.nickname().unwrap().as_deref(), Some("Countess"));

    assert!(person.set_nickname(None));
    assert_eq!(person.nickname().unwrap(), None);
    assert!(!person.set_nickname(None));
}

#[test]
fn test_manual_notification_for_computed_property() {
    let person = Person::default();
    let (log, _handle) = record(&person);

    person.notify_property_changed("full_name", &[]);
    assert_eq!(*log.borrow(), vec!["full_name"]);
    assert!(person.observable().is_empty());
}

#[test]
fn test_detached_listener_lives_with_object() {
    let person = Person::default();
    let count = Rc::new(RefCell::new(0u32));

    let count_clone = Rc::clone(&count);
    person
        .subscribe(move |_, _| *count_clone.borrow_mut() += 1)
        .detach();

    person.set_age(1);
    person.set_age(2);
    assert_eq!(*count.borrow(), 2);
    assert_eq!(person.observable().subscriber_count(), 1);
}
