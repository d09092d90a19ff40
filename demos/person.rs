//! Example demonstrating an observable view model.
//!
//! This example shows how to:
//! - Declare properties with `observable_property!`
//! - Notify a computed property alongside the fields it depends on
//! - Unsubscribe by dropping handles
//!
//! Run with: cargo run --example person

use observable_object::observable_property;
use observable_object::prelude::*;

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
    observable_property!(first_name / set_first_name: String, also = ["full_name"]);
    observable_property!(last_name / set_last_name: String, also = ["full_name"]);
    observable_property!(age / set_age: u32);

    fn full_name(&self) -> Result<String> {
        Ok(format!("{} {}", self.first_name()?, self.last_name()?))
    }
}

fn main() -> Result<()> {
    println!("=== Observable Person Example ===\n");

    let person = Person::default();

    let handle = person.subscribe(|sender, name| match sender.value(name) {
        Some(value) => println!("[Listener] {} changed -> {:?}", name, value),
        None => println!("[Listener] {} changed (computed)", name),
    });

    println!("Setting names...");
    person.set_first_name("Ada".to_string());
    person.set_last_name("Lovelace".to_string());
    println!("Full name: {}\n", person.full_name()?);

    println!("Setting the same last name again (no notification)...");
    let changed = person.set_last_name("Lovelace".to_string());
    println!("Changed: {}\n", changed);

    println!("Age before any write: {}", person.age()?);
    person.set_age(36);

    drop(handle);
    println!("\nUnsubscribed; this write is silent.");
    person.set_age(37);
    println!("Age: {}", person.age()?);

    Ok(())
}
