#![cfg(test)]

use std::rc::Rc;
use std::thread;

use super::*;

#[derive(Debug, Clone, Default, PartialEq)]
struct Config {
    name: String,
    retries: u8,
}

#[test]
fn test_of() {
    let p = of(42);
    assert_eq!(p.as_deref(), Some(&42), "The value should be held behind the pointer.");

    let s = of(String::from("hello"));
    assert_eq!(s.as_deref().map(String::as_str), Some("hello"));

    let mut original = 5;
    let p = of(original);
    original += 1;
    assert_eq!(original, 6);
    assert_eq!(p.as_deref(), Some(&5), "The pointer should own a copy, not watch the source.");

    let handle = thread::spawn(|| of("concurrent"));
    let p = handle.join().expect("thread should not panic");
    assert_eq!(p.as_deref(), Some(&"concurrent"), "Created pointers should be sendable.");
}

#[test]
fn test_is_nil() {
    assert!(!is_nil(&of(0)));
    assert!(is_nil(&None::<Box<i32>>));
    assert!(is_nil(&None::<&str>));
    assert!(!is_nil(&Some(Rc::new(1))));
}

#[test]
fn test_indirect_of() {
    assert_eq!(indirect_of(of(42)), 42);
    assert_eq!(indirect_of(Some(&String::from("hi"))), "hi");
    assert_eq!(indirect_of(Some(Rc::new(1.5))), 1.5);

    assert_eq!(indirect_of(None::<&i32>), 0, "Nothing should give the zero value.");
    assert_eq!(indirect_of(None::<Box<String>>), "", "Nothing should give the zero value.");
    assert_eq!(indirect_of(None::<&Config>), Config::default());

    let config = of(Config { name: String::from("prod"), retries: 3 });
    assert_eq!(indirect_of(config.as_deref()).retries, 3, "Borrowing should not consume.");
    assert!(!is_nil(&config));
}

#[test]
fn test_value_of() {
    let fallback = Config { name: String::from("fallback"), retries: 1 };
    let set = Config { name: String::from("set"), retries: 9 };

    assert_eq!(value_of(Some(&set), fallback.clone()), set);
    assert_eq!(value_of(None::<&Config>, fallback.clone()), fallback);
    assert_eq!(
        value_of(Some(&Config::default()), fallback),
        Config::default(),
        "A held zero value should still win over the fallback."
    );
}
