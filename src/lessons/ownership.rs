//! Mutability, shadowing, borrowing and heap ownership.

use crate::error::ExampleError;
use crate::example::Lines;
use std::rc::Rc;

/// Line printed by a function that only borrows its argument.
pub fn describe_borrowed(s: &str) -> String {
    format!("Borrowed string: {s}")
}

/// A `mut` binding changed in place, then shadowed by a new binding.
pub fn mutability_shadowing() -> Result<Lines, ExampleError> {
    let mut out = Vec::new();

    let mut x = 10;
    out.push(format!("Mutable x before: {x}"));
    x += 5;
    out.push(format!("Mutable x after: {x}"));

    let x = x * 2;
    out.push(format!("Shadowed x: {x}"));

    Ok(out)
}

/// The owner stays usable after lending a shared reference.
pub fn ownership_borrowing() -> Result<Lines, ExampleError> {
    let s = String::from("Ownership");
    let borrowed = describe_borrowed(&s);
    Ok(vec![
        borrowed,
        format!("Original string after borrow: {s}"),
    ])
}

/// Unique heap ownership with `Box`, shared ownership with `Rc`.
pub fn smart_pointers() -> Result<Lines, ExampleError> {
    let unique = Box::new(100);
    let shared = Rc::new(String::from("shared"));
    let count_with_clone = {
        let _other = Rc::clone(&shared);
        Rc::strong_count(&shared)
    };

    Ok(vec![
        format!("Smart pointer value: {unique}"),
        format!("Shared owners: {count_with_clone}"),
        format!("Shared owners after drop: {}", Rc::strong_count(&shared)),
    ])
}
