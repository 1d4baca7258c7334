//! Primitive types, constants, collections, loops, conditionals and enums.

use crate::error::ExampleError;
use crate::example::Lines;
use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::fmt;

/// Approximation of pi used by the constants example.
pub const PI: f64 = 3.14159;
/// Upper bound shown by the constants example.
pub const MAX_SIZE: usize = 100;

/// Integer, float, double, char, bool and string literals.
#[allow(clippy::approx_constant)]
pub fn primitive_types() -> Result<Lines, ExampleError> {
    let num: i32 = 42;
    let f: f32 = 3.14;
    let d: f64 = 3.1415926535;
    let c: char = 'A';
    let b: bool = true;
    let s: &str = "Hello, Rust!";

    Ok(vec![
        format!("Integer: {num}"),
        format!("Float: {f}"),
        format!("Double: {d}"),
        format!("Char: {c}"),
        format!("Boolean: {b}"),
        format!("String: {s}"),
    ])
}

/// Compile-time constants.
pub fn constants() -> Result<Lines, ExampleError> {
    Ok(vec![format!("PI: {PI}"), format!("MAX_SIZE: {MAX_SIZE}")])
}

/// Fixed array, growable vector, hash set and hash map.
///
/// Hash collections iterate in an unspecified order, so they are copied into
/// their ordered counterparts before printing.
pub fn collections() -> Result<Lines, ExampleError> {
    let numbers = [1, 2, 3, 4, 5];
    let mut list = vec![10, 20, 30];
    list.push(40);

    let mut set = HashSet::new();
    set.insert(2);
    set.insert(1);
    set.insert(2);

    let mut map = HashMap::new();
    map.insert("Alice", 25);
    map.insert("Bob", 30);

    let joined = numbers
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    let set: BTreeSet<_> = set.into_iter().collect();
    let map: BTreeMap<_, _> = map.into_iter().collect();

    Ok(vec![
        format!("Array: {joined}"),
        format!("List: {list:?}"),
        format!("Set: {set:?}"),
        format!("Map: {map:?}"),
    ])
}

/// Heterogeneous pair.
pub fn tuples() -> Result<Lines, ExampleError> {
    let tuple: (&str, u32) = ("Alice", 25);
    Ok(vec![format!("Tuple: {tuple:?}")])
}

/// `for` over a range, `while`, and a body-first loop.
pub fn loops() -> Result<Lines, ExampleError> {
    let mut out = Vec::new();

    for x in 0..5 {
        out.push(format!("For loop: {x}"));
    }

    let mut y = 0;
    while y < 3 {
        out.push(format!("While loop: {y}"));
        y += 1;
    }

    // body runs before the condition is checked
    let mut z = 0;
    loop {
        out.push(format!("Do-while loop: {z}"));
        z += 1;
        if z >= 2 {
            break;
        }
    }

    Ok(out)
}

/// `if` as an expression and `match` on an integer.
pub fn conditionals() -> Result<Lines, ExampleError> {
    let num = 42;
    let size = if num > 50 {
        "num is greater than 50"
    } else {
        "num is 50 or less"
    };

    let day = 2;
    let name = match day {
        1 => "Monday",
        2 => "Tuesday",
        _ => "Other day",
    };

    Ok(vec![size.to_string(), name.to_string()])
}

/// Three-step priority level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Low,
    Medium,
    High,
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Low => "Low",
            Level::Medium => "Medium",
            Level::High => "High",
        };
        f.write_str(name)
    }
}

/// Fieldless enum printed through `Display`.
pub fn enums() -> Result<Lines, ExampleError> {
    let level = Level::High;
    Ok(vec![format!("Enum Level: {level}")])
}
