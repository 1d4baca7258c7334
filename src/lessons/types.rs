//! Traits standing in for interfaces and inheritance, plain data structs,
//! a closed dynamic value, and `Option` in place of nullable references.

use crate::error::ExampleError;
use crate::example::Lines;

/// Something that can introduce itself.
pub trait Greeter {
    fn name(&self) -> &str;

    fn greet(&self) -> String {
        format!("Hello, my name is {}", self.name())
    }
}

/// Plain data record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    /// Associated constructor, called on the type rather than a value.
    pub fn new(name: impl Into<String>, age: u32) -> Self {
        Self {
            name: name.into(),
            age,
        }
    }
}

impl Greeter for Person {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Capability shared by every animal variant.
///
/// `move_by` has a default body; variants override it when they move
/// differently.
pub trait Mover {
    fn name(&self) -> &str;

    fn move_by(&self, distance: u32) -> String {
        format!("{} moved {} meters", self.name(), distance)
    }
}

/// Mover that keeps the default movement.
#[derive(Debug, Clone)]
pub struct Animal {
    pub name: String,
}

impl Mover for Animal {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Mover with one extra behaviour of its own.
#[derive(Debug, Clone)]
pub struct Dog {
    pub name: String,
}

impl Dog {
    /// The dog's own sound.
    pub fn bark(&self) -> &'static str {
        "Woof!"
    }
}

impl Mover for Dog {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Mover that overrides the default movement.
#[derive(Debug, Clone)]
pub struct Snail {
    pub name: String,
}

impl Mover for Snail {
    fn name(&self) -> &str {
        &self.name
    }

    fn move_by(&self, distance: u32) -> String {
        format!("{} crawled {} millimeters", self.name, distance)
    }
}

/// Value whose concrete type is only known at runtime.
#[derive(Debug, Clone, PartialEq)]
pub enum Dynamic {
    Text(String),
    Number(f64),
}

impl Dynamic {
    /// The text payload, or `None` for any other variant.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Dynamic::Text(text) => Some(text),
            Dynamic::Number(_) => None,
        }
    }
}

/// Required behaviour with no default body: every implementor must supply it.
pub trait Vehicle {
    fn drive(&self) -> String;
}

/// The one concrete vehicle.
#[derive(Debug, Clone, Copy)]
pub struct Car;

impl Vehicle for Car {
    fn drive(&self) -> String {
        "Car driving".to_string()
    }
}

/// Namespace for functions that need no instance.
pub struct MathUtils;

impl MathUtils {
    /// Sum of two integers, called as `MathUtils::add`.
    pub fn add(a: i32, b: i32) -> i32 {
        a + b
    }
}

/// Length of an optional string, or the literal "null" when absent.
pub fn length_or_null(value: Option<&str>) -> String {
    value.map_or_else(|| "null".to_string(), |s| s.len().to_string())
}

/// A trait method with a default body, called on a struct.
pub fn interfaces() -> Result<Lines, ExampleError> {
    let alice = Person {
        name: "Alice".to_string(),
        age: 25,
    };
    Ok(vec![alice.greet()])
}

/// Reading the fields of a plain struct.
pub fn data_classes() -> Result<Lines, ExampleError> {
    let alice = Person {
        name: "Alice".to_string(),
        age: 25,
    };
    Ok(vec![format!("Person: {} ({})", alice.name, alice.age)])
}

/// Default behaviour from a trait plus a type's own method.
pub fn inheritance() -> Result<Lines, ExampleError> {
    let dog = Dog {
        name: "Buddy".to_string(),
    };
    Ok(vec![dog.bark().to_string(), dog.move_by(10)])
}

/// Matching a dynamic value down to the expected variant.
pub fn type_assertion() -> Result<Lines, ExampleError> {
    let some_value = Dynamic::Text("This is a string".to_string());
    let len = some_value.as_text().map_or(0, str::len);
    Ok(vec![format!("String length via assertion: {len}")])
}

/// `Option` with a fallback in place of a null check.
pub fn null_safety() -> Result<Lines, ExampleError> {
    let nullable: Option<&str> = None;
    Ok(vec![format!(
        "Nullable string length: {}",
        length_or_null(nullable)
    )])
}

/// Associated functions and constants, reached through the type name.
pub fn associated_functions() -> Result<Lines, ExampleError> {
    let bob = Person::new("Bob", 30);
    Ok(vec![
        format!("Static add: {}", MathUtils::add(3, 4)),
        format!("Constructed: {} ({})", bob.name, bob.age),
    ])
}

/// Driving through a trait whose only method is required.
pub fn abstract_types() -> Result<Lines, ExampleError> {
    let vehicles: Vec<Box<dyn Vehicle>> = vec![Box::new(Car)];
    Ok(vehicles.iter().map(|v| v.drive()).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movers_dispatch_per_variant() {
        let movers: Vec<Box<dyn Mover>> = vec![
            Box::new(Animal {
                name: "Generic".to_string(),
            }),
            Box::new(Dog {
                name: "Buddy".to_string(),
            }),
            Box::new(Snail {
                name: "Gary".to_string(),
            }),
        ];
        let moved: Vec<String> = movers.iter().map(|m| m.move_by(3)).collect();
        assert_eq!(
            moved,
            vec![
                "Generic moved 3 meters",
                "Buddy moved 3 meters",
                "Gary crawled 3 millimeters",
            ]
        );
    }

    #[test]
    fn test_length_or_null() {
        assert_eq!(length_or_null(None), "null");
        assert_eq!(length_or_null(Some("abc")), "3");
    }

    #[test]
    fn test_dynamic_number_is_not_text() {
        assert_eq!(Dynamic::Number(1.5).as_text(), None);
        assert_eq!(Dynamic::Text("x".to_string()).as_text(), Some("x"));
    }

    #[test]
    fn test_inheritance_lines() {
        assert_eq!(
            inheritance().unwrap(),
            vec!["Woof!", "Buddy moved 10 meters"]
        );
    }

    #[test]
    fn test_associated_functions() {
        assert_eq!(
            associated_functions().unwrap(),
            vec!["Static add: 7", "Constructed: Bob (30)"]
        );
        assert_eq!(Person::new("Ann", 3), Person { name: "Ann".to_string(), age: 3 });
    }

    #[test]
    fn test_abstract_types() {
        assert_eq!(abstract_types().unwrap(), vec!["Car driving"]);
    }
}
