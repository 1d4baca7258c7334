//! Plain functions, default arguments, generics and closures.

use crate::error::ExampleError;
use crate::example::Lines;

const DEFAULT_GREETING: &str = "Hello";

/// Sum of two integers.
pub fn add(a: i32, b: i32) -> i32 {
    a + b
}

/// Greeting line; `greeting` falls back to "Hello" when absent.
pub fn greet(name: &str, greeting: Option<&str>) -> String {
    let greeting = greeting.unwrap_or(DEFAULT_GREETING);
    format!("{greeting}, {name}!")
}

/// Returns its argument unchanged, for any type.
pub fn identity<T>(arg: T) -> T {
    arg
}

/// Square of every element, order kept.
pub fn squares(numbers: &[i32]) -> Vec<i32> {
    numbers.iter().map(|n| n * n).collect()
}

/// Even elements only, order kept.
pub fn evens(numbers: &[i32]) -> Vec<i32> {
    numbers.iter().copied().filter(|n| n % 2 == 0).collect()
}

/// Calling a free function.
pub fn functions() -> Result<Lines, ExampleError> {
    Ok(vec![format!("Sum: {}", add(5, 7))])
}

/// `Option` standing in for a default parameter.
pub fn default_arguments() -> Result<Lines, ExampleError> {
    Ok(vec![greet("Alice", None), greet("Bob", Some("Hi"))])
}

/// Explicit type argument on a generic function.
pub fn generics() -> Result<Lines, ExampleError> {
    Ok(vec![format!("Generic identity: {}", identity::<&str>("Test"))])
}

/// `for_each`, `map` and `filter` over a slice.
pub fn higher_order() -> Result<Lines, ExampleError> {
    let numbers = [1, 2, 3, 4, 5];
    let mut out = Vec::new();

    numbers
        .iter()
        .for_each(|n| out.push(format!("forEach: {n}")));
    out.push(format!("Squares: {:?}", squares(&numbers)));
    out.push(format!("Even numbers: {:?}", evens(&numbers)));

    Ok(out)
}

/// Closures bound to names and called later.
pub fn closures() -> Result<Lines, ExampleError> {
    let square = |x: i32| x * x;
    let announce = || "Lambda running".to_string();
    Ok(vec![announce(), format!("Square of 5: {}", square(5))])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greet_uses_default_greeting() {
        assert_eq!(greet("Alice", None), "Hello, Alice!");
    }

    #[test]
    fn test_greet_uses_supplied_greeting() {
        assert_eq!(greet("Bob", Some("Hi")), "Hi, Bob!");
    }

    #[test]
    fn test_squares_keep_order() {
        assert_eq!(squares(&[1, 2, 3, 4, 5]), vec![1, 4, 9, 16, 25]);
    }

    #[test]
    fn test_evens_keep_order() {
        assert_eq!(evens(&[1, 2, 3, 4, 5]), vec![2, 4]);
        assert!(evens(&[1, 3]).is_empty());
    }

    #[test]
    fn test_identity_is_generic() {
        assert_eq!(identity(7u8), 7);
        assert_eq!(identity(vec!["a"]), vec!["a"]);
    }

    #[test]
    fn test_closures() {
        assert_eq!(closures().unwrap(), vec!["Lambda running", "Square of 5: 25"]);
    }

    #[test]
    fn test_higher_order_output() {
        let out = higher_order().unwrap();
        assert_eq!(out.len(), 7);
        assert_eq!(out[5], "Squares: [1, 4, 9, 16, 25]");
        assert_eq!(out[6], "Even numbers: [2, 4]");
    }
}
