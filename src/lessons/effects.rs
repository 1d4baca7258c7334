//! Examples with side effects: a guarded division, an awaited delay, the clock.

use crate::config::Clock;
use crate::error::{ArithmeticFault, ExampleError};
use crate::example::Lines;
use std::time::Duration;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

pub fn checked_divide(a: i32, b: i32) -> Result<i32, ArithmeticFault> {
    if b == 0 {
        return Err(ArithmeticFault::DivisionByZero);
    }
    a.checked_div(b).ok_or(ArithmeticFault::Overflow)
}

/// Divides by zero on purpose. The catalog registers it guarded, so the runner
/// prints the fallback and the finally line.
pub fn exception_handling() -> Result<Lines, ExampleError> {
    let result = checked_divide(10, 0)?;
    Ok(vec![format!("Result: {result}")])
}

/// Resolves to "Done!" after `after` has elapsed.
pub async fn delay(after: Duration) -> String {
    tokio::time::sleep(after).await;
    "Done!".to_string()
}

/// Awaits [`delay`] in place on a single-threaded runtime, so both lines keep
/// their position in the transcript.
pub fn async_await(after: Duration) -> Result<Lines, ExampleError> {
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    let mut out = vec!["Waiting...".to_string()];
    out.push(rt.block_on(delay(after)));
    Ok(out)
}

pub fn date_time(clock: Clock) -> Result<Lines, ExampleError> {
    let now = clock.now().format(TIMESTAMP_FORMAT);
    Ok(vec![format!("Current date and time: {now}")])
}
