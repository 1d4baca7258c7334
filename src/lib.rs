//! A small runner that walks a fixed catalog of language-feature examples.
//!
//! Every example is a named, zero-argument action that produces a few lines of
//! text. The [`ExampleRunner`] executes a [`Catalog`] front to back and writes
//! each example's lines as one block, so the resulting transcript is the plain
//! concatenation of all outputs in catalog order.
//!
//! The [`lessons`] module holds the standard catalog: primitive types, loops,
//! ownership, traits, closures, `Option`, a guarded division by zero and an
//! awaited delay. The [`config`] module turns command-line flags into
//! [`Settings`], and [`app::run`] is what the binary executes.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod example;
pub mod lessons;
mod runner;

pub use catalog::Catalog;
pub use config::{Cli, Clock, Settings};
pub use error::{ArithmeticFault, CatalogError, ExampleError};
pub use example::{Example, Lines, Recovery};
pub use runner::{ExampleRunner, Section, Transcript};
