//! The standard catalog of language-feature examples.
//!
//! Examples are grouped by topic; [`standard_catalog`] wires them up in display
//! order. Examples that need configuration (the async delay and the clock)
//! capture it when the catalog is built.

pub mod basics;
pub mod effects;
pub mod functions;
pub mod ownership;
pub mod types;

use crate::catalog::Catalog;
use crate::config::Settings;
use crate::error::CatalogError;
use crate::example::{Example, Recovery};

/// Build the full catalog in display order.
pub fn standard_catalog(settings: &Settings) -> Result<Catalog, CatalogError> {
    let delay = settings.delay;
    let clock = settings.clock;

    Catalog::from_examples([
        Example::new("primitive-types", basics::primitive_types),
        Example::new("constants", basics::constants),
        Example::new("collections", basics::collections),
        Example::new("tuples", basics::tuples),
        Example::new("loops", basics::loops),
        Example::new("conditionals", basics::conditionals),
        Example::new("enums", basics::enums),
        Example::new("functions", functions::functions),
        Example::new("default-arguments", functions::default_arguments),
        Example::new("mutability-shadowing", ownership::mutability_shadowing),
        Example::new("ownership-borrowing", ownership::ownership_borrowing),
        Example::new("smart-pointers", ownership::smart_pointers),
        Example::new("interfaces", types::interfaces),
        Example::new("data-classes", types::data_classes),
        Example::new("associated-functions", types::associated_functions),
        Example::new("inheritance", types::inheritance),
        Example::new("abstract-types", types::abstract_types),
        Example::new("generics", functions::generics),
        Example::new("higher-order", functions::higher_order),
        Example::new("closures", functions::closures),
        Example::new("type-assertion", types::type_assertion),
        Example::new("null-safety", types::null_safety),
        Example::guarded(
            "exception-handling",
            effects::exception_handling,
            Recovery::division(),
        ),
        Example::new("async-await", move || effects::async_await(delay)),
        Example::new("date-time", move || effects::date_time(clock)),
    ])
}
