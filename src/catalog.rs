use crate::error::CatalogError;
use crate::example::Example;
use regex::Regex;
use std::collections::HashSet;

/// Ordered, name-unique collection of examples.
///
/// Insertion order is display order. Once handed to the runner a catalog is
/// only read; [`Catalog::select`] builds a new one instead of filtering in place.
#[derive(Debug, Default)]
pub struct Catalog {
    examples: Vec<Example>,
}

impl Catalog {
    /// Create an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an example, rejecting empty or already registered names.
    pub fn add(&mut self, example: Example) -> Result<(), CatalogError> {
        if example.name().trim().is_empty() {
            return Err(CatalogError::EmptyName);
        }
        if self.get(example.name()).is_some() {
            return Err(CatalogError::DuplicateName(example.name().to_string()));
        }
        self.examples.push(example);
        Ok(())
    }

    /// Build a catalog from examples in the given order.
    pub fn from_examples(
        examples: impl IntoIterator<Item = Example>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for example in examples {
            catalog.add(example)?;
        }
        Ok(catalog)
    }

    /// Look up an example by name.
    pub fn get(&self, name: &str) -> Option<&Example> {
        self.examples.iter().find(|e| e.name() == name)
    }

    /// Iterate examples in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Example> {
        self.examples.iter()
    }

    /// Example names in display order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.examples.iter().map(Example::name)
    }

    /// Number of examples.
    pub fn len(&self) -> usize {
        self.examples.len()
    }

    /// Whether the catalog holds no examples.
    pub fn is_empty(&self) -> bool {
        self.examples.is_empty()
    }

    /// Keep only the examples whose name matches `pattern`, in catalog order.
    pub fn select(self, pattern: &str) -> Result<Self, CatalogError> {
        let re = Regex::new(pattern).map_err(|source| CatalogError::Pattern {
            pattern: pattern.to_string(),
            source,
        })?;
        let examples = self
            .examples
            .into_iter()
            .filter(|e| re.is_match(e.name()))
            .collect();
        Ok(Self { examples })
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Example;
    type IntoIter = std::slice::Iter<'a, Example>;

    fn into_iter(self) -> Self::IntoIter {
        self.examples.iter()
    }
}
