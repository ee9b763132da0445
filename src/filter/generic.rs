//! Generic filtering framework
//!
//! This module provides a trait-based approach to filtering domain values.
//! Filters are predicates: they never modify what they look at.

use std::fmt::Debug;

/// A generic filter trait that can be applied to any data type
pub trait Filter<T>: Debug {
    /// Whether the value is kept by this filter
    fn matches(&self, input: &T) -> bool;
}

/// A type-erased filter so heterogeneous filters can be combined
pub type BoxedFilter<T> = Box<dyn Filter<T> + Send + Sync>;

/// A filter that combines multiple filters with a logical AND
#[derive(Debug)]
pub struct AndFilter<T> {
    filters: Vec<BoxedFilter<T>>,
}

impl<T> AndFilter<T> {
    /// Create a new AND filter
    #[must_use]
    pub fn new(filters: Vec<BoxedFilter<T>>) -> Self {
        Self { filters }
    }
}

impl<T: Debug> Filter<T> for AndFilter<T> {
    fn matches(&self, input: &T) -> bool {
        self.filters.iter().all(|f| f.matches(input))
    }
}

/// Builder collecting filters before combining them
#[derive(Debug)]
pub struct FilterBuilder<T> {
    filters: Vec<BoxedFilter<T>>,
}

impl<T> Default for FilterBuilder<T> {
    fn default() -> Self {
        Self {
            filters: Vec::new(),
        }
    }
}

impl<T> FilterBuilder<T> {
    /// Create an empty builder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a filter
    #[must_use]
    pub fn add_filter<F>(mut self, filter: F) -> Self
    where
        F: Filter<T> + Send + Sync + 'static,
    {
        self.filters.push(Box::new(filter));
        self
    }

    /// Add a filter only when one was supplied
    #[must_use]
    pub fn add_optional<F>(self, filter: Option<F>) -> Self
    where
        F: Filter<T> + Send + Sync + 'static,
    {
        match filter {
            Some(filter) => self.add_filter(filter),
            None => self,
        }
    }

    /// Combine every added filter with AND
    #[must_use]
    pub fn build_and(self) -> AndFilter<T> {
        AndFilter::new(self.filters)
    }
}

/// Borrow the elements kept by a filter, preserving order
pub fn apply_filter<'a, T, F>(filter: &F, items: &'a [T]) -> Vec<&'a T>
where
    F: Filter<T> + ?Sized,
{
    items.iter().filter(|item| filter.matches(item)).collect()
}
