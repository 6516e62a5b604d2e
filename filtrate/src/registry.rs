use std::collections::btree_map::{self, BTreeMap};
use std::sync::OnceLock;

use crate::catalog;
use crate::value::Value;
use crate::{Error, Result};

/// The dynamic body of a filter: `(arguments, piped value) -> result`
///
/// Arguments are passed in template order, the piped value separately. An `Err` is never shown
/// to the host; [`Filter::apply()`] replaces it with the filter's [`Fallback`].
pub type FilterFn = fn(&[Value], &Value) -> Result<Value>;

/// What a filter returns when its body fails
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fallback {
    /// The piped value, unmodified.
    Input,
    /// Empty text.
    Empty,
    /// The integer `0`.
    Zero,
    /// `false`.
    False,
}

impl Fallback {
    pub fn value(self, input: &Value) -> Value {
        match self {
            Fallback::Input => input.clone(),
            Fallback::Empty => Value::Text(String::new()),
            Fallback::Zero => Value::Integer(0),
            Fallback::False => Value::Bool(false),
        }
    }
}

/// The declared result kind of a filter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Returns {
    Text,
    Integer,
    Bool,
    /// Whatever was passed in, see `default`.
    Any,
}

/// Static description of a filter
#[derive(Debug, Clone, Copy)]
pub struct FilterMeta {
    pub name: &'static str,
    /// Names of the arguments, excluding the piped value.
    pub params: &'static [&'static str],
    pub returns: Returns,
    pub fallback: Fallback,
    pub description: &'static str,
}

/// A named filter: its metadata plus its body
#[derive(Debug, Clone)]
pub struct Filter {
    meta: FilterMeta,
    body: FilterFn,
}

impl Filter {
    #[inline]
    pub const fn new(meta: FilterMeta, body: FilterFn) -> Self {
        Self { meta, body }
    }

    #[inline]
    pub fn meta(&self) -> &FilterMeta {
        &self.meta
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        self.meta.name
    }

    #[cfg(test)]
    pub(crate) fn body_for_tests(&self) -> FilterFn {
        self.body
    }

    /// Number of arguments, excluding the piped value
    #[inline]
    pub fn arity(&self) -> usize {
        self.meta.params.len()
    }

    /// Invokes the filter
    ///
    /// Only a wrong number of arguments is an `Err`. Any failure of the filter itself is
    /// turned into [`Filtered::Degraded`] holding the filter's fallback value.
    pub fn apply(&self, args: &[Value], value: &Value) -> Result<Filtered> {
        if args.len() != self.arity() {
            tracing::trace!(
                filter = self.meta.name,
                expected = self.arity(),
                found = args.len(),
                "wrong number of filter arguments"
            );
            return Err(Error::Arity {
                filter: self.meta.name,
                expected: self.arity(),
                found: args.len(),
            });
        }

        Ok(match (self.body)(args, value) {
            Ok(value) => Filtered::Value(value),
            Err(reason) => {
                tracing::debug!(
                    filter = self.meta.name,
                    %reason,
                    "filter degraded to its fallback"
                );
                Filtered::Degraded {
                    value: self.meta.fallback.value(value),
                    reason,
                }
            }
        })
    }
}

/// The outcome of a filter invocation
#[derive(Debug, Clone, PartialEq)]
#[must_use]
pub enum Filtered {
    /// The filter produced a regular result.
    Value(Value),
    /// The input was not acceptable; `value` is the filter's fallback.
    Degraded { value: Value, reason: Error },
}

impl Filtered {
    /// The value to render, regardless of whether the filter degraded
    #[inline]
    pub fn into_value(self) -> Value {
        match self {
            Filtered::Value(value) | Filtered::Degraded { value, .. } => value,
        }
    }

    #[inline]
    pub fn value(&self) -> &Value {
        match self {
            Filtered::Value(value) | Filtered::Degraded { value, .. } => value,
        }
    }

    #[inline]
    pub fn is_degraded(&self) -> bool {
        matches!(self, Filtered::Degraded { .. })
    }

    #[inline]
    pub fn reason(&self) -> Option<&Error> {
        match self {
            Filtered::Value(_) => None,
            Filtered::Degraded { reason, .. } => Some(reason),
        }
    }
}

/// An immutable catalog of filters, looked up by name
///
/// Use [`Registry::builtin()`] for the shared instance holding all built-in filters, or
/// [`Registry::builder()`] to combine them with filters of your own.
#[derive(Debug, Clone)]
pub struct Registry {
    filters: BTreeMap<&'static str, Filter>,
}

impl Registry {
    /// The process-wide registry of built-in filters, created on first use
    pub fn builtin() -> &'static Registry {
        static BUILTIN: OnceLock<Registry> = OnceLock::new();
        BUILTIN.get_or_init(|| {
            let filters: BTreeMap<_, _> = catalog::builtins()
                .into_iter()
                .map(|filter| (filter.name(), filter))
                .collect();
            tracing::debug!(filters = filters.len(), "built-in filter registry created");
            Registry { filters }
        })
    }

    #[inline]
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::default()
    }

    #[inline]
    pub fn get(&self, name: &str) -> Option<&Filter> {
        self.filters.get(name)
    }

    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.filters.contains_key(name)
    }

    /// Filter names in ascending order
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.filters.keys().copied()
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter(self.filters.values())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.filters.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Looks up `name` and invokes it; `value | name args...` in template terms
    ///
    /// ```
    /// # use filtrate::{Registry, Value};
    /// let registry = Registry::builtin();
    /// let out = registry.apply("truncatechars", &[Value::from(12)], &Value::from("The Go Programming Language"));
    /// assert_eq!(out.unwrap().into_value(), Value::from("The Go Pr..."));
    /// ```
    pub fn apply(&self, name: &str, args: &[Value], value: &Value) -> Result<Filtered> {
        match self.get(name) {
            Some(filter) => filter.apply(args, value),
            None => {
                tracing::trace!(filter = name, "unknown filter");
                Err(Error::UnknownFilter(name.to_owned()))
            }
        }
    }
}

impl Default for Registry {
    /// A copy of [`Registry::builtin()`]
    fn default() -> Self {
        Self::builtin().clone()
    }
}

impl<'a> IntoIterator for &'a Registry {
    type Item = &'a Filter;
    type IntoIter = Iter<'a>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the filters of a [`Registry`], ordered by name
#[derive(Debug, Clone)]
pub struct Iter<'a>(btree_map::Values<'a, &'static str, Filter>);

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Filter;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

/// Collects filters for a new [`Registry`]
#[derive(Debug, Clone, Default)]
pub struct RegistryBuilder {
    filters: Vec<Filter>,
}

impl RegistryBuilder {
    /// Adds all built-in filters
    pub fn with_builtins(mut self) -> Self {
        self.filters.extend(catalog::builtins());
        self
    }

    pub fn with_filter(mut self, filter: Filter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Freezes the collected filters; fails if a name was added twice
    pub fn build(self) -> Result<Registry> {
        let mut filters = BTreeMap::new();
        for filter in self.filters {
            let name = filter.name();
            if filters.insert(name, filter).is_some() {
                return Err(Error::DuplicateFilter(name));
            }
        }
        Ok(Registry { filters })
    }
}
