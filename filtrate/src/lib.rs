//! Filtrate is a catalog of formatting filters for template engines.
//!
//! A template author pipes a value through a filter, `{{ name|upper }}` or
//! `{{ count|pluralize "y,ies" }}`, and the host engine looks the filter up by name in a
//! [`Registry`] and invokes it. Filtrate supplies the filters; parsing and executing templates
//! stays with the host.
//!
//! # Values
//!
//! Template data is dynamically typed, so every filter receives its input as a [`Value`]:
//! text, signed or unsigned integers, floats, booleans, sequences, mappings, or
//! [`Value::Unknown`] for anything else. `From` conversions exist for the usual Rust types, and
//! with the `serde_json` feature for [`serde_json::Value`](https://docs.rs/serde_json).
//!
//! # Filters never fail a render
//!
//! A filter that receives a value it cannot handle does not return an error. It returns its
//! documented fallback, usually the unmodified input, empty text, `0` or `false`, wrapped in
//! [`Filtered::Degraded`] together with the reason:
//!
//! ```rust
//! use filtrate::{Filtered, Registry, Value};
//!
//! let registry = Registry::builtin();
//!
//! let out = registry
//!     .apply("pluralize", &[Value::from("y,ies")], &Value::from(2))
//!     .unwrap();
//! assert_eq!(out, Filtered::Value(Value::from("ies")));
//!
//! // a float is not a count
//! let out = registry
//!     .apply("pluralize", &[Value::from("y,ies")], &Value::from(2.5))
//!     .unwrap();
//! assert!(out.is_degraded());
//! assert_eq!(out.into_value(), Value::from(""));
//! ```
//!
//! Only host-level mistakes, an unknown filter name or a wrong number of arguments, are
//! reported as [`Error`]s.
//!
//! # Using the functions directly
//!
//! Every built-in filter is also available as a typed function in [`filters`]:
//!
//! ```rust
//! use filtrate::filters;
//!
//! assert_eq!(filters::truncatechars(12, "The Go Programming Language"), "The Go Pr...");
//! assert_eq!(filters::center(7, "abc").unwrap(), "  abc  ");
//! ```

#![cfg_attr(docsrs, feature(doc_cfg))]
#![deny(elided_lifetimes_in_paths)]
#![deny(unreachable_pub)]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod catalog;
mod error;
pub mod filters;
mod registry;
mod value;

pub use crate::error::{Error, Result};
pub use crate::registry::{
    Fallback, Filter, FilterFn, FilterMeta, Filtered, Iter, Registry, RegistryBuilder, Returns,
};
pub use crate::value::{Kind, Value};
