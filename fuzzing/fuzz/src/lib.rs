pub mod filters;
pub mod registry;

use std::error::Error;
use std::fmt;

pub const TARGETS: &[(&str, TargetBuilder)] = &[
    ("filters", |data| {
        filters::Scenario::new(data).map(Target::Filters)
    }),
    ("registry", |data| {
        registry::Scenario::new(data).map(Target::Registry)
    }),
];

pub type TargetBuilder = for<'a> fn(&'a [u8]) -> Result<Target<'a>, arbitrary::Error>;

pub trait Scenario<'a>: fmt::Debug + Sized {
    type RunError: Error + Send + 'static;

    fn new(data: &'a [u8]) -> Result<Self, arbitrary::Error>;
    fn run(&self) -> Result<(), Self::RunError>;
}

/// A scenario of any target, selected by name at runtime
#[derive(Debug)]
pub enum Target<'a> {
    Filters(filters::Scenario<'a>),
    Registry(registry::Scenario),
}

impl Target<'_> {
    pub fn run(&self) -> Result<(), Box<dyn Error + Send + 'static>> {
        match self {
            Target::Filters(scenario) => scenario.run().map_err(boxed),
            Target::Registry(scenario) => scenario.run().map_err(boxed),
        }
    }
}

fn boxed<E: Error + Send + 'static>(err: E) -> Box<dyn Error + Send + 'static> {
    Box::new(err)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct DisplayTargets;

impl fmt::Display for DisplayTargets {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<_> = TARGETS.iter().map(|&(name, _)| name).collect();
        f.write_str(&names.join("|"))
    }
}
