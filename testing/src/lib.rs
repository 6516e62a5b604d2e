//! Helpers that drive filters the way a host template engine does.

use filtrate::{Registry, Result, Value};

/// One `| name args...` step of a pipe
pub struct Step<'a> {
    pub name: &'a str,
    pub args: Vec<Value>,
}

impl<'a> Step<'a> {
    pub fn new(name: &'a str) -> Self {
        Self {
            name,
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<Value>) -> Self {
        self.args.push(arg.into());
        self
    }
}

/// Evaluates `value | step | step ...`, degraded steps pass their fallback on
pub fn pipe(registry: &Registry, value: impl Into<Value>, steps: &[Step<'_>]) -> Result<Value> {
    let mut value = value.into();
    for step in steps {
        value = registry.apply(step.name, &step.args, &value)?.into_value();
    }
    Ok(value)
}

/// Evaluates a pipe with the built-in registry and renders the result as the host would
pub fn render(value: impl Into<Value>, steps: &[Step<'_>]) -> String {
    match pipe(Registry::builtin(), value, steps) {
        Ok(value) => value.to_string(),
        Err(err) => panic!("pipe failed: {err}"),
    }
}
