use std::collections::BTreeMap;

use arbitrary::{Arbitrary, Unstructured};
use filtrate::{Filtered, Kind, Registry, Value};

/// Pipes an arbitrary value through a built-in filter, as a host engine would
#[derive(Arbitrary, Debug, Clone)]
pub struct Scenario {
    filter: u8,
    args: Vec<Input>,
    value: Input,
}

/// Integers are kept small enough that a padding width can be allocated
#[derive(Arbitrary, Debug, Clone)]
enum Input {
    Text(String),
    Integer(i16),
    Unsigned(u16),
    Huge,
    Float(f64),
    Bool(bool),
    Sequence(Vec<Input>),
    Mapping(BTreeMap<String, Input>),
    Unknown,
}

impl From<&Input> for Value {
    fn from(input: &Input) -> Self {
        match input {
            Input::Text(s) => Value::from(s.as_str()),
            Input::Integer(n) => Value::from(*n),
            Input::Unsigned(n) => Value::from(*n),
            Input::Huge => Value::from(u64::MAX),
            Input::Float(n) => Value::from(*n),
            Input::Bool(b) => Value::from(*b),
            Input::Sequence(items) => items.iter().map(Value::from).collect(),
            Input::Mapping(map) => Value::Mapping(
                map.iter()
                    .map(|(key, item)| (key.clone(), Value::from(item)))
                    .collect(),
            ),
            Input::Unknown => Value::Unknown,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("correct call rejected by the registry")]
    Host(#[from] filtrate::Error),
    #[error("`{filter}` degraded with the host-level error {reason:?}")]
    NotADegradation {
        filter: &'static str,
        reason: filtrate::Error,
    },
    #[error("`{filter}` fell back to {found}, its fallback is {expected}")]
    WrongFallback {
        filter: &'static str,
        expected: Kind,
        found: Kind,
    },
}

impl<'a> super::Scenario<'a> for Scenario {
    type RunError = RunError;

    fn new(data: &'a [u8]) -> Result<Self, arbitrary::Error> {
        Self::arbitrary_take_rest(Unstructured::new(data))
    }

    fn run(&self) -> Result<(), Self::RunError> {
        let registry = Registry::builtin();
        let Some(filter) = registry.iter().nth(usize::from(self.filter) % registry.len()) else {
            return Ok(());
        };

        let mut args: Vec<Value> = self.args.iter().map(Value::from).collect();
        args.resize(filter.arity(), Value::Unknown);
        let value = Value::from(&self.value);

        match filter.apply(&args, &value)? {
            Filtered::Value(out) => {
                let _ = out.to_string();
            }
            Filtered::Degraded { reason, .. } if !reason.is_degradation() => {
                return Err(RunError::NotADegradation {
                    filter: filter.name(),
                    reason,
                });
            }
            Filtered::Degraded { value: out, .. } => {
                let expected = filter.meta().fallback.value(&value).kind();
                if out.kind() != expected {
                    return Err(RunError::WrongFallback {
                        filter: filter.name(),
                        expected,
                        found: out.kind(),
                    });
                }
            }
        }
        Ok(())
    }
}
