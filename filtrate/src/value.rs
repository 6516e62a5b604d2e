use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// A dynamically typed value as handed over by the host template engine
///
/// Filters classify their piped value at call time by matching on this enum. Every kind a
/// filter does not support leads to the filter's documented fallback, never to a fault.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    Text(String),
    Integer(i64),
    Unsigned(u64),
    Float(f64),
    Bool(bool),
    Sequence(Vec<Value>),
    Mapping(BTreeMap<String, Value>),
    /// Any host value that has no counterpart in the other variants, e.g. `nil` or an opaque
    /// object.
    #[default]
    Unknown,
}

/// The discriminant of a [`Value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Text,
    Integer,
    Unsigned,
    Float,
    Bool,
    Sequence,
    Mapping,
    Unknown,
}

impl Kind {
    pub fn as_str(self) -> &'static str {
        match self {
            Kind::Text => "text",
            Kind::Integer => "integer",
            Kind::Unsigned => "unsigned integer",
            Kind::Float => "float",
            Kind::Bool => "bool",
            Kind::Sequence => "sequence",
            Kind::Mapping => "mapping",
            Kind::Unknown => "unknown",
        }
    }
}

impl fmt::Display for Kind {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Value {
    pub fn kind(&self) -> Kind {
        match self {
            Value::Text(_) => Kind::Text,
            Value::Integer(_) => Kind::Integer,
            Value::Unsigned(_) => Kind::Unsigned,
            Value::Float(_) => Kind::Float,
            Value::Bool(_) => Kind::Bool,
            Value::Sequence(_) => Kind::Sequence,
            Value::Mapping(_) => Kind::Mapping,
            Value::Unknown => Kind::Unknown,
        }
    }

    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    pub fn as_sequence(&self) -> Option<&[Value]> {
        match self {
            Value::Sequence(items) => Some(items),
            _ => None,
        }
    }

    /// Widens any numeric kind to `f64`; `None` for everything else.
    ///
    /// Integers beyond 2<sup>53</sup> lose precision, which is acceptable for the magnitudes
    /// templates deal with.
    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Value::Integer(n) => Some(n as f64),
            Value::Unsigned(n) => Some(n as f64),
            Value::Float(n) => Some(n),
            _ => None,
        }
    }

    /// The exact value of an integral kind
    pub fn as_i128(&self) -> Option<i128> {
        match *self {
            Value::Integer(n) => Some(n.into()),
            Value::Unsigned(n) => Some(n.into()),
            _ => None,
        }
    }

    /// An integral kind as `i64`, unsigned values above `i64::MAX` saturate
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Integer(n) => Some(n),
            Value::Unsigned(n) => Some(i64::try_from(n).unwrap_or(i64::MAX)),
            _ => None,
        }
    }

    /// Number of code points for text, number of elements for containers.
    pub fn len(&self) -> Option<usize> {
        match self {
            Value::Text(s) => Some(s.chars().count()),
            Value::Sequence(items) => Some(items.len()),
            Value::Mapping(map) => Some(map.len()),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> Option<bool> {
        match self {
            Value::Text(s) => Some(s.is_empty()),
            Value::Sequence(items) => Some(items.is_empty()),
            Value::Mapping(map) => Some(map.is_empty()),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(s) => f.write_str(s),
            Value::Integer(n) => f.write_str(itoa::Buffer::new().format(*n)),
            Value::Unsigned(n) => f.write_str(itoa::Buffer::new().format(*n)),
            Value::Float(n) => write!(f, "{n}"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Sequence(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    match idx {
                        0 => write!(f, "{item}")?,
                        _ => write!(f, ", {item}")?,
                    }
                }
                f.write_str("]")
            }
            Value::Mapping(map) => {
                f.write_str("{")?;
                for (idx, (key, item)) in map.iter().enumerate() {
                    match idx {
                        0 => write!(f, "{key}: {item}")?,
                        _ => write!(f, ", {key}: {item}")?,
                    }
                }
                f.write_str("}")
            }
            Value::Unknown => Ok(()),
        }
    }
}

macro_rules! impl_from_signed {
    ($($ty:ty)*) => { $(
        impl From<$ty> for Value {
            #[inline]
            fn from(value: $ty) -> Self {
                Value::Integer(value as i64)
            }
        }
    )* };
}

impl_from_signed!(i8 i16 i32 i64 isize);

macro_rules! impl_from_unsigned {
    ($($ty:ty)*) => { $(
        impl From<$ty> for Value {
            #[inline]
            fn from(value: $ty) -> Self {
                Value::Unsigned(value as u64)
            }
        }
    )* };
}

impl_from_unsigned!(u8 u16 u32 u64 usize);

impl From<i128> for Value {
    fn from(value: i128) -> Self {
        match i64::try_from(value) {
            Ok(n) => Value::Integer(n),
            Err(_) => Value::Float(value as f64),
        }
    }
}

impl From<u128> for Value {
    fn from(value: u128) -> Self {
        match u64::try_from(value) {
            Ok(n) => Value::Unsigned(n),
            Err(_) => Value::Float(value as f64),
        }
    }
}

impl From<f32> for Value {
    #[inline]
    fn from(value: f32) -> Self {
        Value::Float(value.into())
    }
}

impl From<f64> for Value {
    #[inline]
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<bool> for Value {
    #[inline]
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<char> for Value {
    #[inline]
    fn from(value: char) -> Self {
        Value::Text(value.into())
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl From<&String> for Value {
    #[inline]
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    #[inline]
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Unknown, Into::into)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(value: Vec<T>) -> Self {
        Value::Sequence(value.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value> + Clone> From<&[T]> for Value {
    fn from(value: &[T]) -> Self {
        Value::Sequence(value.iter().cloned().map(Into::into).collect())
    }
}

impl<T: Into<Value>, const N: usize> From<[T; N]> for Value {
    fn from(value: [T; N]) -> Self {
        Value::Sequence(value.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<Value>> From<BTreeMap<K, V>> for Value {
    fn from(value: BTreeMap<K, V>) -> Self {
        Value::Mapping(value.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl<K: Into<String>, V: Into<Value>, S> From<HashMap<K, V, S>> for Value {
    fn from(value: HashMap<K, V, S>) -> Self {
        Value::Mapping(value.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Value::Sequence(iter.into_iter().collect())
    }
}

#[cfg(feature = "serde_json")]
mod json {
    use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

    use super::Value;

    impl From<serde_json::Value> for Value {
        fn from(value: serde_json::Value) -> Self {
            match value {
                serde_json::Value::Null => Value::Unknown,
                serde_json::Value::Bool(b) => Value::Bool(b),
                serde_json::Value::Number(n) => {
                    if let Some(n) = n.as_i64() {
                        Value::Integer(n)
                    } else if let Some(n) = n.as_u64() {
                        Value::Unsigned(n)
                    } else {
                        n.as_f64().map_or(Value::Unknown, Value::Float)
                    }
                }
                serde_json::Value::String(s) => Value::Text(s),
                serde_json::Value::Array(items) => {
                    Value::Sequence(items.into_iter().map(Value::from).collect())
                }
                serde_json::Value::Object(map) => Value::Mapping(
                    map.into_iter()
                        .map(|(key, item)| (key, Value::from(item)))
                        .collect(),
                ),
            }
        }
    }

    impl Serialize for Value {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Value::Text(s) => serializer.serialize_str(s),
                Value::Integer(n) => serializer.serialize_i64(*n),
                Value::Unsigned(n) => serializer.serialize_u64(*n),
                Value::Float(n) => serializer.serialize_f64(*n),
                Value::Bool(b) => serializer.serialize_bool(*b),
                Value::Sequence(items) => {
                    let mut seq = serializer.serialize_seq(Some(items.len()))?;
                    for item in items {
                        seq.serialize_element(item)?;
                    }
                    seq.end()
                }
                Value::Mapping(map) => {
                    let mut ser = serializer.serialize_map(Some(map.len()))?;
                    for (key, item) in map {
                        ser.serialize_entry(key, item)?;
                    }
                    ser.end()
                }
                Value::Unknown => serializer.serialize_unit(),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn integer_widths() {
        assert_eq!(Value::from(-3i8), Value::Integer(-3));
        assert_eq!(Value::from(7isize), Value::Integer(7));
        assert_eq!(Value::from(255u8), Value::Unsigned(255));
        assert_eq!(Value::from(u64::MAX), Value::Unsigned(u64::MAX));
        assert_eq!(Value::from(12i128), Value::Integer(12));
        assert_matches!(Value::from(u128::MAX), Value::Float(_));
    }

    #[test]
    fn numeric_coercion() {
        assert_eq!(Value::from(21).as_f64(), Some(21.0));
        assert_eq!(Value::from(21u16).as_f64(), Some(21.0));
        assert_eq!(Value::from(2.5f32).as_f64(), Some(2.5));
        assert_eq!(Value::from("21").as_f64(), None);
        assert_eq!(Value::from(true).as_f64(), None);
        assert_eq!(Value::Unknown.as_f64(), None);

        assert_eq!(Value::from(u64::MAX).as_i128(), Some(u64::MAX.into()));
        assert_eq!(Value::from(1.0).as_i128(), None);
        assert_eq!(Value::from(u64::MAX).as_i64(), Some(i64::MAX));
    }

    #[test]
    fn len_counts_code_points() {
        assert_eq!(Value::from("안녕하세요").len(), Some(5));
        assert_eq!(Value::from(vec![1, 2, 3]).len(), Some(3));
        assert_eq!(Value::from(BTreeMap::from([("a", 1)])).len(), Some(1));
        assert_eq!(Value::from(42).len(), None);
    }

    #[test]
    fn containers() {
        assert_eq!(
            Value::from(["a", "b"]),
            Value::Sequence(vec!["a".into(), "b".into()])
        );
        assert_eq!(Value::from(None::<i32>), Value::Unknown);
        assert_eq!(Value::from(Some("x")), Value::from("x"));
        let map: HashMap<&str, bool> = HashMap::from([("on", true)]);
        assert_matches!(Value::from(map), Value::Mapping(m) if m["on"] == Value::Bool(true));
    }

    #[test]
    fn display() {
        assert_eq!(Value::from(-42).to_string(), "-42");
        assert_eq!(Value::from(42u32).to_string(), "42");
        assert_eq!(Value::from(1.5).to_string(), "1.5");
        assert_eq!(Value::from(false).to_string(), "false");
        assert_eq!(Value::from(vec![1, 2]).to_string(), "[1, 2]");
        assert_eq!(
            Value::from(BTreeMap::from([("a", 1), ("b", 2)])).to_string(),
            "{a: 1, b: 2}"
        );
        assert_eq!(Value::Unknown.to_string(), "");
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn from_json() {
        let value = Value::from(serde_json::json!({
            "name": "rust",
            "size": 1024,
            "big": u64::MAX,
            "ratio": 0.5,
            "tags": ["a", null],
        }));
        let Value::Mapping(map) = value else {
            panic!("expected a mapping");
        };
        assert_eq!(map["name"], Value::from("rust"));
        assert_eq!(map["size"], Value::Integer(1024));
        assert_eq!(map["big"], Value::Unsigned(u64::MAX));
        assert_eq!(map["ratio"], Value::Float(0.5));
        assert_eq!(
            map["tags"],
            Value::Sequence(vec![Value::from("a"), Value::Unknown])
        );
    }

    #[cfg(feature = "serde_json")]
    #[test]
    fn to_json() {
        let value = Value::from(vec![Value::from("a"), Value::from(1), Value::Unknown]);
        assert_eq!(serde_json::to_string(&value).unwrap(), r#"["a",1,null]"#);
    }
}
