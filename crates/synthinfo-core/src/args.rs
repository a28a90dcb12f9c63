//! Insertion-ordered maps and caller argument normalization.

use std::fmt;
use std::marker::PhantomData;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;
use crate::value::ArgValue;

/// A small string-keyed map that remembers insertion order.
///
/// Inserting an existing key replaces its value but keeps its original
/// position. Catalog tables have a few dozen entries, so lookups are linear.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderedMap<V> {
    entries: Vec<(String, V)>,
}

/// Caller-supplied arguments keyed by argument name (no leading colon).
pub type ArgMap = OrderedMap<ArgValue>;

impl<V> OrderedMap<V> {
    /// Creates an empty map.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Inserts or replaces a value, returning the previous one.
    pub fn insert(&mut self, key: impl Into<String>, value: V) -> Option<V> {
        let key = key.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((key, value));
                None
            }
        }
    }

    /// Returns the value for `key`.
    pub fn get(&self, key: &str) -> Option<&V> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v)
    }

    /// Returns true if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Iterates over keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    /// Iterates over values in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }

    /// Iterates over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Applies every entry of `other` on top of this map.
    ///
    /// Colliding keys are replaced wholesale in place, new keys are appended.
    pub fn overlay(&mut self, other: OrderedMap<V>) {
        for (k, v) in other.entries {
            self.insert(k, v);
        }
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the map has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl OrderedMap<ArgValue> {
    /// Returns the numeric value of `key`, if present and numeric.
    pub fn number(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(ArgValue::as_f64)
    }
}

impl<V> Default for OrderedMap<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Into<String>, V> FromIterator<(K, V)> for OrderedMap<V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = OrderedMap::new();
        for (k, v) in iter {
            map.insert(k, v);
        }
        map
    }
}

impl<V> IntoIterator for OrderedMap<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<V: Serialize> Serialize for OrderedMap<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct OrderedMapVisitor<V>(PhantomData<V>);

impl<'de, V: Deserialize<'de>> Visitor<'de> for OrderedMapVisitor<V> {
    type Value = OrderedMap<V>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map with string keys")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = OrderedMap::new();
        while let Some((k, v)) = access.next_entry::<String, V>()? {
            map.insert(k, v);
        }
        Ok(map)
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for OrderedMap<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(OrderedMapVisitor(PhantomData))
    }
}

/// Arguments in either of the two forms the interpreter passes them.
#[derive(Debug, Clone, PartialEq)]
pub enum Args {
    /// Alternating key/value sequence: `[:note, 52, :amp, 0.5]`.
    Flat(Vec<ArgValue>),
    /// Explicit key/value map.
    Map(ArgMap),
}

impl Args {
    /// Normalizes either form into a single map. Later duplicate keys win.
    pub fn normalize(self) -> Result<ArgMap, ValidationError> {
        match self {
            Args::Map(map) => Ok(map),
            Args::Flat(values) => {
                if values.len() % 2 != 0 {
                    return Err(ValidationError::UnpairedArgs(values.len()));
                }
                let mut map = ArgMap::new();
                let mut iter = values.into_iter();
                while let (Some(key), Some(value)) = (iter.next(), iter.next()) {
                    match key {
                        ArgValue::Symbol(name) => {
                            map.insert(name, value);
                        }
                        other => return Err(ValidationError::InvalidArgName(other)),
                    }
                }
                Ok(map)
            }
        }
    }
}

impl From<ArgMap> for Args {
    fn from(map: ArgMap) -> Self {
        Args::Map(map)
    }
}

impl From<Vec<ArgValue>> for Args {
    fn from(values: Vec<ArgValue>) -> Self {
        Args::Flat(values)
    }
}

impl From<&ArgMap> for Args {
    fn from(map: &ArgMap) -> Self {
        Args::Map(map.clone())
    }
}

/// Builds an [`ArgMap`] from `name => value` pairs.
///
/// ```
/// use synthinfo_core::arg_map;
///
/// let args = arg_map! { "note" => 52, "amp" => 0.5 };
/// assert_eq!(args.number("amp"), Some(0.5));
/// ```
#[macro_export]
macro_rules! arg_map {
    () => {
        $crate::ArgMap::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut map = $crate::ArgMap::new();
        $(map.insert($key, $crate::ArgValue::from($value));)+
        map
    }};
}
