//! Property values backing a person record

use std::fmt;

use indexmap::IndexMap;

/// A single property value in a person record.
///
/// Values take one of three shapes: scalar text, an ordered sequence, or a
/// nested mapping. Non-string scalars in the source document (numbers,
/// booleans) are stringified on load, so `Text` is the only scalar shape.
#[derive(Clone, Debug, PartialEq)]
pub enum Property {
    /// Scalar text value
    Text(String),

    /// Ordered sequence of values
    Sequence(Vec<Property>),

    /// Nested mapping
    Map(PropertyMap),
}

impl Property {
    /// Create a text property.
    pub fn text(value: impl Into<String>) -> Self {
        Property::Text(value.into())
    }

    /// Get the scalar text of this property, if it is one.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Property::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Property::Text(s) => write!(f, "{}", s),

            Property::Sequence(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                Ok(())
            }

            Property::Map(map) => {
                for (i, (key, value)) in map.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                Ok(())
            }
        }
    }
}

/// Ordered key-value data describing one person record.
///
/// Iteration order is insertion order, which is what keeps the serialized
/// document form stable and human-diffable.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PropertyMap {
    entries: IndexMap<String, Property>,
}

impl PropertyMap {
    /// Create an empty property map.
    pub fn new() -> Self {
        Self {
            entries: IndexMap::new(),
        }
    }

    /// Insert a property, replacing any existing value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: Property) {
        self.entries.insert(key.into(), value);
    }

    /// Look up a property by key.
    pub fn get(&self, key: &str) -> Option<&Property> {
        self.entries.get(key)
    }

    /// Check whether a key is present.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Property)> {
        self.entries.iter()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the map is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Property)> for PropertyMap {
    fn from_iter<T: IntoIterator<Item = (String, Property)>>(iter: T) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_preserved() {
        let mut map = PropertyMap::new();
        map.insert("Name", Property::text("Alice"));
        map.insert("Photo", Property::text("alice.png"));
        map.insert("Mother", Property::text("mom.yaml"));

        let keys: Vec<&String> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["Name", "Photo", "Mother"]);
    }

    #[test]
    fn test_display_text() {
        assert_eq!(Property::text("Alice").to_string(), "Alice");
    }

    #[test]
    fn test_display_sequence() {
        let seq = Property::Sequence(vec![Property::text("a"), Property::text("b")]);
        assert_eq!(seq.to_string(), "a, b");
    }

    #[test]
    fn test_display_map() {
        let mut inner = PropertyMap::new();
        inner.insert("file", Property::text("sis.yaml"));
        inner.insert("born", Property::text("1990"));
        assert_eq!(
            Property::Map(inner).to_string(),
            "file: sis.yaml, born: 1990"
        );
    }

    #[test]
    fn test_as_text() {
        assert_eq!(Property::text("x").as_text(), Some("x"));
        assert_eq!(Property::Sequence(vec![]).as_text(), None);
    }
}
