//! Ordered field map for decoded records.

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::Value;

/// Field name → value, kept in the order fields were first written.
///
/// Writing an existing name replaces the value in place; a record that
/// reads the same field twice keeps the last value at the first position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttributeMap {
    entries: Vec<(String, Value)>,
}

impl AttributeMap {
    pub fn new() -> Self { Self::default() }

    pub fn insert(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, name: &str) -> Option<&mut Value> {
        self.entries.iter_mut().find(|(k, _)| k == name).map(|(_, v)| v)
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let pos = self.entries.iter().position(|(k, _)| k == name)?;
        Some(self.entries.remove(pos).1)
    }

    pub fn contains(&self, name: &str) -> bool { self.get(name).is_some() }

    pub fn clear(&mut self) { self.entries.clear() }

    pub fn len(&self) -> usize { self.entries.len() }

    pub fn is_empty(&self) -> bool { self.entries.is_empty() }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut Value> {
        self.entries.iter_mut().map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl Serialize for AttributeMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_insert_keeps_first_position() {
        let mut m = AttributeMap::new();
        m.insert("u32_0", Value::U32(1));
        m.insert("ref_1", Value::Null);
        m.insert("u32_0", Value::U32(2));
        assert_eq!(m.keys().collect::<Vec<_>>(), vec!["u32_0", "ref_1"]);
        assert_eq!(m.get("u32_0"), Some(&Value::U32(2)));
    }

    #[test]
    fn test_remove() {
        let mut m = AttributeMap::new();
        m.insert("hdr", Value::U8(1));
        assert_eq!(m.remove("hdr"), Some(Value::U8(1)));
        assert!(m.is_empty());
        assert_eq!(m.remove("hdr"), None);
    }

    #[test]
    fn test_serializes_as_ordered_object() {
        let mut m = AttributeMap::new();
        m.insert("b", Value::Bool(true));
        m.insert("a", Value::U8(3));
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, r#"{"b":{"type":"Bool","value":true},"a":{"type":"U8","value":3}}"#);
    }
}
