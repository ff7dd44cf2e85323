//! Decoded record of a segment.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{AttributeMap, NodeRef, TypeId, Value};

/// Arena handle of a node: its position in the segment, which is also its
/// stream index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04X}", self.0)
    }
}

/// Byte range of a record's payload in the segment buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ByteRange {
    pub offset: usize,
    pub len: usize,
}

impl ByteRange {
    pub fn end(&self) -> usize { self.offset + self.len }
}

/// One decoded record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: NodeId,
    pub type_id: TypeId,
    /// Label assigned by the decoder, `None` for unknown records.
    pub type_name: Option<String>,
    /// Text read without a field name (parameter names, labels, ...).
    pub name: Option<String>,
    pub range: ByteRange,
    pub attributes: AttributeMap,
    pub parent: Option<NodeRef>,
    pub children: Vec<NodeRef>,
    /// Set by the content header from flag bit `0x400`.
    pub visible: bool,
    /// Set by the content header from flag bit `0x800000`.
    pub dimensioning_visible: bool,
    pub content_header: bool,
    /// `false` when no decoder is registered for `type_id`.
    pub decoded: bool,
}

impl Node {
    pub fn new(id: NodeId, type_id: TypeId, range: ByteRange) -> Self {
        Self {
            id,
            type_id,
            type_name: None,
            name: None,
            range,
            attributes: AttributeMap::new(),
            parent: None,
            children: Vec::new(),
            visible: false,
            dimensioning_visible: false,
            content_header: false,
            decoded: false,
        }
    }

    pub fn with_type_name(mut self, name: impl Into<String>) -> Self {
        self.type_name = Some(name.into());
        self
    }

    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.attributes.insert(key, value.into());
        self
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.attributes.get(key)
    }

    /// The decoder label, or the hex type key for unknown records.
    pub fn label(&self) -> String {
        self.type_name.clone().unwrap_or_else(|| self.type_id.to_string())
    }

    pub fn is_type(&self, name: &str) -> bool {
        self.type_name.as_deref() == Some(name)
    }

    /// Resolved target of a single reference attribute.
    pub fn target(&self, key: &str) -> Option<super::NodeId> {
        self.get(key).and_then(Value::target)
    }

    pub fn f64(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_float)
    }

    /// The parent link followed by every reference stored in attributes.
    pub fn references(&self) -> Vec<NodeRef> {
        let mut out: Vec<NodeRef> = self.parent.iter().copied().collect();
        for (_, v) in self.attributes.iter() {
            v.for_each_ref(&mut |r| out.push(*r));
        }
        out
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {} {}", self.id, self.type_id, self.label())?;
        if let Some(name) = &self.name {
            write!(f, " '{name}'")?;
        }
        if let Some(parent) = &self.parent {
            write!(f, " parent={parent}")?;
        }
        for (k, v) in self.attributes.iter() {
            write!(f, " {k}={v}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RefKind;

    fn node() -> Node {
        Node::new(NodeId(3), TypeId(0x90874D26), ByteRange { offset: 16, len: 40 })
    }

    #[test]
    fn test_label_falls_back_to_type_id() {
        assert_eq!(node().label(), "90874D26");
        assert_eq!(node().with_type_name("Parameter").label(), "Parameter");
    }

    #[test]
    fn test_display() {
        let n = node()
            .with_type_name("Parameter")
            .with_attribute("value_nominal", 2.5f64)
            .with_attribute("ref_unit", NodeRef::new(RefKind::Child, 7, false));
        assert_eq!(n.to_string(), "[0003] 90874D26 Parameter value_nominal=2.5 ref_unit=C0007");
    }

    #[test]
    fn test_references_collects_nested() {
        let mut n = node().with_attribute(
            "lst0",
            Value::Array(vec![
                Value::Ref(NodeRef::new(RefKind::Cross, 1, false)),
                Value::Null,
                Value::Ref(NodeRef::new(RefKind::Cross, 2, false)),
            ]),
        );
        n.parent = Some(NodeRef::new(RefKind::Parent, 9, false));
        let idx: Vec<u32> = n.references().iter().map(|r| r.index).collect();
        assert_eq!(idx, vec![9, 1, 2]);
    }

    #[test]
    fn test_range_end() {
        assert_eq!(node().range.end(), 56);
    }
}
