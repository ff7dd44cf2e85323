//! Tagged value type for decoded record fields.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{NodeId, NodeRef};

/// A decoded field value.
///
/// Covers every shape a record decoder produces:
/// - Scalars: unsigned/signed integers of width 8/16/32/64, f32/f64, bool
/// - Identity: UUID, text
/// - Containers: `Array` (fixed or length-prefixed), `Map` (ordered pairs)
/// - Graph: `Ref` to another node in the same segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Value {
    Null,
    Bool(bool),
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Uuid(Uuid),
    String(String),
    Array(Vec<Value>),
    /// Key/value pairs in stream order. Keys may repeat.
    Map(Vec<(Value, Value)>),
    Ref(NodeRef),
}

// ============================================================================
// Type checking
// ============================================================================

impl Value {
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "NULL",
            Value::Bool(_) => "BOOL",
            Value::U8(_) => "U8",
            Value::U16(_) => "U16",
            Value::U32(_) => "U32",
            Value::U64(_) => "U64",
            Value::I8(_) => "I8",
            Value::I16(_) => "I16",
            Value::I32(_) => "I32",
            Value::I64(_) => "I64",
            Value::F32(_) => "F32",
            Value::F64(_) => "F64",
            Value::Uuid(_) => "UUID",
            Value::String(_) => "STRING",
            Value::Array(_) => "ARRAY",
            Value::Map(_) => "MAP",
            Value::Ref(_) => "REF",
        }
    }

    pub fn is_null(&self) -> bool { matches!(self, Value::Null) }

    /// Any integer width, widened.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::U8(v) => Some(*v as i64),
            Value::U16(v) => Some(*v as i64),
            Value::U32(v) => Some(*v as i64),
            Value::U64(v) => i64::try_from(*v).ok(),
            Value::I8(v) => Some(*v as i64),
            Value::I16(v) => Some(*v as i64),
            Value::I32(v) => Some(*v as i64),
            Value::I64(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_u32(&self) -> Option<u32> {
        self.as_int().and_then(|v| u32::try_from(v).ok())
    }

    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::F32(v) => Some(*v as f64),
            Value::F64(v) => Some(*v),
            other => other.as_int().map(|i| i as f64),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_node_ref(&self) -> Option<&NodeRef> {
        match self {
            Value::Ref(r) => Some(r),
            _ => None,
        }
    }

    /// Resolved target of a reference value.
    pub fn target(&self) -> Option<NodeId> {
        self.as_node_ref().and_then(|r| r.target)
    }

    /// Number of elements for arrays and maps.
    pub fn len(&self) -> usize {
        match self {
            Value::Array(a) => a.len(),
            Value::Map(m) => m.len(),
            _ => 0,
        }
    }

    pub fn is_empty(&self) -> bool { self.len() == 0 }

    /// Visit every reference nested in this value.
    pub fn for_each_ref(&self, f: &mut impl FnMut(&NodeRef)) {
        match self {
            Value::Ref(r) => f(r),
            Value::Array(items) => items.iter().for_each(|v| v.for_each_ref(f)),
            Value::Map(pairs) => pairs.iter().for_each(|(k, v)| {
                k.for_each_ref(f);
                v.for_each_ref(f);
            }),
            _ => {}
        }
    }

    pub fn for_each_ref_mut(&mut self, f: &mut impl FnMut(&mut NodeRef)) {
        match self {
            Value::Ref(r) => f(r),
            Value::Array(items) => items.iter_mut().for_each(|v| v.for_each_ref_mut(f)),
            Value::Map(pairs) => pairs.iter_mut().for_each(|(k, v)| {
                k.for_each_ref_mut(f);
                v.for_each_ref_mut(f);
            }),
            _ => {}
        }
    }
}

// ============================================================================
// Conversions (From impls)
// ============================================================================

impl From<bool> for Value { fn from(v: bool) -> Self { Value::Bool(v) } }
impl From<u8> for Value { fn from(v: u8) -> Self { Value::U8(v) } }
impl From<u16> for Value { fn from(v: u16) -> Self { Value::U16(v) } }
impl From<u32> for Value { fn from(v: u32) -> Self { Value::U32(v) } }
impl From<u64> for Value { fn from(v: u64) -> Self { Value::U64(v) } }
impl From<i8> for Value { fn from(v: i8) -> Self { Value::I8(v) } }
impl From<i16> for Value { fn from(v: i16) -> Self { Value::I16(v) } }
impl From<i32> for Value { fn from(v: i32) -> Self { Value::I32(v) } }
impl From<i64> for Value { fn from(v: i64) -> Self { Value::I64(v) } }
impl From<f32> for Value { fn from(v: f32) -> Self { Value::F32(v) } }
impl From<f64> for Value { fn from(v: f64) -> Self { Value::F64(v) } }
impl From<Uuid> for Value { fn from(v: Uuid) -> Self { Value::Uuid(v) } }
impl From<String> for Value { fn from(v: String) -> Self { Value::String(v) } }
impl From<&str> for Value { fn from(v: &str) -> Self { Value::String(v.to_owned()) } }
impl From<NodeRef> for Value { fn from(v: NodeRef) -> Self { Value::Ref(v) } }
impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self { Value::Array(v.into_iter().map(Into::into).collect()) }
}
impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self { v.map(Into::into).unwrap_or(Value::Null) }
}

// ============================================================================
// Display
// ============================================================================

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => write!(f, "None"),
            Value::Bool(b) => write!(f, "{b}"),
            Value::U8(v) => write!(f, "{v:02X}"),
            Value::U16(v) => write!(f, "{v:04X}"),
            Value::U32(v) => write!(f, "{v:06X}"),
            Value::U64(v) => write!(f, "{v:X}"),
            Value::I8(v) => write!(f, "{v}"),
            Value::I16(v) => write!(f, "{v}"),
            Value::I32(v) => write!(f, "{v}"),
            Value::I64(v) => write!(f, "{v}"),
            Value::F32(v) => write!(f, "{v}"),
            Value::F64(v) => write!(f, "{v}"),
            Value::Uuid(u) => write!(f, "{{{}}}", u.hyphenated().to_string().to_uppercase()),
            Value::String(s) => write!(f, "'{s}'"),
            Value::Array(items) => {
                write!(f, "[")?;
                for (i, v) in items.iter().enumerate() {
                    if i > 0 { write!(f, ",")?; }
                    write!(f, "{v}")?;
                }
                write!(f, "]")
            }
            Value::Map(pairs) => {
                write!(f, "{{")?;
                for (i, (k, v)) in pairs.iter().enumerate() {
                    if i > 0 { write!(f, ",")?; }
                    write!(f, "{k}: {v}")?;
                }
                write!(f, "}}")
            }
            Value::Ref(r) => write!(f, "{r}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RefKind;

    #[test]
    fn test_value_from() {
        assert_eq!(Value::from("hello"), Value::String("hello".into()));
        assert_eq!(Value::from(42u32), Value::U32(42));
        assert_eq!(Value::from(-3i16), Value::I16(-3));
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(None::<u8>), Value::Null);
        assert_eq!(Value::from(vec![1u16, 2]), Value::Array(vec![Value::U16(1), Value::U16(2)]));
    }

    #[test]
    fn test_numeric_widening() {
        assert_eq!(Value::U16(7).as_int(), Some(7));
        assert_eq!(Value::I32(-1).as_u32(), None);
        assert_eq!(Value::F32(0.5).as_float(), Some(0.5));
        assert_eq!(Value::U8(2).as_float(), Some(2.0));
        assert_eq!(Value::String("x".into()).as_int(), None);
    }

    #[test]
    fn test_display_hex_widths() {
        assert_eq!(Value::U8(0x0A).to_string(), "0A");
        assert_eq!(Value::U32(0x12).to_string(), "000012");
        assert_eq!(Value::from(vec![1u16, 0x20]).to_string(), "[0001,0020]");
    }

    #[test]
    fn test_for_each_ref_walks_nested() {
        let r = |i| Value::Ref(NodeRef::new(RefKind::Cross, i, false));
        let v = Value::Map(vec![(r(1), Value::Array(vec![r(2), Value::Null, r(3)]))]);
        let mut seen = Vec::new();
        v.for_each_ref(&mut |n| seen.push(n.index));
        assert_eq!(seen, vec![1, 2, 3]);
    }

    #[test]
    fn test_serde_tagged() {
        let json = serde_json::to_string(&Value::U16(5)).unwrap();
        assert_eq!(json, r#"{"type":"U16","value":5}"#);
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Value::U16(5));
    }
}
