//! # Decoded Record Model
//!
//! Plain data types shared by the decoder, the segment reader and the
//! document layer: nodes, field values, references and type keys.
//!
//! Design rule: no I/O and no decoding logic here, except the small
//! fixed-layout `Transformation` reader.

pub mod attributes;
pub mod node;
pub mod reference;
pub mod transformation;
pub mod type_id;
pub mod value;
pub mod version;

pub use attributes::AttributeMap;
pub use node::{ByteRange, Node, NodeId};
pub use reference::{NodeRef, RefKind};
pub use transformation::Transformation;
pub use type_id::TypeId;
pub use value::Value;
pub use version::{DocumentKind, FileVersion};
