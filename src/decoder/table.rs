//! Static dispatch from type key to decoder function.

use hashbrown::{HashMap, HashSet};
use once_cell::sync::Lazy;

use super::{app, dc, NodeReader};
use crate::model::TypeId;
use crate::Result;

/// A record decoder. Reads fields in stream order from the reader.
pub type Decoder = fn(&mut NodeReader<'_>) -> Result<()>;

static DC: Lazy<Registry> = Lazy::new(dc::registry);
static APP: Lazy<Registry> = Lazy::new(app::registry);

/// Decoder table of one segment kind.
pub struct Registry {
    name: &'static str,
    decoders: HashMap<u32, Decoder>,
    self_correcting: HashSet<u32>,
}

impl Registry {
    pub fn new(name: &'static str) -> Self {
        Self { name, decoders: HashMap::new(), self_correcting: HashSet::new() }
    }

    /// Register a family of decoders.
    pub fn with(mut self, entries: &[(u32, Decoder)]) -> Self {
        for &(key, decoder) in entries {
            if self.decoders.insert(key, decoder).is_some() {
                tracing::warn!(table = self.name, key = %TypeId(key), "decoder registered twice");
            }
        }
        self
    }

    /// Keys whose declared record size is recomputed from the trailing
    /// size marker.
    pub fn with_self_correcting(mut self, keys: &[u32]) -> Self {
        self.self_correcting.extend(keys.iter().copied());
        self
    }

    pub fn name(&self) -> &'static str { self.name }

    pub fn lookup(&self, type_id: TypeId) -> Option<Decoder> {
        self.decoders.get(&type_id.0).copied()
    }

    pub fn is_self_correcting(&self, type_id: TypeId) -> bool {
        self.self_correcting.contains(&type_id.0)
    }

    pub fn len(&self) -> usize { self.decoders.len() }

    pub fn is_empty(&self) -> bool { self.decoders.is_empty() }

    /// Design content table.
    pub fn dc() -> &'static Registry { &DC }

    /// Application settings table.
    pub fn app() -> &'static Registry { &APP }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("name", &self.name)
            .field("decoders", &self.decoders.len())
            .field("self_correcting", &self.self_correcting)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nothing(_: &mut NodeReader<'_>) -> Result<()> { Ok(()) }

    #[test]
    fn test_lookup_and_self_correcting() {
        let reg = Registry::new("test").with(&[(0x1234, nothing)]).with_self_correcting(&[0x1234]);
        assert!(reg.lookup(TypeId(0x1234)).is_some());
        assert!(reg.lookup(TypeId(0x4321)).is_none());
        assert!(reg.is_self_correcting(TypeId(0x1234)));
        assert_eq!(reg.len(), 1);
    }

    #[test]
    fn test_builtin_tables() {
        assert!(Registry::dc().len() > 500);
        assert!(Registry::app().len() > 60);
        assert!(Registry::dc().is_self_correcting(TypeId(0x2B48_A42B)));
        assert!(Registry::dc().is_self_correcting(TypeId(0x9087_4D63)));
        assert!(Registry::app().is_self_correcting(TypeId(0xF8A7_79F9)));
        assert!(!Registry::dc().is_self_correcting(TypeId(0xF8A7_79F9)));
    }
}
