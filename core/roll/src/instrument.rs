use std::collections::HashMap;

use uuid::Uuid;

/// Value handle to a registered instrument; passed around instead of any
/// reference into the instrument model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct InstrumentId(Uuid);

impl InstrumentId {
    fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

#[derive(Debug, Clone)]
pub struct InstrumentInfo {
    pub name: String,
}

/// Owned id -> instrument lookup. A missing handle is a `None`, not an
/// error; stale handles are expected after removal.
#[derive(Debug, Default)]
pub struct InstrumentRegistry {
    instruments: HashMap<InstrumentId, InstrumentInfo>,
}

impl InstrumentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, name: impl Into<String>) -> InstrumentId {
        let id = InstrumentId::generate();
        self.instruments
            .insert(id, InstrumentInfo { name: name.into() });
        id
    }

    pub fn get(&self, id: InstrumentId) -> Option<&InstrumentInfo> {
        self.instruments.get(&id)
    }

    pub fn contains(&self, id: InstrumentId) -> bool {
        self.instruments.contains_key(&id)
    }

    pub fn remove(&mut self, id: InstrumentId) -> Option<InstrumentInfo> {
        self.instruments.remove(&id)
    }

    pub fn len(&self) -> usize {
        self.instruments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.instruments.is_empty()
    }
}

#[cfg(test)]
mod instrument_tests {
    use super::*;

    #[test]
    fn test_register_and_lookup() {
        let mut registry = InstrumentRegistry::new();
        let piano = registry.register("Piano");
        let strings = registry.register("Strings");

        assert_eq!(registry.len(), 2);
        assert_eq!(registry.get(piano).unwrap().name, "Piano");
        assert_eq!(registry.get(strings).unwrap().name, "Strings");
        assert_ne!(piano, strings);
    }

    #[test]
    fn test_stale_handle_lookup_is_none() {
        let mut registry = InstrumentRegistry::new();
        let id = registry.register("Piano");
        let removed = registry.remove(id);

        assert_eq!(removed.unwrap().name, "Piano");
        assert!(registry.get(id).is_none());
        assert!(!registry.contains(id));
        assert!(registry.is_empty());
    }
}
