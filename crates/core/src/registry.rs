//! The catalog of master slides.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::master::Master;
use crate::masters;

/// Holds all available masters and resolves them by name.
///
/// Built once at start-up and handed to the assembler by reference; it is
/// never written to while presentations are assembled.
#[derive(Default)]
pub struct MasterRegistry {
    masters: Vec<Box<dyn Master>>,
    index: HashMap<&'static str, usize>,
}

impl MasterRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding all built-in masters.
    pub fn with_builtin_masters() -> Self {
        let mut registry = Self::new();
        for master in masters::builtin() {
            // Built-in names are unique.
            if let Err(e) = registry.register_boxed(master) {
                log::error!("{}", e);
            }
        }
        registry
    }

    /// Add a master. Fails if the name is already taken.
    pub fn register(&mut self, master: impl Master + 'static) -> Result<()> {
        self.register_boxed(Box::new(master))
    }

    /// Add an already boxed master.
    pub fn register_boxed(&mut self, master: Box<dyn Master>) -> Result<()> {
        let name = master.name();
        if self.index.contains_key(name) {
            return Err(Error::DuplicateMaster {
                name: name.to_string(),
            });
        }
        log::debug!("Registered master slide “{}”", name);
        self.index.insert(name, self.masters.len());
        self.masters.push(master);
        Ok(())
    }

    /// Look up a master by name.
    pub fn get(&self, name: &str) -> Result<&dyn Master> {
        self.index
            .get(name)
            .map(|&i| self.masters[i].as_ref())
            .ok_or_else(|| Error::UnknownMaster {
                name: name.to_string(),
            })
    }

    /// Whether a master with this name is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All masters in registration order.
    ///
    /// The iterator is lazy and can be cloned to restart it.
    pub fn list(&self) -> impl Iterator<Item = &dyn Master> + Clone + '_ {
        self.masters.iter().map(|m| m.as_ref())
    }

    /// All master names in registration order.
    pub fn names(&self) -> Vec<&'static str> {
        self.list().map(|m| m.name()).collect()
    }

    pub fn len(&self) -> usize {
        self.masters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.masters.is_empty()
    }
}

impl std::fmt::Debug for MasterRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MasterRegistry")
            .field("masters", &self.names())
            .finish()
    }
}
