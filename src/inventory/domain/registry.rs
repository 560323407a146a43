use super::{Component, ComponentHash, Usage};
use serde::{Deserialize, Serialize};
use std::collections::btree_map::{BTreeMap, Entry};

/// ComponentRegistry - every distinct component keyed by content hash
///
/// Invariant: at most one [`Component`] exists per hash. New sightings of a
/// known hash extend that component's usages instead of replacing it.
///
/// Serializes as a plain JSON object of `hash -> component`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentRegistry {
    components: BTreeMap<ComponentHash, Component>,
}

impl ComponentRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one sighting of a component and attaches `usage` to it
    ///
    /// The presence check and the insert go through a single map entry, so
    /// a hash can never be registered twice.
    ///
    /// # Returns
    /// `true` if this sighting created the component, `false` if the hash was
    /// already known and only the usage was appended
    pub fn record_sighting(
        &mut self,
        hash: ComponentHash,
        package_url: Option<String>,
        display_name: Option<String>,
        usage: Usage,
    ) -> bool {
        match self.components.entry(hash) {
            Entry::Vacant(slot) => {
                let mut component = Component::new(slot.key().clone(), package_url, display_name);
                component.add_usage(usage);
                slot.insert(component);
                true
            }
            Entry::Occupied(mut slot) => {
                slot.get_mut().add_usage(usage);
                false
            }
        }
    }

    /// Stores `component` under its own hash, replacing any previous value
    pub fn insert(&mut self, component: Component) {
        self.components.insert(component.hash().clone(), component);
    }

    pub fn get(&self, hash: &ComponentHash) -> Option<&Component> {
        self.components.get(hash)
    }

    pub fn contains(&self, hash: &ComponentHash) -> bool {
        self.components.contains_key(hash)
    }

    pub fn components(&self) -> impl Iterator<Item = &Component> {
        self.components.values()
    }

    /// Keeps only the components for which `keep` returns `true`
    pub fn retain<F>(&mut self, mut keep: F)
    where
        F: FnMut(&mut Component) -> bool,
    {
        self.components.retain(|_, component| keep(component));
    }

    pub fn len(&self) -> usize {
        self.components.len()
    }

    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }

    /// Total usages across all components
    pub fn usage_count(&self) -> usize {
        self.components.values().map(|c| c.usages().len()).sum()
    }
}
