/// ObjectStore: arena of tracked objects.
///
/// Uses a SlotMap for O(1) insert/remove with stable keys. Lane and
/// visibility are fields of each object, so no identity-keyed side table
/// is needed.

use slotmap::SlotMap;
use super::tracked_object::{TrackedObject, TrackedObjectKey};

#[derive(Debug, Clone, Default)]
pub struct ObjectStore {
    objects: SlotMap<TrackedObjectKey, TrackedObject>,
}

impl ObjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an object, returning a key that stays valid until removal.
    pub fn insert(&mut self, object: TrackedObject) -> TrackedObjectKey {
        self.objects.insert(object)
    }

    pub fn remove(&mut self, key: TrackedObjectKey) -> Option<TrackedObject> {
        self.objects.remove(key)
    }

    pub fn get(&self, key: TrackedObjectKey) -> Option<&TrackedObject> {
        self.objects.get(key)
    }

    pub fn get_mut(&mut self, key: TrackedObjectKey) -> Option<&mut TrackedObject> {
        self.objects.get_mut(key)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = TrackedObjectKey> + '_ {
        self.objects.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (TrackedObjectKey, &TrackedObject)> {
        self.objects.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = (TrackedObjectKey, &mut TrackedObject)> {
        self.objects.iter_mut()
    }

    /// Keys of objects whose VISIBLE flag is set.
    pub fn visible_keys(&self) -> impl Iterator<Item = TrackedObjectKey> + '_ {
        self.objects
            .iter()
            .filter(|(_, object)| object.is_visible())
            .map(|(key, _)| key)
    }

    pub fn visible_count(&self) -> usize {
        self.objects.values().filter(|object| object.is_visible()).count()
    }
}

#[cfg(test)]
#[path = "object_store_tests.rs"]
mod tests;
