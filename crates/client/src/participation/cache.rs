use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::debug;
use uuid::Uuid;

use super::ParticipationView;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    pub event_id: Uuid,
    pub viewer: Option<Uuid>,
}

impl CacheKey {
    pub fn new(event_id: Uuid, viewer: Option<Uuid>) -> Self {
        Self { event_id, viewer }
    }
}

#[derive(Default)]
struct Slot {
    generation: u64,
    view: Option<ParticipationView>,
}

/// Participation views keyed by (event, viewer).
///
/// Each key carries a generation. A loader reads it with [`ParticipationCache::begin`]
/// before fetching and hands it back to [`ParticipationCache::store`]; if an
/// invalidation happened in between, the result is dropped instead of cached.
#[derive(Default)]
pub struct ParticipationCache {
    slots: Mutex<HashMap<CacheKey, Slot>>,
}

impl ParticipationCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &CacheKey) -> Option<ParticipationView> {
        self.slots()
            .get(key)
            .and_then(|slot| slot.view.clone())
    }

    pub fn begin(&self, key: CacheKey) -> u64 {
        self.slots().entry(key).or_default().generation
    }

    /// Returns false when the key was invalidated after `generation` was taken.
    pub fn store(&self, key: CacheKey, generation: u64, view: ParticipationView) -> bool {
        let mut slots = self.slots();
        let slot = slots.entry(key).or_default();
        if slot.generation != generation {
            debug!(
                "Dropping stale participation for event {} (generation {} < {})",
                key.event_id, generation, slot.generation
            );
            return false;
        }
        slot.view = Some(view);
        true
    }

    /// A key that was never loaded has no slot and nothing in flight, so it is left alone.
    pub fn invalidate(&self, key: CacheKey) {
        if let Some(slot) = self.slots().get_mut(&key) {
            slot.generation += 1;
            slot.view = None;
        }
    }

    /// Drops the event's entries for every viewer.
    pub fn invalidate_event(&self, event_id: Uuid) {
        for (key, slot) in self.slots().iter_mut() {
            if key.event_id == event_id {
                slot.generation += 1;
                slot.view = None;
            }
        }
    }

    pub fn len(&self) -> usize {
        self.slots().len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots().is_empty()
    }

    pub fn clear(&self) {
        for slot in self.slots().values_mut() {
            slot.generation += 1;
            slot.view = None;
        }
    }

    fn slots(&self) -> MutexGuard<'_, HashMap<CacheKey, Slot>> {
        self.slots.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
