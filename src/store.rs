//! In-memory trip record store.

use std::collections::BTreeMap;

use parking_lot::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::traits::{TripDraft, TripPatch, TripRecord, TripStore};

#[derive(Debug, Default)]
struct Inner {
    next_id: u64,
    trips: BTreeMap<u64, TripDraft>,
}

/// Keeps trips in a map keyed by id. Ids start at 1 and are never reused.
#[derive(Debug, Default)]
pub struct InMemoryTripStore {
    inner: RwLock<Inner>,
}

impl InMemoryTripStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.inner.read().trips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TripStore for InMemoryTripStore {
    fn list(&self) -> StoreResult<Vec<TripRecord>> {
        let inner = self.inner.read();
        Ok(inner
            .trips
            .iter()
            .map(|(id, trip)| TripRecord {
                id: *id,
                trip: trip.clone(),
            })
            .collect())
    }

    fn create(&self, trip: TripDraft) -> StoreResult<TripRecord> {
        let mut inner = self.inner.write();
        inner.next_id += 1;
        let id = inner.next_id;
        inner.trips.insert(id, trip.clone());
        Ok(TripRecord { id, trip })
    }

    fn get(&self, id: u64) -> StoreResult<TripRecord> {
        let inner = self.inner.read();
        inner
            .trips
            .get(&id)
            .map(|trip| TripRecord {
                id,
                trip: trip.clone(),
            })
            .ok_or(StoreError::NotFound(id))
    }

    fn update(&self, id: u64, trip: TripDraft) -> StoreResult<TripRecord> {
        let mut inner = self.inner.write();
        let slot = inner.trips.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        *slot = trip.clone();
        Ok(TripRecord { id, trip })
    }

    fn patch(&self, id: u64, patch: TripPatch) -> StoreResult<TripRecord> {
        let mut inner = self.inner.write();
        let slot = inner.trips.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        patch.apply(slot);
        Ok(TripRecord {
            id,
            trip: slot.clone(),
        })
    }

    fn delete(&self, id: u64) -> StoreResult<()> {
        let mut inner = self.inner.write();
        inner
            .trips
            .remove(&id)
            .map(|_| ())
            .ok_or(StoreError::NotFound(id))
    }
}
