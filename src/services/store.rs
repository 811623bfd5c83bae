use crate::models::{NewProfile, Profile, ProfileUpdate};
use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use thiserror::Error;

/// Errors that can occur with profile store operations
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Profile not found: {0}")]
    NotFound(u64),

    #[error("Store lock poisoned")]
    LockPoisoned,
}

/// Keyed storage for teacher profiles
pub trait ProfileRepository: Send + Sync {
    fn create(&self, profile: NewProfile) -> Result<Profile, StoreError>;
    fn get(&self, id: u64) -> Result<Profile, StoreError>;
    /// All profiles in ascending id order
    fn list(&self) -> Result<Vec<Profile>, StoreError>;
    fn update(&self, id: u64, update: ProfileUpdate) -> Result<Profile, StoreError>;
    fn delete(&self, id: u64) -> Result<(), StoreError>;
    fn len(&self) -> Result<usize, StoreError>;

    fn is_empty(&self) -> Result<bool, StoreError> {
        Ok(self.len()? == 0)
    }
}

/// In-memory profile store
///
/// Ids come from an incrementing counter starting at 1 and are never reused.
/// The owner decides the lifetime; share it behind an `Arc`.
pub struct InMemoryStore {
    profiles: RwLock<BTreeMap<u64, Profile>>,
    next_id: AtomicU64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            profiles: RwLock::new(BTreeMap::new()),
            next_id: AtomicU64::new(1),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, BTreeMap<u64, Profile>>, StoreError> {
        self.profiles.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, BTreeMap<u64, Profile>>, StoreError> {
        self.profiles.write().map_err(|_| StoreError::LockPoisoned)
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileRepository for InMemoryStore {
    fn create(&self, profile: NewProfile) -> Result<Profile, StoreError> {
        let mut profiles = self.write()?;
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let profile = profile.into_profile(id, chrono::Utc::now());
        profiles.insert(id, profile.clone());

        tracing::debug!("Created profile {}", id);
        Ok(profile)
    }

    fn get(&self, id: u64) -> Result<Profile, StoreError> {
        self.read()?
            .get(&id)
            .cloned()
            .ok_or(StoreError::NotFound(id))
    }

    fn list(&self) -> Result<Vec<Profile>, StoreError> {
        Ok(self.read()?.values().cloned().collect())
    }

    fn update(&self, id: u64, update: ProfileUpdate) -> Result<Profile, StoreError> {
        let mut profiles = self.write()?;
        let profile = profiles.get_mut(&id).ok_or(StoreError::NotFound(id))?;
        update.apply(profile, chrono::Utc::now());

        tracing::debug!("Updated profile {}", id);
        Ok(profile.clone())
    }

    fn delete(&self, id: u64) -> Result<(), StoreError> {
        match self.write()?.remove(&id) {
            Some(_) => {
                tracing::debug!("Deleted profile {}", id);
                Ok(())
            }
            None => Err(StoreError::NotFound(id)),
        }
    }

    fn len(&self) -> Result<usize, StoreError> {
        Ok(self.read()?.len())
    }
}
