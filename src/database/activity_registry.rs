use std::collections::BTreeMap;
use std::collections::HashSet;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use thiserror::Error;

use crate::database::seed;
use crate::models::Activity;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegistryError {
    #[error("Activity not found")]
    NotFound { activity: String },

    #[error("Student is already signed up")]
    AlreadyRegistered { activity: String, email: String },

    #[error("Activity is full")]
    CapacityExceeded { activity: String },

    #[error("Student is not signed up for this activity")]
    NotRegistered { activity: String, email: String },

    #[error("Invalid seed activity {activity}: {reason}")]
    InvalidSeed { activity: String, reason: String },
}

pub type RegistryResult<T> = Result<T, RegistryError>;

/// In-memory roster of every activity, keyed by activity name.
///
/// The activity set is fixed at construction; only rosters change afterwards.
/// Each operation holds the lock for its whole check-then-mutate sequence.
#[derive(Debug)]
pub struct ActivityRegistry {
    activities: RwLock<BTreeMap<String, Activity>>,
}

impl ActivityRegistry {
    pub fn new(
        activities: impl IntoIterator<Item = (String, Activity)>,
    ) -> RegistryResult<Self> {
        let mut map = BTreeMap::new();
        for (name, activity) in activities {
            validate_activity(&name, &activity)?;
            if map.insert(name.clone(), activity).is_some() {
                return Err(RegistryError::InvalidSeed {
                    activity: name,
                    reason: "duplicate activity name".to_string(),
                });
            }
        }

        Ok(Self {
            activities: RwLock::new(map),
        })
    }

    pub fn seeded() -> RegistryResult<Self> {
        Self::new(seed::mergington_activities())
    }

    pub fn get_all(&self) -> BTreeMap<String, Activity> {
        self.read().clone()
    }

    pub fn get(&self, name: &str) -> RegistryResult<Activity> {
        self.read()
            .get(name)
            .cloned()
            .ok_or_else(|| not_found(name))
    }

    pub fn names(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    pub fn add_participant(&self, name: &str, email: &str) -> RegistryResult<()> {
        let mut activities = self.write();
        let activity = activities.get_mut(name).ok_or_else(|| not_found(name))?;

        if activity.has_participant(email) {
            return Err(RegistryError::AlreadyRegistered {
                activity: name.to_string(),
                email: email.to_string(),
            });
        }
        if activity.is_full() {
            return Err(RegistryError::CapacityExceeded {
                activity: name.to_string(),
            });
        }

        activity.participants.push(email.to_string());
        Ok(())
    }

    pub fn remove_participant(&self, name: &str, email: &str) -> RegistryResult<()> {
        let mut activities = self.write();
        let activity = activities.get_mut(name).ok_or_else(|| not_found(name))?;

        let Some(position) = activity.participants.iter().position(|p| p == email) else {
            return Err(RegistryError::NotRegistered {
                activity: name.to_string(),
                email: email.to_string(),
            });
        };

        activity.participants.remove(position);
        Ok(())
    }

    // Operations never leave the map half-updated, so a poisoned lock is still usable.
    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, Activity>> {
        self.activities
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, Activity>> {
        self.activities
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

fn not_found(name: &str) -> RegistryError {
    RegistryError::NotFound {
        activity: name.to_string(),
    }
}

fn validate_activity(name: &str, activity: &Activity) -> RegistryResult<()> {
    let invalid = |reason: &str| RegistryError::InvalidSeed {
        activity: name.to_string(),
        reason: reason.to_string(),
    };

    if name.trim().is_empty() {
        return Err(invalid("empty activity name"));
    }
    if activity.max_participants == 0 {
        return Err(invalid("max_participants must be positive"));
    }
    if activity.participants.len() > activity.max_participants {
        return Err(invalid("roster exceeds max_participants"));
    }

    let mut seen = HashSet::new();
    if !activity.participants.iter().all(|p| seen.insert(p.as_str())) {
        return Err(invalid("duplicate participant"));
    }

    Ok(())
}
