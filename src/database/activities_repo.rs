use std::collections::HashSet;

use indexmap::IndexMap;
use parking_lot::Mutex;

use crate::database::seed::SeedError;
use crate::error::ActivityError;
use crate::models::Activity;

/// In-memory activity registry.
///
/// The set of activity names is fixed at construction. Each roster sits behind
/// its own mutex, and signup/unregister hold it for the whole
/// check-then-mutate step, so two requests can never both take the last spot.
#[derive(Debug)]
pub struct ActivityRegistry {
    activities: IndexMap<String, Mutex<Activity>>,
}

impl ActivityRegistry {
    /// Builds a registry from seed activities, keeping their order.
    pub fn from_seed<I>(seed: I) -> Result<Self, SeedError>
    where
        I: IntoIterator<Item = (String, Activity)>,
    {
        let mut activities = IndexMap::new();
        for (name, activity) in seed {
            validate_seed_activity(&name, &activity)?;
            if activities.contains_key(&name) {
                return Err(SeedError::DuplicateActivity(name));
            }
            activities.insert(name, Mutex::new(activity));
        }
        Ok(Self { activities })
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }

    /// Snapshot of every activity in registry order.
    pub fn list(&self) -> IndexMap<String, Activity> {
        self.activities
            .iter()
            .map(|(name, activity)| (name.clone(), activity.lock().clone()))
            .collect()
    }

    pub fn get(&self, name: &str) -> Option<Activity> {
        self.activities.get(name).map(|a| a.lock().clone())
    }

    /// Appends `email` to the roster. Returns the new roster size.
    pub fn signup(&self, name: &str, email: &str) -> Result<usize, ActivityError> {
        let slot = self
            .activities
            .get(name)
            .ok_or(ActivityError::ActivityNotFound)?;
        let mut activity = slot.lock();

        if activity.has_participant(email) {
            return Err(ActivityError::AlreadyRegistered);
        }
        if activity.is_full() {
            return Err(ActivityError::CapacityExceeded);
        }

        activity.participants.push(email.to_string());
        Ok(activity.participants.len())
    }

    /// Removes `email` from the roster. Returns the new roster size.
    pub fn unregister(&self, name: &str, email: &str) -> Result<usize, ActivityError> {
        let slot = self
            .activities
            .get(name)
            .ok_or(ActivityError::ActivityNotFound)?;
        let mut activity = slot.lock();

        let Some(idx) = activity.participants.iter().position(|p| p == email) else {
            return Err(ActivityError::ParticipantNotFound);
        };
        activity.participants.remove(idx);
        Ok(activity.participants.len())
    }
}

fn validate_seed_activity(name: &str, activity: &Activity) -> Result<(), SeedError> {
    if activity.max_participants == 0 {
        return Err(SeedError::ZeroCapacity(name.to_string()));
    }
    if activity.participants.len() > activity.max_participants {
        return Err(SeedError::OverCapacity {
            activity: name.to_string(),
            count: activity.participants.len(),
            max: activity.max_participants,
        });
    }
    let mut seen = HashSet::new();
    for email in &activity.participants {
        if !seen.insert(email.as_str()) {
            return Err(SeedError::DuplicateParticipant {
                activity: name.to_string(),
                email: email.clone(),
            });
        }
    }
    Ok(())
}
