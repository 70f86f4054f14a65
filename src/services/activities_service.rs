use indexmap::IndexMap;
use serde::Serialize;
use tracing::{info, warn};

use crate::database::ActivityRegistry;
use crate::error::ActivityError;
use crate::models::Activity;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

pub fn list_activities(registry: &ActivityRegistry) -> IndexMap<String, Activity> {
    registry.list()
}

pub fn get_activity(
    registry: &ActivityRegistry,
    activity_name: &str,
) -> Result<Activity, ActivityError> {
    registry
        .get(activity_name)
        .ok_or(ActivityError::ActivityNotFound)
}

pub fn signup(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<MessageResponse, ActivityError> {
    match registry.signup(activity_name, email) {
        Ok(count) => {
            info!(activity = %activity_name, email = %email, participants = count, "signup accepted");
            Ok(MessageResponse {
                message: format!("Signed up {} for {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, reason = %e, "signup rejected");
            Err(e)
        }
    }
}

pub fn unregister(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> Result<MessageResponse, ActivityError> {
    match registry.unregister(activity_name, email) {
        Ok(count) => {
            info!(activity = %activity_name, email = %email, participants = count, "unregister accepted");
            Ok(MessageResponse {
                message: format!("Unregistered {} from {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, reason = %e, "unregister rejected");
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::seed::default_activities;

    fn registry() -> ActivityRegistry {
        ActivityRegistry::from_seed(default_activities()).unwrap()
    }

    #[test]
    fn confirmation_messages() {
        let reg = registry();
        let email = "test@mergington.edu";

        let resp = signup(&reg, "Chess Club", email).unwrap();
        assert_eq!(resp.message, "Signed up test@mergington.edu for Chess Club");
        assert!(get_activity(&reg, "Chess Club")
            .unwrap()
            .participants
            .contains(&email.to_string()));

        let resp = unregister(&reg, "Chess Club", email).unwrap();
        assert_eq!(resp.message, "Unregistered test@mergington.edu from Chess Club");
    }

    #[test]
    fn rejections_leave_state_unchanged() {
        let reg = registry();
        let before = list_activities(&reg);

        assert_eq!(
            signup(&reg, "Chess Club", "michael@mergington.edu"),
            Err(ActivityError::AlreadyRegistered)
        );
        assert_eq!(
            unregister(&reg, "Chess Club", "nobody@mergington.edu"),
            Err(ActivityError::ParticipantNotFound)
        );
        assert_eq!(
            signup(&reg, "NonexistentClub", "test@mergington.edu"),
            Err(ActivityError::ActivityNotFound)
        );
        assert_eq!(
            get_activity(&reg, "NonexistentClub"),
            Err(ActivityError::ActivityNotFound)
        );

        assert_eq!(list_activities(&reg), before);
    }

    #[test]
    fn fill_to_capacity_then_reject() {
        let reg = registry();
        let chess = get_activity(&reg, "Chess Club").unwrap();

        for i in chess.participants.len()..chess.max_participants {
            signup(&reg, "Chess Club", &format!("test{i}@mergington.edu")).unwrap();
        }
        assert_eq!(
            signup(&reg, "Chess Club", "extra@mergington.edu"),
            Err(ActivityError::CapacityExceeded)
        );
        assert_eq!(
            get_activity(&reg, "Chess Club").unwrap().participants.len(),
            chess.max_participants
        );
    }
}
