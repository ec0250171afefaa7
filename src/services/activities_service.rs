use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::database::{ActivityRegistry, RegistryResult};
use crate::models::Activity;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageResponse {
    pub message: String,
}

pub fn list_activities(registry: &ActivityRegistry) -> BTreeMap<String, Activity> {
    registry.get_all()
}

pub fn load_activity(registry: &ActivityRegistry, activity_name: &str) -> RegistryResult<Activity> {
    registry.get(activity_name)
}

pub fn sign_up(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> RegistryResult<MessageResponse> {
    match registry.add_participant(activity_name, email) {
        Ok(()) => {
            info!(activity = activity_name, email, "Participant signed up");
            Ok(MessageResponse {
                message: format!("Signed up {} for {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = activity_name, email, "Signup rejected: {}", e);
            Err(e)
        }
    }
}

pub fn unregister(
    registry: &ActivityRegistry,
    activity_name: &str,
    email: &str,
) -> RegistryResult<MessageResponse> {
    match registry.remove_participant(activity_name, email) {
        Ok(()) => {
            info!(activity = activity_name, email, "Participant unregistered");
            Ok(MessageResponse {
                message: format!("Unregistered {} from {}", email, activity_name),
            })
        }
        Err(e) => {
            warn!(activity = activity_name, email, "Unregister rejected: {}", e);
            Err(e)
        }
    }
}
