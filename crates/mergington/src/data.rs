//! Data structures exchanged over the Mergington HTTP API.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// An extracurricular activity and its current roster.
///
/// The activity name is not part of the struct; it is the key the activity
/// is stored and serialized under (see [`Activities`]).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    /// Declared capacity. Advisory only, signups are not rejected when full.
    pub max_participants: u32,
    /// Participant emails in signup order, without duplicates.
    pub participants: Vec<String>,
}

impl Activity {
    pub fn new(
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Builder-style helper to seed initial participants.
    pub fn with_participants<I, S>(mut self, participants: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for email in participants {
            self.add_participant(email.into());
        }
        self
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    /// Appends `email` to the roster. Returns `false` if it was already present.
    pub fn add_participant(&mut self, email: String) -> bool {
        if self.has_participant(&email) {
            return false;
        }
        self.participants.push(email);
        true
    }

    /// Removes `email` from the roster. Returns `false` if it was not present.
    pub fn remove_participant(&mut self, email: &str) -> bool {
        match self.participants.iter().position(|p| p == email) {
            Some(index) => {
                self.participants.remove(index);
                true
            }
            None => false,
        }
    }
}

/// Snapshot of the roster keyed by activity name.
pub type Activities = BTreeMap<String, Activity>;

/// Confirmation returned by signup and unregister.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageResponse {
    pub message: String,
}

/// Body of every error response.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ErrorDetail {
    pub detail: String,
}

/// Health status of the service.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Healthy,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct UptimeInfo {
    pub seconds: i64,
    pub human: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RosterInfo {
    pub activities: usize,
    pub participants: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct HealthResponse {
    pub status: HealthStatus,
    pub timestamp: String,
    pub started_at: String,
    pub uptime: UptimeInfo,
    pub roster: RosterInfo,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess() -> Activity {
        Activity::new("Chess", "Fridays", 2).with_participants(["a@x.edu", "b@x.edu"])
    }

    #[test]
    fn add_participant_keeps_order_and_rejects_duplicates() {
        let mut activity = chess();
        assert!(activity.add_participant("c@x.edu".to_string()));
        assert!(!activity.add_participant("a@x.edu".to_string()));
        assert_eq!(activity.participants, vec!["a@x.edu", "b@x.edu", "c@x.edu"]);
    }

    #[test]
    fn remove_participant_keeps_remaining_order() {
        let mut activity = chess().with_participants(["c@x.edu"]);
        assert!(activity.remove_participant("b@x.edu"));
        assert!(!activity.remove_participant("b@x.edu"));
        assert_eq!(activity.participants, vec!["a@x.edu", "c@x.edu"]);
    }

    #[test]
    fn seeding_deduplicates() {
        let activity = Activity::new("Art", "Mondays", 5).with_participants(["a@x.edu", "a@x.edu"]);
        assert_eq!(activity.participants.len(), 1);
    }

    #[test]
    fn capacity_is_advisory() {
        let mut activity = chess();
        assert!(activity.add_participant("over@x.edu".to_string()));
        assert_eq!(activity.participants.len(), 3);
        assert_eq!(activity.max_participants, 2);
    }

    #[test]
    fn activity_serializes_with_wire_field_names() {
        let value = serde_json::to_value(chess()).unwrap();
        assert_eq!(value["description"], "Chess");
        assert_eq!(value["schedule"], "Fridays");
        assert_eq!(value["max_participants"], 2);
        assert!(value["participants"].is_array());
        assert!(value.get("name").is_none());
    }

    #[test]
    fn health_status_is_lowercase() {
        let serialized = serde_json::to_string(&HealthStatus::Healthy).unwrap();
        assert_eq!(serialized, "\"healthy\"");
    }
}
