use serde::{Deserialize, Serialize};

/// One extracurricular activity and its current roster.
///
/// The activity name is the registry key and is not repeated here, which keeps
/// the `GET /activities` body shaped as `{ name: { ... } }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    /// Emails in signup order.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }

    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(max: usize, participants: &[&str]) -> Activity {
        Activity {
            description: "Learn strategies and compete in chess tournaments".to_string(),
            schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
            max_participants: max,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn capacity_helpers() {
        let a = activity(2, &["a@mergington.edu"]);
        assert!(!a.is_full());
        assert!(a.has_participant("a@mergington.edu"));
        assert!(!a.has_participant("A@mergington.edu"));

        let full = activity(1, &["a@mergington.edu"]);
        assert!(full.is_full());
    }

    #[test]
    fn missing_participants_field_defaults_to_empty() {
        let a: Activity = serde_json::from_str(
            r#"{"description":"d","schedule":"s","max_participants":3}"#,
        )
        .unwrap();
        assert!(a.participants.is_empty());
    }
}
