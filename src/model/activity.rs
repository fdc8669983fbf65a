use serde::{Deserialize, Serialize};

/// A single school activity and the emails of the students signed up for it.
/// Serializes to the exact shape clients get from `GET /activities`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Activity {
    pub description: String,
    pub schedule: String,
    pub max_participants: u32,
    /// Kept in signup order.
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    pub fn has_participant(&self, email: &str) -> bool {
        self.participants.iter().any(|p| p == email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants as usize
    }

    /// Returns the first email that appears more than once in the participant list.
    pub(super) fn first_duplicate(&self) -> Option<&str> {
        self.participants
            .iter()
            .enumerate()
            .find(|(idx, email)| self.participants[..*idx].contains(*email))
            .map(|(_, email)| email.as_str())
    }
}
